// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Server error types and HTTP response conversions.
//!
//! Every variant carries a message that has already been rendered in the
//! request locale, so conversion to a response needs no locale of its own.

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use masar_common_i18n::t;
use masar_server_api::{ErrorResponse, ValidationErrorResponse};
use masar_server_db::DbError;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
	/// Database operation failed.
	#[error("Database error: {source}")]
	Db {
		#[source]
		source: DbError,
		message: String,
	},

	/// Requested resource does not exist.
	#[error("Not found: {0}")]
	NotFound(String),

	/// Malformed query or body.
	#[error("Invalid request: {0}")]
	BadRequest(String),

	/// Well-formed input that failed validation.
	#[error("Validation failed: {} issue(s)", .0.issues.len())]
	Validation(ValidationErrorResponse),
}

impl ServerError {
	/// Map a [`DbError`] to a database error localized for `locale`.
	///
	/// ```ignore
	/// let regions = state.lists.list_regions().await.map_err(ServerError::db(&locale))?;
	/// ```
	pub fn db(locale: &str) -> impl FnOnce(DbError) -> ServerError + '_ {
		move |source| ServerError::Db {
			source,
			message: t(locale, "server.api.error.database"),
		}
	}

	pub fn status(&self) -> StatusCode {
		match self {
			ServerError::Db { .. } => StatusCode::INTERNAL_SERVER_ERROR,
			ServerError::NotFound(_) => StatusCode::NOT_FOUND,
			ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
			ServerError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
		}
	}
}

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		let status = self.status();
		match self {
			ServerError::Db { source, message } => {
				tracing::error!(error = %source, "database error");
				(status, Json(ErrorResponse::new("database_error", message))).into_response()
			}
			ServerError::NotFound(message) => {
				(status, Json(ErrorResponse::new("not_found", message))).into_response()
			}
			ServerError::BadRequest(message) => {
				tracing::debug!(%message, "rejected request");
				(status, Json(ErrorResponse::new("bad_request", message))).into_response()
			}
			ServerError::Validation(body) => (status, Json(body)).into_response(),
		}
	}
}
