// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Error response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ErrorResponse {
	/// Machine-readable error code, e.g. `not_found`.
	pub error: String,
	/// Message in the request's locale.
	pub message: String,
}

impl ErrorResponse {
	pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			error: error.into(),
			message: message.into(),
		}
	}
}

/// One validation issue, with its message rendered for the request locale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct LocalizedIssue {
	pub path: String,
	pub key: String,
	pub message: String,
}

/// Body of a 422 response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ValidationErrorResponse {
	/// Always `validation_failed`.
	pub error: String,
	pub message: String,
	pub issues: Vec<LocalizedIssue>,
}

pub const VALIDATION_FAILED: &str = "validation_failed";
