// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Attachment metadata validation.

use axum::{extract::rejection::JsonRejection, Json};
use masar_common_core::{validate, Attachment, AttachmentInput, ValidationErrors};
use masar_common_i18n::t;
use masar_server_api::{ErrorResponse, LocalizedIssue, ValidationErrorResponse, VALIDATION_FAILED};

use crate::{error::ServerError, locale::RequestLocale};

#[utoipa::path(
    post,
    path = "/api/attachments/validate",
    request_body = AttachmentInput,
    params(("Accept-Language" = Option<String>, Header, description = "Locale tag, e.g. ar or en")),
    responses(
        (status = 200, description = "Normalized attachment metadata", body = Attachment),
        (status = 400, description = "Body is not a JSON object", body = ErrorResponse),
        (status = 422, description = "Metadata failed validation", body = ValidationErrorResponse)
    ),
    tag = "attachments"
)]
/// POST /api/attachments/validate
#[tracing::instrument(skip(payload))]
pub async fn validate_attachment(
	locale: RequestLocale,
	payload: Result<Json<AttachmentInput>, JsonRejection>,
) -> Result<Json<Attachment>, ServerError> {
	let Json(input) = payload.map_err(|rejection| {
		tracing::debug!(error = %rejection.body_text(), "unreadable attachment body");
		ServerError::BadRequest(t(&locale, "server.validation.failed"))
	})?;

	validate(input)
		.map(Json)
		.map_err(|errors| ServerError::Validation(localize_issues(errors, &locale)))
}

/// Render each issue key through the `server.validation.` catalog namespace.
pub fn localize_issues(errors: ValidationErrors, locale: &str) -> ValidationErrorResponse {
	let issues = errors
		.issues
		.into_iter()
		.map(|issue| LocalizedIssue {
			message: t(locale, &format!("server.validation.{}", issue.key)),
			path: issue.path,
			key: issue.key,
		})
		.collect();

	ValidationErrorResponse {
		error: VALIDATION_FAILED.to_string(),
		message: t(locale, "server.validation.failed"),
		issues,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn errors_for(body: serde_json::Value) -> ValidationErrors {
		let input: AttachmentInput = serde_json::from_value(body).unwrap();
		validate(input).unwrap_err()
	}

	#[test]
	fn issues_are_rendered_in_request_locale() {
		let response = localize_issues(errors_for(json!({ "fileSize": 0 })), "en");

		assert_eq!(response.error, "validation_failed");
		assert_eq!(response.message, "The submitted data is not valid");
		let messages: Vec<_> = response.issues.iter().map(|i| i.message.as_str()).collect();
		assert!(messages.contains(&"A file URL is required"));
		assert!(messages.contains(&"File size must be greater than zero"));
	}

	#[test]
	fn keys_survive_localization() {
		let errors = errors_for(json!({ "fileUrl": "https://cdn.example.com/a.png", "fileSize": 1.5 }));
		let keys: Vec<String> = errors.keys().map(String::from).collect();
		let response = localize_issues(errors, "ar");

		let localized_keys: Vec<_> = response.issues.iter().map(|i| i.key.clone()).collect();
		assert_eq!(localized_keys, keys);
		assert!(response.issues.iter().all(|i| !i.message.starts_with("server.")));
	}
}
