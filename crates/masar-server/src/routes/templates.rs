// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Task template HTTP handlers.

use axum::{
	extract::{Path, State},
	Json,
};
use masar_common_i18n::t_fmt;
use masar_server_api::{ErrorResponse, TaskTemplateResponse};

use crate::{api::AppState, error::ServerError, locale::RequestLocale};

#[utoipa::path(
    get,
    path = "/api/task-templates/{id}",
    params(
        ("id" = i64, Path, description = "Task template ID"),
        ("Accept-Language" = Option<String>, Header, description = "Locale tag, e.g. ar or en")
    ),
    responses(
        (status = 200, description = "Template with status, categories and ordered sub-items", body = TaskTemplateResponse),
        (status = 404, description = "No such template", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "templates"
)]
/// GET /api/task-templates/{id}
///
/// An id that is not an integer cannot name a template and is answered
/// like any other missing template.
#[tracing::instrument(skip(state))]
pub async fn get_task_template(
	State(state): State<AppState>,
	locale: RequestLocale,
	Path(id): Path<String>,
) -> Result<Json<TaskTemplateResponse>, ServerError> {
	let not_found = || {
		ServerError::NotFound(t_fmt(
			&locale,
			"server.api.template.not_found",
			&[("id", id.as_str())],
		))
	};

	let template_id: i64 = id.parse().map_err(|_| not_found())?;
	let detail = state
		.templates
		.get_template_detail(template_id)
		.await
		.map_err(ServerError::db(&locale))?
		.ok_or_else(not_found)?;

	Ok(Json(TaskTemplateResponse::localized(detail, &locale)))
}
