// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! OpenAPI documentation for masar-server.
//!
//! The raw JSON document is served at `/api/openapi.json`.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Masar Server API",
        version = "1.0.0",
        description = "Bilingual (Arabic/English) lookup lists, task templates and attachment validation for the Masar project manager.",
        license(name = "Proprietary")
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    tags(
        (name = "lists", description = "Lookup lists with names resolved for the request locale"),
        (name = "templates", description = "Task templates with their status, categories and sub-items"),
        (name = "attachments", description = "Attachment metadata validation"),
        (name = "health", description = "Health checks")
    ),
    paths(
        crate::routes::lists::list_regions,
        crate::routes::lists::list_cities,
        crate::routes::lists::list_project_categories,
        crate::routes::lists::list_task_categories,
        crate::routes::lists::list_task_statuses,
        crate::routes::lists::list_websites,
        crate::routes::templates::get_task_template,
        crate::routes::attachments::validate_attachment,
        crate::routes::health::health_check,
    ),
    components(schemas(
        masar_server_api::ErrorResponse,
        masar_server_api::LocalizedIssue,
        masar_server_api::ValidationErrorResponse,
        masar_server_api::TaskTemplateResponse,
        masar_common_core::AttachmentInput,
        masar_common_core::Attachment,
        crate::health::HealthResponse,
        crate::health::HealthStatus,
    ))
)]
pub struct ApiDoc;
