// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Lookup list HTTP handlers.
//!
//! Every list is returned in storage order with a `name` field resolved for
//! the request locale next to the raw `nameAr` / `nameEn` pair.

use axum::{
	extract::{Query, State},
	Json,
};
use masar_common_core::{
	localize_all, City, Localized, ProjectCategory, Region, TaskCategory, TaskStatus, Website,
};
use masar_common_i18n::t;
use masar_server_api::{
	CitiesQuery, CityList, ErrorResponse, ProjectCategoryList, RegionList, TaskCategoryList,
	TaskStatusList, WebsiteList,
};

use crate::{api::AppState, error::ServerError, locale::RequestLocale};

#[utoipa::path(
    get,
    path = "/api/lists/regions",
    params(("Accept-Language" = Option<String>, Header, description = "Locale tag, e.g. ar or en")),
    responses(
        (status = 200, description = "All regions", body = Vec<Localized<Region>>),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "lists"
)]
/// GET /api/lists/regions
#[tracing::instrument(skip(state))]
pub async fn list_regions(
	State(state): State<AppState>,
	locale: RequestLocale,
) -> Result<Json<RegionList>, ServerError> {
	let regions = state
		.lists
		.list_regions()
		.await
		.map_err(ServerError::db(&locale))?;
	Ok(Json(localize_all(regions, &locale)))
}

#[utoipa::path(
    get,
    path = "/api/lists/cities",
    params(
        CitiesQuery,
        ("Accept-Language" = Option<String>, Header, description = "Locale tag, e.g. ar or en")
    ),
    responses(
        (status = 200, description = "Cities, optionally filtered by region", body = Vec<Localized<City>>),
        (status = 400, description = "region_id is not an integer", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "lists"
)]
/// GET /api/lists/cities?region_id=
#[tracing::instrument(skip(state))]
pub async fn list_cities(
	State(state): State<AppState>,
	locale: RequestLocale,
	Query(query): Query<CitiesQuery>,
) -> Result<Json<CityList>, ServerError> {
	let region_id = query.parse_region_id().map_err(|raw| {
		tracing::debug!(region_id = %raw, "invalid region filter");
		ServerError::BadRequest(t(&locale, "server.api.lists.invalid_region"))
	})?;

	let cities = state
		.lists
		.list_cities(region_id)
		.await
		.map_err(ServerError::db(&locale))?;
	Ok(Json(localize_all(cities, &locale)))
}

#[utoipa::path(
    get,
    path = "/api/lists/project-categories",
    params(("Accept-Language" = Option<String>, Header, description = "Locale tag, e.g. ar or en")),
    responses(
        (status = 200, description = "All project categories", body = Vec<Localized<ProjectCategory>>),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "lists"
)]
/// GET /api/lists/project-categories
#[tracing::instrument(skip(state))]
pub async fn list_project_categories(
	State(state): State<AppState>,
	locale: RequestLocale,
) -> Result<Json<ProjectCategoryList>, ServerError> {
	let categories = state
		.lists
		.list_project_categories()
		.await
		.map_err(ServerError::db(&locale))?;
	Ok(Json(localize_all(categories, &locale)))
}

#[utoipa::path(
    get,
    path = "/api/task-category",
    params(("Accept-Language" = Option<String>, Header, description = "Locale tag, e.g. ar or en")),
    responses(
        (status = 200, description = "All task categories", body = Vec<Localized<TaskCategory>>),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "lists"
)]
/// GET /api/task-category
#[tracing::instrument(skip(state))]
pub async fn list_task_categories(
	State(state): State<AppState>,
	locale: RequestLocale,
) -> Result<Json<TaskCategoryList>, ServerError> {
	let categories = state
		.lists
		.list_task_categories()
		.await
		.map_err(ServerError::db(&locale))?;
	Ok(Json(localize_all(categories, &locale)))
}

#[utoipa::path(
    get,
    path = "/api/lists/task-status",
    params(("Accept-Language" = Option<String>, Header, description = "Locale tag, e.g. ar or en")),
    responses(
        (status = 200, description = "All task statuses", body = Vec<Localized<TaskStatus>>),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "lists"
)]
/// GET /api/lists/task-status
#[tracing::instrument(skip(state))]
pub async fn list_task_statuses(
	State(state): State<AppState>,
	locale: RequestLocale,
) -> Result<Json<TaskStatusList>, ServerError> {
	let statuses = state
		.lists
		.list_task_statuses()
		.await
		.map_err(ServerError::db(&locale))?;
	Ok(Json(localize_all(statuses, &locale)))
}

#[utoipa::path(
    get,
    path = "/api/lists/websites",
    params(("Accept-Language" = Option<String>, Header, description = "Locale tag, e.g. ar or en")),
    responses(
        (status = 200, description = "All websites", body = Vec<Localized<Website>>),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "lists"
)]
/// GET /api/lists/websites
#[tracing::instrument(skip(state))]
pub async fn list_websites(
	State(state): State<AppState>,
	locale: RequestLocale,
) -> Result<Json<WebsiteList>, ServerError> {
	let websites = state
		.lists
		.list_websites()
		.await
		.map_err(ServerError::db(&locale))?;
	Ok(Json(localize_all(websites, &locale)))
}
