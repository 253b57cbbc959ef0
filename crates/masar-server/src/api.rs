// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Application state and router assembly.

use std::sync::Arc;

use axum::{
	extract::FromRef,
	middleware,
	routing::{get, post},
	Router,
};
use masar_common_i18n::LocaleConfig;
use masar_server_api::lists::{
	CITIES_PATH, PROJECT_CATEGORIES_PATH, REGIONS_PATH, TASK_CATEGORIES_PATH, TASK_STATUSES_PATH,
	WEBSITES_PATH,
};
use masar_server_config::ServerConfig;
use masar_server_db::{ListsRepository, ListsStore, TaskTemplateRepository, TaskTemplateStore};
use sqlx::SqlitePool;

use crate::{locale, routes};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
	pub pool: SqlitePool,
	pub lists: Arc<dyn ListsStore>,
	pub templates: Arc<dyn TaskTemplateStore>,
	pub locales: Arc<LocaleConfig>,
}

impl FromRef<AppState> for Arc<LocaleConfig> {
	fn from_ref(state: &AppState) -> Self {
		state.locales.clone()
	}
}

/// Build the state for `pool` using SQLite-backed stores.
pub fn create_app_state(pool: SqlitePool, config: &ServerConfig) -> AppState {
	AppState {
		lists: Arc::new(ListsRepository::new(pool.clone())),
		templates: Arc::new(TaskTemplateRepository::new(pool.clone())),
		pool,
		locales: Arc::new(config.i18n.locales.clone()),
	}
}

/// Create the router with all API and page routes.
///
/// Tracing and CORS layers are added by the binary.
pub fn create_router(state: AppState) -> Router {
	let api = Router::new()
		.route(REGIONS_PATH, get(routes::lists::list_regions))
		.route(CITIES_PATH, get(routes::lists::list_cities))
		.route(
			PROJECT_CATEGORIES_PATH,
			get(routes::lists::list_project_categories),
		)
		.route(TASK_CATEGORIES_PATH, get(routes::lists::list_task_categories))
		.route(TASK_STATUSES_PATH, get(routes::lists::list_task_statuses))
		.route(WEBSITES_PATH, get(routes::lists::list_websites))
		.route(
			"/api/task-templates/{id}",
			get(routes::templates::get_task_template),
		)
		.route(
			"/api/attachments/validate",
			post(routes::attachments::validate_attachment),
		)
		.route("/api/openapi.json", get(routes::docs::openapi_json));

	let pages = Router::new()
		.route("/{locale}/projects", get(routes::pages::projects_page))
		.route("/{locale}/tasks", get(routes::pages::tasks_page))
		.route("/{locale}/task", get(routes::pages::task_redirect))
		.route(
			"/{locale}/calendar/loading",
			get(routes::pages::calendar_loading),
		)
		.route("/task", get(routes::pages::bare_task_redirect));

	Router::new()
		.route("/health", get(routes::health::health_check))
		.merge(api)
		.merge(pages)
		.layer(middleware::from_fn_with_state(
			state.locales.clone(),
			locale::content_language,
		))
		.with_state(state)
}
