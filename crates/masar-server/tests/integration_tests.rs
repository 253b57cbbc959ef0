// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP integration tests for masar-server.
//!
//! Each test builds the full router over a fresh SQLite file and drives it
//! with `oneshot` requests.

use axum::{
	body::Body,
	http::{header, Method, Request, Response, StatusCode},
	Router,
};
use masar_server::{create_app_state, create_router};
use masar_server_config::ServerConfig;
use masar_server_db::{ListsRepository, NewName, TaskTemplateRepository};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

struct Seeded {
	riyadh: i64,
	template: i64,
}

struct TestApp {
	router: Router,
	seeded: Seeded,
	_temp_dir: TempDir,
}

impl TestApp {
	async fn new() -> Self {
		Self::with_config(ServerConfig::default()).await
	}

	async fn with_config(config: ServerConfig) -> Self {
		let temp_dir = tempfile::tempdir().unwrap();
		let db_path = temp_dir.path().join("masar_test.db");
		let db_url = format!("sqlite:{}", db_path.display());
		let pool = masar_server_db::create_pool(&db_url).await.unwrap();
		masar_server_db::run_migrations(&pool).await.unwrap();

		let seeded = seed(&pool).await;
		let router = create_router(create_app_state(pool, &config));

		Self {
			router,
			seeded,
			_temp_dir: temp_dir,
		}
	}

	async fn get(&self, path: &str, locale: Option<&str>) -> Response<Body> {
		let mut builder = Request::builder().method(Method::GET).uri(path);
		if let Some(locale) = locale {
			builder = builder.header(header::ACCEPT_LANGUAGE, locale);
		}
		let request = builder.body(Body::empty()).unwrap();
		self.router.clone().oneshot(request).await.unwrap()
	}

	async fn post_json(&self, path: &str, locale: Option<&str>, body: Value) -> Response<Body> {
		let mut builder = Request::builder()
			.method(Method::POST)
			.uri(path)
			.header(header::CONTENT_TYPE, "application/json");
		if let Some(locale) = locale {
			builder = builder.header(header::ACCEPT_LANGUAGE, locale);
		}
		let request = builder
			.body(Body::from(serde_json::to_string(&body).unwrap()))
			.unwrap();
		self.router.clone().oneshot(request).await.unwrap()
	}
}

async fn seed(pool: &sqlx::SqlitePool) -> Seeded {
	let lists = ListsRepository::new(pool.clone());
	let templates = TaskTemplateRepository::new(pool.clone());

	let riyadh = lists
		.create_region(NewName::both("الرياض", "Riyadh"))
		.await
		.unwrap();
	let makkah = lists
		.create_region(NewName::both("مكة المكرمة", "Makkah"))
		.await
		.unwrap();
	lists
		.create_city(riyadh, NewName::both("الخرج", "Al Kharj"))
		.await
		.unwrap();
	lists
		.create_city(makkah, NewName::both("جدة", "Jeddah"))
		.await
		.unwrap();
	lists
		.create_project_category(NewName::both("سكني", "Residential"))
		.await
		.unwrap();
	let design = lists
		.create_task_category(NewName::both("تصميم", "Design"), Some("#8e24aa"))
		.await
		.unwrap();
	let status = lists
		.create_task_status(NewName::both("جديد", "New"), Some("#1e88e5"), false)
		.await
		.unwrap();
	lists
		.create_task_status(NewName::both("مكتمل", "Done"), None, true)
		.await
		.unwrap();
	lists
		.create_website(NewName { ar: Some("بلدي"), en: None }, "https://balady.gov.sa")
		.await
		.unwrap();

	let template = templates
		.create_template("Site survey", Some("First visit"), Some(status))
		.await
		.unwrap();
	templates.add_category(template, design).await.unwrap();
	for order in [3, 1, 2] {
		templates
			.add_sub_item(template, &format!("step {order}"), order)
			.await
			.unwrap();
	}

	Seeded { riyadh, template }
}

async fn body_json(response: Response<Body>) -> Value {
	let body = axum::body::to_bytes(response.into_body(), usize::MAX)
		.await
		.unwrap();
	serde_json::from_slice(&body).unwrap()
}

async fn body_text(response: Response<Body>) -> String {
	let body = axum::body::to_bytes(response.into_body(), usize::MAX)
		.await
		.unwrap();
	String::from_utf8(body.to_vec()).unwrap()
}

fn content_language(response: &Response<Body>) -> &str {
	response
		.headers()
		.get(header::CONTENT_LANGUAGE)
		.and_then(|v| v.to_str().ok())
		.unwrap_or_default()
}

fn location(response: &Response<Body>) -> &str {
	response
		.headers()
		.get(header::LOCATION)
		.and_then(|v| v.to_str().ok())
		.unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Lists
// ---------------------------------------------------------------------------

#[tokio::test]
async fn regions_default_to_arabic() {
	let app = TestApp::new().await;

	let response = app.get("/api/lists/regions", None).await;
	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(content_language(&response), "ar");

	let body = body_json(response).await;
	let regions = body.as_array().unwrap();
	assert_eq!(regions.len(), 2);
	assert_eq!(regions[0]["name"], "الرياض");
	assert_eq!(regions[0]["nameAr"], "الرياض");
	assert_eq!(regions[0]["nameEn"], "Riyadh");
	assert_eq!(regions[1]["name"], "مكة المكرمة");
}

#[tokio::test]
async fn english_header_selects_english_names() {
	let app = TestApp::new().await;

	let response = app.get("/api/lists/regions", Some("en")).await;
	assert_eq!(content_language(&response), "en");

	let body = body_json(response).await;
	assert_eq!(body[0]["name"], "Riyadh");
	assert_eq!(body[1]["name"], "Makkah");
}

#[tokio::test]
async fn unsupported_or_weighted_header_falls_back_to_default() {
	let app = TestApp::new().await;

	for header in ["fr", "EN", "en-US,en;q=0.9"] {
		let response = app.get("/api/lists/regions", Some(header)).await;
		assert_eq!(content_language(&response), "ar", "header {header}");
		let body = body_json(response).await;
		assert_eq!(body[0]["name"], "الرياض", "header {header}");
	}
}

#[tokio::test]
async fn configured_default_locale_is_respected() {
	let mut config = ServerConfig::default();
	config.i18n.locales = masar_common_i18n::LocaleConfig::new(["en", "ar"]).unwrap();
	let app = TestApp::with_config(config).await;

	let response = app.get("/api/lists/regions", None).await;
	assert_eq!(content_language(&response), "en");
	let body = body_json(response).await;
	assert_eq!(body[0]["name"], "Riyadh");
}

#[tokio::test]
async fn cities_filter_by_region() {
	let app = TestApp::new().await;

	let all = body_json(app.get("/api/lists/cities", Some("en")).await).await;
	assert_eq!(all.as_array().unwrap().len(), 2);

	let path = format!("/api/lists/cities?region_id={}", app.seeded.riyadh);
	let filtered = body_json(app.get(&path, Some("en")).await).await;
	let filtered = filtered.as_array().unwrap();
	assert_eq!(filtered.len(), 1);
	assert_eq!(filtered[0]["name"], "Al Kharj");
	assert_eq!(filtered[0]["regionId"], app.seeded.riyadh);
}

#[tokio::test]
async fn invalid_region_filter_is_a_localized_bad_request() {
	let app = TestApp::new().await;

	let response = app
		.get("/api/lists/cities?region_id=riyadh", Some("en"))
		.await;
	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
	assert_eq!(content_language(&response), "en");

	let body = body_json(response).await;
	assert_eq!(body["error"], "bad_request");
	assert_eq!(body["message"], "region_id must be a whole number");
}

#[tokio::test]
async fn remaining_lists_are_served() {
	let app = TestApp::new().await;

	let categories = body_json(app.get("/api/lists/project-categories", Some("en")).await).await;
	assert_eq!(categories[0]["name"], "Residential");
	assert!(categories[0]["createdAt"].is_string());

	let task_categories = body_json(app.get("/api/task-category", Some("ar")).await).await;
	assert_eq!(task_categories[0]["name"], "تصميم");
	assert_eq!(task_categories[0]["color"], "#8e24aa");

	let statuses = body_json(app.get("/api/lists/task-status", Some("en")).await).await;
	let statuses = statuses.as_array().unwrap();
	assert_eq!(statuses.len(), 2);
	assert_eq!(statuses[1]["name"], "Done");
	assert_eq!(statuses[1]["isFinal"], true);

	let websites = body_json(app.get("/api/lists/websites", Some("en")).await).await;
	assert_eq!(websites[0]["url"], "https://balady.gov.sa");
	assert_eq!(websites[0]["name"], Value::Null);
}

// ---------------------------------------------------------------------------
// Task templates
// ---------------------------------------------------------------------------

#[tokio::test]
async fn template_detail_is_localized_and_ordered() {
	let app = TestApp::new().await;

	let path = format!("/api/task-templates/{}", app.seeded.template);
	let response = app.get(&path, Some("en")).await;
	assert_eq!(response.status(), StatusCode::OK);

	let body = body_json(response).await;
	assert_eq!(body["title"], "Site survey");
	assert_eq!(body["defaultStatus"]["name"], "New");
	assert_eq!(body["categories"][0]["name"], "Design");

	let orders: Vec<i64> = body["subItems"]
		.as_array()
		.unwrap()
		.iter()
		.map(|s| s["order"].as_i64().unwrap())
		.collect();
	assert_eq!(orders, vec![1, 2, 3]);
}

#[tokio::test]
async fn missing_template_is_not_found() {
	let app = TestApp::new().await;

	let response = app.get("/api/task-templates/999", Some("en")).await;
	assert_eq!(response.status(), StatusCode::NOT_FOUND);

	let body = body_json(response).await;
	assert_eq!(body["error"], "not_found");
	assert_eq!(body["message"], "Task template 999 was not found");
}

#[tokio::test]
async fn non_numeric_template_id_is_not_found() {
	let app = TestApp::new().await;

	let response = app.get("/api/task-templates/latest", None).await;
	assert_eq!(response.status(), StatusCode::NOT_FOUND);
	assert_eq!(content_language(&response), "ar");
}

// ---------------------------------------------------------------------------
// Attachments
// ---------------------------------------------------------------------------

#[tokio::test]
async fn attachment_without_url_is_rejected() {
	let app = TestApp::new().await;

	let response = app
		.post_json("/api/attachments/validate", Some("en"), json!({ "fileUrl": "" }))
		.await;
	assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

	let body = body_json(response).await;
	assert_eq!(body["error"], "validation_failed");
	assert_eq!(body["issues"][0]["path"], "fileUrl");
	assert_eq!(body["issues"][0]["key"], "fileUrl.required");
	assert_eq!(body["issues"][0]["message"], "A file URL is required");
}

#[tokio::test]
async fn negative_file_size_is_rejected() {
	let app = TestApp::new().await;

	let response = app
		.post_json(
			"/api/attachments/validate",
			None,
			json!({ "fileUrl": "x", "fileSize": -1 }),
		)
		.await;
	assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

	let body = body_json(response).await;
	let keys: Vec<_> = body["issues"]
		.as_array()
		.unwrap()
		.iter()
		.map(|i| i["key"].as_str().unwrap().to_string())
		.collect();
	assert_eq!(keys, vec!["fileSize.positive"]);
}

#[tokio::test]
async fn minimal_attachment_is_accepted() {
	let app = TestApp::new().await;

	let response = app
		.post_json("/api/attachments/validate", None, json!({ "fileUrl": "x" }))
		.await;
	assert_eq!(response.status(), StatusCode::OK);

	let body = body_json(response).await;
	assert_eq!(body["fileUrl"], "x");
	assert_eq!(body["fileSize"], Value::Null);
	assert_eq!(body["fileName"], Value::Null);
}

#[tokio::test]
async fn unreadable_attachment_body_is_bad_request() {
	let app = TestApp::new().await;

	let request = Request::builder()
		.method(Method::POST)
		.uri("/api/attachments/validate")
		.header(header::CONTENT_TYPE, "application/json")
		.body(Body::from("not json"))
		.unwrap();
	let response = app.router.clone().oneshot(request).await.unwrap();
	assert_eq!(response.status(), StatusCode::BAD_REQUEST);

	let body = body_json(response).await;
	assert_eq!(body["error"], "bad_request");
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bare_task_redirects_to_resolved_locale() {
	let app = TestApp::new().await;

	let response = app.get("/task", None).await;
	assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
	assert_eq!(location(&response), "/ar/tasks");

	let response = app.get("/task", Some("en")).await;
	assert_eq!(location(&response), "/en/tasks");
}

#[tokio::test]
async fn locale_task_redirect_prefers_path_locale() {
	let app = TestApp::new().await;

	let response = app.get("/en/task", Some("ar")).await;
	assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
	assert_eq!(location(&response), "/en/tasks");

	let response = app.get("/fr/task", Some("en")).await;
	assert_eq!(location(&response), "/en/tasks");
}

#[tokio::test]
async fn projects_page_binds_uploader() {
	let app = TestApp::new().await;

	let response = app.get("/en/projects", None).await;
	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(content_language(&response), "en");

	let html = body_text(response).await;
	assert!(html.contains(r#"<html lang="en" dir="ltr">"#));
	assert!(html.contains(r#"data-endpoint="projectImageUploader""#));
	assert!(html.contains("Projects"));
}

#[tokio::test]
async fn arabic_pages_are_right_to_left() {
	let app = TestApp::new().await;

	let response = app.get("/ar/tasks", Some("en")).await;
	assert_eq!(content_language(&response), "ar");

	let html = body_text(response).await;
	assert!(html.contains(r#"<html lang="ar" dir="rtl">"#));
	assert!(html.contains("المهام"));
}

#[tokio::test]
async fn unknown_page_locale_redirects() {
	let app = TestApp::new().await;

	let response = app.get("/fr/projects", Some("en")).await;
	assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
	assert_eq!(location(&response), "/en/projects");
}

#[tokio::test]
async fn calendar_loading_renders_spinner() {
	let app = TestApp::new().await;

	let response = app.get("/en/calendar/loading", None).await;
	assert_eq!(response.status(), StatusCode::OK);

	let html = body_text(response).await;
	assert!(html.contains(r#"class="spinner""#));
	assert!(html.contains(r#"role="status""#));
}

// ---------------------------------------------------------------------------
// Health and docs
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_reports_components() {
	let app = TestApp::new().await;

	let response = app.get("/health", None).await;
	assert_eq!(response.status(), StatusCode::OK);

	let body = body_json(response).await;
	assert_eq!(body["status"], "healthy");
	assert!(body["timestamp"].is_string());
	assert_eq!(body["components"]["database"]["status"], "healthy");
	assert!(body["components"]["database"]["latency_ms"].is_u64());
	assert_eq!(body["components"]["locales"]["default_locale"], "ar");
}

#[tokio::test]
async fn openapi_document_is_served() {
	let app = TestApp::new().await;

	let response = app.get("/api/openapi.json", None).await;
	assert_eq!(response.status(), StatusCode::OK);

	let body = body_json(response).await;
	assert!(body["paths"]["/api/lists/regions"].is_object());
	assert!(body["paths"]["/api/task-templates/{id}"].is_object());
}
