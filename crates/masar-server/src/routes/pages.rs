// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Locale-prefixed page shells.
//!
//! Pages are rendered server-side as minimal HTML documents carrying the
//! `lang` and `dir` of their locale. The locale comes from the first path
//! segment when it is configured. Otherwise the request is redirected to the
//! same page under the locale resolved from `Accept-Language`.

use axum::{
	extract::{Path, State},
	http::{header, HeaderValue},
	response::{Html, IntoResponse, Redirect, Response},
};
use masar_common_i18n::{direction, t};

use crate::{api::AppState, locale::RequestLocale};

/// Upload routes a page may bind its file picker to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadEndpoint {
	ProjectImageUploader,
}

impl UploadEndpoint {
	pub fn as_str(&self) -> &'static str {
		match self {
			UploadEndpoint::ProjectImageUploader => "projectImageUploader",
		}
	}
}

/// GET /{locale}/projects
pub async fn projects_page(
	State(state): State<AppState>,
	resolved: RequestLocale,
	Path(segment): Path<String>,
) -> Response {
	with_page_locale(&state, &segment, &resolved, "projects", |locale| {
		let title = t(locale, "server.page.projects.title");
		let body = format!(
			r#"<h1>{title}</h1>
<form class="uploader" data-endpoint="{endpoint}" method="post" enctype="multipart/form-data">
<label>{label} <input type="file" name="file" accept="image/*"></label>
</form>"#,
			endpoint = UploadEndpoint::ProjectImageUploader.as_str(),
			label = t(locale, "server.page.projects.upload"),
		);
		render(locale, &title, &body)
	})
}

/// GET /{locale}/tasks
pub async fn tasks_page(
	State(state): State<AppState>,
	resolved: RequestLocale,
	Path(segment): Path<String>,
) -> Response {
	with_page_locale(&state, &segment, &resolved, "tasks", |locale| {
		let title = t(locale, "server.page.tasks.title");
		let body = format!(r#"<h1>{title}</h1>
<div id="tasks"></div>"#);
		render(locale, &title, &body)
	})
}

/// GET /{locale}/calendar/loading
pub async fn calendar_loading(
	State(state): State<AppState>,
	resolved: RequestLocale,
	Path(segment): Path<String>,
) -> Response {
	with_page_locale(&state, &segment, &resolved, "calendar/loading", |locale| {
		let label = t(locale, "server.page.calendar.loading");
		let body = format!(
			r#"<div class="spinner" role="status" aria-live="polite"><span class="visually-hidden">{label}</span></div>"#
		);
		render(locale, &label, &body)
	})
}

/// GET /{locale}/task
///
/// The singular task path has no page of its own.
pub async fn task_redirect(
	State(state): State<AppState>,
	resolved: RequestLocale,
	Path(segment): Path<String>,
) -> Redirect {
	let locale = page_locale(&state, &segment).unwrap_or(resolved.as_str());
	tasks_redirect(locale)
}

/// GET /task
pub async fn bare_task_redirect(resolved: RequestLocale) -> Redirect {
	tasks_redirect(&resolved)
}

fn tasks_redirect(locale: &str) -> Redirect {
	tracing::debug!(%locale, "redirecting to task list");
	Redirect::temporary(&format!("/{locale}/tasks"))
}

/// The path segment as a locale, if it is one of the configured locales.
fn page_locale<'a>(state: &'a AppState, segment: &str) -> Option<&'a str> {
	state
		.locales
		.locales()
		.iter()
		.find(|l| l.as_str() == segment)
		.map(String::as_str)
}

fn with_page_locale(
	state: &AppState,
	segment: &str,
	resolved: &RequestLocale,
	page: &str,
	render_page: impl FnOnce(&str) -> Response,
) -> Response {
	match page_locale(state, segment) {
		Some(locale) => render_page(locale),
		None => Redirect::temporary(&format!("/{}/{page}", resolved.as_str())).into_response(),
	}
}

/// Wrap `body` in a document shell for `locale`.
pub fn render(locale: &str, title: &str, body: &str) -> Response {
	let dir = direction(locale).as_html_dir();
	let html = format!(
		r#"<!DOCTYPE html>
<html lang="{locale}" dir="{dir}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
</head>
<body>
<main>
{body}
</main>
</body>
</html>
"#
	);

	let mut response = Html(html).into_response();
	if let Ok(value) = HeaderValue::from_str(locale) {
		response
			.headers_mut()
			.insert(header::CONTENT_LANGUAGE, value);
	}
	response
}
