// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Request locale resolution.
//!
//! The locale of a request is the exact `Accept-Language` value when it names
//! a configured locale, and the configured default otherwise.

use std::{convert::Infallible, ops::Deref, sync::Arc};

use axum::{
	extract::{FromRef, FromRequestParts, Request, State},
	http::{header, request::Parts, HeaderMap, HeaderValue},
	middleware::Next,
	response::Response,
};
use masar_common_i18n::{resolve_locale, LocaleConfig};

/// Locale resolved for the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLocale(pub String);

impl RequestLocale {
	pub fn from_headers(headers: &HeaderMap, config: &LocaleConfig) -> Self {
		let header = headers
			.get(header::ACCEPT_LANGUAGE)
			.and_then(|v| v.to_str().ok());
		Self(resolve_locale(header, config).to_string())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Deref for RequestLocale {
	type Target = str;

	fn deref(&self) -> &str {
		&self.0
	}
}

impl<S> FromRequestParts<S> for RequestLocale
where
	Arc<LocaleConfig>: FromRef<S>,
	S: Send + Sync,
{
	type Rejection = Infallible;

	async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
		if let Some(locale) = parts.extensions.get::<RequestLocale>() {
			return Ok(locale.clone());
		}
		let config = Arc::<LocaleConfig>::from_ref(state);
		Ok(Self::from_headers(&parts.headers, &config))
	}
}

/// Resolve the request locale once and stamp `Content-Language` on the response.
///
/// Handlers that pick a different locale (pages with a locale path segment)
/// set the header themselves and are left untouched.
pub async fn content_language(
	State(config): State<Arc<LocaleConfig>>,
	mut request: Request,
	next: Next,
) -> Response {
	let locale = RequestLocale::from_headers(request.headers(), &config);
	request.extensions_mut().insert(locale.clone());

	let mut response = next.run(request).await;
	if !response.headers().contains_key(header::CONTENT_LANGUAGE) {
		if let Ok(value) = HeaderValue::from_str(locale.as_str()) {
			response.headers_mut().insert(header::CONTENT_LANGUAGE, value);
		}
	}
	response
}
