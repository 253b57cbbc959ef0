// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Masar HTTP server.
//!
//! Serves the bilingual lookup lists, task templates, attachment validation
//! and the locale-prefixed page shells over axum, backed by SQLite.

pub mod api;
pub mod api_docs;
pub mod error;
pub mod health;
pub mod locale;
pub mod routes;

pub use api::{create_app_state, create_router, AppState};
pub use error::ServerError;
pub use locale::RequestLocale;
