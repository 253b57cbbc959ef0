// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the lists SDK.

use std::fmt;
use std::sync::Arc;

use masar_common_http::RetryableError;
use masar_server_api::ErrorResponse;
use thiserror::Error;

/// Result type alias for list operations.
pub type Result<T> = std::result::Result<T, ListsError>;

/// A non-success HTTP response.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchError {
	/// HTTP status code.
	pub status: u16,
	/// Structured error body, when the server sent one.
	pub body: Option<ErrorResponse>,
}

impl fmt::Display for FetchError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.body {
			Some(body) => write!(f, "server error (status {}): {}", self.status, body.message),
			None => write!(f, "server error (status {})", self.status),
		}
	}
}

impl std::error::Error for FetchError {}

/// Errors that can occur in the lists SDK.
///
/// Cloneable so one failed request can be handed to every caller waiting on it.
#[derive(Debug, Clone, Error)]
pub enum ListsError {
	/// Missing or malformed base URL.
	#[error("invalid base URL: {0}")]
	InvalidBaseUrl(String),

	/// Server answered with a non-success status.
	#[error(transparent)]
	Fetch(#[from] FetchError),

	/// Transport failure or unreadable response.
	#[error("HTTP request failed: {0}")]
	Request(Arc<reqwest::Error>),

	/// Cached data did not match the requested type.
	#[error("unexpected response shape: {0}")]
	Decode(Arc<serde_json::Error>),

	/// The task running the request panicked or was cancelled.
	#[error("request task ended without a result: {0}")]
	Aborted(String),
}

impl From<reqwest::Error> for ListsError {
	fn from(err: reqwest::Error) -> Self {
		ListsError::Request(Arc::new(err))
	}
}

impl From<serde_json::Error> for ListsError {
	fn from(err: serde_json::Error) -> Self {
		ListsError::Decode(Arc::new(err))
	}
}

impl ListsError {
	/// HTTP status of a server error.
	pub fn status(&self) -> Option<u16> {
		match self {
			ListsError::Fetch(e) => Some(e.status),
			ListsError::Request(e) => e.status().map(|s| s.as_u16()),
			_ => None,
		}
	}
}

/// Every failed request is attempted again; the retry policy bounds how often.
impl RetryableError for ListsError {
	fn is_retryable(&self) -> bool {
		matches!(self, ListsError::Fetch(_) | ListsError::Request(_))
	}
}
