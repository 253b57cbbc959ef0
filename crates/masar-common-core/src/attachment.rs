// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Attachment metadata validation.
//!
//! Issues are reported as message keys (e.g. `fileUrl.required`) so callers
//! can render them in the request's locale.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const FILE_URL_REQUIRED: &str = "fileUrl.required";
pub const FILE_SIZE_POSITIVE: &str = "fileSize.positive";
pub const FILE_SIZE_INTEGER: &str = "fileSize.integer";

/// Attachment metadata as submitted by a client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AttachmentInput {
	#[serde(default)]
	pub file_url: Option<String>,
	#[serde(default)]
	pub file_name: Option<String>,
	#[serde(default)]
	pub file_type: Option<String>,
	/// Any JSON value; only positive integers pass validation.
	#[serde(default)]
	#[cfg_attr(feature = "openapi", schema(value_type = Option<i64>))]
	pub file_size: Option<Value>,
	#[serde(default)]
	#[cfg_attr(feature = "openapi", schema(value_type = Option<Object>))]
	pub additional_info: Option<Value>,
}

/// Attachment metadata that passed validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
	pub file_url: String,
	pub file_name: Option<String>,
	pub file_type: Option<String>,
	pub file_size: Option<u64>,
	#[cfg_attr(feature = "openapi", schema(value_type = Option<Object>))]
	pub additional_info: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ValidationIssue {
	/// Input field the issue refers to, e.g. `fileSize`.
	pub path: String,
	/// Message key, e.g. `fileSize.positive`.
	pub key: String,
}

impl ValidationIssue {
	fn new(path: &str, key: &str) -> Self {
		Self {
			path: path.to_string(),
			key: key.to_string(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("attachment failed validation with {} issue(s)", .issues.len())]
pub struct ValidationErrors {
	pub issues: Vec<ValidationIssue>,
}

impl ValidationErrors {
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.issues.iter().map(|issue| issue.key.as_str())
	}
}

/// Validate `input`, collecting every issue rather than stopping at the first.
pub fn validate(input: AttachmentInput) -> Result<Attachment, ValidationErrors> {
	let mut issues = Vec::new();

	let file_url = match input.file_url {
		Some(url) if !url.is_empty() => Some(url),
		_ => {
			issues.push(ValidationIssue::new("fileUrl", FILE_URL_REQUIRED));
			None
		}
	};

	let file_size = match input.file_size {
		None | Some(Value::Null) => None,
		Some(value) => check_file_size(&value, &mut issues),
	};

	match file_url {
		Some(file_url) if issues.is_empty() => Ok(Attachment {
			file_url,
			file_name: input.file_name,
			file_type: input.file_type,
			file_size,
			additional_info: input.additional_info,
		}),
		_ => Err(ValidationErrors { issues }),
	}
}

fn check_file_size(value: &Value, issues: &mut Vec<ValidationIssue>) -> Option<u64> {
	let Some(number) = value.as_f64() else {
		issues.push(ValidationIssue::new("fileSize", FILE_SIZE_INTEGER));
		return None;
	};

	let integral = value.is_i64() || value.is_u64() || number.fract() == 0.0;
	if !integral {
		issues.push(ValidationIssue::new("fileSize", FILE_SIZE_INTEGER));
	}
	if number <= 0.0 {
		issues.push(ValidationIssue::new("fileSize", FILE_SIZE_POSITIVE));
	}

	if !integral || number <= 0.0 {
		return None;
	}
	value.as_u64().or(Some(number as u64))
}
