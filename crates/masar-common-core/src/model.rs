// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Lookup records and task templates as stored.
//!
//! Every bilingual record carries a `nameAr` / `nameEn` pair on the wire.
//! Either side may be missing; [`crate::localize`] picks one per locale.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::impl_bilingual;

/// Administrative region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Region {
	pub id: i64,
	pub name_ar: Option<String>,
	pub name_en: Option<String>,
}

/// City belonging to a [`Region`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct City {
	pub id: i64,
	pub region_id: i64,
	pub name_ar: Option<String>,
	pub name_en: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ProjectCategory {
	pub id: i64,
	pub name_ar: Option<String>,
	pub name_en: Option<String>,
	pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TaskCategory {
	pub id: i64,
	pub name_ar: Option<String>,
	pub name_en: Option<String>,
	/// CSS color used for badges, e.g. `#1e88e5`.
	pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TaskStatus {
	pub id: i64,
	pub name_ar: Option<String>,
	pub name_en: Option<String>,
	pub color: Option<String>,
	/// Tasks in a final status count as done.
	pub is_final: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Website {
	pub id: i64,
	pub name_ar: Option<String>,
	pub name_en: Option<String>,
	pub url: String,
}

/// Reusable blueprint for creating a task with a checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TaskTemplate {
	pub id: i64,
	pub title: String,
	pub description: Option<String>,
	pub default_status_id: Option<i64>,
	pub created_at: DateTime<Utc>,
}

/// Checklist entry of a [`TaskTemplate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TaskTemplateSubItem {
	pub id: i64,
	pub template_id: i64,
	pub title: String,
	pub order: i64,
}

impl_bilingual!(Region { "name" => (name_ar, name_en) });
impl_bilingual!(City { "name" => (name_ar, name_en) });
impl_bilingual!(ProjectCategory { "name" => (name_ar, name_en) });
impl_bilingual!(TaskCategory { "name" => (name_ar, name_en) });
impl_bilingual!(TaskStatus { "name" => (name_ar, name_en) });
impl_bilingual!(Website { "name" => (name_ar, name_en) });
