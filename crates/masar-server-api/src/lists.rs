// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Lookup-list routes and payloads.

use masar_common_core::{City, Localized, ProjectCategory, Region, TaskCategory, TaskStatus, Website};
use serde::{Deserialize, Serialize};

pub const REGIONS_PATH: &str = "/api/lists/regions";
pub const CITIES_PATH: &str = "/api/lists/cities";
pub const PROJECT_CATEGORIES_PATH: &str = "/api/lists/project-categories";
pub const TASK_CATEGORIES_PATH: &str = "/api/task-category";
pub const TASK_STATUSES_PATH: &str = "/api/lists/task-status";
pub const WEBSITES_PATH: &str = "/api/lists/websites";

/// Query string of the cities list.
///
/// `region_id` is kept as text so a malformed value can be answered with a
/// localized 400 instead of a bare extractor rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct CitiesQuery {
	/// Restrict to one region.
	#[serde(default)]
	pub region_id: Option<String>,
}

impl CitiesQuery {
	/// `Ok(None)` when absent or blank, `Err` with the raw value when it is
	/// not an integer.
	pub fn parse_region_id(&self) -> Result<Option<i64>, String> {
		match self.region_id.as_deref().map(str::trim) {
			None | Some("") => Ok(None),
			Some(raw) => raw.parse().map(Some).map_err(|_| raw.to_string()),
		}
	}
}

pub type RegionList = Vec<Localized<Region>>;
pub type CityList = Vec<Localized<City>>;
pub type ProjectCategoryList = Vec<Localized<ProjectCategory>>;
pub type TaskCategoryList = Vec<Localized<TaskCategory>>;
pub type TaskStatusList = Vec<Localized<TaskStatus>>;
pub type WebsiteList = Vec<Localized<Website>>;
