// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use masar_common_core::{
	localize, localize_all, sort_sub_items, Localized, TaskCategory, TaskStatus, TaskTemplate,
	TaskTemplateDetail, TaskTemplateSubItem,
};
use serde::{Deserialize, Serialize};

/// A task template with its relations, names resolved for one locale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TaskTemplateResponse {
	#[serde(flatten)]
	pub template: TaskTemplate,
	pub default_status: Option<Localized<TaskStatus>>,
	pub categories: Vec<Localized<TaskCategory>>,
	pub sub_items: Vec<TaskTemplateSubItem>,
}

impl TaskTemplateResponse {
	pub fn localized(detail: TaskTemplateDetail, locale: &str) -> Self {
		let mut sub_items = detail.sub_items;
		sort_sub_items(&mut sub_items);

		Self {
			template: detail.template,
			default_status: detail.default_status.map(|s| localize(s, locale)),
			categories: localize_all(detail.categories, locale),
			sub_items,
		}
	}
}
