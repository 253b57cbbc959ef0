// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};

use crate::{TaskCategory, TaskStatus, TaskTemplate, TaskTemplateSubItem};

/// A task template with its relations loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskTemplateDetail {
	#[serde(flatten)]
	pub template: TaskTemplate,
	pub default_status: Option<TaskStatus>,
	pub categories: Vec<TaskCategory>,
	/// Ascending by `order`.
	pub sub_items: Vec<TaskTemplateSubItem>,
}

/// Sort sub-items ascending by `order`. Equal orders keep their relative
/// position.
pub fn sort_sub_items(items: &mut [TaskTemplateSubItem]) {
	items.sort_by_key(|item| item.order);
}
