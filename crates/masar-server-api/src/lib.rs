// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Request and response types of the Masar HTTP API.
//!
//! Shared by the server and by the `masar-lists` client. The `openapi`
//! feature (on by default) derives `utoipa` schemas.

pub mod error;
pub mod lists;
pub mod templates;

pub use error::{ErrorResponse, LocalizedIssue, ValidationErrorResponse, VALIDATION_FAILED};
pub use lists::{
	CitiesQuery, CityList, ProjectCategoryList, RegionList, TaskCategoryList, TaskStatusList,
	WebsiteList,
};
pub use templates::TaskTemplateResponse;
