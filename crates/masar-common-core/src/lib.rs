// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core domain types for Masar.
//!
//! This crate is shared by the server, the store and the list SDK:
//!
//! - lookup records ([`Region`], [`City`], [`TaskStatus`], ...) with their
//!   `nameAr` / `nameEn` pairs
//! - the generic bilingual transform ([`localize`], [`Localized`])
//! - attachment metadata validation ([`validate`])
//! - task templates and sub-item ordering ([`sort_sub_items`])

pub mod attachment;
pub mod localize;
pub mod model;
pub mod template;

pub use attachment::{validate, Attachment, AttachmentInput, ValidationErrors, ValidationIssue};
pub use localize::{
	localize, localize_all, localize_field, localize_json, Bilingual, FieldPair, Localized, ARABIC,
};
pub use model::{
	City, ProjectCategory, Region, TaskCategory, TaskStatus, TaskTemplate, TaskTemplateSubItem,
	Website,
};
pub use template::{sort_sub_items, TaskTemplateDetail};
