// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP route handlers organized by domain.

pub mod attachments;
pub mod docs;
pub mod health;
pub mod lists;
pub mod pages;
pub mod templates;
