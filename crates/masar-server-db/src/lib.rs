// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! # masar-server-db
//!
//! Persistence layer for the Masar server using SQLite via sqlx.
//!
//! ## Repository Pattern
//!
//! Each domain has two components:
//! - **`*Store` trait**: the read interface handlers depend on
//!   (`ListsStore`, `TaskTemplateStore`)
//! - **`*Repository` struct**: concrete implementation holding a `SqlitePool`,
//!   plus insert helpers used by seeding and tests
//!
//! ## Error Handling
//!
//! | Variant | When to use |
//! |---------|-------------|
//! | `Sqlx` | Let sqlx errors propagate via `?` |
//! | `Internal` | Invalid stored data (e.g., unparseable timestamp) or bad URL |
//!
//! Lookups where absence is normal return `Result<Option<T>>`.
//!
//! ## Schema
//!
//! Migrations live in `migrations/` and are bundled with `include_str!`.
//! [`run_migrations`] is idempotent.

mod error;
pub mod lists;
pub mod migrations;
pub mod pool;
pub mod template;

#[cfg(test)]
pub mod testing;

pub use error::{DbError, Result};
pub use lists::{ListsRepository, ListsStore, NewName};
pub use migrations::run_migrations;
pub use pool::{create_pool, ping};
pub use template::{TaskTemplateRepository, TaskTemplateStore};
