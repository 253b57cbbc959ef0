// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Bundled schema migrations.

use sqlx::sqlite::SqlitePool;

use crate::error::DbError;

const MIGRATIONS: &[(&str, &str)] = &[
	(
		"001_lookup_lists",
		include_str!("../migrations/001_lookup_lists.sql"),
	),
	(
		"002_task_templates",
		include_str!("../migrations/002_task_templates.sql"),
	),
];

/// Run all database migrations.
///
/// Migrations are idempotent - safe to run multiple times.
#[tracing::instrument(skip(pool))]
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), DbError> {
	for (name, sql) in MIGRATIONS {
		for stmt in sql.split(';').filter(|s| !is_blank(s)) {
			sqlx::query(stmt).execute(pool).await?;
		}
		tracing::debug!(migration = name, "migration applied");
	}

	tracing::info!(count = MIGRATIONS.len(), "database migrations complete");
	Ok(())
}

fn is_blank(stmt: &str) -> bool {
	stmt.lines()
		.map(str::trim)
		.all(|line| line.is_empty() || line.starts_with("--"))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn migrations_are_idempotent() {
		let pool = SqlitePool::connect(":memory:").await.unwrap();
		run_migrations(&pool).await.unwrap();
		run_migrations(&pool).await.unwrap();

		let tables: Vec<(String,)> =
			sqlx::query_as("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
				.fetch_all(&pool)
				.await
				.unwrap();
		let names: Vec<_> = tables.into_iter().map(|(n,)| n).collect();

		for expected in [
			"cities",
			"project_categories",
			"regions",
			"task_categories",
			"task_statuses",
			"task_template_categories",
			"task_template_sub_items",
			"task_templates",
			"websites",
		] {
			assert!(names.iter().any(|n| n == expected), "missing table {expected}");
		}
	}

	#[test]
	fn comment_only_chunks_are_blank() {
		assert!(is_blank("\n-- trailing comment\n  "));
		assert!(!is_blank("-- header\nCREATE TABLE t (id INTEGER)"));
	}
}
