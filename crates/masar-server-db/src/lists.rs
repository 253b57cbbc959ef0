// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Lookup-list repository: regions, cities, categories, statuses and websites.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use masar_common_core::{City, ProjectCategory, Region, TaskCategory, TaskStatus, Website};
use sqlx::{sqlite::SqlitePool, Row};

use crate::error::DbError;

/// Bilingual name pair for inserts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewName<'a> {
	pub ar: Option<&'a str>,
	pub en: Option<&'a str>,
}

impl<'a> NewName<'a> {
	pub fn both(ar: &'a str, en: &'a str) -> Self {
		Self {
			ar: Some(ar),
			en: Some(en),
		}
	}
}

#[derive(Clone)]
pub struct ListsRepository {
	pool: SqlitePool,
}

impl ListsRepository {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	#[tracing::instrument(skip(self))]
	pub async fn list_regions(&self) -> Result<Vec<Region>, DbError> {
		let rows = sqlx::query("SELECT id, name_ar, name_en FROM regions ORDER BY id")
			.fetch_all(&self.pool)
			.await?;

		let regions: Vec<Region> = rows
			.iter()
			.map(|row| Region {
				id: row.get("id"),
				name_ar: row.get("name_ar"),
				name_en: row.get("name_en"),
			})
			.collect();

		tracing::debug!(count = regions.len(), "listed regions");
		Ok(regions)
	}

	/// Cities, optionally restricted to one region.
	#[tracing::instrument(skip(self))]
	pub async fn list_cities(&self, region_id: Option<i64>) -> Result<Vec<City>, DbError> {
		let rows = match region_id {
			Some(region_id) => {
				sqlx::query(
					"SELECT id, region_id, name_ar, name_en FROM cities WHERE region_id = ?1 ORDER BY id",
				)
				.bind(region_id)
				.fetch_all(&self.pool)
				.await?
			}
			None => {
				sqlx::query("SELECT id, region_id, name_ar, name_en FROM cities ORDER BY id")
					.fetch_all(&self.pool)
					.await?
			}
		};

		let cities: Vec<City> = rows
			.iter()
			.map(|row| City {
				id: row.get("id"),
				region_id: row.get("region_id"),
				name_ar: row.get("name_ar"),
				name_en: row.get("name_en"),
			})
			.collect();

		tracing::debug!(count = cities.len(), "listed cities");
		Ok(cities)
	}

	#[tracing::instrument(skip(self))]
	pub async fn list_project_categories(&self) -> Result<Vec<ProjectCategory>, DbError> {
		let rows = sqlx::query(
			"SELECT id, name_ar, name_en, created_at FROM project_categories ORDER BY id",
		)
		.fetch_all(&self.pool)
		.await?;

		rows.iter().map(parse_project_category_row).collect()
	}

	#[tracing::instrument(skip(self))]
	pub async fn list_task_categories(&self) -> Result<Vec<TaskCategory>, DbError> {
		let rows = sqlx::query("SELECT id, name_ar, name_en, color FROM task_categories ORDER BY id")
			.fetch_all(&self.pool)
			.await?;

		Ok(rows.iter().map(parse_task_category_row).collect())
	}

	#[tracing::instrument(skip(self))]
	pub async fn list_task_statuses(&self) -> Result<Vec<TaskStatus>, DbError> {
		let rows = sqlx::query(
			"SELECT id, name_ar, name_en, color, is_final FROM task_statuses ORDER BY id",
		)
		.fetch_all(&self.pool)
		.await?;

		Ok(rows.iter().map(parse_task_status_row).collect())
	}

	#[tracing::instrument(skip(self))]
	pub async fn list_websites(&self) -> Result<Vec<Website>, DbError> {
		let rows = sqlx::query("SELECT id, name_ar, name_en, url FROM websites ORDER BY id")
			.fetch_all(&self.pool)
			.await?;

		Ok(rows
			.iter()
			.map(|row| Website {
				id: row.get("id"),
				name_ar: row.get("name_ar"),
				name_en: row.get("name_en"),
				url: row.get("url"),
			})
			.collect())
	}

	#[tracing::instrument(skip(self))]
	pub async fn create_region(&self, name: NewName<'_>) -> Result<i64, DbError> {
		let result = sqlx::query("INSERT INTO regions (name_ar, name_en) VALUES (?1, ?2)")
			.bind(name.ar)
			.bind(name.en)
			.execute(&self.pool)
			.await?;
		Ok(result.last_insert_rowid())
	}

	#[tracing::instrument(skip(self))]
	pub async fn create_city(&self, region_id: i64, name: NewName<'_>) -> Result<i64, DbError> {
		let result =
			sqlx::query("INSERT INTO cities (region_id, name_ar, name_en) VALUES (?1, ?2, ?3)")
				.bind(region_id)
				.bind(name.ar)
				.bind(name.en)
				.execute(&self.pool)
				.await?;
		Ok(result.last_insert_rowid())
	}

	#[tracing::instrument(skip(self))]
	pub async fn create_project_category(&self, name: NewName<'_>) -> Result<i64, DbError> {
		let result = sqlx::query(
			"INSERT INTO project_categories (name_ar, name_en, created_at) VALUES (?1, ?2, ?3)",
		)
		.bind(name.ar)
		.bind(name.en)
		.bind(Utc::now().to_rfc3339())
		.execute(&self.pool)
		.await?;
		Ok(result.last_insert_rowid())
	}

	#[tracing::instrument(skip(self))]
	pub async fn create_task_category(
		&self,
		name: NewName<'_>,
		color: Option<&str>,
	) -> Result<i64, DbError> {
		let result =
			sqlx::query("INSERT INTO task_categories (name_ar, name_en, color) VALUES (?1, ?2, ?3)")
				.bind(name.ar)
				.bind(name.en)
				.bind(color)
				.execute(&self.pool)
				.await?;
		Ok(result.last_insert_rowid())
	}

	#[tracing::instrument(skip(self))]
	pub async fn create_task_status(
		&self,
		name: NewName<'_>,
		color: Option<&str>,
		is_final: bool,
	) -> Result<i64, DbError> {
		let result = sqlx::query(
			"INSERT INTO task_statuses (name_ar, name_en, color, is_final) VALUES (?1, ?2, ?3, ?4)",
		)
		.bind(name.ar)
		.bind(name.en)
		.bind(color)
		.bind(is_final)
		.execute(&self.pool)
		.await?;
		Ok(result.last_insert_rowid())
	}

	#[tracing::instrument(skip(self))]
	pub async fn create_website(&self, name: NewName<'_>, url: &str) -> Result<i64, DbError> {
		let result = sqlx::query("INSERT INTO websites (name_ar, name_en, url) VALUES (?1, ?2, ?3)")
			.bind(name.ar)
			.bind(name.en)
			.bind(url)
			.execute(&self.pool)
			.await?;
		Ok(result.last_insert_rowid())
	}
}

pub(crate) fn parse_task_category_row(row: &sqlx::sqlite::SqliteRow) -> TaskCategory {
	TaskCategory {
		id: row.get("id"),
		name_ar: row.get("name_ar"),
		name_en: row.get("name_en"),
		color: row.get("color"),
	}
}

pub(crate) fn parse_task_status_row(row: &sqlx::sqlite::SqliteRow) -> TaskStatus {
	TaskStatus {
		id: row.get("id"),
		name_ar: row.get("name_ar"),
		name_en: row.get("name_en"),
		color: row.get("color"),
		is_final: row.get("is_final"),
	}
}

fn parse_project_category_row(row: &sqlx::sqlite::SqliteRow) -> Result<ProjectCategory, DbError> {
	let created_at_str: String = row.get("created_at");

	Ok(ProjectCategory {
		id: row.get("id"),
		name_ar: row.get("name_ar"),
		name_en: row.get("name_en"),
		created_at: parse_timestamp(&created_at_str, "created_at")?,
	})
}

pub(crate) fn parse_timestamp(value: &str, column: &str) -> Result<DateTime<Utc>, DbError> {
	DateTime::parse_from_rfc3339(value)
		.map(|dt| dt.with_timezone(&Utc))
		.map_err(|e| DbError::Internal(format!("Invalid {column}: {e}")))
}

#[async_trait]
pub trait ListsStore: Send + Sync {
	async fn list_regions(&self) -> Result<Vec<Region>, DbError>;
	async fn list_cities(&self, region_id: Option<i64>) -> Result<Vec<City>, DbError>;
	async fn list_project_categories(&self) -> Result<Vec<ProjectCategory>, DbError>;
	async fn list_task_categories(&self) -> Result<Vec<TaskCategory>, DbError>;
	async fn list_task_statuses(&self) -> Result<Vec<TaskStatus>, DbError>;
	async fn list_websites(&self) -> Result<Vec<Website>, DbError>;
}

#[async_trait]
impl ListsStore for ListsRepository {
	async fn list_regions(&self) -> Result<Vec<Region>, DbError> {
		self.list_regions().await
	}

	async fn list_cities(&self, region_id: Option<i64>) -> Result<Vec<City>, DbError> {
		self.list_cities(region_id).await
	}

	async fn list_project_categories(&self) -> Result<Vec<ProjectCategory>, DbError> {
		self.list_project_categories().await
	}

	async fn list_task_categories(&self) -> Result<Vec<TaskCategory>, DbError> {
		self.list_task_categories().await
	}

	async fn list_task_statuses(&self) -> Result<Vec<TaskStatus>, DbError> {
		self.list_task_statuses().await
	}

	async fn list_websites(&self) -> Result<Vec<Website>, DbError> {
		self.list_websites().await
	}
}
