// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Task template repository.
//!
//! A template is always read together with its default status, its
//! categories and its sub-items. Sub-items come back ascending by `order`,
//! with ties in insertion order.

use async_trait::async_trait;
use chrono::Utc;
use masar_common_core::{TaskTemplate, TaskTemplateDetail, TaskTemplateSubItem};
use sqlx::{sqlite::SqlitePool, Row};

use crate::error::DbError;
use crate::lists::{parse_task_category_row, parse_task_status_row, parse_timestamp};

#[derive(Clone)]
pub struct TaskTemplateRepository {
	pool: SqlitePool,
}

impl TaskTemplateRepository {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	#[tracing::instrument(skip(self))]
	pub async fn get_template(&self, id: i64) -> Result<Option<TaskTemplate>, DbError> {
		let row = sqlx::query(
			r#"
			SELECT id, title, description, default_status_id, created_at
			FROM task_templates
			WHERE id = ?1
			"#,
		)
		.bind(id)
		.fetch_optional(&self.pool)
		.await?;

		row.as_ref().map(parse_template_row).transpose()
	}

	/// Load a template with default status, categories and ordered sub-items.
	#[tracing::instrument(skip(self))]
	pub async fn get_template_detail(&self, id: i64) -> Result<Option<TaskTemplateDetail>, DbError> {
		let Some(template) = self.get_template(id).await? else {
			return Ok(None);
		};

		let default_status = match template.default_status_id {
			Some(status_id) => sqlx::query(
				"SELECT id, name_ar, name_en, color, is_final FROM task_statuses WHERE id = ?1",
			)
			.bind(status_id)
			.fetch_optional(&self.pool)
			.await?
			.as_ref()
			.map(parse_task_status_row),
			None => None,
		};

		let categories = sqlx::query(
			r#"
			SELECT c.id, c.name_ar, c.name_en, c.color
			FROM task_categories c
			JOIN task_template_categories tc ON tc.category_id = c.id
			WHERE tc.template_id = ?1
			ORDER BY c.id
			"#,
		)
		.bind(id)
		.fetch_all(&self.pool)
		.await?
		.iter()
		.map(parse_task_category_row)
		.collect();

		let sub_items = self.list_sub_items(id).await?;

		tracing::debug!(
			template_id = id,
			sub_items = sub_items.len(),
			"loaded task template detail"
		);

		Ok(Some(TaskTemplateDetail {
			template,
			default_status,
			categories,
			sub_items,
		}))
	}

	#[tracing::instrument(skip(self))]
	pub async fn list_sub_items(&self, template_id: i64) -> Result<Vec<TaskTemplateSubItem>, DbError> {
		let rows = sqlx::query(
			r#"
			SELECT id, template_id, title, "order"
			FROM task_template_sub_items
			WHERE template_id = ?1
			ORDER BY "order" ASC, rowid ASC
			"#,
		)
		.bind(template_id)
		.fetch_all(&self.pool)
		.await?;

		Ok(rows
			.iter()
			.map(|row| TaskTemplateSubItem {
				id: row.get("id"),
				template_id: row.get("template_id"),
				title: row.get("title"),
				order: row.get("order"),
			})
			.collect())
	}

	#[tracing::instrument(skip(self, description))]
	pub async fn create_template(
		&self,
		title: &str,
		description: Option<&str>,
		default_status_id: Option<i64>,
	) -> Result<i64, DbError> {
		let result = sqlx::query(
			r#"
			INSERT INTO task_templates (title, description, default_status_id, created_at)
			VALUES (?1, ?2, ?3, ?4)
			"#,
		)
		.bind(title)
		.bind(description)
		.bind(default_status_id)
		.bind(Utc::now().to_rfc3339())
		.execute(&self.pool)
		.await?;

		let id = result.last_insert_rowid();
		tracing::info!(template_id = id, "created task template");
		Ok(id)
	}

	#[tracing::instrument(skip(self))]
	pub async fn add_category(&self, template_id: i64, category_id: i64) -> Result<(), DbError> {
		sqlx::query(
			"INSERT OR IGNORE INTO task_template_categories (template_id, category_id) VALUES (?1, ?2)",
		)
		.bind(template_id)
		.bind(category_id)
		.execute(&self.pool)
		.await?;
		Ok(())
	}

	#[tracing::instrument(skip(self))]
	pub async fn add_sub_item(
		&self,
		template_id: i64,
		title: &str,
		order: i64,
	) -> Result<i64, DbError> {
		let result = sqlx::query(
			r#"INSERT INTO task_template_sub_items (template_id, title, "order") VALUES (?1, ?2, ?3)"#,
		)
		.bind(template_id)
		.bind(title)
		.bind(order)
		.execute(&self.pool)
		.await?;
		Ok(result.last_insert_rowid())
	}
}

fn parse_template_row(row: &sqlx::sqlite::SqliteRow) -> Result<TaskTemplate, DbError> {
	let created_at_str: String = row.get("created_at");

	Ok(TaskTemplate {
		id: row.get("id"),
		title: row.get("title"),
		description: row.get("description"),
		default_status_id: row.get("default_status_id"),
		created_at: parse_timestamp(&created_at_str, "created_at")?,
	})
}

#[async_trait]
pub trait TaskTemplateStore: Send + Sync {
	async fn get_template_detail(&self, id: i64) -> Result<Option<TaskTemplateDetail>, DbError>;
}

#[async_trait]
impl TaskTemplateStore for TaskTemplateRepository {
	async fn get_template_detail(&self, id: i64) -> Result<Option<TaskTemplateDetail>, DbError> {
		self.get_template_detail(id).await
	}
}
