// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Health check types and component checking logic.

use std::time::Duration;

use masar_common_i18n::{t, LocaleConfig, FALLBACK_LOCALE};
use serde::Serialize;
use sqlx::SqlitePool;
use tokio::time::{timeout, Instant};
use utoipa::ToSchema;

/// Health status for components and overall system.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
	Healthy,
	Degraded,
	Unhealthy,
	Unknown,
}

/// Database component health.
#[derive(Debug, Serialize, ToSchema)]
pub struct DatabaseHealth {
	pub status: HealthStatus,
	pub latency_ms: u64,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
}

/// Message catalog health for the configured locales.
#[derive(Debug, Serialize, ToSchema)]
pub struct LocalesHealth {
	pub status: HealthStatus,
	pub default_locale: String,
	pub locales: Vec<String>,
	/// Configured locales that serve fallback text instead of their own catalog.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub untranslated: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthComponents {
	pub database: DatabaseHealth,
	pub locales: LocalesHealth,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
	pub status: HealthStatus,
	pub timestamp: String,
	pub duration_ms: u64,
	pub version: String,
	pub components: HealthComponents,
}

const DB_CHECK_TIMEOUT: Duration = Duration::from_millis(500);

/// Msgid every shipped catalog translates.
const PROBE_MSGID: &str = "server.api.error.internal";

/// Check database health.
pub async fn check_database(pool: &SqlitePool) -> DatabaseHealth {
	let start = Instant::now();

	let result = timeout(DB_CHECK_TIMEOUT, masar_server_db::ping(pool)).await;
	let latency_ms = start.elapsed().as_millis() as u64;

	match result {
		Ok(Ok(())) => DatabaseHealth {
			status: HealthStatus::Healthy,
			latency_ms,
			error: None,
		},
		Ok(Err(e)) => DatabaseHealth {
			status: HealthStatus::Unhealthy,
			latency_ms,
			error: Some(e.to_string()),
		},
		Err(_) => DatabaseHealth {
			status: HealthStatus::Unhealthy,
			latency_ms,
			error: Some("database health check timed out".to_string()),
		},
	}
}

/// Check that every configured locale has a usable catalog.
///
/// A missing catalog still serves the fallback text, so it only degrades.
pub fn check_locales(config: &LocaleConfig) -> LocalesHealth {
	let fallback = t(FALLBACK_LOCALE, PROBE_MSGID);
	let untranslated: Vec<String> = config
		.locales()
		.iter()
		.filter(|locale| locale.as_str() != FALLBACK_LOCALE)
		.filter(|locale| t(locale, PROBE_MSGID) == fallback)
		.cloned()
		.collect();

	LocalesHealth {
		status: if fallback == PROBE_MSGID {
			HealthStatus::Unhealthy
		} else if untranslated.is_empty() {
			HealthStatus::Healthy
		} else {
			HealthStatus::Degraded
		},
		default_locale: config.default_locale().to_string(),
		locales: config.locales().to_vec(),
		untranslated,
	}
}

pub fn aggregate_status(components: &HealthComponents) -> HealthStatus {
	let statuses = [components.database.status, components.locales.status];

	if statuses
		.iter()
		.any(|s| matches!(s, HealthStatus::Unhealthy))
	{
		HealthStatus::Unhealthy
	} else if statuses.iter().any(|s| matches!(s, HealthStatus::Degraded)) {
		HealthStatus::Degraded
	} else {
		HealthStatus::Healthy
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn components(database: HealthStatus, locales: HealthStatus) -> HealthComponents {
		HealthComponents {
			database: DatabaseHealth {
				status: database,
				latency_ms: 1,
				error: None,
			},
			locales: LocalesHealth {
				status: locales,
				default_locale: "ar".to_string(),
				locales: vec!["ar".to_string(), "en".to_string()],
				untranslated: vec![],
			},
		}
	}

	#[test]
	fn aggregate_prefers_worst_status() {
		use HealthStatus::*;
		assert_eq!(aggregate_status(&components(Healthy, Healthy)), Healthy);
		assert_eq!(aggregate_status(&components(Healthy, Degraded)), Degraded);
		assert_eq!(aggregate_status(&components(Unhealthy, Degraded)), Unhealthy);
	}

	#[test]
	fn shipped_locales_have_catalogs() {
		let health = check_locales(&LocaleConfig::default());
		assert_eq!(health.status, HealthStatus::Healthy);
		assert_eq!(health.default_locale, "ar");
		assert!(health.untranslated.is_empty());
	}

	#[test]
	fn status_serializes_lowercase() {
		assert_eq!(
			serde_json::to_value(HealthStatus::Degraded).unwrap(),
			serde_json::json!("degraded")
		);
	}

	#[tokio::test]
	async fn database_check_reports_healthy_pool() {
		let pool = masar_server_db::create_pool("sqlite::memory:").await.unwrap();
		let health = check_database(&pool).await;
		assert_eq!(health.status, HealthStatus::Healthy);
		assert!(health.error.is_none());
	}

	#[tokio::test]
	async fn database_check_reports_closed_pool() {
		let pool = masar_server_db::create_pool("sqlite::memory:").await.unwrap();
		pool.close().await;
		let health = check_database(&pool).await;
		assert_eq!(health.status, HealthStatus::Unhealthy);
		assert!(health.error.is_some());
	}
}
