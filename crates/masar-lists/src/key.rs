// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Cache keys and per-query cache windows.

use std::fmt;
use std::time::Duration;

/// Ordered tuple identifying a cached query.
///
/// Equal keys share one cached result and one in-flight request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
	pub fn new<I, S>(parts: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self(parts.into_iter().map(Into::into).collect())
	}

	/// `["cities", <region id or "">]`
	pub fn cities(region_id: Option<i64>) -> Self {
		let region = region_id.map(|id| id.to_string()).unwrap_or_default();
		Self::new(["cities".to_string(), region])
	}

	pub fn project_categories() -> Self {
		Self::new(["project-categories"])
	}

	pub fn regions() -> Self {
		Self::new(["regions"])
	}

	pub fn task_categories() -> Self {
		Self::new(["task-category"])
	}

	pub fn task_statuses() -> Self {
		Self::new(["task-status"])
	}

	pub fn parts(&self) -> &[String] {
		&self.0
	}
}

impl fmt::Display for QueryKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{}]", self.0.join(", "))
	}
}

/// How long a cached result stays fresh and how long an unused one is kept.
///
/// `None` means forever: a result that never goes stale is only refetched
/// after invalidation, and one that is never evicted stays until the cache is
/// dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueryOptions {
	pub stale_time: Option<Duration>,
	pub gc_time: Option<Duration>,
}

impl QueryOptions {
	/// Fresh until invalidated, never evicted.
	pub const FOREVER: QueryOptions = QueryOptions {
		stale_time: None,
		gc_time: None,
	};

	pub fn new(stale_time: Duration, gc_time: Duration) -> Self {
		Self {
			stale_time: Some(stale_time),
			gc_time: Some(gc_time),
		}
	}

	/// Project categories: 5 minutes fresh, evicted after 10 minutes unused.
	pub fn project_categories() -> Self {
		Self::new(Duration::from_secs(5 * 60), Duration::from_secs(10 * 60))
	}
}
