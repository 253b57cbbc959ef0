// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! In-memory query cache with in-flight de-duplication.
//!
//! Entries hold the last JSON result per [`QueryKey`]. A fetch for a key that
//! already has a request in flight awaits that request instead of starting a
//! second one. Unused entries are swept on every access once their eviction
//! window has passed. The lock is never held across an await.
//!
//! Each request runs on its own task and records its result in the cache,
//! so a caller that stops waiting does not leave the entry stuck mid-fetch.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

use chrono::{DateTime, Utc};
use futures::future::{BoxFuture, FutureExt, Shared};
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::ListsError;
use crate::key::{QueryKey, QueryOptions};

type SharedResult = Shared<BoxFuture<'static, Result<Value, ListsError>>>;

struct InFlight {
	id: u64,
	/// Invalidation epoch of the entry when the request started.
	epoch: u64,
	result: SharedResult,
}

/// Snapshot of one cached query.
#[derive(Debug, Clone)]
pub struct QueryState {
	pub data: Option<Value>,
	/// Error of the most recent attempt; cleared by the next success.
	pub error: Option<ListsError>,
	pub is_fetching: bool,
	/// When `data` was last fetched successfully.
	pub updated_at: Option<DateTime<Utc>>,
	pub is_stale: bool,
}

struct Entry {
	data: Option<Value>,
	error: Option<ListsError>,
	updated_at: Option<DateTime<Utc>>,
	fetched_at: Option<Instant>,
	last_accessed: Instant,
	invalidated: bool,
	epoch: u64,
	options: QueryOptions,
	in_flight: Option<InFlight>,
}

impl Entry {
	fn new(options: QueryOptions, now: Instant) -> Self {
		Self {
			data: None,
			error: None,
			updated_at: None,
			fetched_at: None,
			last_accessed: now,
			invalidated: false,
			epoch: 0,
			options,
			in_flight: None,
		}
	}

	fn is_stale(&self, now: Instant) -> bool {
		match (self.fetched_at, self.options.stale_time) {
			(None, _) => true,
			_ if self.invalidated => true,
			(Some(_), None) => false,
			(Some(at), Some(stale_time)) => now.duration_since(at) >= stale_time,
		}
	}

	fn is_expired(&self, now: Instant) -> bool {
		self.in_flight.is_none()
			&& self
				.options
				.gc_time
				.is_some_and(|gc| now.duration_since(self.last_accessed) >= gc)
	}

	fn state(&self, now: Instant) -> QueryState {
		QueryState {
			data: self.data.clone(),
			error: self.error.clone(),
			is_fetching: self.in_flight.is_some(),
			updated_at: self.updated_at,
			is_stale: self.is_stale(now),
		}
	}

	fn invalidate(&mut self) {
		self.invalidated = true;
		self.epoch = self.epoch.wrapping_add(1);
	}
}

/// Shared cache of list queries. Clones share the same entries.
#[derive(Clone, Default)]
pub struct QueryCache {
	entries: Arc<Mutex<HashMap<QueryKey, Entry>>>,
	next_request: Arc<AtomicU64>,
}

impl QueryCache {
	pub fn new() -> Self {
		Self::default()
	}

	fn lock(&self) -> MutexGuard<'_, HashMap<QueryKey, Entry>> {
		// Entries stay consistent even if a holder panicked.
		self.entries
			.lock()
			.unwrap_or_else(|poisoned| poisoned.into_inner())
	}

	/// Return the cached value for `key`, fetching it when missing or stale.
	///
	/// `fetcher` is only called when no request for `key` is in flight.
	pub async fn fetch<F>(
		&self,
		key: &QueryKey,
		options: QueryOptions,
		fetcher: F,
	) -> Result<Value, ListsError>
	where
		F: FnOnce() -> BoxFuture<'static, Result<Value, ListsError>>,
	{
		let (id, request) = {
			let now = Instant::now();
			let mut entries = self.lock();
			sweep(&mut entries, now);

			let entry = entries
				.entry(key.clone())
				.or_insert_with(|| Entry::new(options, now));
			entry.last_accessed = now;
			entry.options = options;

			if let Some(in_flight) = &entry.in_flight {
				trace!(%key, "joining in-flight request");
				(in_flight.id, in_flight.result.clone())
			} else if let (Some(data), false) = (&entry.data, entry.is_stale(now)) {
				trace!(%key, "cache hit");
				return Ok(data.clone());
			} else {
				let id = self.next_request.fetch_add(1, Ordering::Relaxed);
				debug!(%key, request = id, "fetching");
				let result = self.spawn_request(key.clone(), id, fetcher());
				entry.in_flight = Some(InFlight {
					id,
					epoch: entry.epoch,
					result: result.clone(),
				});
				(id, result)
			}
		};

		let result = request.await;
		// Only needed when the request task died before settling.
		self.settle(key, id, &result);
		result
	}

	/// Run `request` to completion on its own task, settling the entry when done.
	fn spawn_request(
		&self,
		key: QueryKey,
		id: u64,
		request: BoxFuture<'static, Result<Value, ListsError>>,
	) -> SharedResult {
		let cache = self.clone();
		let task = tokio::spawn(async move {
			let result = request.await;
			cache.settle(&key, id, &result);
			result
		});

		async move {
			task.await
				.unwrap_or_else(|err| Err(ListsError::Aborted(err.to_string())))
		}
		.boxed()
		.shared()
	}

	/// Record the outcome of request `id` if it is still the entry's in-flight request.
	fn settle(&self, key: &QueryKey, id: u64, result: &Result<Value, ListsError>) {
		let mut entries = self.lock();
		let Some(entry) = entries.get_mut(key) else {
			return;
		};
		if !entry
			.in_flight
			.as_ref()
			.is_some_and(|current| current.id == id)
		{
			return;
		}
		let Some(in_flight) = entry.in_flight.take() else {
			return;
		};

		match result {
			Ok(value) => {
				entry.data = Some(value.clone());
				entry.error = None;
				entry.updated_at = Some(Utc::now());
				entry.fetched_at = Some(Instant::now());
				// An invalidation that arrived mid-request still applies.
				entry.invalidated = entry.epoch != in_flight.epoch;
			}
			Err(err) => {
				debug!(%key, error = %err, "fetch failed");
				entry.error = Some(err.clone());
			}
		}
	}

	/// Current state of `key`, or `None` if it is not cached.
	pub fn state(&self, key: &QueryKey) -> Option<QueryState> {
		let now = Instant::now();
		let mut entries = self.lock();
		sweep(&mut entries, now);
		entries.get(key).map(|entry| entry.state(now))
	}

	/// Mark `key` stale so the next access refetches it.
	pub fn invalidate(&self, key: &QueryKey) {
		if let Some(entry) = self.lock().get_mut(key) {
			debug!(%key, "invalidated");
			entry.invalidate();
		}
	}

	/// Mark every entry stale.
	pub fn invalidate_all(&self) {
		let mut entries = self.lock();
		debug!(entries = entries.len(), "invalidating all queries");
		for entry in entries.values_mut() {
			entry.invalidate();
		}
	}

	pub fn len(&self) -> usize {
		self.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

fn sweep(entries: &mut HashMap<QueryKey, Entry>, now: Instant) {
	let before = entries.len();
	entries.retain(|_, entry| !entry.is_expired(now));
	let evicted = before - entries.len();
	if evicted > 0 {
		debug!(evicted, "evicted unused queries");
	}
}
