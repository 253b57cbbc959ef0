// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Lists client with cached, de-duplicated queries.

use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use masar_common_http::RetryConfig;
use masar_server_api::{
	lists::{CITIES_PATH, PROJECT_CATEGORIES_PATH, REGIONS_PATH, TASK_CATEGORIES_PATH, TASK_STATUSES_PATH},
	CityList, ErrorResponse, ProjectCategoryList, RegionList, TaskCategoryList, TaskStatusList,
};
use reqwest::{header::ACCEPT_LANGUAGE, Client};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use crate::cache::{QueryCache, QueryState};
use crate::error::{FetchError, ListsError, Result};
use crate::key::{QueryKey, QueryOptions};

/// Configuration for the lists client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
	/// Timeout for HTTP requests.
	pub request_timeout: Duration,
	/// Retry policy; one retry by default.
	pub retry_config: RetryConfig,
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			request_timeout: Duration::from_secs(30),
			retry_config: RetryConfig::with_retries(1),
		}
	}
}

/// Builder for constructing a [`ListsClient`].
#[derive(Default)]
pub struct ListsClientBuilder {
	base_url: Option<String>,
	locale: Option<String>,
	config: ClientConfig,
}

impl ListsClientBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the base URL of the Masar server, e.g. `https://masar.example.com`.
	pub fn base_url(mut self, url: impl Into<String>) -> Self {
		self.base_url = Some(url.into());
		self
	}

	/// Sets the locale sent as `Accept-Language`. Without one the server
	/// answers in its default locale.
	pub fn locale(mut self, locale: impl Into<String>) -> Self {
		self.locale = Some(locale.into());
		self
	}

	pub fn request_timeout(mut self, timeout: Duration) -> Self {
		self.config.request_timeout = timeout;
		self
	}

	pub fn retry_config(mut self, config: RetryConfig) -> Self {
		self.config.retry_config = config;
		self
	}

	pub fn build(self) -> Result<ListsClient> {
		let base_url = self
			.base_url
			.ok_or_else(|| ListsError::InvalidBaseUrl("base URL is required".to_string()))?;
		let base_url = base_url.trim_end_matches('/').to_string();
		if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
			return Err(ListsError::InvalidBaseUrl(base_url));
		}

		let http_client = masar_common_http::builder()
			.timeout(self.config.request_timeout)
			.build()?;

		info!(base_url = %base_url, locale = ?self.locale, "Lists client initialized");

		Ok(ListsClient {
			inner: Arc::new(ListsClientInner {
				base_url,
				locale: self.locale,
				http_client,
				config: self.config,
				cache: QueryCache::new(),
			}),
		})
	}
}

struct ListsClientInner {
	base_url: String,
	locale: Option<String>,
	http_client: Client,
	config: ClientConfig,
	cache: QueryCache,
}

/// Client for the Masar lookup lists.
///
/// Clones share one cache, so the same list requested from several places is
/// fetched once.
///
/// # Example
///
/// ```ignore
/// use masar_lists::ListsClient;
///
/// let client = ListsClient::builder()
///     .base_url("https://masar.example.com")
///     .locale("ar")
///     .build()?;
///
/// let regions = client.regions().await?;
/// let cities = client.cities(Some(regions[0].record.id)).await?;
/// ```
#[derive(Clone)]
pub struct ListsClient {
	inner: Arc<ListsClientInner>,
}

impl ListsClient {
	pub fn builder() -> ListsClientBuilder {
		ListsClientBuilder::new()
	}

	/// Cities, optionally restricted to one region.
	pub async fn cities(&self, region_id: Option<i64>) -> Result<CityList> {
		let params = region_id
			.map(|id| vec![("region_id".to_string(), id.to_string())])
			.unwrap_or_default();
		self.query(
			QueryKey::cities(region_id),
			CITIES_PATH,
			params,
			QueryOptions::FOREVER,
		)
		.await
	}

	/// Project categories. Fresh for 5 minutes, evicted after 10 unused.
	pub async fn project_categories(&self) -> Result<ProjectCategoryList> {
		self.query(
			QueryKey::project_categories(),
			PROJECT_CATEGORIES_PATH,
			Vec::new(),
			QueryOptions::project_categories(),
		)
		.await
	}

	pub async fn regions(&self) -> Result<RegionList> {
		self.query(
			QueryKey::regions(),
			REGIONS_PATH,
			Vec::new(),
			QueryOptions::FOREVER,
		)
		.await
	}

	pub async fn task_categories(&self) -> Result<TaskCategoryList> {
		self.query(
			QueryKey::task_categories(),
			TASK_CATEGORIES_PATH,
			Vec::new(),
			QueryOptions::FOREVER,
		)
		.await
	}

	pub async fn task_statuses(&self) -> Result<TaskStatusList> {
		self.query(
			QueryKey::task_statuses(),
			TASK_STATUSES_PATH,
			Vec::new(),
			QueryOptions::FOREVER,
		)
		.await
	}

	/// Run a cached GET of `path` under `key`.
	///
	/// The list methods are thin wrappers over this; it is public for lists
	/// that need their own cache windows.
	#[tracing::instrument(skip(self, key, params), fields(key = %key))]
	pub async fn query<T>(
		&self,
		key: QueryKey,
		path: &str,
		params: Vec<(String, String)>,
		options: QueryOptions,
	) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let inner = self.inner.clone();
		let url = format!("{}{}", inner.base_url, path);

		let value = self
			.inner
			.cache
			.fetch(&key, options, move || {
				async move { fetch_json(&inner, &url, &params).await }.boxed()
			})
			.await?;

		Ok(serde_json::from_value(value)?)
	}

	/// Cache state for `key`, or `None` if it was never fetched or was evicted.
	pub fn state(&self, key: &QueryKey) -> Option<QueryState> {
		self.inner.cache.state(key)
	}

	pub fn invalidate(&self, key: &QueryKey) {
		self.inner.cache.invalidate(key);
	}

	pub fn invalidate_all(&self) {
		self.inner.cache.invalidate_all();
	}

	pub fn locale(&self) -> Option<&str> {
		self.inner.locale.as_deref()
	}
}

async fn fetch_json(
	inner: &ListsClientInner,
	url: &str,
	params: &[(String, String)],
) -> Result<Value> {
	masar_common_http::retry(&inner.config.retry_config, || {
		fetch_once(inner, url, params)
	})
	.await
}

async fn fetch_once(
	inner: &ListsClientInner,
	url: &str,
	params: &[(String, String)],
) -> Result<Value> {
	debug!(url = %url, "GET");

	let mut request = inner.http_client.get(url).query(params);
	if let Some(locale) = &inner.locale {
		request = request.header(ACCEPT_LANGUAGE, locale);
	}

	let response = request.send().await?;
	let status = response.status();
	if !status.is_success() {
		let text = response.text().await.unwrap_or_default();
		let body = serde_json::from_str::<ErrorResponse>(&text).ok();
		return Err(FetchError {
			status: status.as_u16(),
			body,
		}
		.into());
	}

	Ok(response.json::<Value>().await?)
}
