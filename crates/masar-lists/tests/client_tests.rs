// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Lists client tests against a mock Masar server.

use std::time::Duration;

use masar_common_http::RetryConfig;
use masar_lists::{ListsClient, ListsError, QueryKey, QueryOptions};
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fast_retry() -> RetryConfig {
	RetryConfig {
		max_attempts: 2,
		base_delay: Duration::from_millis(1),
		max_delay: Duration::from_millis(5),
		backoff_factor: 1.0,
		jitter: false,
	}
}

fn client(server: &MockServer) -> ListsClient {
	ListsClient::builder()
		.base_url(server.uri())
		.locale("en")
		.retry_config(fast_retry())
		.build()
		.unwrap()
}

fn regions_body() -> Value {
	json!([
		{ "id": 1, "nameAr": "الرياض", "nameEn": "Riyadh", "name": "Riyadh" },
		{ "id": 2, "nameAr": "مكة المكرمة", "nameEn": "Makkah", "name": "Makkah" }
	])
}

#[tokio::test]
async fn regions_are_fetched_once_and_cached() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/api/lists/regions"))
		.and(header("accept-language", "en"))
		.respond_with(ResponseTemplate::new(200).set_body_json(regions_body()))
		.expect(1)
		.mount(&server)
		.await;

	let client = client(&server);
	let first = client.regions().await.unwrap();
	let second = client.regions().await.unwrap();

	assert_eq!(first.len(), 2);
	assert_eq!(first[0].name.as_deref(), Some("Riyadh"));
	assert_eq!(first[0].record.name_ar.as_deref(), Some("الرياض"));
	assert_eq!(first, second);

	let state = client.state(&QueryKey::regions()).unwrap();
	assert!(state.data.is_some());
	assert!(state.error.is_none());
	assert!(!state.is_fetching);
	assert!(!state.is_stale);
	assert!(state.updated_at.is_some());
}

#[tokio::test]
async fn concurrent_calls_share_one_request() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/api/lists/task-status"))
		.respond_with(
			ResponseTemplate::new(200)
				.set_body_json(json!([
					{ "id": 1, "nameAr": "جديد", "nameEn": "New", "color": null, "isFinal": false, "name": "New" }
				]))
				.set_delay(Duration::from_millis(200)),
		)
		.expect(1)
		.mount(&server)
		.await;

	let client = client(&server);
	let other = client.clone();
	let (a, b) = tokio::join!(client.task_statuses(), other.task_statuses());

	assert_eq!(a.unwrap(), b.unwrap());
}

#[tokio::test]
async fn failed_request_is_retried_once() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/api/task-category"))
		.respond_with(ResponseTemplate::new(503))
		.up_to_n_times(1)
		.expect(1)
		.mount(&server)
		.await;
	Mock::given(method("GET"))
		.and(path("/api/task-category"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!([
			{ "id": 4, "nameAr": "تصميم", "nameEn": "Design", "color": "#8e24aa", "name": "Design" }
		])))
		.expect(1)
		.mount(&server)
		.await;

	let categories = client(&server).task_categories().await.unwrap();
	assert_eq!(categories[0].record.color.as_deref(), Some("#8e24aa"));
}

#[tokio::test]
async fn persistent_failure_surfaces_fetch_error() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/api/lists/regions"))
		.respond_with(ResponseTemplate::new(500).set_body_json(json!({
			"error": "database_error",
			"message": "A database error occurred"
		})))
		.expect(2)
		.mount(&server)
		.await;

	let client = client(&server);
	let err = client.regions().await.unwrap_err();

	match &err {
		ListsError::Fetch(fetch) => {
			assert_eq!(fetch.status, 500);
			let body = fetch.body.as_ref().unwrap();
			assert_eq!(body.error, "database_error");
			assert_eq!(body.message, "A database error occurred");
		}
		other => panic!("unexpected error: {other:?}"),
	}

	let state = client.state(&QueryKey::regions()).unwrap();
	assert!(state.data.is_none());
	assert_eq!(state.error.unwrap().status(), Some(500));
}

#[tokio::test]
async fn unstructured_error_body_is_kept_as_status() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/api/lists/regions"))
		.respond_with(ResponseTemplate::new(404).set_body_string("no such route"))
		.mount(&server)
		.await;

	let err = client(&server).regions().await.unwrap_err();
	match err {
		ListsError::Fetch(fetch) => {
			assert_eq!(fetch.status, 404);
			assert!(fetch.body.is_none());
		}
		other => panic!("unexpected error: {other:?}"),
	}
}

#[tokio::test]
async fn cities_are_cached_per_region() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/api/lists/cities"))
		.and(query_param("region_id", "1"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!([
			{ "id": 10, "regionId": 1, "nameAr": "الخرج", "nameEn": "Al Kharj", "name": "Al Kharj" }
		])))
		.expect(1)
		.mount(&server)
		.await;
	Mock::given(method("GET"))
		.and(path("/api/lists/cities"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!([
			{ "id": 10, "regionId": 1, "nameAr": "الخرج", "nameEn": "Al Kharj", "name": "Al Kharj" },
			{ "id": 11, "regionId": 2, "nameAr": "جدة", "nameEn": "Jeddah", "name": "Jeddah" }
		])))
		.expect(1)
		.mount(&server)
		.await;

	let client = client(&server);
	assert_eq!(client.cities(Some(1)).await.unwrap().len(), 1);
	assert_eq!(client.cities(None).await.unwrap().len(), 2);
	assert_eq!(client.cities(Some(1)).await.unwrap().len(), 1);

	assert!(client.state(&QueryKey::cities(Some(1))).is_some());
	assert!(client.state(&QueryKey::cities(None)).is_some());
}

#[tokio::test]
async fn project_categories_stay_fresh_within_window() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/api/lists/project-categories"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!([
			{ "id": 1, "nameAr": "سكني", "nameEn": "Residential", "createdAt": "2024-01-01T00:00:00Z", "name": "Residential" }
		])))
		.expect(1)
		.mount(&server)
		.await;

	let client = client(&server);
	client.project_categories().await.unwrap();
	client.project_categories().await.unwrap();

	let state = client.state(&QueryKey::project_categories()).unwrap();
	assert!(!state.is_stale);
}

#[tokio::test]
async fn stale_query_is_refetched() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/api/lists/websites"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
		.expect(2)
		.mount(&server)
		.await;

	let client = client(&server);
	let key = QueryKey::new(["websites"]);
	let options = QueryOptions {
		stale_time: Some(Duration::from_millis(50)),
		gc_time: None,
	};

	let _: Vec<Value> = client
		.query(key.clone(), "/api/lists/websites", Vec::new(), options)
		.await
		.unwrap();
	let _: Vec<Value> = client
		.query(key.clone(), "/api/lists/websites", Vec::new(), options)
		.await
		.unwrap();

	tokio::time::sleep(Duration::from_millis(100)).await;
	assert!(client.state(&key).unwrap().is_stale);

	let _: Vec<Value> = client
		.query(key.clone(), "/api/lists/websites", Vec::new(), options)
		.await
		.unwrap();
}

#[tokio::test]
async fn invalidation_triggers_refetch() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/api/lists/regions"))
		.respond_with(ResponseTemplate::new(200).set_body_json(regions_body()))
		.expect(3)
		.mount(&server)
		.await;

	let client = client(&server);
	client.regions().await.unwrap();
	client.invalidate(&QueryKey::regions());
	client.regions().await.unwrap();
	client.regions().await.unwrap();
	client.invalidate_all();
	client.regions().await.unwrap();
}

#[tokio::test]
async fn no_locale_sends_no_accept_language() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/api/lists/regions"))
		.respond_with(ResponseTemplate::new(200).set_body_json(regions_body()))
		.mount(&server)
		.await;

	let client = ListsClient::builder()
		.base_url(server.uri())
		.build()
		.unwrap();
	client.regions().await.unwrap();

	let requests = server.received_requests().await.unwrap();
	assert_eq!(requests.len(), 1);
	assert!(!requests[0].headers.contains_key("accept-language"));
}
