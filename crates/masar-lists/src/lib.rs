// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Lookup-list SDK for Masar.
//!
//! Fetches the localized lookup lists (regions, cities, categories, statuses)
//! from a Masar server and keeps them in a shared query cache.
//!
//! # Features
//!
//! - **Shared cache**: one result per [`QueryKey`], shared by all clones of a client
//! - **De-duplication**: concurrent calls for the same key make one request
//! - **Staleness and eviction**: per-list windows, see [`QueryOptions`]
//! - **Retry**: one retry on failure by default
//!
//! # Example
//!
//! ```ignore
//! use masar_lists::{ListsClient, QueryKey};
//!
//! let client = ListsClient::builder()
//!     .base_url("https://masar.example.com")
//!     .locale("en")
//!     .build()?;
//!
//! let statuses = client.task_statuses().await?;
//! let state = client.state(&QueryKey::task_statuses());
//! ```

mod cache;
mod client;
mod error;
mod key;

pub use cache::{QueryCache, QueryState};
pub use client::{ClientConfig, ListsClient, ListsClientBuilder};
pub use error::{FetchError, ListsError, Result};
pub use key::{QueryKey, QueryOptions};

pub use masar_server_api::{
	CityList, ErrorResponse, ProjectCategoryList, RegionList, TaskCategoryList, TaskStatusList,
};
