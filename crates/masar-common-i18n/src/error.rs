// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

#[derive(Debug, thiserror::Error)]
pub enum I18nError {
	#[error("At least one locale must be configured")]
	EmptyLocaleSet,

	#[error("Unsupported locale: {0}")]
	UnsupportedLocale(String),
}
