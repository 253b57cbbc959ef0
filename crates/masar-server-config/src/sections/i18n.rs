// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale configuration section.
//!
//! ```toml
//! [i18n]
//! locales = ["ar", "en"]   # first entry is the default
//! ```

use masar_common_i18n::LocaleConfig;
use serde::Deserialize;

use crate::error::ConfigError;

#[derive(Debug, Clone, Default)]
pub struct I18nConfig {
	pub locales: LocaleConfig,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct I18nConfigLayer {
	#[serde(default)]
	pub locales: Option<Vec<String>>,
}

impl I18nConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.locales.is_some() {
			self.locales = other.locales;
		}
	}

	/// Parse a comma separated list such as `en, ar`.
	pub fn parse_list(raw: &str) -> Vec<String> {
		raw.split(',')
			.map(|s| s.trim().to_string())
			.filter(|s| !s.is_empty())
			.collect()
	}

	pub fn finalize(self) -> Result<I18nConfig, ConfigError> {
		let locales = match self.locales {
			Some(list) => LocaleConfig::new(list).map_err(|e| ConfigError::InvalidValue {
				key: "i18n.locales".to_string(),
				message: e.to_string(),
			})?,
			None => LocaleConfig::default(),
		};
		Ok(I18nConfig { locales })
	}
}
