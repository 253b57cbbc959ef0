// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale resolution logic.

use crate::error::I18nError;
use crate::locale::{is_supported, DEFAULT_LOCALE, FALLBACK_LOCALE};

/// The set of locales a deployment serves.
///
/// The first entry is the default locale. Construct it once from configuration
/// and pass it to [`resolve_locale`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
	locales: Vec<String>,
}

impl LocaleConfig {
	/// Build a locale set. The list must be non-empty and every tag must have
	/// catalog metadata.
	pub fn new<I, S>(locales: I) -> Result<Self, I18nError>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut seen: Vec<String> = Vec::new();
		for locale in locales {
			let locale = locale.into();
			if !is_supported(&locale) {
				return Err(I18nError::UnsupportedLocale(locale));
			}
			if !seen.contains(&locale) {
				seen.push(locale);
			}
		}

		if seen.is_empty() {
			return Err(I18nError::EmptyLocaleSet);
		}

		Ok(Self { locales: seen })
	}

	/// The default locale (first configured entry).
	pub fn default_locale(&self) -> &str {
		&self.locales[0]
	}

	/// All configured locales in priority order.
	pub fn locales(&self) -> &[String] {
		&self.locales
	}

	/// Exact, case-sensitive membership test.
	pub fn contains(&self, tag: &str) -> bool {
		self.locales.iter().any(|l| l == tag)
	}
}

impl Default for LocaleConfig {
	fn default() -> Self {
		Self {
			locales: vec![DEFAULT_LOCALE.to_string(), FALLBACK_LOCALE.to_string()],
		}
	}
}

/// Resolve the locale of a request from its `Accept-Language` header value.
///
/// The header is treated as a single exact token: it is returned as-is when it
/// is one of the configured locales. Anything else (missing, empty, weighted
/// lists such as `ar,en;q=0.8`, different casing) resolves to the configured
/// default.
///
/// # Example
///
/// ```
/// use masar_common_i18n::{resolve_locale, LocaleConfig};
///
/// let config = LocaleConfig::default();
/// assert_eq!(resolve_locale(Some("en"), &config), "en");
/// assert_eq!(resolve_locale(Some("fr"), &config), "ar");
/// assert_eq!(resolve_locale(None, &config), "ar");
/// ```
pub fn resolve_locale<'a>(header: Option<&str>, config: &'a LocaleConfig) -> &'a str {
	if let Some(tag) = header {
		if let Some(locale) = config.locales.iter().find(|l| l.as_str() == tag) {
			return locale;
		}
	}

	config.default_locale()
}
