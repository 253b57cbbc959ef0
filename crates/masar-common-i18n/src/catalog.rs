// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Gettext catalog loading and translation functions.

use std::collections::HashMap;

use gettext::Catalog;
use once_cell::sync::Lazy;

use crate::locale::FALLBACK_LOCALE;

const AR_MO: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/ar.mo"));
const EN_MO: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/en.mo"));

static CATALOGS: Lazy<HashMap<&'static str, Catalog>> = Lazy::new(|| {
	let mut map = HashMap::new();

	if let Ok(catalog) = Catalog::parse(EN_MO) {
		map.insert("en", catalog);
	} else {
		tracing::error!("Failed to parse English translation catalog");
	}

	if let Ok(catalog) = Catalog::parse(AR_MO) {
		map.insert("ar", catalog);
	} else {
		tracing::warn!("Failed to parse Arabic translation catalog");
	}

	map
});

/// Translate a string for the given locale.
///
/// Falls back to English if the translation is not found, then to the msgid itself.
///
/// # Example
///
/// ```
/// use masar_common_i18n::t;
///
/// assert_eq!(t("ar", "server.page.tasks.title"), "المهام");
/// ```
pub fn t(locale: &str, msgid: &str) -> String {
	if let Some(catalog) = CATALOGS.get(locale) {
		let translated = catalog.gettext(msgid);
		if translated != msgid {
			return translated.to_string();
		}
	}

	if locale != FALLBACK_LOCALE {
		if let Some(catalog) = CATALOGS.get(FALLBACK_LOCALE) {
			let translated = catalog.gettext(msgid);
			if translated != msgid {
				return translated.to_string();
			}
		}
	}

	msgid.to_string()
}

/// Translate a string with variable substitution.
///
/// Variables use `{name}` syntax in the translated string.
///
/// # Example
///
/// ```
/// use masar_common_i18n::t_fmt;
///
/// let message = t_fmt("en", "server.api.template.not_found", &[("id", "42")]);
/// assert_eq!(message, "Task template 42 was not found");
/// ```
pub fn t_fmt(locale: &str, msgid: &str, args: &[(&str, &str)]) -> String {
	let mut result = t(locale, msgid);

	for (name, value) in args {
		let placeholder = format!("{{{name}}}");
		result = result.replace(&placeholder, value);
	}

	result
}
