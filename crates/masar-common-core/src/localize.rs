// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Selecting a display value from a bilingual field pair.
//!
//! Records store each translatable field twice, e.g. `nameAr` and `nameEn`.
//! A rendering locale of `"ar"` selects the Arabic side; every other tag
//! selects English. There is no fallback between the two: a missing side
//! yields `None` even when the other side is present.
//!
//! ```
//! use masar_common_core::{localize, Region};
//!
//! let region = Region { id: 1, name_ar: Some("مكة".into()), name_en: Some("Makkah".into()) };
//! let localized = localize(region, "ar");
//!
//! assert_eq!(localized.name.as_deref(), Some("مكة"));
//! assert_eq!(localized.record.name_en.as_deref(), Some("Makkah"));
//! ```

use serde::ser::Error as _;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// The locale tag that selects the Arabic side of a pair.
pub const ARABIC: &str = "ar";

/// Borrowed view of one `<field>Ar` / `<field>En` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPair<'a> {
	pub ar: Option<&'a str>,
	pub en: Option<&'a str>,
}

impl<'a> FieldPair<'a> {
	pub fn new(ar: Option<&'a str>, en: Option<&'a str>) -> Self {
		Self { ar, en }
	}

	pub fn select(&self, locale: &str) -> Option<&'a str> {
		if locale == ARABIC {
			self.ar
		} else {
			self.en
		}
	}
}

/// A record with one or more bilingual field pairs.
///
/// Implement it with [`impl_bilingual!`](crate::impl_bilingual) rather than by hand.
pub trait Bilingual {
	/// The pair stored for `field` (e.g. `"name"`), or `None` when the record
	/// has no such pair.
	fn field_pair(&self, field: &str) -> Option<FieldPair<'_>>;
}

/// Derives [`Bilingual`] from a list of `"field" => (ar_member, en_member)`
/// entries. Members must be `Option<String>`.
#[macro_export]
macro_rules! impl_bilingual {
	($ty:ty { $($field:literal => ($ar:ident, $en:ident)),+ $(,)? }) => {
		impl $crate::Bilingual for $ty {
			fn field_pair(&self, field: &str) -> Option<$crate::FieldPair<'_>> {
				match field {
					$($field => Some($crate::FieldPair::new(self.$ar.as_deref(), self.$en.as_deref())),)+
					_ => None,
				}
			}
		}
	};
}

/// A record paired with its display `name` for one locale.
///
/// Serializes as the record's own fields plus `name`. A `name` already
/// present in the record is replaced, so wrapping twice still emits one key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Localized<T> {
	#[serde(flatten)]
	pub record: T,
	pub name: Option<String>,
}

impl<T: Serialize> Serialize for Localized<T> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut value = serde_json::to_value(&self.record).map_err(S::Error::custom)?;
		let Value::Object(map) = &mut value else {
			return Err(S::Error::custom("localized record must serialize as an object"));
		};
		map.insert(
			"name".to_string(),
			self.name.clone().map_or(Value::Null, Value::String),
		);
		value.serialize(serializer)
	}
}

impl<T> Localized<T> {
	pub fn into_inner(self) -> T {
		self.record
	}
}

impl<T: Bilingual> Bilingual for Localized<T> {
	fn field_pair(&self, field: &str) -> Option<FieldPair<'_>> {
		self.record.field_pair(field)
	}
}

/// Select `field` of `record` for `locale`.
pub fn localize_field<'a, T: Bilingual + ?Sized>(
	record: &'a T,
	field: &str,
	locale: &str,
) -> Option<&'a str> {
	record
		.field_pair(field)
		.and_then(|pair| pair.select(locale))
}

/// Attach the locale-appropriate `name` to `record`.
pub fn localize<T: Bilingual>(record: T, locale: &str) -> Localized<T> {
	let name = localize_field(&record, "name", locale).map(str::to_owned);
	Localized { record, name }
}

pub fn localize_all<T: Bilingual>(records: Vec<T>, locale: &str) -> Vec<Localized<T>> {
	records
		.into_iter()
		.map(|record| localize(record, locale))
		.collect()
}

/// The same transform over an untyped JSON object: copies `<field>Ar` or
/// `<field>En` into `<field>`. Values that are not objects pass through.
pub fn localize_json(mut value: Value, field: &str, locale: &str) -> Value {
	if let Value::Object(map) = &mut value {
		let suffix = if locale == ARABIC { "Ar" } else { "En" };
		let selected = map
			.get(&format!("{field}{suffix}"))
			.cloned()
			.unwrap_or(Value::Null);
		map.insert(field.to_string(), selected);
	}
	value
}
