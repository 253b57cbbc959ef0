// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization (i18n) support for Masar.
//!
//! Masar serves Arabic (right-to-left, primary) and English. This crate provides:
//!
//! - [`LocaleConfig`] and [`resolve_locale`] to pick the locale of a request
//! - locale metadata such as text direction for page shells
//! - gettext catalogs for server messages ([`t`], [`t_fmt`])
//!
//! # String Naming Convention
//!
//! Message ids use hierarchical dot-notation with a `server.` prefix, for
//! example `server.validation.fileUrl.required`.
//!
//! # Example
//!
//! ```
//! use masar_common_i18n::{is_rtl, resolve_locale, t, LocaleConfig};
//!
//! let config = LocaleConfig::default();
//! let locale = resolve_locale(Some("ar"), &config);
//!
//! assert!(is_rtl(locale));
//! assert_eq!(t(locale, "server.page.projects.title"), "المشاريع");
//! ```

mod catalog;
mod error;
mod locale;
mod resolve;

pub use catalog::{t, t_fmt};
pub use error::I18nError;
pub use locale::{direction, is_rtl, is_supported, locale_info, Direction, LocaleInfo};
pub use resolve::{resolve_locale, LocaleConfig};

pub use locale::{DEFAULT_LOCALE, FALLBACK_LOCALE, LOCALES};
