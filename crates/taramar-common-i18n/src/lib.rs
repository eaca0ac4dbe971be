// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization (i18n) support for Taramar.
//!
//! This crate owns the static side of the translation system: the supported
//! locales, the nested message bundles shipped with the site, and the pure
//! tree operations used to reconcile those bundles with editor overrides.
//!
//! # Key Naming Convention
//!
//! Every override-able string is addressed by a flat, dot-notation key built
//! from its path in the bundle:
//!
//! - `hero.title`
//! - `footer.copyright`
//!
//! The first segment of a key is its *section* and is only used for grouping
//! keys in the admin editor.
//!
//! # Example
//!
//! ```
//! use taramar_common_i18n::{EmbeddedBundles, Locale, MessageCatalog, section_of};
//!
//! let catalog = MessageCatalog::load(&EmbeddedBundles).unwrap();
//! let en = catalog.bundle(Locale::En).unwrap();
//!
//! let flat = en.flatten();
//! assert_eq!(flat.get("hero.title").map(String::as_str), Some("Welcome"));
//!
//! let mut overrides = std::collections::BTreeMap::new();
//! overrides.insert("hero.title".to_string(), "Hello".to_string());
//! let merged = en.apply_overrides(&overrides);
//! assert_eq!(merged.leaf("hero.title"), Some("Hello"));
//! assert_eq!(en.leaf("hero.title"), Some("Welcome"));
//!
//! assert_eq!(section_of("hero.title"), "hero");
//! ```

mod bundle;
mod error;
mod locale;
mod resolve;
mod tree;

pub use bundle::{BundleSource, DirectoryBundles, EmbeddedBundles, MessageCatalog};
pub use error::I18nError;
pub use locale::{available_locales, is_supported, locale_info, Locale, LocaleInfo, LocaleMap};
pub use resolve::{negotiate_accept_language, resolve_locale};
pub use tree::{
	apply_overrides, flatten, section_of, set_at_path, unflatten, FlatMessages, MessageNode,
	MessageTree, NotAnObject, KEY_SEPARATOR, ROOT_SECTION,
};

pub use locale::{DEFAULT_LOCALE, LOCALES};
