// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Supported locales and per-locale value maps.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::I18nError;

/// A locale the site ships a message bundle for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
	En,
	Fr,
	Nl,
}

impl Locale {
	/// Every supported locale, in display order.
	pub const ALL: [Locale; 3] = [Locale::En, Locale::Fr, Locale::Nl];

	pub fn as_str(&self) -> &'static str {
		match self {
			Locale::En => "en",
			Locale::Fr => "fr",
			Locale::Nl => "nl",
		}
	}

	pub fn info(&self) -> &'static LocaleInfo {
		match self {
			Locale::En => &LOCALES[0],
			Locale::Fr => &LOCALES[1],
			Locale::Nl => &LOCALES[2],
		}
	}
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Locale {
	type Err = I18nError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"en" => Ok(Locale::En),
			"fr" => Ok(Locale::Fr),
			"nl" => Ok(Locale::Nl),
			other => Err(I18nError::UnsupportedLocale(other.to_string())),
		}
	}
}

/// Metadata about a supported locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleInfo {
	/// ISO 639-1 language code (e.g., "en", "fr", "nl")
	pub code: &'static str,
	/// English name of the language
	pub name: &'static str,
	/// Native name of the language
	pub native_name: &'static str,
	/// Title of the landing page in this language
	pub landing_title: &'static str,
}

/// Default locale used as fallback.
pub const DEFAULT_LOCALE: Locale = Locale::En;

/// All supported locales.
pub const LOCALES: &[LocaleInfo] = &[
	LocaleInfo {
		code: "en",
		name: "English",
		native_name: "English",
		landing_title: "Taramar – Natural Skin Care for Every Day",
	},
	LocaleInfo {
		code: "fr",
		name: "French",
		native_name: "Français",
		landing_title: "Taramar – Soin de la peau naturel au quotidien",
	},
	LocaleInfo {
		code: "nl",
		name: "Dutch",
		native_name: "Nederlands",
		landing_title: "Taramar – Natuurlijke huidverzorging voor elke dag",
	},
];

/// Get metadata for a locale code.
///
/// Returns `None` if the locale is not supported.
pub fn locale_info(code: &str) -> Option<&'static LocaleInfo> {
	LOCALES.iter().find(|l| l.code == code)
}

/// Check if a locale code is supported.
pub fn is_supported(code: &str) -> bool {
	code.parse::<Locale>().is_ok()
}

/// Get all supported locales.
pub fn available_locales() -> &'static [LocaleInfo] {
	LOCALES
}

/// One value per supported locale.
///
/// Serializes as `{ "en": .., "fr": .., "nl": .. }`, which is the shape the
/// admin editor expects for both values and override flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleMap<T> {
	pub en: T,
	pub fr: T,
	pub nl: T,
}

impl<T> LocaleMap<T> {
	pub fn from_fn(mut f: impl FnMut(Locale) -> T) -> Self {
		Self {
			en: f(Locale::En),
			fr: f(Locale::Fr),
			nl: f(Locale::Nl),
		}
	}

	pub fn get(&self, locale: Locale) -> &T {
		match locale {
			Locale::En => &self.en,
			Locale::Fr => &self.fr,
			Locale::Nl => &self.nl,
		}
	}

	pub fn get_mut(&mut self, locale: Locale) -> &mut T {
		match locale {
			Locale::En => &mut self.en,
			Locale::Fr => &mut self.fr,
			Locale::Nl => &mut self.nl,
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = (Locale, &T)> {
		Locale::ALL.into_iter().map(move |locale| (locale, self.get(locale)))
	}
}
