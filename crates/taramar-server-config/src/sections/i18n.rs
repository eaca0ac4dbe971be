// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Localization configuration: fallback locale and where bundles live.

use std::path::PathBuf;

use serde::Deserialize;
use taramar_common_i18n::{Locale, DEFAULT_LOCALE};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq)]
pub struct I18nConfig {
	/// Locale used when a request names none or an unsupported one.
	pub default_locale: Locale,
	/// Directory holding `<locale>.json` bundles. `None` uses the bundles
	/// compiled into the binary.
	pub messages_dir: Option<PathBuf>,
}

impl Default for I18nConfig {
	fn default() -> Self {
		Self {
			default_locale: DEFAULT_LOCALE,
			messages_dir: None,
		}
	}
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct I18nConfigLayer {
	#[serde(default)]
	pub default_locale: Option<String>,
	#[serde(default)]
	pub messages_dir: Option<PathBuf>,
}

impl I18nConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.default_locale.is_some() {
			self.default_locale = other.default_locale;
		}
		if other.messages_dir.is_some() {
			self.messages_dir = other.messages_dir;
		}
	}

	pub fn finalize(self) -> Result<I18nConfig, ConfigError> {
		let default_locale = match self.default_locale {
			Some(code) => code.parse().map_err(|_| {
				ConfigError::Validation(format!(
					"default locale '{code}' is not supported (expected one of en, fr, nl)"
				))
			})?,
			None => DEFAULT_LOCALE,
		};

		Ok(I18nConfig {
			default_locale,
			messages_dir: self.messages_dir,
		})
	}
}
