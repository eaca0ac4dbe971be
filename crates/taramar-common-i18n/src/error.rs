// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

use crate::locale::Locale;

#[derive(Debug, thiserror::Error)]
pub enum I18nError {
	#[error("Unsupported locale: {0}")]
	UnsupportedLocale(String),

	#[error("Message bundle not found for locale: {0}")]
	BundleNotFound(Locale),

	#[error("Failed to parse message bundle for {locale}: {message}")]
	BundleParse { locale: Locale, message: String },

	#[error("Failed to read message bundle {path}: {source}")]
	BundleRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

impl I18nError {
	/// Whether this error means "no message set exists for the request".
	///
	/// Rendering must refuse to proceed in that case rather than show a
	/// partially localized page.
	pub fn is_not_found(&self) -> bool {
		matches!(
			self,
			I18nError::UnsupportedLocale(_) | I18nError::BundleNotFound(_)
		)
	}
}
