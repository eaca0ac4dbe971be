// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use taramar_common_i18n::{I18nError, Locale};
use taramar_server_db::DbError;
use thiserror::Error;

/// Errors raised while resolving or editing translations.
#[derive(Debug, Error)]
pub enum TranslationsError {
	#[error("validation error: {0}")]
	Validation(String),

	#[error(transparent)]
	I18n(#[from] I18nError),

	#[error("override store error: {0}")]
	Store(#[from] DbError),

	/// Some locale writes of a save failed. Writes for the other locales may
	/// have been applied and are not rolled back.
	#[error("failed to save override for {key} in: {}", join_locales(.failed))]
	PartialWrite {
		key: String,
		failed: Vec<Locale>,
		applied: Vec<Locale>,
	},
}

impl TranslationsError {
	/// Whether the requested locale has no message set at all.
	pub fn is_not_found(&self) -> bool {
		matches!(self, TranslationsError::I18n(e) if e.is_not_found())
	}
}

fn join_locales(locales: &[Locale]) -> String {
	locales
		.iter()
		.map(Locale::as_str)
		.collect::<Vec<_>>()
		.join(", ")
}

pub type Result<T> = std::result::Result<T, TranslationsError>;
