// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Saving editor changes to the override store.

use futures::future::join_all;
use serde::{Deserialize, Serialize};
use taramar_common_i18n::Locale;
use taramar_server_db::DbError;
use tracing::{error, info};

use crate::error::{Result, TranslationsError};
use crate::service::TranslationService;

/// Submitted values for one key. A locale left as `None` is not touched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SaveValues {
	#[serde(default)]
	pub en: Option<String>,
	#[serde(default)]
	pub fr: Option<String>,
	#[serde(default)]
	pub nl: Option<String>,
}

impl SaveValues {
	pub fn with(mut self, locale: Locale, value: impl Into<String>) -> Self {
		let slot = match locale {
			Locale::En => &mut self.en,
			Locale::Fr => &mut self.fr,
			Locale::Nl => &mut self.nl,
		};
		*slot = Some(value.into());
		self
	}

	pub fn get(&self, locale: Locale) -> Option<&str> {
		match locale {
			Locale::En => self.en.as_deref(),
			Locale::Fr => self.fr.as_deref(),
			Locale::Nl => self.nl.as_deref(),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveAction {
	Upserted,
	/// `existed` is false when there was nothing to clear.
	Cleared { existed: bool },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveOutcome {
	pub key: String,
	pub actions: Vec<(Locale, SaveAction)>,
}

impl TranslationService {
	/// Apply an editor submission for `key`.
	///
	/// Keys and values are trimmed. A blank value clears that locale's
	/// override; clearing twice is harmless. The locale writes run
	/// concurrently and independently, so a failure in one locale is reported
	/// as [`TranslationsError::PartialWrite`] after the others finished.
	#[tracing::instrument(skip(self, values), fields(key = %key.trim()))]
	pub async fn save_override(&self, key: &str, values: &SaveValues) -> Result<SaveOutcome> {
		let key = key.trim();
		if key.is_empty() {
			return Err(TranslationsError::Validation("key is required".to_string()));
		}

		let writes = Locale::ALL.into_iter().filter_map(|locale| {
			let value = values.get(locale)?.trim();
			Some(async move { (locale, self.write_locale(locale, key, value).await) })
		});

		let mut actions = Vec::new();
		let mut failed = Vec::new();
		for (locale, result) in join_all(writes).await {
			match result {
				Ok(action) => actions.push((locale, action)),
				Err(e) => {
					error!(%locale, error = %e, "translation override write failed");
					failed.push(locale);
				}
			}
		}

		if !failed.is_empty() {
			return Err(TranslationsError::PartialWrite {
				key: key.to_string(),
				applied: actions.iter().map(|(locale, _)| *locale).collect(),
				failed,
			});
		}

		info!(locales = actions.len(), "translation override saved");
		Ok(SaveOutcome {
			key: key.to_string(),
			actions,
		})
	}

	async fn write_locale(
		&self,
		locale: Locale,
		key: &str,
		value: &str,
	) -> std::result::Result<SaveAction, DbError> {
		if value.is_empty() {
			let existed = self.store().delete_override(locale, key).await?;
			Ok(SaveAction::Cleared { existed })
		} else {
			self.store().upsert_override(locale, key, value).await?;
			Ok(SaveAction::Upserted)
		}
	}
}
