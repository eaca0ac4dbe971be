// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use taramar_common_i18n::{Locale, MessageCatalog, MessageTree};
use taramar_server_db::{
	DbError, OverrideFilter, Result, TranslationOverride, TranslationOverrideStore,
};

use crate::TranslationService;

/// In-memory override store keyed by `(locale, key)`.
#[derive(Default)]
pub struct MemoryOverrideStore {
	records: Mutex<BTreeMap<(Locale, String), String>>,
	/// Locales whose writes fail, to exercise partial saves.
	failing: Vec<Locale>,
	/// Every read fails, as if the backing table were gone.
	unreadable: bool,
}

impl MemoryOverrideStore {
	pub fn failing_for(locales: &[Locale]) -> Self {
		Self {
			failing: locales.to_vec(),
			..Self::default()
		}
	}

	pub fn unreadable() -> Self {
		Self {
			unreadable: true,
			..Self::default()
		}
	}

	pub fn snapshot(&self) -> BTreeMap<(Locale, String), String> {
		self.records.lock().unwrap().clone()
	}

	fn check_writable(&self, locale: Locale) -> Result<()> {
		if self.failing.contains(&locale) {
			return Err(DbError::Internal(format!("{locale} shard unavailable")));
		}
		Ok(())
	}
}

#[async_trait]
impl TranslationOverrideStore for MemoryOverrideStore {
	async fn list_overrides(&self, filter: &OverrideFilter) -> Result<Vec<TranslationOverride>> {
		if self.unreadable {
			return Err(DbError::Internal("no such table: translation_overrides".to_string()));
		}
		let records = self.records.lock().unwrap();
		let now = chrono::Utc::now();
		Ok(records
			.iter()
			.filter(|((locale, key), _)| {
				(filter.locales.is_empty() || filter.locales.contains(locale))
					&& filter.key.as_ref().map_or(true, |k| k == key)
			})
			.map(|((locale, key), value)| TranslationOverride {
				locale: *locale,
				key: key.clone(),
				value: value.clone(),
				created_at: now,
				updated_at: now,
			})
			.collect())
	}

	async fn upsert_override(&self, locale: Locale, key: &str, value: &str) -> Result<()> {
		self.check_writable(locale)?;
		self.records
			.lock()
			.unwrap()
			.insert((locale, key.to_string()), value.to_string());
		Ok(())
	}

	async fn delete_override(&self, locale: Locale, key: &str) -> Result<bool> {
		self.check_writable(locale)?;
		Ok(self
			.records
			.lock()
			.unwrap()
			.remove(&(locale, key.to_string()))
			.is_some())
	}
}

pub fn tree(json: serde_json::Value) -> MessageTree {
	serde_json::from_value(json).unwrap()
}

/// Bundles for the scenarios: `hero.title` everywhere, a French-only promo
/// key and an opaque footer link list.
pub fn scenario_catalog() -> MessageCatalog {
	MessageCatalog::from_bundles([
		(
			Locale::En,
			tree(serde_json::json!({
				"hero": { "title": "Welcome", "subtitle": "Natural care" },
				"footer": { "title": "Taramar", "links": ["contact", "terms"] }
			})),
		),
		(
			Locale::Fr,
			tree(serde_json::json!({
				"hero": { "title": "Bienvenue", "subtitle": "Soin naturel" },
				"footer": { "title": "Taramar", "links": ["contact", "terms"] },
				"promo": { "fr_only": "Offre du mois" }
			})),
		),
		(
			Locale::Nl,
			tree(serde_json::json!({
				"hero": { "title": "Welkom", "subtitle": "Natuurlijke zorg" },
				"footer": { "title": "Taramar", "links": ["contact", "terms"] }
			})),
		),
	])
}

pub fn service_with(store: Arc<MemoryOverrideStore>) -> TranslationService {
	TranslationService::new(Arc::new(scenario_catalog()), store)
}
