// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Override resolution: static bundles merged with stored overrides.
//!
//! Nothing here is cached. Every call reads the store again, so an override
//! saved by an editor is visible to the very next request.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use serde::Serialize;
use taramar_common_i18n::{
	section_of, FlatMessages, Locale, LocaleMap, MessageCatalog, MessageTree,
};
use taramar_server_db::{OverrideFilter, TranslationOverrideStore};
use tracing::{debug, warn};

use crate::error::Result;

/// One editable key with its effective value in every locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedRow {
	pub key: String,
	pub section: String,
	/// Override if present, else the static leaf, else `""`.
	pub values: LocaleMap<String>,
	/// Whether an override record exists, regardless of its value.
	pub is_overridden: LocaleMap<bool>,
}

/// Every editable key across the static bundles, grouped by section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnnotatedListing {
	/// Section name to its keys, both sorted.
	pub sections: BTreeMap<String, Vec<String>>,
	/// Sorted by key.
	pub rows: Vec<AnnotatedRow>,
}

#[derive(Clone)]
pub struct TranslationService {
	catalog: Arc<MessageCatalog>,
	store: Arc<dyn TranslationOverrideStore>,
}

impl TranslationService {
	pub fn new(catalog: Arc<MessageCatalog>, store: Arc<dyn TranslationOverrideStore>) -> Self {
		Self { catalog, store }
	}

	pub fn catalog(&self) -> &MessageCatalog {
		&self.catalog
	}

	pub(crate) fn store(&self) -> &dyn TranslationOverrideStore {
		self.store.as_ref()
	}

	/// The message tree to render `locale` with.
	///
	/// Fails with a not-found error when the locale has no static bundle; the
	/// store is not consulted in that case.
	#[tracing::instrument(skip(self), fields(%locale))]
	pub async fn resolve_messages(&self, locale: Locale) -> Result<MessageTree> {
		let base = self.catalog.bundle(locale)?;
		let records = self
			.store
			.list_overrides(&OverrideFilter::for_locale(locale))
			.await?;

		let overrides: FlatMessages = records
			.into_iter()
			.map(|record| (record.key, record.value))
			.collect();
		debug!(overrides = overrides.len(), "merging overrides");

		Ok(base.apply_overrides(&overrides))
	}

	/// Render-path entry point; same as [`Self::resolve_messages`].
	pub async fn get_merged_messages(&self, locale: Locale) -> Result<MessageTree> {
		self.resolve_messages(locale).await
	}

	/// Like [`Self::resolve_messages`] for a raw locale code. Unsupported codes
	/// are a not-found error.
	pub async fn resolve_messages_str(&self, code: &str) -> Result<MessageTree> {
		let locale: Locale = code.parse()?;
		self.resolve_messages(locale).await
	}

	/// Build the editor's view of every key: effective values and override
	/// flags for all locales.
	///
	/// Keys come from the static bundles only. A locale with no bundle
	/// contributes no keys, and override records for keys that exist in no
	/// bundle are ignored.
	#[tracing::instrument(skip(self))]
	pub async fn list_all_keys_annotated(&self) -> Result<AnnotatedListing> {
		let statics = LocaleMap::from_fn(|locale| match self.catalog.bundle(locale) {
			Ok(tree) => tree.flatten(),
			Err(e) => {
				warn!(%locale, error = %e, "listing without static bundle");
				FlatMessages::new()
			}
		});

		let mut overrides: LocaleMap<FlatMessages> = LocaleMap::default();
		for record in self.store.list_overrides(&OverrideFilter::all()).await? {
			overrides
				.get_mut(record.locale)
				.insert(record.key, record.value);
		}

		let keys: BTreeSet<&String> = statics.iter().flat_map(|(_, flat)| flat.keys()).collect();

		let mut listing = AnnotatedListing::default();
		for key in keys {
			let section = section_of(key).to_string();
			listing
				.sections
				.entry(section.clone())
				.or_default()
				.push(key.clone());

			listing.rows.push(AnnotatedRow {
				key: key.clone(),
				section,
				values: LocaleMap::from_fn(|locale| {
					overrides
						.get(locale)
						.get(key)
						.or_else(|| statics.get(locale).get(key))
						.cloned()
						.unwrap_or_default()
				}),
				is_overridden: LocaleMap::from_fn(|locale| overrides.get(locale).contains_key(key)),
			});
		}

		debug!(
			rows = listing.rows.len(),
			sections = listing.sections.len(),
			"annotated listing built"
		);
		Ok(listing)
	}
}
