// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Static message bundles.
//!
//! Bundles are read-only at runtime: they change only by redeploying. A
//! [`MessageCatalog`] reads every supported locale once from a
//! [`BundleSource`] and hands out shared references afterwards.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::I18nError;
use crate::locale::Locale;
use crate::tree::MessageTree;

/// Where static bundles come from.
pub trait BundleSource: Send + Sync {
	fn name(&self) -> &'static str;

	/// Load and parse the bundle for `locale`.
	///
	/// Fails with [`I18nError::BundleNotFound`] when the source has no bundle
	/// for the locale.
	fn load(&self, locale: Locale) -> Result<MessageTree, I18nError>;
}

/// Bundles compiled into the binary from this crate's `messages/` directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedBundles;

impl BundleSource for EmbeddedBundles {
	fn name(&self) -> &'static str {
		"embedded"
	}

	fn load(&self, locale: Locale) -> Result<MessageTree, I18nError> {
		let text = match locale {
			Locale::En => include_str!("../messages/en.json"),
			Locale::Fr => include_str!("../messages/fr.json"),
			Locale::Nl => include_str!("../messages/nl.json"),
		};
		parse_bundle(locale, text)
	}
}

/// Bundles read from `<dir>/<locale>.json` on disk.
#[derive(Debug, Clone)]
pub struct DirectoryBundles {
	dir: PathBuf,
}

impl DirectoryBundles {
	pub fn new(dir: impl Into<PathBuf>) -> Self {
		Self { dir: dir.into() }
	}

	pub fn dir(&self) -> &Path {
		&self.dir
	}

	fn path_for(&self, locale: Locale) -> PathBuf {
		self.dir.join(format!("{locale}.json"))
	}
}

impl BundleSource for DirectoryBundles {
	fn name(&self) -> &'static str {
		"directory"
	}

	fn load(&self, locale: Locale) -> Result<MessageTree, I18nError> {
		let path = self.path_for(locale);
		if !path.exists() {
			return Err(I18nError::BundleNotFound(locale));
		}

		debug!(path = %path.display(), %locale, "reading message bundle");
		let text = std::fs::read_to_string(&path)
			.map_err(|source| I18nError::BundleRead { path, source })?;
		parse_bundle(locale, &text)
	}
}

fn parse_bundle(locale: Locale, text: &str) -> Result<MessageTree, I18nError> {
	serde_json::from_str(text).map_err(|e| I18nError::BundleParse {
		locale,
		message: e.to_string(),
	})
}

/// The parsed static bundles, one per available locale.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
	bundles: BTreeMap<Locale, MessageTree>,
}

impl MessageCatalog {
	/// Load every supported locale from `source`.
	///
	/// A missing bundle is tolerated here and reported as
	/// [`I18nError::BundleNotFound`] whenever that locale is requested; a
	/// malformed bundle is a deployment error and fails immediately.
	pub fn load(source: &dyn BundleSource) -> Result<Self, I18nError> {
		let mut bundles = BTreeMap::new();
		for locale in Locale::ALL {
			match source.load(locale) {
				Ok(tree) => {
					bundles.insert(locale, tree);
				}
				Err(I18nError::BundleNotFound(_)) => {
					warn!(source = source.name(), %locale, "message bundle missing");
				}
				Err(e) => return Err(e),
			}
		}

		info!(
			source = source.name(),
			locales = bundles.len(),
			"message catalog loaded"
		);
		Ok(Self { bundles })
	}

	pub fn from_bundles(bundles: impl IntoIterator<Item = (Locale, MessageTree)>) -> Self {
		Self {
			bundles: bundles.into_iter().collect(),
		}
	}

	/// The static bundle for `locale`.
	pub fn bundle(&self, locale: Locale) -> Result<&MessageTree, I18nError> {
		self.bundles
			.get(&locale)
			.ok_or(I18nError::BundleNotFound(locale))
	}

	pub fn locales(&self) -> impl Iterator<Item = Locale> + '_ {
		self.bundles.keys().copied()
	}

	/// Whether every supported locale has a bundle.
	pub fn is_complete(&self) -> bool {
		Locale::ALL
			.iter()
			.all(|locale| self.bundles.contains_key(locale))
	}
}
