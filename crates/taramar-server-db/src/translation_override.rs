// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Persistence for translation overrides.
//!
//! An override is an editor-supplied replacement for one flat key in one
//! locale's static bundle. `(locale, key)` is unique: saving the same pair
//! again replaces the value, and a pair with no record means "use the static
//! text".

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqlitePool, QueryBuilder, Row, Sqlite};
use taramar_common_i18n::Locale;

use crate::error::{DbError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationOverride {
	pub locale: Locale,
	pub key: String,
	pub value: String,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
}

/// Which overrides to return from [`TranslationOverrideStore::list_overrides`].
///
/// An empty `locales` list means every supported locale. Records stored under
/// any other locale code are never returned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideFilter {
	pub locales: Vec<Locale>,
	pub key: Option<String>,
}

impl OverrideFilter {
	pub fn all() -> Self {
		Self::default()
	}

	pub fn for_locale(locale: Locale) -> Self {
		Self {
			locales: vec![locale],
			key: None,
		}
	}

	pub fn with_key(mut self, key: impl Into<String>) -> Self {
		self.key = Some(key.into());
		self
	}

	fn effective_locales(&self) -> &[Locale] {
		if self.locales.is_empty() {
			&Locale::ALL
		} else {
			&self.locales
		}
	}
}

#[async_trait]
pub trait TranslationOverrideStore: Send + Sync {
	async fn list_overrides(&self, filter: &OverrideFilter) -> Result<Vec<TranslationOverride>>;
	async fn upsert_override(&self, locale: Locale, key: &str, value: &str) -> Result<()>;
	async fn delete_override(&self, locale: Locale, key: &str) -> Result<bool>;
}

#[derive(Clone)]
pub struct TranslationOverrideRepository {
	pool: SqlitePool,
}

impl TranslationOverrideRepository {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	/// List overrides matching `filter`, ordered by locale then key.
	#[tracing::instrument(skip(self))]
	pub async fn list_overrides(&self, filter: &OverrideFilter) -> Result<Vec<TranslationOverride>> {
		let mut query = QueryBuilder::<Sqlite>::new(
			"SELECT locale, key, value, created_at, updated_at FROM translation_overrides WHERE locale IN (",
		);
		let mut locales = query.separated(", ");
		for locale in filter.effective_locales() {
			locales.push_bind(locale.as_str());
		}
		locales.push_unseparated(")");

		if let Some(key) = &filter.key {
			query.push(" AND key = ");
			query.push_bind(key.as_str());
		}
		query.push(" ORDER BY locale, key");

		let rows = query.build().fetch_all(&self.pool).await?;
		let overrides = rows
			.iter()
			.map(row_to_override)
			.collect::<Result<Vec<_>>>()?;

		tracing::debug!(count = overrides.len(), "listed translation overrides");
		Ok(overrides)
	}

	#[tracing::instrument(skip(self))]
	pub async fn get_override(&self, locale: Locale, key: &str) -> Result<Option<TranslationOverride>> {
		let row = sqlx::query(
			"SELECT locale, key, value, created_at, updated_at FROM translation_overrides WHERE locale = ? AND key = ?",
		)
		.bind(locale.as_str())
		.bind(key)
		.fetch_optional(&self.pool)
		.await?;

		row.as_ref().map(row_to_override).transpose()
	}

	/// Insert or replace the override for `(locale, key)`.
	#[tracing::instrument(skip(self, value), fields(value_len = value.len()))]
	pub async fn upsert_override(&self, locale: Locale, key: &str, value: &str) -> Result<()> {
		let now = Utc::now().to_rfc3339_opts(SecondsFormat::Nanos, true);
		sqlx::query(
			r#"
			INSERT INTO translation_overrides (locale, key, value, created_at, updated_at)
			VALUES (?, ?, ?, ?, ?)
			ON CONFLICT(locale, key) DO UPDATE SET
				value = excluded.value,
				updated_at = excluded.updated_at
			"#,
		)
		.bind(locale.as_str())
		.bind(key)
		.bind(value)
		.bind(&now)
		.bind(&now)
		.execute(&self.pool)
		.await?;

		tracing::debug!("translation override saved");
		Ok(())
	}

	/// Remove the override for `(locale, key)`. Returns whether a record existed.
	#[tracing::instrument(skip(self))]
	pub async fn delete_override(&self, locale: Locale, key: &str) -> Result<bool> {
		let result = sqlx::query("DELETE FROM translation_overrides WHERE locale = ? AND key = ?")
			.bind(locale.as_str())
			.bind(key)
			.execute(&self.pool)
			.await?;

		let deleted = result.rows_affected() > 0;
		tracing::debug!(deleted, "translation override cleared");
		Ok(deleted)
	}
}

#[async_trait]
impl TranslationOverrideStore for TranslationOverrideRepository {
	async fn list_overrides(&self, filter: &OverrideFilter) -> Result<Vec<TranslationOverride>> {
		self.list_overrides(filter).await
	}

	async fn upsert_override(&self, locale: Locale, key: &str, value: &str) -> Result<()> {
		self.upsert_override(locale, key, value).await
	}

	async fn delete_override(&self, locale: Locale, key: &str) -> Result<bool> {
		self.delete_override(locale, key).await
	}
}

fn row_to_override(row: &sqlx::sqlite::SqliteRow) -> Result<TranslationOverride> {
	let locale_str: String = row.get("locale");
	let locale = locale_str
		.parse::<Locale>()
		.map_err(|e| DbError::Internal(format!("Invalid locale: {e}")))?;

	Ok(TranslationOverride {
		locale,
		key: row.get("key"),
		value: row.get("value"),
		created_at: parse_timestamp(row, "created_at")?,
		updated_at: parse_timestamp(row, "updated_at")?,
	})
}

fn parse_timestamp(row: &sqlx::sqlite::SqliteRow, column: &str) -> Result<DateTime<Utc>> {
	let raw: String = row.get(column);
	DateTime::parse_from_rfc3339(&raw)
		.map(|dt| dt.with_timezone(&Utc))
		.map_err(|e| DbError::Internal(format!("Invalid {column}: {e}")))
}
