// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use taramar_common_i18n::LocaleMap;
use taramar_server_translations::{AnnotatedListing, AnnotatedRow, SaveValues};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// One string per locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct LocaleStrings {
	pub en: String,
	pub fr: String,
	pub nl: String,
}

impl From<LocaleMap<String>> for LocaleStrings {
	fn from(map: LocaleMap<String>) -> Self {
		Self {
			en: map.en,
			fr: map.fr,
			nl: map.nl,
		}
	}
}

/// One flag per locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct LocaleFlags {
	pub en: bool,
	pub fr: bool,
	pub nl: bool,
}

impl From<LocaleMap<bool>> for LocaleFlags {
	fn from(map: LocaleMap<bool>) -> Self {
		Self {
			en: map.en,
			fr: map.fr,
			nl: map.nl,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct TranslationRowResponse {
	pub key: String,
	pub section: String,
	pub values: LocaleStrings,
	#[serde(rename = "isOverridden")]
	pub is_overridden: LocaleFlags,
}

impl From<AnnotatedRow> for TranslationRowResponse {
	fn from(row: AnnotatedRow) -> Self {
		Self {
			key: row.key,
			section: row.section,
			values: row.values.into(),
			is_overridden: row.is_overridden.into(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct TranslationListResponse {
	/// Section name to the sorted keys it contains.
	pub sections: BTreeMap<String, Vec<String>>,
	pub rows: Vec<TranslationRowResponse>,
}

impl From<AnnotatedListing> for TranslationListResponse {
	fn from(listing: AnnotatedListing) -> Self {
		Self {
			sections: listing.sections,
			rows: listing.rows.into_iter().map(Into::into).collect(),
		}
	}
}

/// Submitted values; omit a locale to leave it untouched, send `""` to
/// remove its override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct SaveTranslationValues {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub en: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub fr: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub nl: Option<String>,
}

impl From<SaveTranslationValues> for SaveValues {
	fn from(values: SaveTranslationValues) -> Self {
		SaveValues {
			en: values.en,
			fr: values.fr,
			nl: values.nl,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct SaveTranslationRequest {
	pub key: String,
	#[serde(default)]
	pub values: SaveTranslationValues,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct SaveTranslationResponse {
	pub ok: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct TranslationErrorResponse {
	pub error: String,
	pub message: String,
}
