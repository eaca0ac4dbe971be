// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};
use taramar_common_i18n::LocaleInfo;

#[cfg(feature = "openapi")]
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct MessagesQuery {
	/// Requested locale code; unsupported codes fall back to the default.
	pub locale: Option<String>,
}

/// The merged message tree a page renders with.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct MessagesResponse {
	pub locale: String,
	/// Landing page title for the locale.
	pub title: String,
	#[cfg_attr(feature = "openapi", schema(value_type = Object))]
	pub messages: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct LocaleResponse {
	pub code: String,
	pub name: String,
	pub native_name: String,
}

impl From<&LocaleInfo> for LocaleResponse {
	fn from(info: &LocaleInfo) -> Self {
		Self {
			code: info.code.to_string(),
			name: info.name.to_string(),
			native_name: info.native_name.to_string(),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct LocalesResponse {
	pub default_locale: String,
	pub locales: Vec<LocaleResponse>,
}
