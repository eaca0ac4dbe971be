// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale resolution logic.

use std::cmp::Ordering;

use crate::locale::{Locale, DEFAULT_LOCALE};

/// Resolve the effective locale from a requested code and the server default.
///
/// Resolution order (highest to lowest priority):
/// 1. Requested locale (if supported)
/// 2. Server default locale (if supported)
/// 3. Fallback to English ("en")
///
/// # Example
///
/// ```
/// use taramar_common_i18n::{resolve_locale, Locale};
///
/// assert_eq!(resolve_locale(Some("fr"), "en"), Locale::Fr);
/// assert_eq!(resolve_locale(None, "nl"), Locale::Nl);
/// assert_eq!(resolve_locale(Some("de"), "also_invalid"), Locale::En);
/// ```
pub fn resolve_locale(requested: Option<&str>, server_default: &str) -> Locale {
	if let Some(locale) = requested.and_then(|code| code.parse().ok()) {
		return locale;
	}

	server_default.parse().unwrap_or(DEFAULT_LOCALE)
}

/// Pick the best supported locale from an `Accept-Language` header value.
///
/// Tags are ranked by their `q` weight (default 1.0), ties keep header order.
/// Only the primary language subtag is compared, so `fr-BE` selects `fr`.
/// Returns `None` when no tag names a supported locale.
pub fn negotiate_accept_language(header: &str) -> Option<Locale> {
	let mut candidates: Vec<(f32, Locale)> = header
		.split(',')
		.filter_map(|part| {
			let mut pieces = part.trim().split(';');
			let tag = pieces.next()?.trim();
			let weight = pieces
				.find_map(|param| param.trim().strip_prefix("q="))
				.map(|q| q.trim().parse::<f32>().unwrap_or(0.0))
				.unwrap_or(1.0);
			if weight <= 0.0 {
				return None;
			}
			let primary = tag.split('-').next()?.to_ascii_lowercase();
			primary.parse::<Locale>().ok().map(|locale| (weight, locale))
		})
		.collect();

	candidates.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
	candidates.first().map(|(_, locale)| *locale)
}
