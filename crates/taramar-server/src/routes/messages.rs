// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Merged message trees for page rendering.
//!
//! Every request resolves afresh against the override store, so a saved
//! override shows up on the next page load.

use axum::{
	extract::{Path, Query, State},
	http::{header, HeaderMap},
	response::IntoResponse,
	Json,
};
use taramar_common_i18n::{
	available_locales, is_supported, negotiate_accept_language, resolve_locale, Locale,
};

pub use taramar_server_api::messages::*;

use crate::{
	api::AppState,
	error::{ErrorResponse, ServerError},
};

/// Pick the locale for a request: a supported `?locale=` first, then
/// `Accept-Language`, then the configured default.
pub fn negotiate_locale(requested: Option<&str>, headers: &HeaderMap, default: Locale) -> Locale {
	let from_header = || {
		headers
			.get(header::ACCEPT_LANGUAGE)
			.and_then(|value| value.to_str().ok())
			.and_then(negotiate_accept_language)
	};

	let candidate = match requested.filter(|code| is_supported(code)) {
		Some(code) => Some(code),
		None => from_header().map(|locale| locale.as_str()),
	};

	resolve_locale(candidate, default.as_str())
}

async fn messages_for(state: &AppState, locale: Locale) -> Result<impl IntoResponse, ServerError> {
	let tree = state.translations.resolve_messages(locale).await?;

	let response = MessagesResponse {
		locale: locale.to_string(),
		title: locale.info().landing_title.to_string(),
		messages: tree.into(),
	};

	Ok(([(header::CONTENT_LANGUAGE, locale.as_str())], Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/messages/{locale}",
    params(
        ("locale" = String, Path, description = "Locale code (en, fr, nl)")
    ),
    responses(
        (status = 200, description = "Merged messages for the locale", body = MessagesResponse),
        (status = 404, description = "Unsupported locale or missing bundle", body = ErrorResponse),
        (status = 500, description = "Override store unavailable", body = ErrorResponse)
    ),
    tag = "messages"
)]
/// GET /api/messages/{locale} - Static bundle merged with overrides.
#[tracing::instrument(skip(state))]
pub async fn get_messages(
	State(state): State<AppState>,
	Path(locale): Path<String>,
) -> Result<impl IntoResponse, ServerError> {
	let locale: Locale = locale.parse()?;
	messages_for(&state, locale).await
}

#[utoipa::path(
    get,
    path = "/api/messages",
    params(MessagesQuery),
    responses(
        (status = 200, description = "Merged messages for the negotiated locale", body = MessagesResponse),
        (status = 404, description = "Bundle missing for the negotiated locale", body = ErrorResponse),
        (status = 500, description = "Override store unavailable", body = ErrorResponse)
    ),
    tag = "messages"
)]
/// GET /api/messages - Messages for the locale negotiated from the request.
#[tracing::instrument(skip(state, headers))]
pub async fn get_negotiated_messages(
	State(state): State<AppState>,
	Query(query): Query<MessagesQuery>,
	headers: HeaderMap,
) -> Result<impl IntoResponse, ServerError> {
	let locale = negotiate_locale(query.locale.as_deref(), &headers, state.default_locale);
	tracing::debug!(%locale, "negotiated locale");
	messages_for(&state, locale).await
}

#[utoipa::path(
    get,
    path = "/api/locales",
    responses(
        (status = 200, description = "Supported locales", body = LocalesResponse)
    ),
    tag = "messages"
)]
/// GET /api/locales - Supported locales and the server default.
pub async fn list_locales(State(state): State<AppState>) -> Json<LocalesResponse> {
	Json(LocalesResponse {
		default_locale: state.default_locale.to_string(),
		locales: available_locales().iter().map(LocaleResponse::from).collect(),
	})
}
