// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Admin translation editor HTTP handlers.
//!
//! - List every editable key with its effective value per locale
//! - Save (upsert or clear) overrides for one key

use axum::{
	extract::{rejection::JsonRejection, State},
	response::IntoResponse,
	Json,
};

pub use taramar_server_api::translations::*;

use crate::{
	api::AppState,
	api_response::{bad_request, translations_error},
};

#[utoipa::path(
    get,
    path = "/api/translations",
    responses(
        (status = 200, description = "Every key with effective values and override flags", body = TranslationListResponse),
        (status = 500, description = "Override store unavailable", body = TranslationErrorResponse)
    ),
    tag = "translations"
)]
/// GET /api/translations - Annotated key listing for the editor.
#[tracing::instrument(skip(state))]
pub async fn list_translations(State(state): State<AppState>) -> impl IntoResponse {
	match state.translations.list_all_keys_annotated().await {
		Ok(listing) => {
			tracing::debug!(keys = listing.rows.len(), "listed translation keys");
			Json(TranslationListResponse::from(listing)).into_response()
		}
		Err(e) => translations_error::<TranslationErrorResponse>(&e).into_response(),
	}
}

#[utoipa::path(
    put,
    path = "/api/translations/save",
    request_body = SaveTranslationRequest,
    responses(
        (status = 200, description = "Overrides saved", body = SaveTranslationResponse),
        (status = 400, description = "Missing key or malformed body", body = TranslationErrorResponse),
        (status = 500, description = "Store unavailable or some locales failed to save", body = TranslationErrorResponse)
    ),
    tag = "translations"
)]
/// PUT /api/translations/save - Upsert or clear overrides for one key.
#[tracing::instrument(skip(state, payload))]
pub async fn save_translation(
	State(state): State<AppState>,
	payload: Result<Json<SaveTranslationRequest>, JsonRejection>,
) -> impl IntoResponse {
	let Json(request) = match payload {
		Ok(payload) => payload,
		Err(rejection) => {
			return bad_request::<TranslationErrorResponse>("bad_request", rejection.body_text())
				.into_response();
		}
	};

	match state
		.translations
		.save_override(&request.key, &request.values.into())
		.await
	{
		Ok(outcome) => {
			tracing::info!(
				key = %outcome.key,
				locales = outcome.actions.len(),
				"translation overrides saved"
			);
			Json(SaveTranslationResponse { ok: true }).into_response()
		}
		Err(e) => translations_error::<TranslationErrorResponse>(&e).into_response(),
	}
}
