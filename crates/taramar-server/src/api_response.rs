// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! API response helpers and macros.
//!
//! This module provides common response patterns for HTTP handlers:
//! - Error response helpers (bad_request, not_found, internal_error)
//! - Mapping of translation failures onto status codes (translations_error)
//! - Trait implementations for error response types (impl_api_error_response!)

use axum::{http::StatusCode, Json};
use serde::Serialize;
use taramar_server_translations::TranslationsError;

/// Trait for API error response types that have `error` and `message` fields.
pub trait ApiErrorResponse: Serialize + Send {
	fn new(error: impl Into<String>, message: impl Into<String>) -> Self;
}

/// Implement `ApiErrorResponse` for a struct with `error` and `message` fields.
///
/// # Example
///
/// ```ignore
/// impl_api_error_response!(TranslationErrorResponse);
/// ```
#[macro_export]
macro_rules! impl_api_error_response {
	($ty:ty) => {
		impl $crate::api_response::ApiErrorResponse for $ty {
			fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
				Self {
					error: error.into(),
					message: message.into(),
				}
			}
		}
	};
}

impl_api_error_response!(taramar_server_api::TranslationErrorResponse);

/// Create a 400 Bad Request response.
pub fn bad_request<T: ApiErrorResponse>(
	error: impl Into<String>,
	message: impl Into<String>,
) -> (StatusCode, Json<T>) {
	(StatusCode::BAD_REQUEST, Json(T::new(error, message)))
}

/// Create a 404 Not Found response.
pub fn not_found<T: ApiErrorResponse>(message: impl Into<String>) -> (StatusCode, Json<T>) {
	(StatusCode::NOT_FOUND, Json(T::new("not_found", message)))
}

/// Create a 500 Internal Server Error response.
pub fn internal_error<T: ApiErrorResponse>(message: impl Into<String>) -> (StatusCode, Json<T>) {
	(
		StatusCode::INTERNAL_SERVER_ERROR,
		Json(T::new("internal_error", message)),
	)
}

/// Map a translation failure onto its HTTP response.
///
/// Validation is the caller's fault (400), an unknown locale or missing
/// bundle means there is nothing to render (404). Store failures never leak
/// their cause to the client; only an unreachable store asks for a retry.
pub fn translations_error<T: ApiErrorResponse>(e: &TranslationsError) -> (StatusCode, Json<T>) {
	match e {
		TranslationsError::Validation(msg) => bad_request("bad_request", msg.clone()),
		TranslationsError::I18n(inner) if inner.is_not_found() => not_found(inner.to_string()),
		TranslationsError::I18n(inner) => {
			tracing::error!(error = %inner, "message bundle error");
			internal_error("Message bundles could not be loaded")
		}
		TranslationsError::Store(inner) if inner.is_unavailable() => {
			tracing::error!(error = %inner, "override store unreachable");
			internal_error("The translation store is unavailable, try again later")
		}
		TranslationsError::Store(inner) => {
			tracing::error!(error = %inner, "override store error");
			internal_error("The translation store could not complete the request")
		}
		TranslationsError::PartialWrite { .. } => {
			tracing::error!(error = %e, "partial override write");
			(
				StatusCode::INTERNAL_SERVER_ERROR,
				Json(T::new("partial_write", e.to_string())),
			)
		}
	}
}
