// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Server error types and HTTP response conversions.

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use serde::Serialize;
use taramar_common_i18n::I18nError;
use taramar_server_config::ConfigError;
use taramar_server_translations::TranslationsError;
use utoipa::ToSchema;

use crate::api_response::{self, internal_error};

/// Server error types for startup and request handling.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
	/// Database operation failed.
	#[error("Database error: {0}")]
	Db(#[from] sqlx::Error),

	/// Database error from taramar-server-db.
	#[error("Database error: {0}")]
	DbError(#[from] taramar_server_db::DbError),

	/// Configuration could not be loaded or is invalid.
	#[error("Configuration error: {0}")]
	Config(#[from] ConfigError),

	/// Message bundles could not be loaded.
	#[error("Message bundle error: {0}")]
	I18n(#[from] I18nError),

	/// Resolving or saving translations failed.
	#[error(transparent)]
	Translations(#[from] TranslationsError),
}

/// Error response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
}

crate::impl_api_error_response!(ErrorResponse);

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		let (status, error_response) = match &self {
			ServerError::Db(e) => {
				tracing::error!(error = %e, "database error");
				(
					StatusCode::INTERNAL_SERVER_ERROR,
					Json(ErrorResponse {
						error: "database_error".to_string(),
						message: "A database error occurred".to_string(),
					}),
				)
			}
			ServerError::DbError(e) => {
				tracing::error!(error = %e, "database error");
				(
					StatusCode::INTERNAL_SERVER_ERROR,
					Json(ErrorResponse {
						error: "database_error".to_string(),
						message: "A database error occurred".to_string(),
					}),
				)
			}
			ServerError::Config(e) => {
				tracing::error!(error = %e, "configuration error");
				internal_error("Server is misconfigured")
			}
			ServerError::I18n(e) if e.is_not_found() => api_response::not_found(e.to_string()),
			ServerError::I18n(e) => {
				tracing::error!(error = %e, "message bundle error");
				internal_error("Message bundles could not be loaded")
			}
			ServerError::Translations(e) => api_response::translations_error(e),
		};

		(status, error_response).into_response()
	}
}
