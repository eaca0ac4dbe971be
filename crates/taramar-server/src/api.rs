// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTTP API state and router.

use axum::{
	routing::{get, put},
	Router,
};
use sqlx::sqlite::SqlitePool;
use std::sync::Arc;
use taramar_common_i18n::{Locale, MessageCatalog};
use taramar_server_config::ServerConfig;
use taramar_server_translations::TranslationService;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{api_docs::ApiDoc, db::TranslationOverrideRepository, routes};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
	pub pool: SqlitePool,
	pub catalog: Arc<MessageCatalog>,
	pub translations: TranslationService,
	/// Locale used when a request names none we support.
	pub default_locale: Locale,
}

/// Build application state backed by the SQLite override store.
pub fn create_app_state(
	pool: SqlitePool,
	catalog: Arc<MessageCatalog>,
	config: &ServerConfig,
) -> AppState {
	let store = Arc::new(TranslationOverrideRepository::new(pool.clone()));
	let translations = TranslationService::new(Arc::clone(&catalog), store);

	AppState {
		pool,
		catalog,
		translations,
		default_locale: config.i18n.default_locale,
	}
}

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(routes::health::health_check))
		.route("/api/locales", get(routes::messages::list_locales))
		.route("/api/messages", get(routes::messages::get_negotiated_messages))
		.route("/api/messages/{locale}", get(routes::messages::get_messages))
		.route("/api/translations", get(routes::translations::list_translations))
		.route(
			"/api/translations/save",
			put(routes::translations::save_translation),
		)
		.merge(SwaggerUi::new("/api").url("/api/openapi.json", ApiDoc::openapi()))
		.with_state(state)
}
