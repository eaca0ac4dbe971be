// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! OpenAPI documentation for taramar-server.
//!
//! Access the interactive documentation at `/api` and the raw JSON document at
//! `/api/openapi.json`.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Taramar Translation API",
        version = "1.0.0",
        description = "Translation overrides for the Taramar site: merged message bundles for page rendering and the admin translation editor.",
        license(name = "Proprietary"),
        contact(
            name = "Geoffrey Huntley",
            email = "ghuntley@ghuntley.com",
            url = "https://ghuntley.com"
        )
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    tags(
        (name = "translations", description = "Admin translation editor: annotated key listing and override saving"),
        (name = "messages", description = "Merged message trees per locale for page rendering"),
        (name = "health", description = "Health checks and system status")
    ),
    paths(
        crate::routes::translations::list_translations,
        crate::routes::translations::save_translation,
        crate::routes::messages::get_messages,
        crate::routes::messages::get_negotiated_messages,
        crate::routes::messages::list_locales,
        crate::routes::health::health_check,
    ),
    components(schemas(
        taramar_server_api::LocaleStrings,
        taramar_server_api::LocaleFlags,
        taramar_server_api::TranslationRowResponse,
        taramar_server_api::TranslationListResponse,
        taramar_server_api::SaveTranslationValues,
        taramar_server_api::SaveTranslationRequest,
        taramar_server_api::SaveTranslationResponse,
        taramar_server_api::TranslationErrorResponse,
        taramar_server_api::MessagesResponse,
        taramar_server_api::LocaleResponse,
        taramar_server_api::LocalesResponse,
        crate::error::ErrorResponse,
        crate::health::HealthResponse,
        crate::health::HealthComponents,
        crate::health::HealthStatus,
        crate::health::DatabaseHealth,
        crate::health::BundlesHealth,
        crate::version::VersionInfo,
    ))
)]
pub struct ApiDoc;
