// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Taramar translation server.
//!
//! Serves the static message bundles merged with editor overrides stored in
//! SQLite, and the admin translation editor endpoints that manage those
//! overrides.

pub mod api;
pub mod api_docs;
pub mod api_response;
pub mod db;
pub mod error;
pub mod health;
pub mod routes;
pub mod version;

pub use api::{create_app_state, create_router, AppState};
pub use api_docs::ApiDoc;
pub use error::ServerError;
pub use taramar_server_config::ServerConfig;
