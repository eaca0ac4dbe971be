// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Health HTTP handler.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
	api::AppState,
	health::{self, HealthComponents, HealthResponse, HealthStatus},
	version::VersionInfo,
};

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "System is healthy or degraded", body = HealthResponse),
        (status = 503, description = "System is unhealthy", body = HealthResponse)
    ),
    tag = "health"
)]
/// GET /health - Database and message bundle health.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
	use tokio::time::Instant;

	let overall_start = Instant::now();

	let (database, bundles) = tokio::join!(health::check_database(&state.pool), async {
		health::check_bundles(&state.catalog)
	});

	let components = HealthComponents { bundles, database };

	let status = health::aggregate_status(&components);
	let duration_ms = overall_start.elapsed().as_millis() as u64;

	let response = HealthResponse {
		status,
		timestamp: chrono::Utc::now().to_rfc3339(),
		duration_ms,
		version: VersionInfo::current(),
		components,
	};

	let http_status = match status {
		HealthStatus::Healthy | HealthStatus::Degraded => StatusCode::OK,
		HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
	};

	(http_status, Json(response))
}
