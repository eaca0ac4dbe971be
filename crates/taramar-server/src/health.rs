// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Health check types and component checking logic.

use serde::Serialize;
use sqlx::sqlite::SqlitePool;
use std::time::Duration;
use taramar_common_i18n::{Locale, MessageCatalog};
use tokio::time::{timeout, Instant};
use utoipa::ToSchema;

use crate::version::VersionInfo;

/// Health status for components and overall system.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
	Healthy,
	Degraded,
	Unhealthy,
}

/// Database component health.
#[derive(Debug, Serialize, ToSchema)]
pub struct DatabaseHealth {
	pub status: HealthStatus,
	pub latency_ms: u64,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
}

/// Static message bundle health.
#[derive(Debug, Serialize, ToSchema)]
pub struct BundlesHealth {
	pub status: HealthStatus,
	pub loaded: Vec<String>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub missing: Vec<String>,
}

/// Health of all components.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthComponents {
	pub bundles: BundlesHealth,
	pub database: DatabaseHealth,
}

/// Complete health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
	pub status: HealthStatus,
	pub timestamp: String,
	pub duration_ms: u64,
	pub version: VersionInfo,
	pub components: HealthComponents,
}

const DB_CHECK_TIMEOUT: Duration = Duration::from_millis(500);

/// Check database health.
pub async fn check_database(pool: &SqlitePool) -> DatabaseHealth {
	let start = Instant::now();

	let result = timeout(DB_CHECK_TIMEOUT, crate::db::ping(pool)).await;
	let latency_ms = start.elapsed().as_millis() as u64;

	match result {
		Ok(Ok(())) => DatabaseHealth {
			status: HealthStatus::Healthy,
			latency_ms,
			error: None,
		},
		Ok(Err(e)) => DatabaseHealth {
			status: HealthStatus::Unhealthy,
			latency_ms,
			error: Some(e.to_string()),
		},
		Err(_) => DatabaseHealth {
			status: HealthStatus::Unhealthy,
			latency_ms,
			error: Some("database health check timed out".to_string()),
		},
	}
}

/// Check which locales have a static bundle.
///
/// Pages for a locale without a bundle answer 404, the rest of the site keeps
/// working, so a partial catalog is degraded rather than unhealthy.
pub fn check_bundles(catalog: &MessageCatalog) -> BundlesHealth {
	let (loaded, missing): (Vec<Locale>, Vec<Locale>) = Locale::ALL
		.into_iter()
		.partition(|locale| catalog.bundle(*locale).is_ok());

	let status = if missing.is_empty() {
		HealthStatus::Healthy
	} else if loaded.is_empty() {
		HealthStatus::Unhealthy
	} else {
		HealthStatus::Degraded
	};

	BundlesHealth {
		status,
		loaded: loaded.iter().map(Locale::to_string).collect(),
		missing: missing.iter().map(Locale::to_string).collect(),
	}
}

/// Combine component statuses: any unhealthy wins, then degraded.
pub fn aggregate_status(components: &HealthComponents) -> HealthStatus {
	let statuses = [components.database.status, components.bundles.status];

	if statuses.contains(&HealthStatus::Unhealthy) {
		HealthStatus::Unhealthy
	} else if statuses.contains(&HealthStatus::Degraded) {
		HealthStatus::Degraded
	} else {
		HealthStatus::Healthy
	}
}
