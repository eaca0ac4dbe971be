// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! SQLite database setup for the translation server.
//!
//! This module re-exports the pool and repository from taramar-server-db and
//! provides server-specific migrations.

use sqlx::sqlite::SqlitePool;

use crate::error::ServerError;

pub use taramar_server_db::{
	create_pool, DbError, OverrideFilter, TranslationOverride, TranslationOverrideRepository,
	TranslationOverrideStore,
};

/// Run all database migrations.
///
/// Migrations are idempotent - safe to run multiple times.
#[tracing::instrument(skip(pool))]
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), ServerError> {
	let m1 = include_str!("../../migrations/001_translation_overrides.sql");
	for stmt in m1.split(';').filter(|s| !is_blank_statement(s)) {
		if let Err(e) = sqlx::query(stmt).execute(pool).await {
			let msg = e.to_string();
			if !msg.contains("already exists") {
				return Err(e.into());
			}
		}
	}

	tracing::debug!("database migrations applied");
	Ok(())
}

/// Whether a split fragment holds nothing but whitespace and `--` comments.
fn is_blank_statement(stmt: &str) -> bool {
	stmt.lines()
		.map(str::trim)
		.all(|line| line.is_empty() || line.starts_with("--"))
}

/// Round-trip a trivial query; used by the health check.
pub async fn ping(pool: &SqlitePool) -> Result<(), ServerError> {
	sqlx::query("SELECT 1").execute(pool).await?;
	Ok(())
}
