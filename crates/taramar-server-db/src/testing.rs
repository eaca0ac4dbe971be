// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Single-connection in-memory pool. Every `:memory:` connection is its own
/// database, so the pool must never open a second one or recycle the first.
pub async fn create_test_pool() -> SqlitePool {
	let options = SqliteConnectOptions::from_str(":memory:")
		.unwrap()
		.create_if_missing(true);

	SqlitePoolOptions::new()
		.max_connections(1)
		.idle_timeout(None)
		.max_lifetime(None)
		.connect_with(options)
		.await
		.unwrap()
}

pub async fn create_translation_overrides_table(pool: &SqlitePool) {
	sqlx::query(
		r#"
		CREATE TABLE IF NOT EXISTS translation_overrides (
			locale TEXT NOT NULL,
			key TEXT NOT NULL,
			value TEXT NOT NULL,
			created_at TEXT NOT NULL,
			updated_at TEXT NOT NULL,
			PRIMARY KEY (locale, key)
		)
		"#,
	)
	.execute(pool)
	.await
	.unwrap();
}

pub async fn create_translation_test_pool() -> SqlitePool {
	let pool = create_test_pool().await;
	create_translation_overrides_table(&pool).await;
	pool
}
