// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! # taramar-server-db
//!
//! Persistence layer for the Taramar translation server using SQLite via sqlx.
//!
//! ## Repository Pattern
//!
//! Each domain has two components:
//! - **`*Store` trait**: the interface callers depend on (e.g.
//!   [`TranslationOverrideStore`]), so services can be handed any backend
//! - **`*Repository` struct**: the SQLite implementation holding a `SqlitePool`
//!
//! ## Error Handling
//!
//! | Variant | When to use |
//! |---------|-------------|
//! | `Sqlx` | Let sqlx errors propagate via `?` for unexpected database errors |
//! | `Internal` | Invalid stored data (e.g., unparseable timestamp) |
//!
//! ## Testing
//!
//! Tests use a single-connection in-memory SQLite pool with the schema
//! created by hand; see the `testing` module.

mod error;
pub mod pool;
pub mod translation_override;

#[cfg(test)]
pub mod testing;

pub use error::{DbError, Result};
pub use pool::{create_pool, DEFAULT_MAX_CONNECTIONS};
pub use translation_override::{
	OverrideFilter, TranslationOverride, TranslationOverrideRepository, TranslationOverrideStore,
};
