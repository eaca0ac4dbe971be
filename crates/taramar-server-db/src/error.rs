// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

#[derive(Debug, thiserror::Error)]
pub enum DbError {
	#[error("Database error: {0}")]
	Sqlx(#[from] sqlx::Error),

	#[error("Internal: {0}")]
	Internal(String),
}

impl DbError {
	/// Whether the store could not be reached at all, as opposed to a
	/// malformed or rejected statement.
	pub fn is_unavailable(&self) -> bool {
		matches!(
			self,
			DbError::Sqlx(
				sqlx::Error::PoolTimedOut
					| sqlx::Error::PoolClosed
					| sqlx::Error::Io(_)
					| sqlx::Error::WorkerCrashed
			)
		)
	}
}

pub type Result<T> = std::result::Result<T, DbError>;
