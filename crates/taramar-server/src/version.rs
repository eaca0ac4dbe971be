// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Build information and version utilities for taramar-server.

use serde::Serialize;
use utoipa::ToSchema;

/// Version details reported by `/health` and the `version` subcommand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct VersionInfo {
	pub version: String,
	pub git_sha: String,
	pub platform: String,
}

impl VersionInfo {
	pub fn current() -> Self {
		Self {
			version: env!("CARGO_PKG_VERSION").to_string(),
			git_sha: option_env!("TARAMAR_GIT_SHA")
				.unwrap_or("unknown")
				.to_string(),
			platform: format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH),
		}
	}
}

/// Format version info for display.
pub fn format_version_info() -> String {
	let info = VersionInfo::current();

	format!(
		"taramar-server version: {}\n\
         Git SHA:                {}\n\
         Platform:               {}",
		info.version, info.git_sha, info.platform,
	)
}
