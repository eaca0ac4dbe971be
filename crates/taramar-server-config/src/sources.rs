// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: environment variables and TOML files.

use std::collections::BTreeMap;
use std::path::PathBuf;

use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::ServerConfigLayer;
use crate::sections::{DatabaseConfigLayer, HttpConfigLayer, I18nConfigLayer, LoggingConfigLayer};

/// Path of the system-wide config file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/taramar/server.toml";

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<ServerConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(ServerConfigLayer::default())
	}
}

/// TOML file configuration source. A missing file is an empty layer.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new(SYSTEM_CONFIG_PATH)
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(ServerConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: ServerConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: `TARAMAR_SERVER_<FIELD>`. Empty values count as unset.
#[derive(Default)]
pub struct EnvSource {
	vars: Option<BTreeMap<String, String>>,
}

impl EnvSource {
	/// Read from the process environment.
	pub fn process() -> Self {
		Self::default()
	}

	/// Read from a fixed set of variables instead of the process environment.
	pub fn from_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<String>,
		V: Into<String>,
	{
		Self {
			vars: Some(
				vars.into_iter()
					.map(|(k, v)| (k.into(), v.into()))
					.collect(),
			),
		}
	}

	fn var(&self, name: &str) -> Option<String> {
		let value = match &self.vars {
			Some(vars) => vars.get(name).cloned(),
			None => std::env::var(name).ok(),
		};
		value.filter(|s| !s.is_empty())
	}

	fn bool(&self, name: &str) -> Option<bool> {
		self.var(name)
			.map(|v| v.eq_ignore_ascii_case("true") || v == "1")
	}

	fn parsed<T: std::str::FromStr>(&self, name: &str, kind: &str) -> Result<Option<T>, ConfigError> {
		match self.var(name) {
			Some(v) => v.parse().map(Some).map_err(|_| ConfigError::InvalidValue {
				key: name.to_string(),
				message: format!("invalid {kind} value '{v}'"),
			}),
			None => Ok(None),
		}
	}
}

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading environment variables");
		Ok(ServerConfigLayer {
			http: Some(HttpConfigLayer {
				host: self.var("TARAMAR_SERVER_HOST"),
				port: self.parsed("TARAMAR_SERVER_PORT", "u16")?,
			}),
			database: Some(DatabaseConfigLayer {
				url: self.var("TARAMAR_SERVER_DATABASE_URL"),
				max_connections: self.parsed("TARAMAR_SERVER_DATABASE_MAX_CONNECTIONS", "u32")?,
			}),
			logging: Some(LoggingConfigLayer {
				level: self.var("TARAMAR_SERVER_LOG_LEVEL"),
				json: self.bool("TARAMAR_SERVER_LOG_JSON"),
			}),
			i18n: Some(I18nConfigLayer {
				default_locale: self.var("TARAMAR_SERVER_DEFAULT_LOCALE"),
				messages_dir: self.var("TARAMAR_SERVER_MESSAGES_DIR").map(PathBuf::from),
			}),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use tempfile::tempdir;

	#[test]
	fn test_precedence_ordering() {
		assert!(Precedence::Environment > Precedence::ConfigFile);
		assert!(Precedence::ConfigFile > Precedence::Defaults);
	}

	#[test]
	fn test_defaults_source_returns_empty_layer() {
		let layer = DefaultsSource.load().unwrap();
		assert!(layer.http.is_none());
		assert!(layer.database.is_none());
	}

	#[test]
	fn test_toml_source_missing_file_returns_empty() {
		let layer = TomlSource::new("/nonexistent/server.toml").load().unwrap();
		assert!(layer.http.is_none());
	}

	#[test]
	fn test_toml_source_reports_parse_errors() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("server.toml");
		std::fs::write(&path, "[http\nport = ").unwrap();

		let err = TomlSource::new(&path).load().unwrap_err();
		assert!(matches!(err, ConfigError::TomlParse { .. }));
	}

	#[test]
	fn test_env_source_reads_vars() {
		let layer = EnvSource::from_vars([
			("TARAMAR_SERVER_PORT", "8088"),
			("TARAMAR_SERVER_DEFAULT_LOCALE", "fr"),
			("TARAMAR_SERVER_MESSAGES_DIR", "/srv/messages"),
			("TARAMAR_SERVER_LOG_JSON", "1"),
			("TARAMAR_SERVER_HOST", ""),
		])
		.load()
		.unwrap();

		let http = layer.http.unwrap();
		assert_eq!(http.port, Some(8088));
		assert!(http.host.is_none());
		assert_eq!(layer.logging.unwrap().json, Some(true));
		let i18n = layer.i18n.unwrap();
		assert_eq!(i18n.default_locale.as_deref(), Some("fr"));
		assert_eq!(i18n.messages_dir, Some(PathBuf::from("/srv/messages")));
	}

	#[test]
	fn test_env_source_rejects_bad_port() {
		let err = EnvSource::from_vars([("TARAMAR_SERVER_PORT", "eighty")])
			.load()
			.unwrap_err();
		match err {
			ConfigError::InvalidValue { key, message } => {
				assert_eq!(key, "TARAMAR_SERVER_PORT");
				assert!(message.contains("eighty"));
			}
			other => panic!("unexpected error: {other:?}"),
		}
	}
}
