// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Taramar translation server binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use taramar_common_i18n::{BundleSource, DirectoryBundles, EmbeddedBundles, MessageCatalog};
use taramar_server::{create_app_state, create_router, version};
use tower_http::{
	cors::{Any, CorsLayer},
	trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Taramar server - message bundles with editor overrides.
#[derive(Parser, Debug)]
#[command(
	name = "taramar-server",
	about = "Taramar translation override server",
	version
)]
struct Args {
	/// Config file to read instead of /etc/taramar/server.toml
	#[arg(long, env = "TARAMAR_SERVER_CONFIG")]
	config: Option<PathBuf>,

	/// Subcommands for taramar-server (e.g., `version`)
	#[command(subcommand)]
	command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Show version and build information
	Version,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	if let Some(Command::Version) = args.command {
		println!("{}", version::format_version_info());
		return Ok(());
	}

	// Load .env file if present
	dotenvy::dotenv().ok();

	let config = match args.config {
		Some(path) => taramar_server_config::load_config_with_file(path)?,
		None => taramar_server_config::load_config()?,
	};

	let filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| config.logging.level.clone().into());
	if config.logging.json {
		tracing_subscriber::registry()
			.with(filter)
			.with(tracing_subscriber::fmt::layer().json())
			.init();
	} else {
		tracing_subscriber::registry()
			.with(filter)
			.with(tracing_subscriber::fmt::layer())
			.init();
	}

	tracing::info!(
		host = %config.http.host,
		port = config.http.port,
		database = %config.database.url,
		default_locale = %config.i18n.default_locale,
		"starting taramar-server"
	);

	let source: Box<dyn BundleSource> = match &config.i18n.messages_dir {
		Some(dir) => Box::new(DirectoryBundles::new(dir.clone())),
		None => Box::new(EmbeddedBundles),
	};
	let catalog = Arc::new(MessageCatalog::load(source.as_ref())?);
	if !catalog.is_complete() {
		tracing::warn!("some locales have no message bundle and will answer 404");
	}

	let pool =
		taramar_server::db::create_pool(&config.database.url, config.database.max_connections)
			.await?;

	taramar_server::db::run_migrations(&pool).await?;

	let state = create_app_state(pool, catalog, &config);

	let app = create_router(state)
		.layer(TraceLayer::new_for_http())
		.layer(
			CorsLayer::new()
				.allow_origin(Any)
				.allow_methods(Any)
				.allow_headers(Any),
		);

	let addr = config.socket_addr();
	tracing::info!("listening on {}", addr);

	let listener = tokio::net::TcpListener::bind(&addr).await?;

	tokio::select! {
		result = axum::serve(listener, app) => {
			if let Err(e) = result {
				tracing::error!(error = %e, "Server error");
			}
		}
		_ = tokio::signal::ctrl_c() => {
			tracing::info!("Received shutdown signal");
		}
	}

	tracing::info!("Server shutdown complete");
	Ok(())
}
