//! Chain Narrator service entry point.
//!
//! Parses the command line, loads the configuration, initializes the services
//! and runs the API server (and optionally the metrics server) until Ctrl+C.

use std::{
	env::{set_var, var},
	path::Path,
};

use anyhow::Context;
use chain_narrator::{
	api::create_api_server,
	bootstrap::initialize_services,
	models::{ConfigLoader, ServiceConfig, ServiceSettings},
	utils::{logging::setup_logging, metrics::server::create_metrics_server},
};
use clap::{Arg, Command};
use dotenvy::dotenv;
use tracing::{error, info};

/// Main entry point for the transaction narration service.
///
/// # Errors
/// Returns an error if the configuration is incomplete or a server cannot bind.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
	// Initialize command-line interface
	let matches = Command::new("chain-narrator")
		.version(env!("CARGO_PKG_VERSION"))
		.about(
			"Classifies Aptos, XRP Ledger and Polkadot transactions and explains them in plain \
			 language.",
		)
		.arg(
			Arg::new("config")
				.long("config")
				.help("Path to a JSON settings file")
				.value_name("PATH"),
		)
		.arg(
			Arg::new("address")
				.long("address")
				.help("Address to start the API server on (default: 127.0.0.1:3000)")
				.value_name("HOST:PORT"),
		)
		.arg(
			Arg::new("log-file")
				.long("log-file")
				.help("Write logs to file instead of stdout")
				.action(clap::ArgAction::SetTrue),
		)
		.arg(
			Arg::new("log-level")
				.long("log-level")
				.help("Set log level (trace, debug, info, warn, error)")
				.value_name("LEVEL"),
		)
		.arg(
			Arg::new("log-path")
				.long("log-path")
				.help("Path to store log files (default: logs/)")
				.value_name("PATH"),
		)
		.arg(
			Arg::new("metrics-address")
				.long("metrics-address")
				.help("Address to start the metrics server on (default: 127.0.0.1:8081)")
				.value_name("HOST:PORT"),
		)
		.arg(
			Arg::new("metrics")
				.long("metrics")
				.help("Enable metrics server")
				.action(clap::ArgAction::SetTrue),
		)
		.get_matches();

	// Load environment variables from .env file
	dotenv().ok();

	// Only apply CLI options if the corresponding environment variables are NOT already set
	if matches.get_flag("log-file") && var("LOG_MODE").is_err() {
		set_var("LOG_MODE", "file");
	}

	if let Some(level) = matches.get_one::<String>("log-level") {
		if var("LOG_LEVEL").is_err() {
			set_var("LOG_LEVEL", level);
		}
	}

	if let Some(path) = matches.get_one::<String>("log-path") {
		if var("LOG_DATA_DIR").is_err() {
			set_var("LOG_DATA_DIR", path);
		}
	}

	if let Some(address) = matches.get_one::<String>("address") {
		if var("API_ADDRESS").is_err() {
			set_var("API_ADDRESS", address);
		}
	}

	setup_logging().unwrap_or_else(|e| {
		eprintln!("Failed to setup logging: {}", e);
	});

	let settings = matches
		.get_one::<String>("config")
		.map(|path| ServiceSettings::load_from_path(Path::new(path)))
		.transpose()
		.context("Failed to load settings file")?;

	let config = ServiceConfig::from_env(settings).context("Invalid configuration")?;
	let state = initialize_services(&config)
		.map_err(|e| anyhow::anyhow!("Failed to initialize services: {}", e))?;

	let metrics_enabled =
		matches.get_flag("metrics") || var("METRICS_ENABLED").map(|v| v == "true").unwrap_or(false);

	let metrics_address = matches
		.get_one::<String>("metrics-address")
		.cloned()
		.unwrap_or_else(|| "127.0.0.1:8081".to_string());

	let metrics_server = if metrics_enabled {
		match create_metrics_server(metrics_address) {
			Ok(server) => Some(server),
			Err(e) => {
				error!("Failed to create metrics server: {}", e);
				None
			}
		}
	} else {
		info!("Metrics server disabled. Use --metrics flag or METRICS_ENABLED=true to enable");
		None
	};

	let api_server = create_api_server(state, &config.api_address)
		.with_context(|| format!("Failed to bind API server on {}", config.api_address))?;
	let api_handle = api_server.handle();
	let metrics_handle = metrics_server.as_ref().map(|server| server.handle());

	info!("Service started. Press Ctrl+C to shutdown");

	let metrics_future = async {
		match metrics_server {
			Some(server) => server.await,
			None => std::future::pending().await,
		}
	};

	tokio::select! {
		result = tokio::signal::ctrl_c() => {
			if let Err(e) = result {
				error!("Error waiting for Ctrl+C: {}", e);
			}
			info!("Shutdown signal received, stopping services...");
		}
		result = api_server => {
			if let Err(e) = result {
				error!("API server error: {}", e);
			}
			info!("API server stopped, shutting down...");
		}
		result = metrics_future => {
			if let Err(e) = result {
				error!("Metrics server error: {}", e);
			}
			info!("Metrics server stopped, shutting down...");
		}
	}

	api_handle.stop(true).await;
	if let Some(handle) = metrics_handle {
		handle.stop(true).await;
	}

	info!("Shutdown complete");
	Ok(())
}
