//! Logging utilities for the application
//!
//! Logging is built on `tracing_subscriber`. Output goes to stdout by default,
//! or to a daily rolling file when `LOG_MODE=file` is set.
//!
//! Environment variables:
//! - `RUST_LOG`: full filter directive, takes precedence over `LOG_LEVEL`
//! - `LOG_LEVEL`: plain level (trace, debug, info, warn, error), default `info`
//! - `LOG_MODE`: `stdout` (default) or `file`
//! - `LOG_DATA_DIR`: directory for log files, default `logs/`
use std::{env, path::PathBuf};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

const LOG_FILE_PREFIX: &str = "chain-narrator.log";
const DEFAULT_LOG_DIR: &str = "logs/";

type SetupResult = Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>;

/// Where log output should be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
	Stdout,
	File(PathBuf),
}

impl LogTarget {
	/// Resolves the target from `LOG_MODE` and `LOG_DATA_DIR`
	pub fn from_env() -> Self {
		match env::var("LOG_MODE").map(|m| m.to_lowercase()).as_deref() {
			Ok("file") => Self::File(
				env::var("LOG_DATA_DIR")
					.map(PathBuf::from)
					.unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_DIR)),
			),
			_ => Self::Stdout,
		}
	}
}

/// Builds the level filter from `RUST_LOG`, then `LOG_LEVEL`, then `info`
fn build_filter() -> EnvFilter {
	EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		let level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
		EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
	})
}

/// Setup logging for the application
///
/// Installs the global subscriber for the target selected through the
/// environment.
pub fn setup_logging() -> SetupResult {
	match LogTarget::from_env() {
		LogTarget::Stdout => setup_logging_with_writer(std::io::stdout, true),
		LogTarget::File(dir) => {
			std::fs::create_dir_all(&dir)?;
			let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
			setup_logging_with_writer(appender, false)
		}
	}
}

/// Setup logging for the application with a custom writer
pub fn setup_logging_with_writer<W>(writer: W, ansi: bool) -> SetupResult
where
	W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
	tracing_subscriber::registry()
		.with(build_filter())
		.with(
			fmt::layer()
				.with_writer(writer)
				.event_format(
					fmt::format()
						.with_level(true)
						.with_target(true)
						.with_thread_ids(false)
						.with_thread_names(false)
						.with_ansi(ansi)
						.compact(),
				)
				.fmt_fields(fmt::format::PrettyFields::new()),
		)
		.try_init()?;
	Ok(())
}
