//! Service configuration.
//!
//! Secrets always come from the environment. Non-secret settings may also be
//! read from a JSON file, with environment variables taking precedence.

use serde::{Deserialize, Serialize};
use std::{fs, path::Path, time::Duration};
use url::Url;

use crate::models::config::{error::ConfigError, ConfigLoader};

pub const DEFAULT_APTOS_NODE_URL: &str = "https://fullnode.mainnet.aptoslabs.com/v1";
pub const DEFAULT_RIPPLE_NODE_URL: &str = "https://xrplcluster.com";
pub const DEFAULT_SUBSCAN_API_URL: &str = "https://polkadot.api.subscan.io/api/scan/extrinsic";
pub const DEFAULT_SUMMARY_MODEL: &str = "elyn/2.0-flash";
pub const DEFAULT_DIAGRAM_MODEL: &str = "elyn/4o-mini";
pub const DEFAULT_API_ADDRESS: &str = "127.0.0.1:3000";

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 15;
const DEFAULT_VERIFY_TIMEOUT_SECS: u64 = 10;
const DEFAULT_REQUEST_DEADLINE_SECS: u64 = 60;

/// Non-secret settings that may be provided through a JSON file
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceSettings {
	pub api_address: Option<String>,
	pub aptos_node_url: Option<String>,
	pub ripple_node_url: Option<String>,
	pub subscan_api_url: Option<String>,
	pub summary_model: Option<String>,
	pub diagram_model: Option<String>,
	pub http_timeout_secs: Option<u64>,
	pub verify_timeout_secs: Option<u64>,
	pub request_deadline_secs: Option<u64>,
}

impl ConfigLoader for ServiceSettings {
	fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
		if !Self::is_json_file(path) {
			return Err(ConfigError::file_error(format!(
				"settings file must be JSON: {}",
				path.display()
			)));
		}
		let contents = fs::read_to_string(path)?;
		let settings: Self = serde_json::from_str(&contents)?;
		settings.validate()?;
		Ok(settings)
	}

	fn validate(&self) -> Result<(), ConfigError> {
		for (name, value) in [
			("aptos_node_url", &self.aptos_node_url),
			("ripple_node_url", &self.ripple_node_url),
			("subscan_api_url", &self.subscan_api_url),
		] {
			if let Some(url) = value {
				validate_url(name, url)?;
			}
		}
		for (name, value) in [
			("http_timeout_secs", self.http_timeout_secs),
			("verify_timeout_secs", self.verify_timeout_secs),
			("request_deadline_secs", self.request_deadline_secs),
		] {
			if value == Some(0) {
				return Err(ConfigError::validation_error(format!(
					"{} must be greater than zero",
					name
				)));
			}
		}
		Ok(())
	}
}

/// Credentials and model selection for the text-completion service
#[derive(Clone, PartialEq)]
pub struct CompletionConfig {
	pub api_key: String,
	pub endpoint: String,
	pub summary_model: String,
	pub diagram_model: String,
}

impl std::fmt::Debug for CompletionConfig {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("CompletionConfig")
			.field("api_key", &"<redacted>")
			.field("endpoint", &self.endpoint)
			.field("summary_model", &self.summary_model)
			.field("diagram_model", &self.diagram_model)
			.finish()
	}
}

/// Fully resolved runtime configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
	pub api_address: String,
	pub completion: CompletionConfig,
	pub aptos_node_url: String,
	pub ripple_node_url: String,
	pub subscan_api_url: String,
	pub subscan_api_key: String,
	/// Per outbound call timeout
	pub http_timeout: Duration,
	/// Timeout applied to each verification call in the fan-out
	pub verify_timeout: Duration,
	/// Upper bound on the handling time of a single API request
	pub request_deadline: Duration,
}

impl ServiceConfig {
	/// Builds the configuration from process environment variables and optional file settings.
	pub fn from_env(settings: Option<ServiceSettings>) -> Result<Self, ConfigError> {
		Self::from_lookup(settings.unwrap_or_default(), |name| std::env::var(name).ok())
	}

	/// Builds the configuration with a custom variable lookup.
	///
	/// Empty values are treated as absent.
	pub fn from_lookup<F>(settings: ServiceSettings, lookup: F) -> Result<Self, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
		let require = |name: &str| get(name).ok_or_else(|| ConfigError::missing_variable(name));
		let seconds = |name: &str, file_value: Option<u64>, default: u64| -> Result<Duration, ConfigError> {
			let secs = match get(name) {
				Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
					ConfigError::validation_error(format!("Invalid value for {}: {}", name, e))
				})?,
				None => file_value.unwrap_or(default),
			};
			if secs == 0 {
				return Err(ConfigError::validation_error(format!(
					"{} must be greater than zero",
					name
				)));
			}
			Ok(Duration::from_secs(secs))
		};

		let api_key = require("ELYN_API_KEY")?;
		let endpoint = require("ELYN_API_ENDPOINT")?;

		let config = Self {
			api_address: get("API_ADDRESS")
				.or(settings.api_address)
				.unwrap_or_else(|| DEFAULT_API_ADDRESS.to_string()),
			completion: CompletionConfig {
				api_key,
				endpoint,
				summary_model: get("ELYN_SUMMARY_MODEL")
					.or(settings.summary_model)
					.unwrap_or_else(|| DEFAULT_SUMMARY_MODEL.to_string()),
				diagram_model: get("ELYN_DIAGRAM_MODEL")
					.or(settings.diagram_model)
					.unwrap_or_else(|| DEFAULT_DIAGRAM_MODEL.to_string()),
			},
			aptos_node_url: get("APTOS_NODE_URL")
				.or(settings.aptos_node_url)
				.unwrap_or_else(|| DEFAULT_APTOS_NODE_URL.to_string()),
			ripple_node_url: get("RIPPLE_NODE_URL")
				.or(settings.ripple_node_url)
				.unwrap_or_else(|| DEFAULT_RIPPLE_NODE_URL.to_string()),
			subscan_api_url: get("SUBSCAN_API_URL")
				.or(settings.subscan_api_url)
				.unwrap_or_else(|| DEFAULT_SUBSCAN_API_URL.to_string()),
			subscan_api_key: get("SUBSCAN_API_KEY").unwrap_or_default(),
			http_timeout: seconds(
				"HTTP_TIMEOUT_SECS",
				settings.http_timeout_secs,
				DEFAULT_HTTP_TIMEOUT_SECS,
			)?,
			verify_timeout: seconds(
				"VERIFY_TIMEOUT_SECS",
				settings.verify_timeout_secs,
				DEFAULT_VERIFY_TIMEOUT_SECS,
			)?,
			request_deadline: seconds(
				"REQUEST_DEADLINE_SECS",
				settings.request_deadline_secs,
				DEFAULT_REQUEST_DEADLINE_SECS,
			)?,
		};
		config.validate()?;
		Ok(config)
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		validate_url("ELYN_API_ENDPOINT", &self.completion.endpoint)?;
		validate_url("APTOS_NODE_URL", &self.aptos_node_url)?;
		validate_url("RIPPLE_NODE_URL", &self.ripple_node_url)?;
		validate_url("SUBSCAN_API_URL", &self.subscan_api_url)?;
		Ok(())
	}
}

fn validate_url(name: &str, value: &str) -> Result<(), ConfigError> {
	let url = Url::parse(value)
		.map_err(|e| ConfigError::validation_error(format!("{} is not a valid URL: {}", name, e)))?;
	match url.scheme() {
		"http" | "https" => Ok(()),
		scheme => Err(ConfigError::validation_error(format!(
			"{} must use http or https, got {}",
			name, scheme
		))),
	}
}
