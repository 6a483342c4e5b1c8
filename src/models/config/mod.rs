use std::path::Path;

mod error;
mod service_config;

pub use error::ConfigError;
pub use service_config::{
	CompletionConfig, ServiceConfig, ServiceSettings, DEFAULT_API_ADDRESS, DEFAULT_APTOS_NODE_URL,
	DEFAULT_DIAGRAM_MODEL, DEFAULT_RIPPLE_NODE_URL, DEFAULT_SUBSCAN_API_URL, DEFAULT_SUMMARY_MODEL,
};

/// Common interface for loading configuration files
pub trait ConfigLoader: Sized {
	fn load_from_path(path: &Path) -> Result<Self, ConfigError>;

	fn validate(&self) -> Result<(), ConfigError>;

	fn is_json_file(path: &Path) -> bool {
		path.extension()
			.map(|ext| ext.to_string_lossy().to_lowercase() == "json")
			.unwrap_or(false)
	}
}
