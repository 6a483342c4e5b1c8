//! Bootstrap module for wiring the service graph.
//!
//! Builds every long-lived handle once at startup and hands them to the API
//! layer as an explicit [`AppState`]:
//!
//! # Services
//! - Shared HTTP client with request logging
//! - `ChainDispatcher`: per-chain transaction fetchers
//! - `ChainClassifier`: hash and JSON chain resolution
//! - `NarrativeGenerator`: explanations and diagrams via the completion service

use std::{error::Error, sync::Arc};

use crate::{
	api::AppState,
	models::ServiceConfig,
	services::{
		blockchain::ChainDispatcher,
		classifier::{ChainClassifier, ChainRegistry},
		narrative::{CompletionClient, NarrativeGenerator, OpenAiCompletionClient},
	},
	utils::{create_http_client, HttpClientConfig},
};

/// Type alias for handling ServiceResult
pub type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;

/// Initializes all services from the resolved configuration.
///
/// # Errors
/// Returns an error if the HTTP client cannot be built or a configured
/// endpoint is rejected by a client.
pub fn initialize_services(config: &ServiceConfig) -> Result<AppState> {
	let http_client = Arc::new(create_http_client(&HttpClientConfig::with_timeout(
		config.http_timeout,
	))?);

	let dispatcher = Arc::new(ChainDispatcher::from_config(config, http_client.clone())?);
	let completion: Arc<dyn CompletionClient> = Arc::new(OpenAiCompletionClient::from_config(
		http_client,
		&config.completion,
	)?);

	initialize_with(config, dispatcher, completion)
}

/// Initializes services around externally provided clients.
pub fn initialize_with(
	config: &ServiceConfig,
	dispatcher: Arc<ChainDispatcher>,
	completion: Arc<dyn CompletionClient>,
) -> Result<AppState> {
	let classifier = ChainClassifier::new(
		ChainRegistry::standard()?,
		dispatcher.clone(),
		config.verify_timeout,
	);
	let narrator = NarrativeGenerator::from_config(completion, &config.completion);

	Ok(AppState {
		classifier,
		dispatcher,
		narrator,
		request_deadline: config.request_deadline,
	})
}
