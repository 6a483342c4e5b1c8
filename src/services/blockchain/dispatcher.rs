//! Chain dispatcher.
//!
//! Maps a resolved [`ChainId`] to the client that reads that chain. The
//! dispatcher is built once at startup and shared read-only between requests.

use std::{collections::BTreeMap, sync::Arc};

use reqwest_middleware::ClientWithMiddleware;

use crate::{
	models::{ChainId, ServiceConfig},
	services::blockchain::{
		AptosClient, BlockChainError, PolkadotClient, RippleClient, TransactionFetcher,
	},
};

/// Per-chain handler returned by the dispatcher
#[derive(Clone)]
pub struct ChainHandler {
	pub chain: ChainId,
	pub fetcher: Arc<dyn TransactionFetcher>,
}

/// Registry of transaction fetchers keyed by chain
#[derive(Clone, Default)]
pub struct ChainDispatcher {
	fetchers: BTreeMap<ChainId, Arc<dyn TransactionFetcher>>,
}

impl ChainDispatcher {
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a dispatcher with a client for every supported chain
	///
	/// # Errors
	/// Returns an error if a configured endpoint or header value is invalid.
	pub fn from_config(
		config: &ServiceConfig,
		client: Arc<ClientWithMiddleware>,
	) -> Result<Self, BlockChainError> {
		Ok(Self::new()
			.with_fetcher(Arc::new(AptosClient::new(
				client.clone(),
				&config.aptos_node_url,
			)?))
			.with_fetcher(Arc::new(RippleClient::new(
				client.clone(),
				&config.ripple_node_url,
			)?))
			.with_fetcher(Arc::new(PolkadotClient::new(
				client,
				&config.subscan_api_url,
				&config.subscan_api_key,
			)?)))
	}

	/// Registers a fetcher under the chain it reports, replacing any previous one
	pub fn register(&mut self, fetcher: Arc<dyn TransactionFetcher>) {
		self.fetchers.insert(fetcher.chain(), fetcher);
	}

	pub fn with_fetcher(mut self, fetcher: Arc<dyn TransactionFetcher>) -> Self {
		self.register(fetcher);
		self
	}

	/// Looks up the handler for a resolved chain
	///
	/// # Errors
	/// Returns `BlockChainError::UnsupportedChain` if no fetcher is registered.
	pub fn handler(&self, chain: ChainId) -> Result<ChainHandler, BlockChainError> {
		self.fetchers
			.get(&chain)
			.map(|fetcher| ChainHandler {
				chain,
				fetcher: fetcher.clone(),
			})
			.ok_or_else(|| BlockChainError::unsupported_chain(chain))
	}

	pub fn registered_chains(&self) -> Vec<ChainId> {
		self.fetchers.keys().copied().collect()
	}
}
