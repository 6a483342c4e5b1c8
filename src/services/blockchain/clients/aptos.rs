//! Aptos client implementation.
//!
//! Reads transactions from an Aptos full node REST API
//! (`GET /transactions/by_hash/{hash}`).

use async_trait::async_trait;

use crate::{
	models::{ChainId, TransactionPayload},
	services::blockchain::{
		client::TransactionFetcher,
		transports::{BlockchainTransport, HttpTransportClient},
		BlockChainError,
	},
};

/// Client implementation for the Aptos full node API
#[derive(Clone)]
pub struct AptosClient<T: BlockchainTransport> {
	transport: T,
}

impl<T: BlockchainTransport> AptosClient<T> {
	/// Creates a new Aptos client instance with a specific transport client
	pub fn new_with_transport(transport: T) -> Self {
		Self { transport }
	}
}

impl AptosClient<HttpTransportClient> {
	/// Creates a new Aptos client for the node at `node_url`
	pub fn new(
		client: std::sync::Arc<reqwest_middleware::ClientWithMiddleware>,
		node_url: &str,
	) -> Result<Self, BlockChainError> {
		Ok(Self::new_with_transport(HttpTransportClient::new(
			client, node_url,
		)?))
	}
}

#[async_trait]
impl<T: BlockchainTransport> TransactionFetcher for AptosClient<T> {
	fn chain(&self) -> ChainId {
		ChainId::Aptos
	}

	async fn fetch_transaction(&self, hash: &str) -> Result<TransactionPayload, BlockChainError> {
		let path = format!("transactions/by_hash/{}", urlencoding::encode(hash));
		let response = self.transport.get(&path).await?;

		if response.status == 404 {
			return Err(BlockChainError::transaction_not_found(hash));
		}
		if !response.is_success() {
			return Err(BlockChainError::request_error(
				response.status,
				response.body,
			));
		}

		response.json()
	}
}
