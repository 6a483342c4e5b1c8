//! Network transport implementations for blockchain clients.
//!
//! Chain data sources in this service are plain HTTP endpoints: a REST node
//! (Aptos), a JSON-RPC style node (XRP Ledger) and an indexer API (Subscan).
//! The transport only moves bytes; request shapes and response interpretation
//! live in the chain clients.

mod http;

pub use self::http::HttpTransportClient;

use async_trait::async_trait;
use serde_json::Value;

use crate::services::blockchain::BlockChainError;

/// Status and raw body of an upstream response
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
	pub status: u16,
	pub body: String,
}

impl TransportResponse {
	pub fn new(status: u16, body: impl Into<String>) -> Self {
		Self {
			status,
			body: body.into(),
		}
	}

	/// Whether the status is in the 2xx range
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	/// Parses the body as JSON
	pub fn json(&self) -> Result<Value, BlockChainError> {
		serde_json::from_str(&self.body).map_err(|e| {
			BlockChainError::upstream_error(format!(
				"Failed to fetch transaction: invalid JSON response ({})",
				e
			))
		})
	}
}

/// Base trait for all blockchain transport clients
#[async_trait]
pub trait BlockchainTransport: Send + Sync {
	/// Base URL requests are resolved against
	fn get_current_url(&self) -> &str;

	/// Issues a GET request to `path`, relative to the base URL
	async fn get(&self, path: &str) -> Result<TransportResponse, BlockChainError>;

	/// Issues a POST request with a JSON body to `path`, relative to the base URL
	async fn post(&self, path: &str, body: &Value) -> Result<TransportResponse, BlockChainError>;
}
