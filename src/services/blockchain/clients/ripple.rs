//! XRP Ledger client implementation.
//!
//! Uses the rippled `tx` method over HTTP. rippled reports lookup failures with
//! a 200 status and an `error` member, either at the top level or inside
//! `result`, so both places are inspected.

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::{
	models::{ChainId, TransactionPayload},
	services::blockchain::{
		client::TransactionFetcher,
		transports::{BlockchainTransport, HttpTransportClient},
		BlockChainError,
	},
};

/// Client implementation for rippled JSON-RPC nodes
#[derive(Clone)]
pub struct RippleClient<T: BlockchainTransport> {
	transport: T,
}

impl<T: BlockchainTransport> RippleClient<T> {
	/// Creates a new Ripple client instance with a specific transport client
	pub fn new_with_transport(transport: T) -> Self {
		Self { transport }
	}
}

impl RippleClient<HttpTransportClient> {
	/// Creates a new Ripple client for the node at `node_url`
	pub fn new(
		client: std::sync::Arc<reqwest_middleware::ClientWithMiddleware>,
		node_url: &str,
	) -> Result<Self, BlockChainError> {
		Ok(Self::new_with_transport(HttpTransportClient::new(
			client, node_url,
		)?))
	}
}

/// Builds the `tx` request body
pub fn tx_request(hash: &str) -> Value {
	json!({
		"method": "tx",
		"params": [{
			"transaction": hash,
			"binary": false,
		}],
	})
}

/// Finds an embedded error code in a rippled response
fn embedded_error(body: &Value) -> Option<String> {
	let error = body
		.get("error")
		.filter(|e| !e.is_null())
		.or_else(|| body.get("result").and_then(|r| r.get("error")))?;
	match error {
		Value::Null => None,
		Value::String(code) => Some(code.clone()),
		other => Some(other.to_string()),
	}
}

#[async_trait]
impl<T: BlockchainTransport> TransactionFetcher for RippleClient<T> {
	fn chain(&self) -> ChainId {
		ChainId::Ripple
	}

	async fn fetch_transaction(&self, hash: &str) -> Result<TransactionPayload, BlockChainError> {
		let response = self.transport.post("", &tx_request(hash)).await?;

		if !response.is_success() {
			return Err(BlockChainError::request_error(
				response.status,
				response.body,
			));
		}

		let mut body = response.json()?;
		if let Some(code) = embedded_error(&body) {
			return Err(BlockChainError::upstream_error(format!(
				"Failed to fetch transaction: {}",
				code
			)));
		}

		match body.get_mut("result").map(Value::take) {
			Some(result) if !result.is_null() => Ok(result),
			_ => Err(BlockChainError::upstream_error(
				"Failed to fetch transaction: missing result",
			)),
		}
	}
}
