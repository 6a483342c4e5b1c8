//! Polkadot client implementation.
//!
//! Extrinsics are read from the Subscan indexer (`POST /api/scan/extrinsic`).
//! Subscan signals failures with a non-zero `code` and a `message`.

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

/// Header carrying the Subscan API key
pub const SUBSCAN_API_KEY_HEADER: &str = "X-API-Key";

/// Client implementation for the Subscan extrinsic API
#[derive(Clone)]
pub struct PolkadotClient<T: BlockchainTransport> {
	transport: T,
}

impl<T: BlockchainTransport> PolkadotClient<T> {
	/// Creates a new Polkadot client instance with a specific transport client
	pub fn new_with_transport(transport: T) -> Self {
		Self { transport }
	}
}

impl PolkadotClient<HttpTransportClient> {
	/// Creates a new Polkadot client for the Subscan endpoint at `api_url`
	///
	/// An empty `api_key` is still sent; Subscan then applies its anonymous rate limit.
	pub fn new(
		client: std::sync::Arc<reqwest_middleware::ClientWithMiddleware>,
		api_url: &str,
		api_key: &str,
	) -> Result<Self, BlockChainError> {
		let transport =
			HttpTransportClient::new(client, api_url)?.with_header(SUBSCAN_API_KEY_HEADER, api_key)?;
		Ok(Self::new_with_transport(transport))
	}
}

/// Builds the extrinsic lookup body
pub fn extrinsic_request(hash: &str) -> Value {
	json!({
		"events_limit": 0,
		"extrinsic_index": "",
		"focus": "",
		"hash": hash,
		"only_extrinsic_event": true,
	})
}

#[async_trait]
impl<T: BlockchainTransport> TransactionFetcher for PolkadotClient<T> {
	fn chain(&self) -> ChainId {
		ChainId::Polkadot
	}

	/// Returns `{"transaction": <extrinsic>}`, the form recognised by the
	/// Polkadot structural predicate.
	async fn fetch_transaction(&self, hash: &str) -> Result<TransactionPayload, BlockChainError> {
		let response = self.transport.post("", &extrinsic_request(hash)).await?;

		if !response.is_success() {
			return Err(BlockChainError::request_error(
				response.status,
				response.body,
			));
		}

		let mut body = response.json()?;
		let code = body.get("code").and_then(Value::as_i64);
		if code != Some(0) {
			let message = body
				.get("message")
				.and_then(Value::as_str)
				.unwrap_or("unknown error");
			return Err(BlockChainError::upstream_error(format!(
				"Subscan API error: {}",
				message
			)));
		}

		match body.get_mut("data").map(Value::take) {
			Some(data) if !data.is_null() => Ok(json!({ "transaction": data })),
			_ => Err(BlockChainError::transaction_not_found(hash)),
		}
	}
}
