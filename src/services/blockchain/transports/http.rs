//! HTTP transport implementation for blockchain interactions.
//!
//! A thin wrapper over the shared middleware client that resolves paths
//! against a base URL and attaches per-source headers (such as API keys).

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest_middleware::ClientWithMiddleware;
use serde_json::Value;
use std::sync::Arc;
use url::Url;

use crate::services::blockchain::{
	transports::{BlockchainTransport, TransportResponse},
	BlockChainError,
};

/// Basic HTTP transport client for a single chain data source
///
/// The client is cheap to clone and can be shared across tasks.
#[derive(Clone, Debug)]
pub struct HttpTransportClient {
	/// HTTP client for making requests
	client: Arc<ClientWithMiddleware>,
	/// Base URL of the data source, without trailing slash
	base_url: String,
	/// Headers sent with every request
	headers: HeaderMap,
}

impl HttpTransportClient {
	/// Creates a new transport for `base_url`
	///
	/// # Errors
	/// Returns `BlockChainError::InternalError` if the URL does not parse.
	pub fn new(client: Arc<ClientWithMiddleware>, base_url: &str) -> Result<Self, BlockChainError> {
		Url::parse(base_url).map_err(|e| {
			BlockChainError::internal_error(format!("Invalid URL {}: {}", base_url, e))
		})?;

		let mut headers = HeaderMap::new();
		headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

		Ok(Self {
			client,
			base_url: base_url.trim_end_matches('/').to_string(),
			headers,
		})
	}

	/// Adds a header sent with every request
	pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, BlockChainError> {
		let name = HeaderName::from_bytes(name.as_bytes())
			.map_err(|e| BlockChainError::internal_error(format!("Invalid header name: {}", e)))?;
		let value = HeaderValue::from_str(value).map_err(|e| {
			BlockChainError::internal_error(format!("Invalid header value for {}: {}", name.as_str(), e))
		})?;
		self.headers.insert(name, value);
		Ok(self)
	}

	fn resolve(&self, path: &str) -> String {
		let path = path.trim_start_matches('/');
		if path.is_empty() {
			self.base_url.clone()
		} else {
			format!("{}/{}", self.base_url, path)
		}
	}

	async fn read(response: reqwest::Response) -> Result<TransportResponse, BlockChainError> {
		let status = response.status().as_u16();
		let body = response.text().await?;
		Ok(TransportResponse { status, body })
	}
}

#[async_trait]
impl BlockchainTransport for HttpTransportClient {
	fn get_current_url(&self) -> &str {
		&self.base_url
	}

	async fn get(&self, path: &str) -> Result<TransportResponse, BlockChainError> {
		let response = self
			.client
			.get(self.resolve(path))
			.headers(self.headers.clone())
			.send()
			.await?;
		Self::read(response).await
	}

	async fn post(&self, path: &str, body: &Value) -> Result<TransportResponse, BlockChainError> {
		let response = self
			.client
			.post(self.resolve(path))
			.headers(self.headers.clone())
			.json(body)
			.send()
			.await?;
		Self::read(response).await
	}
}
