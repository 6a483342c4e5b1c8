//! Shared outbound HTTP client construction.
//!
//! Every outbound call (chain data sources and the completion service) goes
//! through a `reqwest_middleware` client carrying [`RequestLogger`]. Calls are
//! attempted exactly once; there is no retry middleware in the stack.

use async_trait::async_trait;
use http::Extensions;
use reqwest::{Request, Response};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, Middleware, Next};
use std::time::{Duration, Instant};

/// Connection settings for outbound HTTP clients
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
	/// Total time allowed for a single request, including reading the body
	pub timeout: Duration,
	/// Time allowed to establish the TCP/TLS connection
	pub connect_timeout: Duration,
	/// Maximum idle connections kept per host
	pub pool_max_idle_per_host: usize,
	/// How long idle connections are kept
	pub pool_idle_timeout: Duration,
}

impl Default for HttpClientConfig {
	fn default() -> Self {
		Self {
			timeout: Duration::from_secs(15),
			connect_timeout: Duration::from_secs(5),
			pool_max_idle_per_host: 10,
			pool_idle_timeout: Duration::from_secs(90),
		}
	}
}

impl HttpClientConfig {
	pub fn with_timeout(timeout: Duration) -> Self {
		Self {
			timeout,
			connect_timeout: timeout.min(Duration::from_secs(5)),
			..Self::default()
		}
	}
}

/// Middleware that records method, URL, status and latency of every outbound request
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestLogger;

#[async_trait]
impl Middleware for RequestLogger {
	async fn handle(
		&self,
		req: Request,
		extensions: &mut Extensions,
		next: Next<'_>,
	) -> reqwest_middleware::Result<Response> {
		let method = req.method().clone();
		// Query strings are never logged
		let mut url = req.url().clone();
		url.set_query(None);
		let started = Instant::now();

		let result = next.run(req, extensions).await;
		let elapsed_ms = started.elapsed().as_millis() as u64;

		match &result {
			Ok(response) => tracing::debug!(
				method = %method,
				url = %url,
				status = response.status().as_u16(),
				elapsed_ms,
				"Outbound request completed"
			),
			Err(e) => tracing::warn!(
				method = %method,
				url = %url,
				error = %e,
				elapsed_ms,
				"Outbound request failed"
			),
		}
		result
	}
}

/// Creates the shared outbound HTTP client
///
/// # Errors
/// Returns the `reqwest` error if the underlying client cannot be built
/// (for example when the TLS backend fails to initialise).
pub fn create_http_client(config: &HttpClientConfig) -> Result<ClientWithMiddleware, reqwest::Error> {
	let base_client = reqwest::Client::builder()
		.pool_max_idle_per_host(config.pool_max_idle_per_host)
		.pool_idle_timeout(Some(config.pool_idle_timeout))
		.connect_timeout(config.connect_timeout)
		.timeout(config.timeout)
		.build()?;

	Ok(ClientBuilder::new(base_client).with(RequestLogger).build())
}
