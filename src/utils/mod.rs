//! Utility modules for common functionality.
//!
//! - http: Shared outbound HTTP client with request logging
//! - logging: Logging setup
//! - metrics: Prometheus metrics and the metrics server

mod http;

pub mod logging;
pub mod metrics;

pub use self::http::{create_http_client, HttpClientConfig, RequestLogger};
