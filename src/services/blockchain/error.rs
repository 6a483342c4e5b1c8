//! Blockchain error types and handling.
//!
//! Errors raised while reading transactions from chain data sources. Upstream
//! messages are preserved verbatim so they can be surfaced to API callers.

use log::{debug, error};

use crate::models::ChainId;

/// Represents possible errors that can occur while reading from a chain data source
#[derive(Debug, Clone, PartialEq)]
pub enum BlockChainError {
	/// The data source could not be reached, or the call timed out
	ConnectionError(String),

	/// The data source answered with a non-success HTTP status
	RequestError { status: u16, body: String },

	/// The data source answered successfully but embedded an error in the body
	UpstreamError(String),

	/// The data source does not know the requested transaction
	TransactionNotFound(String),

	/// No client is registered for the chain
	UnsupportedChain(ChainId),

	/// Internal errors within the blockchain client
	InternalError(String),
}

impl BlockChainError {
	/// Formats the error message based on the error type
	fn format_message(&self) -> String {
		match self {
			Self::ConnectionError(msg) => format!("Connection error: {}", msg),
			Self::RequestError { status, body } => {
				format!("Failed to fetch transaction: {} {}", status, body)
			}
			Self::UpstreamError(msg) => msg.clone(),
			Self::TransactionNotFound(_) => "Transaction not found".to_string(),
			Self::UnsupportedChain(chain) => format!("Unsupported chain: {}", chain),
			Self::InternalError(msg) => format!("Internal error: {}", msg),
		}
	}

	/// Creates a new connection error with logging
	pub fn connection_error(msg: impl Into<String>) -> Self {
		let error = Self::ConnectionError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new request error with logging
	pub fn request_error(status: u16, body: impl Into<String>) -> Self {
		let error = Self::RequestError {
			status,
			body: body.into(),
		};
		error!("{}", error.format_message());
		error
	}

	/// Creates a new upstream error with logging
	pub fn upstream_error(msg: impl Into<String>) -> Self {
		let error = Self::UpstreamError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new not-found error.
	///
	/// Misses are expected during verification, so they are only logged at debug level.
	pub fn transaction_not_found(hash: impl Into<String>) -> Self {
		let hash = hash.into();
		debug!("Transaction not found: {}", hash);
		Self::TransactionNotFound(hash)
	}

	/// Creates a new unsupported chain error with logging
	pub fn unsupported_chain(chain: ChainId) -> Self {
		let error = Self::UnsupportedChain(chain);
		error!("{}", error.format_message());
		error
	}

	/// Creates a new internal error with logging
	pub fn internal_error(msg: impl Into<String>) -> Self {
		let error = Self::InternalError(msg.into());
		error!("{}", error.format_message());
		error
	}
}

// Standard error trait implementations
impl std::fmt::Display for BlockChainError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl std::error::Error for BlockChainError {}

impl From<reqwest_middleware::Error> for BlockChainError {
	fn from(err: reqwest_middleware::Error) -> Self {
		Self::connection_error(err.to_string())
	}
}

impl From<reqwest::Error> for BlockChainError {
	fn from(err: reqwest::Error) -> Self {
		Self::connection_error(err.to_string())
	}
}
