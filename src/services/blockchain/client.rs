//! Core blockchain client interface.
//!
//! Every supported chain provides a client implementing [`TransactionFetcher`],
//! so the dispatcher and the verification fan-out can treat them uniformly.

use async_trait::async_trait;

use crate::{
	models::{ChainId, TransactionPayload},
	services::blockchain::BlockChainError,
};

/// Reads transactions by hash from a chain's public data source
#[async_trait]
pub trait TransactionFetcher: Send + Sync {
	/// Chain this fetcher reads from
	fn chain(&self) -> ChainId;

	/// Retrieves a transaction by hash
	///
	/// Performs exactly one outbound request. The payload is returned in the
	/// data source's native shape.
	///
	/// # Errors
	/// - `BlockChainError::RequestError` on a non-success HTTP status
	/// - `BlockChainError::UpstreamError` when the body carries an error code
	/// - `BlockChainError::TransactionNotFound` when the source does not know the hash
	/// - `BlockChainError::ConnectionError` when the source cannot be reached
	async fn fetch_transaction(&self, hash: &str) -> Result<TransactionPayload, BlockChainError>;

	/// Checks whether a transaction with this hash exists on the chain
	///
	/// Fails open: any error is reported as "not confirmed".
	async fn verify_transaction(&self, hash: &str) -> bool {
		match self.fetch_transaction(hash).await {
			Ok(_) => true,
			Err(e) => {
				tracing::debug!(chain = %self.chain(), error = %e, "Hash not confirmed");
				false
			}
		}
	}
}
