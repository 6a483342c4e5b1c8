//! Live verification of hash candidates.
//!
//! Every candidate is checked concurrently and the fan-out waits for all
//! checks to settle. A failing, slow or unregistered chain is reported as not
//! confirmed and never affects the other checks.

use std::time::Duration;

use futures::future::join_all;
use tracing::{debug, instrument};

use crate::{
	models::ChainId, services::blockchain::ChainDispatcher, utils::metrics::VERIFICATIONS,
};

/// Result of one existence check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationOutcome {
	pub chain: ChainId,
	pub confirmed: bool,
}

/// Checks `hash` against every candidate chain.
///
/// Outcomes are returned in candidate order, one per candidate.
#[instrument(skip(dispatcher, candidates), fields(candidates = candidates.len()))]
pub async fn verify_candidates(
	hash: &str,
	candidates: &[ChainId],
	dispatcher: &ChainDispatcher,
	per_call_timeout: Duration,
) -> Vec<VerificationOutcome> {
	let checks = candidates.iter().map(|&chain| async move {
		let confirmed = match dispatcher.handler(chain) {
			Ok(handler) => {
				match tokio::time::timeout(per_call_timeout, handler.fetcher.verify_transaction(hash))
					.await
				{
					Ok(confirmed) => confirmed,
					Err(_) => {
						debug!(chain = %chain, "verification timed out");
						false
					}
				}
			}
			Err(_) => false,
		};
		VERIFICATIONS
			.with_label_values(&[chain.as_str(), if confirmed { "true" } else { "false" }])
			.inc();
		VerificationOutcome { chain, confirmed }
	});

	join_all(checks).await
}

/// Chains that confirmed, in the order given
pub fn confirmed_chains(outcomes: &[VerificationOutcome]) -> Vec<ChainId> {
	outcomes
		.iter()
		.filter(|outcome| outcome.confirmed)
		.map(|outcome| outcome.chain)
		.collect()
}
