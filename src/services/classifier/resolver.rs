//! Tie-break between confirmed chains.

use tracing::warn;

use crate::{
	models::ChainId,
	services::classifier::{error::ClassificationError, registry::ChainRegistry},
	utils::metrics::AMBIGUOUS_CLASSIFICATIONS,
};

/// Picks the resolved chain from the confirmed set.
///
/// An empty set is undetermined. With several confirmations the earliest chain
/// in registry order is chosen and the ambiguity is logged and counted.
pub fn resolve(
	confirmed: &[ChainId],
	registry: &ChainRegistry,
) -> Result<ChainId, ClassificationError> {
	let mut ranked: Vec<(usize, ChainId)> = confirmed
		.iter()
		.filter_map(|&chain| registry.priority_of(chain).map(|rank| (rank, chain)))
		.collect();
	ranked.sort_unstable();
	ranked.dedup();

	let (_, chosen) = *ranked.first().ok_or(ClassificationError::Undetermined)?;
	if ranked.len() > 1 {
		let all: Vec<&str> = ranked.iter().map(|(_, chain)| chain.as_str()).collect();
		warn!(
			chosen = %chosen,
			confirmed = ?all,
			"hash confirmed on more than one chain, using registry priority"
		);
		AMBIGUOUS_CLASSIFICATIONS.inc();
	}
	Ok(chosen)
}
