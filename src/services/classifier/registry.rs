//! Ordered chain registry.
//!
//! The registry is the single source of truth for chain priority: hash matches
//! are reported in registry order, the first structural predicate to match
//! wins, and tie-breaks between confirmed chains follow the same order.

use regex::{Regex, RegexBuilder};
use serde_json::Value;

use crate::{
	models::ChainId,
	services::classifier::{
		error::ClassificationError,
		predicates::{has_aptos_structure, has_polkadot_structure, has_ripple_structure},
	},
};

/// Structural test over a parsed transaction
pub type StructuralPredicate = fn(&Value) -> bool;

/// Hash pattern and structural predicate for one chain
#[derive(Debug, Clone)]
pub struct ChainPattern {
	pub chain: ChainId,
	pub hash_pattern: Regex,
	pub predicate: StructuralPredicate,
}

impl ChainPattern {
	/// Creates an entry with a case-insensitive hash pattern
	///
	/// # Errors
	/// Returns `ClassificationError::Internal` if the pattern does not compile.
	pub fn new(
		chain: ChainId,
		hash_pattern: &str,
		predicate: StructuralPredicate,
	) -> Result<Self, ClassificationError> {
		let hash_pattern = RegexBuilder::new(hash_pattern)
			.case_insensitive(true)
			.build()
			.map_err(|e| {
				ClassificationError::Internal(format!("invalid hash pattern for {}: {}", chain, e))
			})?;
		Ok(Self {
			chain,
			hash_pattern,
			predicate,
		})
	}
}

/// Ordered sequence of chain entries, highest priority first
#[derive(Debug, Clone)]
pub struct ChainRegistry {
	entries: Vec<ChainPattern>,
}

impl ChainRegistry {
	/// Builds a registry from entries already in priority order
	pub fn new(entries: Vec<ChainPattern>) -> Self {
		Self { entries }
	}

	/// The supported chains in priority order: Aptos, Ripple, Polkadot
	pub fn standard() -> Result<Self, ClassificationError> {
		Ok(Self::new(vec![
			ChainPattern::new(ChainId::Aptos, r"^0x[a-f0-9]{64}$", has_aptos_structure)?,
			ChainPattern::new(ChainId::Ripple, r"^[A-F0-9]{64}$", has_ripple_structure)?,
			ChainPattern::new(ChainId::Polkadot, r"^0x[a-f0-9]{64}$", has_polkadot_structure)?,
		]))
	}

	pub fn entries(&self) -> &[ChainPattern] {
		&self.entries
	}

	/// Every chain whose hash pattern accepts `hash`, in registry order.
	///
	/// Surrounding whitespace is ignored. Never fails.
	pub fn match_hash(&self, hash: &str) -> Vec<ChainId> {
		let hash = hash.trim();
		self.entries
			.iter()
			.filter(|entry| entry.hash_pattern.is_match(hash))
			.map(|entry| entry.chain)
			.collect()
	}

	/// The first chain whose structural predicate accepts `value`
	pub fn match_json(&self, value: &Value) -> Option<ChainId> {
		self.entries
			.iter()
			.find(|entry| (entry.predicate)(value))
			.map(|entry| entry.chain)
	}

	/// Position of `chain` in the registry, if registered
	pub fn priority_of(&self, chain: ChainId) -> Option<usize> {
		self.entries.iter().position(|entry| entry.chain == chain)
	}
}
