use crate::properties::strategies::{
	hex64_strategy, malformed_hash_strategy, prefixed_hash_strategy,
};

use chain_narrator::{models::ChainId, services::classifier::ChainRegistry};
use proptest::{prelude::*, test_runner::Config};

proptest! {
	#![proptest_config(Config {
		failure_persistence: None,
		..Config::default()
	})]

	#[test]
	fn test_bare_hex_matches_only_ripple(hash in hex64_strategy()) {
		let registry = ChainRegistry::standard().unwrap();
		prop_assert_eq!(registry.match_hash(&hash), vec![ChainId::Ripple]);
	}

	#[test]
	fn test_prefixed_hex_matches_aptos_and_polkadot_in_order(hash in prefixed_hash_strategy()) {
		let registry = ChainRegistry::standard().unwrap();
		prop_assert_eq!(
			registry.match_hash(&hash),
			vec![ChainId::Aptos, ChainId::Polkadot]
		);
	}

	#[test]
	fn test_malformed_hash_matches_nothing(hash in malformed_hash_strategy()) {
		let registry = ChainRegistry::standard().unwrap();
		prop_assert!(registry.match_hash(&hash).is_empty());
	}

	#[test]
	fn test_match_hash_is_total(input in ".*") {
		let registry = ChainRegistry::standard().unwrap();
		let matched = registry.match_hash(&input);
		prop_assert!(matched.len() <= registry.entries().len());
	}

	#[test]
	fn test_surrounding_whitespace_is_ignored(
		hash in hex64_strategy(),
		left in "[ \t\n]{0,3}",
		right in "[ \t\n]{0,3}",
	) {
		let registry = ChainRegistry::standard().unwrap();
		prop_assert_eq!(
			registry.match_hash(&format!("{}{}{}", left, hash, right)),
			registry.match_hash(&hash)
		);
	}
}
