use crate::properties::strategies::{
	aptos_transaction_strategy, merge, polkadot_transaction_strategy,
	ripple_transaction_strategy,
};

use chain_narrator::{models::ChainId, services::classifier::ChainRegistry};
use proptest::{prelude::*, test_runner::Config};
use serde_json::{json, Value};

proptest! {
	#![proptest_config(Config {
		failure_persistence: None,
		..Config::default()
	})]

	#[test]
	fn test_each_shape_resolves_to_its_chain(
		aptos in aptos_transaction_strategy(),
		ripple in ripple_transaction_strategy(),
		polkadot in polkadot_transaction_strategy(),
	) {
		let registry = ChainRegistry::standard().unwrap();
		prop_assert_eq!(registry.match_json(&aptos), Some(ChainId::Aptos));
		prop_assert_eq!(registry.match_json(&ripple), Some(ChainId::Ripple));
		prop_assert_eq!(registry.match_json(&polkadot), Some(ChainId::Polkadot));
	}

	#[test]
	fn test_earlier_chain_wins_when_shapes_overlap(
		aptos in aptos_transaction_strategy(),
		ripple in ripple_transaction_strategy(),
		polkadot in polkadot_transaction_strategy(),
	) {
		let registry = ChainRegistry::standard().unwrap();
		prop_assert_eq!(
			registry.match_json(&merge(&ripple, &aptos)),
			Some(ChainId::Aptos)
		);
		prop_assert_eq!(
			registry.match_json(&merge(&polkadot, &ripple)),
			Some(ChainId::Ripple)
		);
		prop_assert_eq!(
			registry.match_json(&merge(&merge(&polkadot, &ripple), &aptos)),
			Some(ChainId::Aptos)
		);
	}

	#[test]
	fn test_unrelated_objects_are_undetermined(
		fields in proptest::collection::hash_map("[a-z_]{1,12}", "[a-zA-Z0-9]{0,20}", 0..8)
	) {
		let registry = ChainRegistry::standard().unwrap();
		let object: Value = json!(fields);
		prop_assert_eq!(registry.match_json(&object), None);
	}

	#[test]
	fn test_padding_does_not_change_outcome(
		ripple in ripple_transaction_strategy(),
		padding in proptest::collection::hash_map("pad_[a-z]{1,8}", any::<u32>(), 0..50),
	) {
		let registry = ChainRegistry::standard().unwrap();
		let padded = merge(&json!(padding), &ripple);
		prop_assert_eq!(registry.match_json(&padded), registry.match_json(&ripple));
	}
}
