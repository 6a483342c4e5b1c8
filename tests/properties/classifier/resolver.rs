use crate::properties::strategies::chain_strategy;

use chain_narrator::services::classifier::{resolve, ChainRegistry, ClassificationError};
use proptest::{prelude::*, test_runner::Config};

proptest! {
	#![proptest_config(Config {
		failure_persistence: None,
		..Config::default()
	})]

	#[test]
	fn test_single_confirmation_is_returned(chain in chain_strategy()) {
		let registry = ChainRegistry::standard().unwrap();
		prop_assert_eq!(resolve(&[chain], &registry), Ok(chain));
	}

	#[test]
	fn test_earliest_in_registry_wins(
		confirmed in proptest::collection::vec(chain_strategy(), 1..6)
	) {
		let registry = ChainRegistry::standard().unwrap();
		let expected = *confirmed
			.iter()
			.min_by_key(|chain| registry.priority_of(**chain))
			.unwrap();

		let first = resolve(&confirmed, &registry);
		prop_assert_eq!(first.clone(), Ok(expected));

		let mut reversed = confirmed.clone();
		reversed.reverse();
		prop_assert_eq!(resolve(&reversed, &registry), first);
	}

	#[test]
	fn test_empty_is_undetermined(_seed in any::<u8>()) {
		let registry = ChainRegistry::standard().unwrap();
		prop_assert_eq!(resolve(&[], &registry), Err(ClassificationError::Undetermined));
	}
}
