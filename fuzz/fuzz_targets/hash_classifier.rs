#![no_main]

use chain_narrator::services::classifier::ChainRegistry;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
	let Ok(input) = std::str::from_utf8(data) else {
		return;
	};
	let Ok(registry) = ChainRegistry::standard() else {
		return;
	};

	let matches = registry.match_hash(input);
	let ranks: Vec<usize> = matches
		.iter()
		.filter_map(|chain| registry.priority_of(*chain))
		.collect();
	assert_eq!(ranks.len(), matches.len());
	assert!(ranks.windows(2).all(|pair| pair[0] < pair[1]));
});
