#![no_main]

use chain_narrator::services::classifier::ChainRegistry;
use libfuzzer_sys::fuzz_target;
use serde_json::Value;

fuzz_target!(|data: &[u8]| {
	let Ok(value) = serde_json::from_slice::<Value>(data) else {
		return;
	};
	let Ok(registry) = ChainRegistry::standard() else {
		return;
	};

	let first = registry
		.entries()
		.iter()
		.find(|entry| (entry.predicate)(&value))
		.map(|entry| entry.chain);
	assert_eq!(registry.match_json(&value), first);
});
