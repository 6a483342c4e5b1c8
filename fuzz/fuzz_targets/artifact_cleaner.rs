#![no_main]

use chain_narrator::services::narrative::{clean_diagram, clean_explanation, DIAGRAM_KEYWORD};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
	let Ok(input) = std::str::from_utf8(data) else {
		return;
	};

	if let Ok(diagram) = clean_diagram(input) {
		assert!(diagram.starts_with(DIAGRAM_KEYWORD));
		assert_eq!(diagram.trim(), diagram);
	}
	if let Ok(explanation) = clean_explanation(input) {
		assert!(!explanation.is_empty());
		assert_eq!(explanation.trim(), explanation);
	}
});
