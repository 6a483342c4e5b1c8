//! Structural predicates over transaction JSON.
//!
//! Each predicate only inspects field presence and type. They are not mutually
//! exclusive; the registry order decides between overlapping matches.

use serde_json::Value;

/// Aptos REST transaction: `type` names a user transaction or entry function
/// payload, and `version` is a string.
pub fn has_aptos_structure(value: &Value) -> bool {
	let Some(object) = value.as_object() else {
		return false;
	};
	let type_matches = matches!(
		object.get("type").and_then(Value::as_str),
		Some("user_transaction") | Some("entry_function_payload")
	);
	type_matches && object.get("version").is_some_and(Value::is_string)
}

/// rippled transaction: string `TransactionType` and string `hash`.
pub fn has_ripple_structure(value: &Value) -> bool {
	value.get("TransactionType").is_some_and(Value::is_string)
		&& value.get("hash").is_some_and(Value::is_string)
}

/// Subscan extrinsic wrapped as `{"transaction": {"extrinsic_hash": "0x..."}}`.
pub fn has_polkadot_structure(value: &Value) -> bool {
	value
		.get("transaction")
		.filter(|tx| tx.is_object())
		.and_then(|tx| tx.get("extrinsic_hash"))
		.and_then(Value::as_str)
		.is_some_and(|hash| hash.starts_with("0x"))
}
