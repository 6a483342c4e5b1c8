//! Classification error types.

use thiserror::Error;

/// Reasons a classification request cannot produce a chain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassificationError {
	/// `type` or `input` was absent, null or blank
	#[error("Missing required fields")]
	MissingFields,

	/// A `json` input string that does not parse
	#[error("Invalid JSON format")]
	InvalidJson,

	/// `type` was neither `hash` nor `json`
	#[error("Unsupported input type: {0}")]
	UnsupportedInputType(String),

	/// No pattern, predicate or verification matched
	#[error("Unable to determine blockchain type")]
	Undetermined,

	#[error("Internal error: {0}")]
	Internal(String),
}

impl ClassificationError {
	/// Whether the caller can fix the request
	pub fn is_client_error(&self) -> bool {
		!matches!(self, Self::Internal(_))
	}
}
