//! Narrative generation error types.

use thiserror::Error;

/// Failures while producing an explanation or diagram
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NarrativeError {
	/// The completion service could not be reached or timed out
	#[error("Completion request failed: {0}")]
	RequestFailed(String),

	/// The completion service answered with a non-success status
	#[error("Completion service error: {status} {message}")]
	ServiceError { status: u16, message: String },

	/// No usable text in the completion
	#[error("Invalid response from AI model")]
	InvalidResponse,

	/// The generated diagram failed validation
	#[error("Invalid diagram code generated")]
	InvalidArtifact,
}

impl From<reqwest_middleware::Error> for NarrativeError {
	fn from(err: reqwest_middleware::Error) -> Self {
		Self::RequestFailed(err.to_string())
	}
}

impl From<reqwest::Error> for NarrativeError {
	fn from(err: reqwest::Error) -> Self {
		Self::RequestFailed(err.to_string())
	}
}
