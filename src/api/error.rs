//! API error mapping.
//!
//! Every service error is converted exactly once, here, into a status code and
//! a `{"error": string}` body.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use crate::{
	models::{AnalysisResult, UnknownChain},
	services::{
		blockchain::BlockChainError, classifier::ClassificationError, narrative::NarrativeError,
	},
};

const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// Error returned by every API handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
	status: StatusCode,
	message: String,
}

impl ApiError {
	pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
		Self {
			status,
			message: message.into(),
		}
	}

	pub fn bad_request(message: impl Into<String>) -> Self {
		Self::new(StatusCode::BAD_REQUEST, message)
	}

	pub fn internal() -> Self {
		Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
	}

	pub fn deadline_exceeded() -> Self {
		Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Request deadline exceeded")
	}

	pub fn message(&self) -> &str {
		&self.message
	}
}

impl std::fmt::Display for ApiError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.message)
	}
}

impl ResponseError for ApiError {
	fn status_code(&self) -> StatusCode {
		self.status
	}

	fn error_response(&self) -> HttpResponse {
		HttpResponse::build(self.status).json(AnalysisResult::failed(self.message.clone()))
	}
}

impl From<ClassificationError> for ApiError {
	fn from(err: ClassificationError) -> Self {
		if err.is_client_error() {
			Self::bad_request(err.to_string())
		} else {
			Self::internal()
		}
	}
}

impl From<BlockChainError> for ApiError {
	fn from(err: BlockChainError) -> Self {
		let status = match &err {
			BlockChainError::TransactionNotFound(_) => StatusCode::NOT_FOUND,
			BlockChainError::RequestError { status, .. } if *status < 500 => {
				StatusCode::BAD_REQUEST
			}
			BlockChainError::RequestError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
			BlockChainError::UpstreamError(_) | BlockChainError::UnsupportedChain(_) => {
				StatusCode::BAD_REQUEST
			}
			BlockChainError::ConnectionError(_) => StatusCode::INTERNAL_SERVER_ERROR,
			BlockChainError::InternalError(_) => return Self::internal(),
		};
		Self::new(status, err.to_string())
	}
}

impl From<NarrativeError> for ApiError {
	fn from(err: NarrativeError) -> Self {
		Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
	}
}

impl From<UnknownChain> for ApiError {
	fn from(err: UnknownChain) -> Self {
		Self::bad_request(err.to_string())
	}
}
