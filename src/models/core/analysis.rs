use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::ChainId;

/// Raw transaction body as returned by a chain data source or supplied by a client.
///
/// The shape is chain specific and is only ever read.
pub type TransactionPayload = Value;

/// Kind of input submitted for classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
	Hash,
	Json,
}

impl InputKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Hash => "hash",
			Self::Json => "json",
		}
	}
}

/// Body of `POST /classify`.
///
/// Both fields are optional at the serde level so that missing values surface
/// as a validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassifyRequest {
	#[serde(rename = "type")]
	pub kind: Option<String>,
	pub input: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassifyResponse {
	pub chain: ChainId,
}

/// Wording of a generated explanation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExplanationStyle {
	/// Single line `[Type] | [From] → [To] | [Action]` summary
	#[default]
	Summary,
	/// Four to five line analysis
	Detailed,
}

/// Query string of the GET transaction and diagram routes
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HashQuery {
	pub hash: Option<String>,
	pub style: Option<ExplanationStyle>,
}

/// Body of the POST transaction and diagram routes
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionBody {
	pub transaction: Option<TransactionPayload>,
	pub style: Option<ExplanationStyle>,
}

/// Outcome of an analysis request.
///
/// Only the fields relevant to the route are populated; absent fields are
/// omitted from the serialized body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub transaction: Option<TransactionPayload>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub chain: Option<ChainId>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub explanation: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub diagram: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
}

impl AnalysisResult {
	pub fn explained(
		chain: ChainId,
		transaction: Option<TransactionPayload>,
		explanation: String,
	) -> Self {
		Self {
			transaction,
			chain: Some(chain),
			explanation: Some(explanation),
			..Default::default()
		}
	}

	pub fn diagrammed(chain: ChainId, diagram: String) -> Self {
		Self {
			chain: Some(chain),
			diagram: Some(diagram),
			..Default::default()
		}
	}

	/// Error body; carries nothing but the message
	pub fn failed(message: impl Into<String>) -> Self {
		Self {
			error: Some(message.into()),
			..Default::default()
		}
	}
}
