//! Classification service.
//!
//! Resolves a chain from either a transaction hash (pattern match followed by
//! live verification) or a transaction body (structural predicates).

use std::{sync::Arc, time::Duration};

use serde_json::Value;
use tracing::{debug, info};

use crate::{
	models::{ChainId, ClassifyRequest, InputKind},
	services::{
		blockchain::ChainDispatcher,
		classifier::{
			error::ClassificationError,
			registry::ChainRegistry,
			resolver::resolve,
			verification::{confirmed_chains, verify_candidates},
		},
	},
	utils::metrics::CLASSIFICATIONS,
};

/// Resolves the chain of a hash or transaction body
#[derive(Clone)]
pub struct ChainClassifier {
	registry: ChainRegistry,
	dispatcher: Arc<ChainDispatcher>,
	verify_timeout: Duration,
}

impl ChainClassifier {
	pub fn new(
		registry: ChainRegistry,
		dispatcher: Arc<ChainDispatcher>,
		verify_timeout: Duration,
	) -> Self {
		Self {
			registry,
			dispatcher,
			verify_timeout,
		}
	}

	pub fn registry(&self) -> &ChainRegistry {
		&self.registry
	}

	/// Classifies a `POST /classify` request
	pub async fn classify(&self, request: &ClassifyRequest) -> Result<ChainId, ClassificationError> {
		let kind = request
			.kind
			.as_deref()
			.map(str::trim)
			.filter(|kind| !kind.is_empty())
			.ok_or(ClassificationError::MissingFields)?;
		let input = request
			.input
			.as_ref()
			.filter(|input| !is_blank(input))
			.ok_or(ClassificationError::MissingFields)?;
		let kind = parse_kind(kind)?;

		let result = match kind {
			InputKind::Hash => match input.as_str() {
				Some(hash) => self.classify_hash(hash).await,
				None => Err(ClassificationError::Undetermined),
			},
			InputKind::Json => self.classify_json(input),
		};

		let outcome = match &result {
			Ok(chain) => chain.as_str(),
			Err(ClassificationError::Undetermined) => "undetermined",
			Err(_) => "rejected",
		};
		CLASSIFICATIONS
			.with_label_values(&[kind.as_str(), outcome])
			.inc();
		result
	}

	/// Resolves a hash by pattern match and live verification.
	///
	/// Even a single pattern match is verified, so a well-formed hash that no
	/// data source knows is undetermined.
	pub async fn classify_hash(&self, hash: &str) -> Result<ChainId, ClassificationError> {
		let hash = hash.trim();
		let candidates = self.registry.match_hash(hash);
		if candidates.is_empty() {
			debug!("hash matched no chain pattern");
			return Err(ClassificationError::Undetermined);
		}

		let outcomes =
			verify_candidates(hash, &candidates, &self.dispatcher, self.verify_timeout).await;
		let chain = resolve(&confirmed_chains(&outcomes), &self.registry)?;
		info!(chain = %chain, "classified transaction hash");
		Ok(chain)
	}

	/// Resolves a transaction body by structural predicates.
	///
	/// A string input is parsed as JSON first; any other value is used as is.
	pub fn classify_json(&self, input: &Value) -> Result<ChainId, ClassificationError> {
		let parsed;
		let value = match input {
			Value::String(raw) => {
				parsed = serde_json::from_str::<Value>(raw)
					.map_err(|_| ClassificationError::InvalidJson)?;
				&parsed
			}
			other => other,
		};
		self.registry
			.match_json(value)
			.ok_or(ClassificationError::Undetermined)
	}
}

fn parse_kind(kind: &str) -> Result<InputKind, ClassificationError> {
	if kind.eq_ignore_ascii_case("hash") {
		Ok(InputKind::Hash)
	} else if kind.eq_ignore_ascii_case("json") {
		Ok(InputKind::Json)
	} else {
		Err(ClassificationError::UnsupportedInputType(kind.to_string()))
	}
}

fn is_blank(value: &Value) -> bool {
	match value {
		Value::Null => true,
		Value::String(s) => s.trim().is_empty(),
		_ => false,
	}
}
