//! Narrative generator.
//!
//! Turns a transaction payload into an explanation or a Mermaid diagram via a
//! single completion call.

use std::{sync::Arc, time::Instant};

use tracing::{debug, instrument};

use crate::{
	models::{ChainId, CompletionConfig, ExplanationStyle, TransactionPayload},
	services::narrative::{
		completion::{ChatCompletionRequest, ChatMessage, CompletionClient},
		error::NarrativeError,
		postprocess::{clean_diagram, clean_explanation},
		prompts,
	},
	utils::metrics::COMPLETION_DURATION,
};

/// What is being generated, with its sampling parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationKind {
	Summary,
	Detailed,
	Diagram,
}

impl GenerationKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Summary => "summary",
			Self::Detailed => "detailed",
			Self::Diagram => "diagram",
		}
	}

	pub fn temperature(&self) -> f32 {
		match self {
			Self::Summary | Self::Detailed => 0.3,
			Self::Diagram => 0.1,
		}
	}

	pub fn max_tokens(&self) -> u32 {
		match self {
			Self::Summary => 100,
			Self::Detailed => 200,
			Self::Diagram => 1000,
		}
	}

	pub fn presence_penalty(&self) -> f32 {
		match self {
			Self::Summary => -0.1,
			Self::Detailed | Self::Diagram => 0.1,
		}
	}
}

impl From<ExplanationStyle> for GenerationKind {
	fn from(style: ExplanationStyle) -> Self {
		match style {
			ExplanationStyle::Summary => Self::Summary,
			ExplanationStyle::Detailed => Self::Detailed,
		}
	}
}

/// Builds prompts, calls the completion service and cleans the result
#[derive(Clone)]
pub struct NarrativeGenerator {
	client: Arc<dyn CompletionClient>,
	summary_model: String,
	diagram_model: String,
}

impl NarrativeGenerator {
	pub fn new(
		client: Arc<dyn CompletionClient>,
		summary_model: impl Into<String>,
		diagram_model: impl Into<String>,
	) -> Self {
		Self {
			client,
			summary_model: summary_model.into(),
			diagram_model: diagram_model.into(),
		}
	}

	pub fn from_config(client: Arc<dyn CompletionClient>, config: &CompletionConfig) -> Self {
		Self::new(client, &config.summary_model, &config.diagram_model)
	}

	/// Prepares the completion request for `kind`
	pub fn build_request(
		&self,
		kind: GenerationKind,
		chain: ChainId,
		transaction: &TransactionPayload,
	) -> ChatCompletionRequest {
		let (model, system, user) = match kind {
			GenerationKind::Summary => (
				&self.summary_model,
				prompts::summary_system_prompt(chain),
				prompts::summary_user_prompt(transaction),
			),
			GenerationKind::Detailed => (
				&self.summary_model,
				prompts::detailed_system_prompt(chain),
				prompts::detailed_user_prompt(transaction),
			),
			GenerationKind::Diagram => (
				&self.diagram_model,
				prompts::diagram_system_prompt(chain),
				prompts::diagram_user_prompt(chain, transaction),
			),
		};
		ChatCompletionRequest {
			model: model.clone(),
			messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
			temperature: kind.temperature(),
			max_tokens: kind.max_tokens(),
			presence_penalty: kind.presence_penalty(),
		}
	}

	/// Explains `transaction` in the requested style
	#[instrument(skip(self, transaction))]
	pub async fn explain(
		&self,
		chain: ChainId,
		transaction: &TransactionPayload,
		style: ExplanationStyle,
	) -> Result<String, NarrativeError> {
		let raw = self.generate(style.into(), chain, transaction).await?;
		clean_explanation(&raw)
	}

	/// Draws `transaction` as a Mermaid sequence diagram
	#[instrument(skip(self, transaction))]
	pub async fn diagram(
		&self,
		chain: ChainId,
		transaction: &TransactionPayload,
	) -> Result<String, NarrativeError> {
		let raw = self
			.generate(GenerationKind::Diagram, chain, transaction)
			.await?;
		clean_diagram(&raw)
	}

	async fn generate(
		&self,
		kind: GenerationKind,
		chain: ChainId,
		transaction: &TransactionPayload,
	) -> Result<String, NarrativeError> {
		let request = self.build_request(kind, chain, transaction);
		let started = Instant::now();
		let result = self.client.complete(&request).await;
		let elapsed = started.elapsed();

		COMPLETION_DURATION
			.with_label_values(&[kind.as_str(), if result.is_ok() { "ok" } else { "error" }])
			.observe(elapsed.as_secs_f64());
		debug!(
			kind = kind.as_str(),
			model = %request.model,
			elapsed_ms = elapsed.as_millis() as u64,
			"completion finished"
		);
		result
	}
}
