//! Text-completion client.
//!
//! Talks to an OpenAI-compatible `chat/completions` endpoint. Every call is
//! attempted once; failures are returned to the caller as is.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest_middleware::ClientWithMiddleware;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{models::CompletionConfig, services::narrative::error::NarrativeError};

/// A role-tagged chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
	pub role: String,
	pub content: String,
}

impl ChatMessage {
	pub fn system(content: impl Into<String>) -> Self {
		Self {
			role: "system".to_string(),
			content: content.into(),
		}
	}

	pub fn user(content: impl Into<String>) -> Self {
		Self {
			role: "user".to_string(),
			content: content.into(),
		}
	}
}

/// Body of a chat completion request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatCompletionRequest {
	pub model: String,
	pub messages: Vec<ChatMessage>,
	pub temperature: f32,
	pub max_tokens: u32,
	pub presence_penalty: f32,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChatCompletionResponse {
	#[serde(default)]
	pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChatChoice {
	#[serde(default)]
	pub message: Option<ChatChoiceMessage>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChatChoiceMessage {
	#[serde(default)]
	pub content: Option<String>,
}

impl ChatCompletionResponse {
	/// Content of the first choice, if any
	pub fn into_text(self) -> Option<String> {
		self.choices
			.into_iter()
			.next()
			.and_then(|choice| choice.message)
			.and_then(|message| message.content)
	}
}

/// Produces a single completion for a prepared request
#[async_trait]
pub trait CompletionClient: Send + Sync {
	/// Returns the raw generated text.
	///
	/// # Errors
	/// `NarrativeError::InvalidResponse` when the service returns no choice or no
	/// content; transport and status failures otherwise.
	async fn complete(&self, request: &ChatCompletionRequest) -> Result<String, NarrativeError>;
}

/// Completion client for OpenAI-compatible HTTP APIs
#[derive(Clone)]
pub struct OpenAiCompletionClient {
	client: Arc<ClientWithMiddleware>,
	url: Url,
	api_key: String,
}

impl OpenAiCompletionClient {
	/// Creates a client posting to `{endpoint}/chat/completions`
	pub fn new(
		client: Arc<ClientWithMiddleware>,
		endpoint: &str,
		api_key: impl Into<String>,
	) -> Result<Self, NarrativeError> {
		let base = format!("{}/", endpoint.trim_end_matches('/'));
		let url = Url::parse(&base)
			.and_then(|base| base.join("chat/completions"))
			.map_err(|e| NarrativeError::RequestFailed(format!("invalid endpoint: {}", e)))?;
		Ok(Self {
			client,
			url,
			api_key: api_key.into(),
		})
	}

	pub fn from_config(
		client: Arc<ClientWithMiddleware>,
		config: &CompletionConfig,
	) -> Result<Self, NarrativeError> {
		Self::new(client, &config.endpoint, config.api_key.clone())
	}

	pub fn url(&self) -> &str {
		self.url.as_str()
	}
}

#[async_trait]
impl CompletionClient for OpenAiCompletionClient {
	async fn complete(&self, request: &ChatCompletionRequest) -> Result<String, NarrativeError> {
		let response = self
			.client
			.post(self.url.clone())
			.header(CONTENT_TYPE, "application/json")
			.header(AUTHORIZATION, format!("Bearer {}", self.api_key))
			.json(request)
			.send()
			.await?;

		let status = response.status();
		if !status.is_success() {
			let message = response.text().await.unwrap_or_default();
			return Err(NarrativeError::ServiceError {
				status: status.as_u16(),
				message,
			});
		}

		let body: ChatCompletionResponse = response
			.json()
			.await
			.map_err(|_| NarrativeError::InvalidResponse)?;
		body.into_text()
			.filter(|text| !text.trim().is_empty())
			.ok_or(NarrativeError::InvalidResponse)
	}
}
