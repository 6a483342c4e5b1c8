//! Narrative generation.
//!
//! Produces natural-language explanations and Mermaid sequence diagrams of
//! transactions through an OpenAI-compatible completion service.

mod completion;
mod error;
mod generator;
mod postprocess;
mod prompts;

pub use completion::{
	ChatChoice, ChatChoiceMessage, ChatCompletionRequest, ChatCompletionResponse, ChatMessage,
	CompletionClient, OpenAiCompletionClient,
};
pub use error::NarrativeError;
pub use generator::{GenerationKind, NarrativeGenerator};
pub use postprocess::{clean_diagram, clean_explanation, DIAGRAM_KEYWORD};
