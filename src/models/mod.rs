//! Domain models and data structures for transaction narration.
//!
//! - `config`: Configuration loading and validation
//! - `core`: Core domain models (chains, requests, analysis results)

mod config;
mod core;

pub use config::{
	CompletionConfig, ConfigError, ConfigLoader, ServiceConfig, ServiceSettings,
	DEFAULT_API_ADDRESS, DEFAULT_APTOS_NODE_URL, DEFAULT_DIAGRAM_MODEL, DEFAULT_RIPPLE_NODE_URL,
	DEFAULT_SUBSCAN_API_URL, DEFAULT_SUMMARY_MODEL,
};

pub use core::{
	AnalysisResult, ChainId, ClassifyRequest, ClassifyResponse, ExplanationStyle, HashQuery,
	InputKind, TransactionBody, TransactionPayload, UnknownChain,
};
