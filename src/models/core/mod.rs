mod analysis;
mod chain;

pub use analysis::{
	AnalysisResult, ClassifyRequest, ClassifyResponse, ExplanationStyle, HashQuery, InputKind,
	TransactionBody, TransactionPayload,
};
pub use chain::{ChainId, UnknownChain};
