//! Cleaning and validation of generated text.

use lazy_static::lazy_static;
use regex::Regex;

use crate::services::narrative::error::NarrativeError;

/// Leading keyword every generated diagram must start with
pub const DIAGRAM_KEYWORD: &str = "sequenceDiagram";

lazy_static! {
	static ref META_LINE: Regex =
		Regex::new(r"(?i)^(Here's|This is|Generated|Creating|The).*?\n").unwrap();
	static ref EXPLANATION_META_LINE: Regex = Regex::new(
		r"(?i)^(Here's|Here is|This is|Generated|Creating|The)[^\n]*:[ \t]*\n"
	)
	.unwrap();
	static ref OPENING_FENCE: Regex = Regex::new(r"^```([A-Za-z0-9_+-]*)[ \t]*\n?").unwrap();
	static ref CLOSING_FENCE: Regex = Regex::new(r"```$").unwrap();
	static ref TRAILING_HEADING: Regex = Regex::new(r"###.*$").unwrap();
	static ref EXPLANATION_TAIL: Regex = Regex::new(r"(?s)Explanation:?.*$").unwrap();
}

/// Removes an opening fence and its info string.
///
/// A diagram glued to the fence (```` ```sequenceDiagram ````) keeps its keyword.
fn strip_opening_fence(text: &str) -> &str {
	let Some(caps) = OPENING_FENCE.captures(text) else {
		return text;
	};
	match caps.get(1) {
		Some(tag) if tag.as_str() == DIAGRAM_KEYWORD => &text[3..],
		_ => &text[caps[0].len()..],
	}
}

/// Strips a leading meta-commentary line and a wrapping code fence from an
/// explanation.
///
/// Only a first line ending in a colon counts as commentary, so a detailed
/// explanation opening with "The ..." keeps its first sentence.
///
/// # Errors
/// `NarrativeError::InvalidResponse` if nothing remains.
pub fn clean_explanation(raw: &str) -> Result<String, NarrativeError> {
	let text = raw.trim();
	let text = EXPLANATION_META_LINE.replace(text, "");
	let text = strip_opening_fence(text.trim_start());
	let text = CLOSING_FENCE.replace(text.trim_end(), "");
	let text = text.trim();
	if text.is_empty() {
		return Err(NarrativeError::InvalidResponse);
	}
	Ok(text.to_string())
}

/// Reduces generated text to bare Mermaid code and checks its leading keyword.
///
/// # Errors
/// `NarrativeError::InvalidResponse` for blank input,
/// `NarrativeError::InvalidArtifact` when the result is not a sequence diagram.
pub fn clean_diagram(raw: &str) -> Result<String, NarrativeError> {
	let text = raw.trim();
	if text.is_empty() {
		return Err(NarrativeError::InvalidResponse);
	}
	let text = META_LINE.replace(text, "");
	let text = strip_opening_fence(&text);
	// Trailing commentary may follow the closing fence, so it goes first.
	let text = EXPLANATION_TAIL.replace(text, "");
	let text = TRAILING_HEADING.replace(text.trim_end(), "");
	let text = CLOSING_FENCE.replace(text.trim_end(), "");
	let text = text.trim();

	if !text.starts_with(DIAGRAM_KEYWORD) {
		return Err(NarrativeError::InvalidArtifact);
	}
	Ok(text.to_string())
}
