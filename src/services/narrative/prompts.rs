//! Prompt material per chain and generation kind.

use serde_json::Value;

use crate::models::ChainId;

/// Single-line summary system prompt
pub fn summary_system_prompt(chain: ChainId) -> String {
	format!(
		"You analyse {name} transactions and reply with a one-line summary in the form:\n\
		\n\
		[Type] | [From] → [To] | [Action] ([Amount] if applicable)\n\
		\n\
		Rules:\n\
		- Reply with exactly one line\n\
		- Separate sections with '|' and show direction with '→'\n\
		- Shorten addresses to their first characters followed by '...'\n\
		- Include an amount only for transfers\n\
		- Leave out technical jargon and describe the main action\n\
		\n\
		{examples}",
		name = chain.display_name(),
		examples = summary_examples(chain),
	)
}

fn summary_examples(chain: ChainId) -> &'static str {
	match chain {
		ChainId::Aptos => {
			"Examples:\n\
			\"Transfer | 0x1a2b... → 0x3c4d... | Sent 12.5 APT\"\n\
			\"Swap | 0x1a2b... → 0x1::dex | Swapped 100 USDC for 11 APT\""
		}
		ChainId::Ripple => {
			"Examples:\n\
			\"Payment | r9LqNeG6... → rPT1Sjz... | Sent 1000 XRP\"\n\
			\"TrustSet | r9LqNeG6... → rPT1Sjz... | Set trust line for USD\"\n\
			\"OfferCreate | r9LqNeG6... | Created offer to exchange XRP/USD\""
		}
		ChainId::Polkadot => {
			"Examples:\n\
			\"Transfer | 15oF4uVJ... → 14E5nqKA... | Sent 25 DOT\"\n\
			\"Staking | 15oF4uVJ... | Bonded 100 DOT\""
		}
	}
}

/// Four to five line analysis system prompt
pub fn detailed_system_prompt(chain: ChainId) -> String {
	format!(
		"You are a {name} transaction analyst. Explain the transaction in four to five short lines:\n\
		1. What kind of transaction it is and which module or pallet handled it\n\
		2. Who sent it and who or what received it\n\
		3. Amounts, assets and fees involved\n\
		4. Whether it succeeded\n\
		5. Anything unusual worth noting\n\
		\n\
		Use plain language and avoid restating raw field names.",
		name = chain.display_name(),
	)
}

/// Mermaid sequence diagram system prompt
pub fn diagram_system_prompt(chain: ChainId) -> String {
	format!(
		"You draw Mermaid sequence diagrams of {name} transactions. Show the flow between the \
		sender, the contracts or modules invoked and the recipients, including {focus}.\n\
		\n\
		Rules:\n\
		- Start the output with 'sequenceDiagram'\n\
		- Output only Mermaid code without code fences or commentary\n\
		- Use short participant aliases and shortened addresses\n\
		- Add a note for fees and the final status",
		name = chain.display_name(),
		focus = diagram_focus(chain),
	)
}

fn diagram_focus(chain: ChainId) -> &'static str {
	match chain {
		ChainId::Aptos => "entry function calls, coin transfers and emitted events",
		ChainId::Ripple => "payments, trust lines, offers and ledger effects",
		ChainId::Polkadot => "extrinsic calls, balance transfers and runtime events",
	}
}

pub fn summary_user_prompt(transaction: &Value) -> String {
	format!("Analyze and provide a one-line summary: {}", transaction)
}

pub fn detailed_user_prompt(transaction: &Value) -> String {
	format!("Analyze this transaction: {}", transaction)
}

pub fn diagram_user_prompt(chain: ChainId, transaction: &Value) -> String {
	format!(
		"Create a Mermaid sequence diagram for this {} transaction: {}",
		chain.display_name(),
		transaction
	)
}
