use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Supported blockchain networks.
///
/// The declaration order is also the registry priority order used when more
/// than one chain could claim the same input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainId {
	/// Aptos mainnet
	Aptos,
	/// XRP Ledger
	Ripple,
	/// Polkadot relay chain (read through Subscan)
	Polkadot,
}

impl ChainId {
	/// All chains, in priority order
	pub const ALL: [ChainId; 3] = [ChainId::Aptos, ChainId::Ripple, ChainId::Polkadot];

	/// Lowercase slug used in routes, metrics labels and JSON bodies
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Aptos => "aptos",
			Self::Ripple => "ripple",
			Self::Polkadot => "polkadot",
		}
	}

	/// Human readable network name used in prompts
	pub fn display_name(&self) -> &'static str {
		match self {
			Self::Aptos => "Aptos",
			Self::Ripple => "Ripple (XRP)",
			Self::Polkadot => "Polkadot",
		}
	}
}

impl fmt::Display for ChainId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Returned when a slug does not name a supported chain
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported chain: {0}")]
pub struct UnknownChain(pub String);

impl FromStr for ChainId {
	type Err = UnknownChain;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"aptos" => Ok(Self::Aptos),
			"ripple" | "xrp" => Ok(Self::Ripple),
			"polkadot" | "dot" => Ok(Self::Polkadot),
			_ => Err(UnknownChain(s.to_string())),
		}
	}
}
