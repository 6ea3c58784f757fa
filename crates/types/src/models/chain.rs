//! Chain family identifiers

use serde::{Deserialize, Serialize};

/// Family of chains sharing one address format and wallet behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainType {
	Evm,
	Sol,
	Tron,
	Near,
	Aptos,
}

impl std::fmt::Display for ChainType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let s = match self {
			ChainType::Evm => "evm",
			ChainType::Sol => "sol",
			ChainType::Tron => "tron",
			ChainType::Near => "near",
			ChainType::Aptos => "aptos",
		};
		write!(f, "{}", s)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_chain_type_serde() {
		assert_eq!(serde_json::to_string(&ChainType::Evm).unwrap(), "\"evm\"");
		assert_eq!(serde_json::to_string(&ChainType::Sol).unwrap(), "\"sol\"");

		let parsed: ChainType = serde_json::from_str("\"tron\"").unwrap();
		assert_eq!(parsed, ChainType::Tron);
	}
}
