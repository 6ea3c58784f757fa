//! Bridge service identifiers

use serde::{Deserialize, Serialize};

/// Bridge backend a quote or transfer is routed through
///
/// A token pair is eligible for a service when both sides carry the tag
/// in their `services` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceType {
	/// Relay/intents backend quoting via deposit addresses
	RelayIntents,
	/// Native burn-and-mint token bridge routed by numeric domain ids
	TokenBridge,
	/// OFT-style messaging bridge routed by chain name
	OftBridge,
}

impl ServiceType {
	/// Every service the SDK knows about, in registration order
	pub fn all() -> [ServiceType; 3] {
		[
			ServiceType::RelayIntents,
			ServiceType::TokenBridge,
			ServiceType::OftBridge,
		]
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			ServiceType::RelayIntents => "relay-intents",
			ServiceType::TokenBridge => "token-bridge",
			ServiceType::OftBridge => "oft-bridge",
		}
	}
}

impl std::fmt::Display for ServiceType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}
