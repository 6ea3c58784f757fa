//! Token and chain configuration models

use serde::{Deserialize, Serialize};

use super::chain::ChainType;
use super::service::ServiceType;

/// Native gas token of a chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeToken {
	pub symbol: String,
	pub decimals: u32,
}

/// One bridgeable asset on one chain
///
/// Entries are immutable: they come from the static token table (or the
/// caller's own configuration) and are never mutated by the SDK.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenConfig {
	pub chain_type: ChainType,
	/// EVM chain id; absent for non-EVM chains
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub chain_id: Option<u64>,
	/// Display chain name, keys the proxy/domain tables ("Ethereum", "Solana")
	pub chain_name: String,
	/// Short backend chain key, keys the RPC table ("eth", "sol")
	pub blockchain: String,
	/// Contract address or mint; "SOL"/"native" marks the gas token itself
	pub contract_address: String,
	/// Canonical cross-chain asset id understood by the relay backend
	pub asset_id: String,
	pub decimals: u32,
	pub symbol: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	pub native_token: NativeToken,
	/// Bridge services this asset is eligible for
	#[serde(default)]
	pub services: Vec<ServiceType>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub block_explorer_url: Option<String>,
	/// Chain RPC endpoints merged into the global table at startup
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub rpc_urls: Vec<String>,
}

impl TokenConfig {
	/// Whether this token is eligible for the given service
	pub fn supports(&self, service: ServiceType) -> bool {
		self.services.contains(&service)
	}

	pub fn has_contract_address(&self) -> bool {
		!self.contract_address.trim().is_empty()
	}

	/// Case-insensitive contract address comparison (EVM checksums vary)
	pub fn matches_contract(&self, address: &str) -> bool {
		self.contract_address.eq_ignore_ascii_case(address)
	}

	/// Whether the configured contract address denotes the chain's gas token
	pub fn is_native(&self) -> bool {
		let addr = self.contract_address.to_ascii_lowercase();
		addr == "sol" || addr == "native"
	}
}
