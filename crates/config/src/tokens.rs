//! Static token configuration table
//!
//! Built-in USDT/USDC entries for every supported chain, with the bridge
//! services each asset is eligible for. Loaded once at process start and
//! never mutated; quote validation resolves both sides of a pair against
//! this table before any network call.

use lazy_static::lazy_static;

use stableflow_types::{ChainType, NativeToken, ServiceType, TokenConfig};

fn token(
	chain_type: ChainType,
	chain_id: Option<u64>,
	chain_name: &str,
	blockchain: &str,
	contract_address: &str,
	asset_id: &str,
	symbol: &str,
	native_symbol: &str,
	native_decimals: u32,
	services: Vec<ServiceType>,
) -> TokenConfig {
	TokenConfig {
		chain_type,
		chain_id,
		chain_name: chain_name.to_string(),
		blockchain: blockchain.to_string(),
		contract_address: contract_address.to_string(),
		asset_id: asset_id.to_string(),
		decimals: 6,
		symbol: symbol.to_string(),
		name: Some(
			match symbol {
				"USDT" => "Tether USD",
				_ => "USD Coin",
			}
			.to_string(),
		),
		native_token: NativeToken {
			symbol: native_symbol.to_string(),
			decimals: native_decimals,
		},
		services,
		block_explorer_url: None,
		rpc_urls: vec![],
	}
}

lazy_static! {
	/// USDT entries; OFT-routed chains carry the oft-bridge tag
	pub static ref USDT_TOKENS: Vec<TokenConfig> = vec![
		token(
			ChainType::Evm,
			Some(1),
			"Ethereum",
			"eth",
			"0xdAC17F958D2ee523a2206206994597C13D831ec7",
			"nep141:eth-0xdac17f958d2ee523a2206206994597c13d831ec7.omft.near",
			"USDT",
			"ETH",
			18,
			vec![ServiceType::RelayIntents, ServiceType::OftBridge],
		),
		token(
			ChainType::Evm,
			Some(42161),
			"Arbitrum",
			"arb",
			"0xFd086bC7CD5C481DCC9C85ebE478A1C0b69FCbb9",
			"nep141:arb-0xfd086bc7cd5c481dcc9c85ebe478a1c0b69fcbb9.omft.near",
			"USDT",
			"ETH",
			18,
			vec![ServiceType::RelayIntents, ServiceType::OftBridge],
		),
		token(
			ChainType::Tron,
			None,
			"Tron",
			"tron",
			"TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t",
			"nep141:tron-d28a265909efecdcee7c5028585214ea0b96f015.omft.near",
			"USDT",
			"TRX",
			6,
			vec![ServiceType::RelayIntents, ServiceType::OftBridge],
		),
		token(
			ChainType::Sol,
			None,
			"Solana",
			"sol",
			"Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB",
			"nep141:sol-c800a4bd850783ccb82c2b2c7e84175443606352.omft.near",
			"USDT",
			"SOL",
			9,
			vec![ServiceType::RelayIntents],
		),
		token(
			ChainType::Near,
			None,
			"Near",
			"near",
			"usdt.tether-token.near",
			"nep141:usdt.tether-token.near",
			"USDT",
			"NEAR",
			24,
			vec![ServiceType::RelayIntents],
		),
		token(
			ChainType::Aptos,
			None,
			"Aptos",
			"aptos",
			"0x357b0b74bc833e95a115ad22604854d6b0fca151cecd94111770e5d6ffc9dc2b",
			"nep245:v2_1.omni.hot.tg:56_3uccz4nh9zrdxd4rk4nrjguyvsj",
			"USDT",
			"APT",
			8,
			vec![ServiceType::RelayIntents],
		),
	];

	/// USDC entries; burn-and-mint chains carry the token-bridge tag
	pub static ref USDC_TOKENS: Vec<TokenConfig> = vec![
		token(
			ChainType::Evm,
			Some(1),
			"Ethereum",
			"eth",
			"0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
			"nep141:eth-0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48.omft.near",
			"USDC",
			"ETH",
			18,
			vec![ServiceType::RelayIntents, ServiceType::TokenBridge],
		),
		token(
			ChainType::Evm,
			Some(42161),
			"Arbitrum",
			"arb",
			"0xaf88d065e77c8cC2239327C5EDb3A432268e5831",
			"nep141:arb-0xaf88d065e77c8cc2239327c5edb3a432268e5831.omft.near",
			"USDC",
			"ETH",
			18,
			vec![ServiceType::RelayIntents, ServiceType::TokenBridge],
		),
		token(
			ChainType::Evm,
			Some(8453),
			"Base",
			"base",
			"0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913",
			"nep141:base-0x833589fcd6edb6e08f4c7c32d4f71b54bda02913.omft.near",
			"USDC",
			"ETH",
			18,
			vec![ServiceType::RelayIntents, ServiceType::TokenBridge],
		),
		token(
			ChainType::Evm,
			Some(10),
			"Optimism",
			"op",
			"0x0b2C639c533813f4Aa9D7837CAf62653d097Ff85",
			"nep141:op-0x0b2c639c533813f4aa9d7837caf62653d097ff85.omft.near",
			"USDC",
			"ETH",
			18,
			vec![ServiceType::RelayIntents, ServiceType::TokenBridge],
		),
		token(
			ChainType::Evm,
			Some(137),
			"Polygon",
			"pol",
			"0x3c499c542cEF5E3811e1192ce70d8cC03d5c3359",
			"nep141:pol-0x3c499c542cef5e3811e1192ce70d8cc03d5c3359.omft.near",
			"USDC",
			"POL",
			18,
			vec![ServiceType::RelayIntents, ServiceType::TokenBridge],
		),
		token(
			ChainType::Evm,
			Some(43114),
			"Avalanche",
			"avax",
			"0xB97EF9Ef8734C71904D8002F8b6Bc66Dd9c48a6E",
			"nep141:avax-0xb97ef9ef8734c71904d8002f8b6bc66dd9c48a6e.omft.near",
			"USDC",
			"AVAX",
			18,
			vec![ServiceType::RelayIntents, ServiceType::TokenBridge],
		),
		token(
			ChainType::Sol,
			None,
			"Solana",
			"sol",
			"EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
			"nep141:sol-5ce3bf3a31af18be40ba30f721101b4341690186.omft.near",
			"USDC",
			"SOL",
			9,
			vec![ServiceType::RelayIntents, ServiceType::TokenBridge],
		),
	];
}

/// Read-only token lookup over the static table (or a caller override)
#[derive(Debug, Clone)]
pub struct TokenTable {
	tokens: Vec<TokenConfig>,
}

impl TokenTable {
	/// Table holding the built-in USDT and USDC entries
	pub fn new() -> Self {
		let mut tokens = USDT_TOKENS.clone();
		tokens.extend(USDC_TOKENS.iter().cloned());
		Self { tokens }
	}

	/// Table over a caller-supplied token list
	pub fn with_tokens(tokens: Vec<TokenConfig>) -> Self {
		Self { tokens }
	}

	pub fn tokens(&self) -> &[TokenConfig] {
		&self.tokens
	}

	/// Find a token by contract address (case-insensitive)
	pub fn find_by_contract(&self, contract_address: &str) -> Option<&TokenConfig> {
		self.tokens
			.iter()
			.find(|token| token.matches_contract(contract_address))
	}

	/// Whether any entry carries this contract address
	pub fn contains_contract(&self, contract_address: &str) -> bool {
		self.find_by_contract(contract_address).is_some()
	}

	/// Find a token by symbol on a specific chain key
	pub fn find(&self, symbol: &str, blockchain: &str) -> Option<&TokenConfig> {
		self.tokens
			.iter()
			.find(|token| token.symbol == symbol && token.blockchain == blockchain)
	}
}

impl Default for TokenTable {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_builtin_table_has_both_symbols() {
		let table = TokenTable::new();
		assert!(table.find("USDT", "eth").is_some());
		assert!(table.find("USDC", "arb").is_some());
		assert!(table.find("USDC", "tron").is_none());
	}

	#[test]
	fn test_contract_lookup_is_case_insensitive() {
		let table = TokenTable::new();
		let lower = table
			.find_by_contract("0xaf88d065e77c8cc2239327c5edb3a432268e5831")
			.expect("USDC on Arbitrum");
		assert_eq!(lower.symbol, "USDC");
		assert_eq!(lower.blockchain, "arb");

		assert!(table.contains_contract("0xAF88D065E77C8CC2239327C5EDB3A432268E5831"));
		assert!(!table.contains_contract("0x0000000000000000000000000000000000000000"));
	}

	#[test]
	fn test_service_tags_follow_bridge_support() {
		let table = TokenTable::new();

		let usdt_eth = table.find("USDT", "eth").unwrap();
		assert!(usdt_eth.supports(ServiceType::OftBridge));
		assert!(!usdt_eth.supports(ServiceType::TokenBridge));

		let usdc_sol = table.find("USDC", "sol").unwrap();
		assert!(usdc_sol.supports(ServiceType::TokenBridge));
		assert!(!usdc_sol.supports(ServiceType::OftBridge));

		for token in table.tokens() {
			assert!(
				token.supports(ServiceType::RelayIntents),
				"{} on {} must be relay-eligible",
				token.symbol,
				token.blockchain
			);
		}
	}

	#[test]
	fn test_every_entry_is_complete() {
		let table = TokenTable::new();
		for token in table.tokens() {
			assert!(token.has_contract_address());
			assert!(!token.asset_id.is_empty());
			assert_eq!(token.decimals, 6);
			assert!(!token.native_token.symbol.is_empty());
		}
	}
}
