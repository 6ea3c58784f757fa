//! Token and request fixtures

#![allow(dead_code)]

use stableflow_sdk::types::models::{Amount, ChainType, NativeToken, PriceTable};
use stableflow_sdk::types::quotes::RelayOverrides;
use stableflow_sdk::types::{QuoteRequest, ServiceType, TokenConfig};
use stableflow_sdk::TokenTable;

pub const SENDER: &str = "0x1111111111111111111111111111111111111111";
pub const RECIPIENT: &str = "0x2222222222222222222222222222222222222222";

pub const USDC_ARB: &str = "0xaf88d065e77c8cC2239327C5EDb3A432268e5831";
pub const USDC_BASE: &str = "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913";

pub fn usdc(
	blockchain: &str,
	chain_name: &str,
	contract: &str,
	services: Vec<ServiceType>,
) -> TokenConfig {
	TokenConfig {
		chain_type: ChainType::Evm,
		chain_id: Some(42161),
		chain_name: chain_name.to_string(),
		blockchain: blockchain.to_string(),
		contract_address: contract.to_string(),
		asset_id: format!("nep141:{}-{}.omft.near", blockchain, contract.to_lowercase()),
		decimals: 6,
		symbol: "USDC".to_string(),
		name: Some("USD Coin".to_string()),
		native_token: NativeToken {
			symbol: "ETH".to_string(),
			decimals: 18,
		},
		services,
		block_explorer_url: None,
		rpc_urls: vec![],
	}
}

pub fn usdc_arb(services: Vec<ServiceType>) -> TokenConfig {
	usdc("arb", "Arbitrum", USDC_ARB, services)
}

pub fn usdc_base(services: Vec<ServiceType>) -> TokenConfig {
	usdc("base", "Base", USDC_BASE, services)
}

/// Table holding exactly the pair under test
pub fn table_for(from: &TokenConfig, to: &TokenConfig) -> TokenTable {
	TokenTable::with_tokens(vec![from.clone(), to.clone()])
}

/// Dry request for 1 USDC between the two tokens, ETH priced at $2000
pub fn dry_request(from: TokenConfig, to: TokenConfig) -> QuoteRequest {
	QuoteRequest {
		from_token: from,
		to_token: to,
		amount_wei: Amount::from("1000000"),
		slippage_tolerance_bps: 100,
		refund_to: SENDER.to_string(),
		recipient: RECIPIENT.to_string(),
		dry: true,
		prices: {
			let mut prices = PriceTable::new();
			prices.insert("ETH", "2000");
			prices
		},
		min_input_amount: None,
		single_service: None,
		relay_params: RelayOverrides::default(),
	}
}
