//! StableFlow bridge adapters
//!
//! One adapter per bridge service, all behind the [`BridgeAdapter`] trait.
//! The registry maps service types to adapter instances; the default
//! registry wires up all three built-in services against one API client.

pub mod oft_bridge;
pub mod relay_intents;
pub mod token_bridge;

pub use oft_bridge::OftBridgeAdapter;
pub use relay_intents::RelayIntentsAdapter;
pub use token_bridge::TokenBridgeAdapter;

use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;

use stableflow_client::ApiClient;
use stableflow_types::models::format_normalized;
use stableflow_types::{BridgeAdapter, ChainType, NormalizedQuote, ServiceType, WalletQuote};

/// Registry of bridge adapters keyed by service type
#[derive(Debug, Default)]
pub struct AdapterRegistry {
	adapters: HashMap<ServiceType, Arc<dyn BridgeAdapter>>,
}

impl AdapterRegistry {
	/// Empty registry; callers register adapters themselves
	pub fn new() -> Self {
		Self::default()
	}

	/// Registry with all built-in adapters wired to one API client
	pub fn with_defaults(client: ApiClient) -> Self {
		let mut registry = Self::new();
		registry.register(Arc::new(RelayIntentsAdapter::new(client.clone())));
		registry.register(Arc::new(TokenBridgeAdapter::new(client.clone())));
		registry.register(Arc::new(OftBridgeAdapter::new(client)));
		registry
	}

	/// Register an adapter under its own service type, replacing any previous one
	pub fn register(&mut self, adapter: Arc<dyn BridgeAdapter>) {
		self.adapters.insert(adapter.service_type(), adapter);
	}

	pub fn get(&self, service: ServiceType) -> Option<Arc<dyn BridgeAdapter>> {
		self.adapters.get(&service).cloned()
	}

	/// Registered service types
	pub fn services(&self) -> Vec<ServiceType> {
		self.adapters.keys().copied().collect()
	}

	pub fn len(&self) -> usize {
		self.adapters.len()
	}

	pub fn is_empty(&self) -> bool {
		self.adapters.is_empty()
	}
}

/// Estimation target used when a dry quote carries no deposit address
pub(crate) fn fallback_deposit_address(chain: ChainType) -> &'static str {
	match chain {
		ChainType::Evm => "0x000000000000000000000000000000000000dEaD",
		ChainType::Sol => "11111111111111111111111111111111",
		ChainType::Tron => "T9yD14Nj9j7xAB4dbGeiX9h8unkKHxuWwb",
		ChainType::Near => "system",
		ChainType::Aptos => "0x1",
	}
}

/// Sum a USD fee table, skipping excluded keys and unparsable values
pub(crate) fn sum_fees(fees: &HashMap<String, String>, exclude: &[&str]) -> String {
	let total = fees
		.iter()
		.filter(|(key, _)| !exclude.contains(&key.as_str()))
		.filter_map(|(_, value)| value.parse::<Decimal>().ok())
		.fold(Decimal::ZERO, |acc, value| acc + value);
	format_normalized(total)
}

/// Overlay a wallet-produced partial quote onto an adapter quote
///
/// Wallet fee keys override same-named entries (excluded keys skipped);
/// scalar fields override only when the wallet reports them. The caller
/// recomputes the fee total afterwards.
pub(crate) fn merge_wallet_quote(
	quote: &mut NormalizedQuote,
	wallet_quote: WalletQuote,
	exclude: &[&str],
) {
	for (key, value) in wallet_quote.fees {
		if exclude.contains(&key.as_str()) {
			continue;
		}
		quote.fees.insert(key, value);
	}
	if let Some(need_approve) = wallet_quote.need_approve {
		quote.need_approve = need_approve;
	}
	if wallet_quote.approve_spender.is_some() {
		quote.approve_spender = wallet_quote.approve_spender;
	}
	if wallet_quote.send_param.is_some() {
		quote.send_param = wallet_quote.send_param;
	}
	if wallet_quote.estimate_source_gas.is_some() {
		quote.estimate_source_gas = wallet_quote.estimate_source_gas;
	}
	if wallet_quote.estimate_source_gas_usd.is_some() {
		quote.estimate_source_gas_usd = wallet_quote.estimate_source_gas_usd;
	}
	if let Some(estimate_time) = wallet_quote.estimate_time {
		quote.estimate_time = estimate_time;
	}
	if let Some(output_amount) = wallet_quote.output_amount {
		quote.output_amount = output_amount;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_sum_fees_skips_exclusions_and_garbage() {
		let mut fees = HashMap::new();
		fees.insert("bridgeFeeUsd".to_string(), "0.10".to_string());
		fees.insert("destinationGasFeeUsd".to_string(), "0.25".to_string());
		fees.insert("sourceGasFeeUsd".to_string(), "99".to_string());
		fees.insert("oddFeeUsd".to_string(), "not-a-number".to_string());

		assert_eq!(sum_fees(&fees, &["sourceGasFeeUsd"]), "0.35");
		assert_eq!(sum_fees(&fees, &[]), "99.35");
	}

	#[test]
	fn test_sum_fees_empty_is_zero() {
		assert_eq!(sum_fees(&HashMap::new(), &[]), "0");
	}

	#[test]
	fn test_merge_wallet_quote_overrides() {
		use stableflow_types::{QuoteParams, QuoteRequest};

		let request: QuoteRequest = serde_json::from_value(serde_json::json!({
			"fromToken": sample_token(),
			"toToken": sample_token(),
			"amountWei": "1000000",
			"slippageToleranceBps": 100,
			"refundTo": "refund",
			"recipient": "recipient"
		}))
		.unwrap();

		let mut quote = NormalizedQuote::new(
			ServiceType::RelayIntents,
			QuoteParams::from_request(&request),
		);
		quote
			.fees
			.insert("bridgeFeeUsd".to_string(), "0.1".to_string());
		quote.estimate_time = 60;

		let mut wallet_quote = WalletQuote::default();
		wallet_quote
			.fees
			.insert("bridgeFeeUsd".to_string(), "0.2".to_string());
		wallet_quote
			.fees
			.insert("sourceGasFeeUsd".to_string(), "0.5".to_string());
		wallet_quote.need_approve = Some(true);
		wallet_quote.send_param = Some(serde_json::json!({"transaction": "AQID"}));
		wallet_quote.output_amount = Some("0.99".to_string());

		merge_wallet_quote(&mut quote, wallet_quote, &[]);

		assert_eq!(quote.fees["bridgeFeeUsd"], "0.2");
		assert_eq!(quote.fees["sourceGasFeeUsd"], "0.5");
		assert!(quote.need_approve);
		assert_eq!(quote.output_amount, "0.99");
		// Untouched fields keep the adapter's values
		assert_eq!(quote.estimate_time, 60);
	}

	#[test]
	fn test_merge_skips_excluded_fee_keys() {
		use stableflow_types::{QuoteParams, QuoteRequest};

		let request: QuoteRequest = serde_json::from_value(serde_json::json!({
			"fromToken": sample_token(),
			"toToken": sample_token(),
			"amountWei": "1000000",
			"slippageToleranceBps": 100,
			"refundTo": "refund",
			"recipient": "recipient"
		}))
		.unwrap();
		let mut quote = NormalizedQuote::new(
			ServiceType::RelayIntents,
			QuoteParams::from_request(&request),
		);

		let mut wallet_quote = WalletQuote::default();
		wallet_quote
			.fees
			.insert("sourceGasFeeUsd".to_string(), "0.5".to_string());
		merge_wallet_quote(&mut quote, wallet_quote, &["sourceGasFeeUsd"]);
		assert!(quote.fees.is_empty());
	}

	fn sample_token() -> serde_json::Value {
		serde_json::json!({
			"chainType": "evm",
			"chainId": 1,
			"chainName": "Ethereum",
			"blockchain": "eth",
			"contractAddress": "0xdAC17F958D2ee523a2206206994597C13D831ec7",
			"assetId": "nep141:eth.omft.near",
			"decimals": 6,
			"symbol": "USDT",
			"nativeToken": {"symbol": "ETH", "decimals": 18},
			"services": ["relay-intents"]
		})
	}
}
