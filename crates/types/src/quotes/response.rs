//! Normalized quote model returned by every bridge service

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{Amount, ServiceType, TokenConfig};

use super::QuoteRequest;

/// Echo of the request a quote was produced for
///
/// Carried inside every [`NormalizedQuote`] so the quote can be sent
/// later without re-supplying the original parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteParams {
	pub from_token: TokenConfig,
	pub to_token: TokenConfig,
	pub amount_wei: Amount,
	pub recipient: String,
	pub refund_to: String,
	pub slippage_tolerance_bps: u32,
	pub dry: bool,
	/// Proxy contract the deposit is routed through, when the service uses one
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub proxy_address: Option<String>,
	/// Source burn domain for domain-routed services
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub source_domain: Option<u32>,
	/// Destination mint domain for domain-routed services
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub destination_domain: Option<u32>,
}

impl QuoteParams {
	/// Capture the fields of a request that sending needs to replay
	pub fn from_request(request: &QuoteRequest) -> Self {
		Self {
			from_token: request.from_token.clone(),
			to_token: request.to_token.clone(),
			amount_wei: request.amount_wei.clone(),
			recipient: request.recipient.clone(),
			refund_to: request.refund_to.clone(),
			slippage_tolerance_bps: request.slippage_tolerance_bps,
			dry: request.dry,
			proxy_address: None,
			source_domain: None,
			destination_domain: None,
		}
	}
}

/// Service-agnostic quote shape shared by all bridge services
///
/// Amounts come in two flavors: raw smallest-unit strings (`amount_in`,
/// `amount_out`) and human-readable decimal strings (`*_formatted`,
/// `output_amount`). Fee values are USD decimal strings keyed by fee name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedQuote {
	pub service_type: ServiceType,

	/// Deposit address generated by the backend (absent for dry quotes)
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub deposit_address: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub deposit_memo: Option<String>,

	/// Input amount in smallest units
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub amount_in: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub amount_in_formatted: Option<String>,

	/// Output amount in smallest units
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub amount_out: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub amount_out_formatted: Option<String>,

	/// Human-readable output amount, rounded down to token precision
	pub output_amount: String,

	/// Estimated completion time in seconds
	pub estimate_time: u64,

	/// USD fee breakdown keyed by fee name
	#[serde(default)]
	pub fees: HashMap<String, String>,

	/// Sum of the non-excluded fee entries, in USD
	pub total_fees_usd: String,

	/// Gas units the deposit transaction is expected to burn
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub estimate_source_gas: Option<u64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub estimate_source_gas_usd: Option<String>,

	/// Whether the caller must grant an allowance before sending
	pub need_approve: bool,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub approve_spender: Option<String>,

	/// Opaque wallet payload to execute when sending this quote
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub send_param: Option<Value>,

	/// Request echo used to replay the quote on send
	pub quote_param: QuoteParams,

	/// Raw backend response, kept for callers that need service fields
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub raw: Option<Value>,
}

impl NormalizedQuote {
	/// Empty quote for a service, to be filled in during derivation
	pub fn new(service_type: ServiceType, quote_param: QuoteParams) -> Self {
		Self {
			service_type,
			deposit_address: None,
			deposit_memo: None,
			amount_in: None,
			amount_in_formatted: None,
			amount_out: None,
			amount_out_formatted: None,
			output_amount: "0".to_string(),
			estimate_time: 0,
			fees: HashMap::new(),
			total_fees_usd: "0".to_string(),
			estimate_source_gas: None,
			estimate_source_gas_usd: None,
			need_approve: false,
			approve_spender: None,
			send_param: None,
			quote_param,
			raw: None,
		}
	}
}

/// Outcome of quoting one service during a fan-out
///
/// Exactly one of `quote` and `error` is set; failures never abort the
/// other services in the same request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResult {
	pub service_type: ServiceType,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub quote: Option<NormalizedQuote>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
}

impl QuoteResult {
	pub fn ok(quote: NormalizedQuote) -> Self {
		Self {
			service_type: quote.service_type,
			quote: Some(quote),
			error: None,
		}
	}

	pub fn err(service_type: ServiceType, message: impl Into<String>) -> Self {
		Self {
			service_type,
			quote: None,
			error: Some(message.into()),
		}
	}

	pub fn is_ok(&self) -> bool {
		self.quote.is_some()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::models::{ChainType, NativeToken, PriceTable};
	use crate::quotes::RelayOverrides;

	fn token() -> TokenConfig {
		TokenConfig {
			chain_type: ChainType::Evm,
			chain_id: Some(1),
			chain_name: "eth".to_string(),
			blockchain: "eth".to_string(),
			contract_address: "0xdAC17F958D2ee523a2206206994597C13D831ec7".to_string(),
			asset_id: "nep141:eth.omft.near".to_string(),
			decimals: 6,
			symbol: "USDT".to_string(),
			name: None,
			native_token: NativeToken {
				symbol: "ETH".to_string(),
				decimals: 18,
			},
			services: vec![ServiceType::RelayIntents, ServiceType::OftBridge],
			block_explorer_url: None,
			rpc_urls: vec![],
		}
	}

	fn request() -> QuoteRequest {
		QuoteRequest {
			from_token: token(),
			to_token: token(),
			amount_wei: Amount::from("2000000"),
			slippage_tolerance_bps: 50,
			refund_to: "0x1111111111111111111111111111111111111111".to_string(),
			recipient: "0x2222222222222222222222222222222222222222".to_string(),
			dry: false,
			prices: PriceTable::new(),
			min_input_amount: None,
			single_service: None,
			relay_params: RelayOverrides::default(),
		}
	}

	#[test]
	fn test_quote_params_echo_request() {
		let request = request();
		let params = QuoteParams::from_request(&request);
		assert_eq!(params.amount_wei.as_str(), "2000000");
		assert_eq!(params.recipient, request.recipient);
		assert_eq!(params.slippage_tolerance_bps, 50);
		assert!(params.proxy_address.is_none());
	}

	#[test]
	fn test_quote_result_constructors() {
		let quote = NormalizedQuote::new(
			ServiceType::RelayIntents,
			QuoteParams::from_request(&request()),
		);
		let ok = QuoteResult::ok(quote);
		assert!(ok.is_ok());
		assert_eq!(ok.service_type, ServiceType::RelayIntents);
		assert!(ok.error.is_none());

		let err = QuoteResult::err(ServiceType::TokenBridge, "backend unavailable");
		assert!(!err.is_ok());
		assert_eq!(err.error.as_deref(), Some("backend unavailable"));
		assert!(err.quote.is_none());
	}

	#[test]
	fn test_normalized_quote_serializes_camel_case() {
		let mut quote = NormalizedQuote::new(
			ServiceType::OftBridge,
			QuoteParams::from_request(&request()),
		);
		quote.output_amount = "1.99".to_string();
		quote
			.fees
			.insert("bridgeFeeUsd".to_string(), "0.01".to_string());
		quote.total_fees_usd = "0.01".to_string();

		let json = serde_json::to_value(&quote).unwrap();
		assert_eq!(json["serviceType"], "oft-bridge");
		assert_eq!(json["outputAmount"], "1.99");
		assert_eq!(json["totalFeesUsd"], "0.01");
		assert_eq!(json["fees"]["bridgeFeeUsd"], "0.01");
		assert_eq!(json["needApprove"], false);
		// Unset optionals stay off the wire
		assert!(json.get("depositAddress").is_none());
		assert!(json.get("sendParam").is_none());
	}

	#[test]
	fn test_normalized_quote_roundtrip_with_send_param() {
		let mut quote = NormalizedQuote::new(
			ServiceType::TokenBridge,
			QuoteParams::from_request(&request()),
		);
		quote.send_param = Some(serde_json::json!({ "transaction": "base64-bytes" }));
		quote.need_approve = true;
		quote.approve_spender = Some("0x3333333333333333333333333333333333333333".to_string());

		let json = serde_json::to_string(&quote).unwrap();
		let back: NormalizedQuote = serde_json::from_str(&json).unwrap();
		assert_eq!(back.service_type, ServiceType::TokenBridge);
		assert!(back.need_approve);
		assert_eq!(
			back.send_param.unwrap()["transaction"],
			"base64-bytes"
		);
	}
}
