//! Relay quote endpoint wire types (`POST /v0/quote`)

use chrono::{DateTime, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How the deposit is matched to the quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DepositMode {
	Simple,
	Memo,
}

/// Which side of the swap the `amount` field fixes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SwapType {
	ExactInput,
	ExactOutput,
	FlexInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DepositType {
	OriginChain,
	Intents,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RefundType {
	OriginChain,
	Intents,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecipientType {
	DestinationChain,
	Intents,
}

/// Per-recipient fee taken from the input amount, in basis points
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppFee {
	pub recipient: String,
	/// 100 = 1% of `amountIn`
	pub fee: u32,
}

/// Quote request body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayQuoteRequest {
	/// Simulate only; no deposit address is allocated when true
	pub dry: bool,
	pub deposit_mode: DepositMode,
	pub swap_type: SwapType,
	/// Basis points (100 = 1%)
	pub slippage_tolerance: u32,
	pub origin_asset: String,
	pub deposit_type: DepositType,
	pub destination_asset: String,
	/// Smallest-unit amount on the side selected by `swap_type`
	pub amount: String,
	pub refund_to: String,
	pub refund_type: RefundType,
	pub recipient: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub virtual_chain_recipient: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub virtual_chain_refund_recipient: Option<String>,
	pub recipient_type: RecipientType,
	pub deadline: DateTime<Utc>,
	pub referral: String,
	pub quote_waiting_time_ms: u64,
	pub session_id: String,
	pub app_fees: Vec<AppFee>,
}

/// Quote payload inside the response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelayQuote {
	pub deposit_address: Option<String>,
	pub deposit_memo: Option<String>,
	pub amount_in: Option<String>,
	pub amount_in_formatted: Option<String>,
	pub amount_in_usd: Option<String>,
	pub min_amount_in: Option<String>,
	pub amount_out: Option<String>,
	pub amount_out_formatted: Option<String>,
	pub amount_out_usd: Option<String>,
	pub min_amount_out: Option<String>,
	pub deadline: Option<String>,
	pub time_when_inactive: Option<String>,
	/// Estimated completion time in seconds
	pub time_estimate: Option<u64>,
	pub virtual_chain_recipient: Option<String>,
	pub virtual_chain_refund_recipient: Option<String>,
}

/// Full quote response envelope
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelayQuoteResponse {
	pub timestamp: Option<String>,
	pub signature: Option<String>,
	/// Echo of the accepted request, kept opaque
	pub quote_request: Option<serde_json::Value>,
	pub quote: Option<RelayQuote>,
}

/// Session id in the backend's expected shape: `session_{millis}_{9 alphanumerics}`
pub fn new_session_id() -> String {
	let millis = Utc::now().timestamp_millis();
	let suffix: String = rand::thread_rng()
		.sample_iter(&Alphanumeric)
		.take(9)
		.map(|b| (b as char).to_ascii_lowercase())
		.collect();
	format!("session_{}_{}", millis, suffix)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_request_wire_shape() {
		let request = RelayQuoteRequest {
			dry: true,
			deposit_mode: DepositMode::Simple,
			swap_type: SwapType::ExactInput,
			slippage_tolerance: 50,
			origin_asset: "nep141:arb-0xaf88.omft.near".to_string(),
			deposit_type: DepositType::OriginChain,
			destination_asset: "nep141:sol-epjf.omft.near".to_string(),
			amount: "1000000".to_string(),
			refund_to: "0xrefund".to_string(),
			refund_type: RefundType::OriginChain,
			recipient: "solRecipient".to_string(),
			virtual_chain_recipient: None,
			virtual_chain_refund_recipient: None,
			recipient_type: RecipientType::DestinationChain,
			deadline: Utc::now(),
			referral: "stableflow".to_string(),
			quote_waiting_time_ms: 3000,
			session_id: new_session_id(),
			app_fees: vec![AppFee {
				recipient: "reffer.near".to_string(),
				fee: 0,
			}],
		};

		let json = serde_json::to_value(&request).unwrap();
		assert_eq!(json["depositMode"], "SIMPLE");
		assert_eq!(json["swapType"], "EXACT_INPUT");
		assert_eq!(json["refundType"], "ORIGIN_CHAIN");
		assert_eq!(json["recipientType"], "DESTINATION_CHAIN");
		assert_eq!(json["slippageTolerance"], 50);
		assert_eq!(json["appFees"][0]["recipient"], "reffer.near");
		assert!(json.get("virtualChainRecipient").is_none());
		assert!(json["sessionId"].as_str().unwrap().starts_with("session_"));
	}

	#[test]
	fn test_response_tolerates_partial_payloads() {
		let json = r#"{
			"timestamp": "2025-01-01T00:00:00Z",
			"quote": {
				"amountIn": "1000000",
				"amountInFormatted": "1",
				"amountOut": "998000",
				"timeEstimate": 120,
				"someFutureField": true
			}
		}"#;

		let response: RelayQuoteResponse = serde_json::from_str(json).unwrap();
		let quote = response.quote.unwrap();
		assert_eq!(quote.amount_out.as_deref(), Some("998000"));
		assert_eq!(quote.time_estimate, Some(120));
		assert!(quote.deposit_address.is_none());
		assert!(response.signature.is_none());
	}

	#[test]
	fn test_session_id_format() {
		let id = new_session_id();
		let parts: Vec<&str> = id.splitn(3, '_').collect();
		assert_eq!(parts.len(), 3);
		assert_eq!(parts[0], "session");
		assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
		assert_eq!(parts[2].len(), 9);
		assert!(parts[2].chars().all(|c| c.is_ascii_alphanumeric()));
	}
}
