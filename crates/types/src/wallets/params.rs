//! Parameter and result models for wallet operations

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{Amount, PriceTable, TokenConfig};

/// Plain token transfer to a deposit address
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferParams {
	/// Asset identifier of the token being transferred
	pub origin_asset: String,
	/// Destination address on the origin chain
	pub deposit_address: String,
	/// Amount in smallest units
	pub amount: Amount,
}

/// Payload executed by a wallet when sending a quote
///
/// Services that pre-build a transaction during quoting attach it as an
/// opaque `sendParam`; services without one fall back to a plain transfer
/// to the quoted deposit address.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum SendRequest {
	/// Execute a transaction prepared during quoting
	Send { send_param: Value },
	/// Transfer tokens to the deposit address
	Transfer(TransferParams),
}

/// Gas estimate for a transfer on the wallet's chain
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasEstimate {
	/// Gas units (lamports of signature fees on Solana)
	pub gas: u64,
	/// Price per gas unit in the chain's native base unit
	pub gas_price: u64,
}

/// Parameters for service-specific quoting done inside a wallet
///
/// Proxy-routed services cannot price their deposit transaction on the
/// backend alone; the wallet builds and simulates it locally and reports
/// the resulting fees back to the adapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletQuoteParams {
	/// Proxy contract the deposit is routed through
	pub proxy_address: String,
	pub from_token: TokenConfig,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub to_token: Option<TokenConfig>,
	/// Input amount in smallest units
	pub amount_wei: Amount,
	#[serde(default)]
	pub prices: PriceTable,
	pub refund_to: String,
	pub recipient: String,
	/// Deposit address from the backend quote, when one exists
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub deposit_address: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub slippage_tolerance_bps: Option<u32>,
	/// Fee names excluded from the total
	#[serde(default)]
	pub exclude_fees: Vec<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub source_domain: Option<u32>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub destination_domain: Option<u32>,
}

/// Partial quote produced by a wallet
///
/// Every field is optional; adapters merge what the wallet reports over
/// their own derivation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletQuote {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub need_approve: Option<bool>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub approve_spender: Option<String>,
	/// Transaction payload to execute on send
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub send_param: Option<Value>,
	/// USD fee breakdown keyed by fee name
	#[serde(default)]
	pub fees: HashMap<String, String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub total_fees_usd: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub estimate_source_gas: Option<u64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub estimate_source_gas_usd: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub estimate_time: Option<u64>,
	/// Human-readable output amount when the wallet can compute it
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub output_amount: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_send_request_tagging() {
		let send = SendRequest::Send {
			send_param: serde_json::json!({ "transaction": "AQID" }),
		};
		let json = serde_json::to_value(&send).unwrap();
		assert_eq!(json["type"], "send");
		assert_eq!(json["sendParam"]["transaction"], "AQID");

		let transfer = SendRequest::Transfer(TransferParams {
			origin_asset: "nep141:eth.omft.near".to_string(),
			deposit_address: "0x1111111111111111111111111111111111111111".to_string(),
			amount: Amount::from("1000000"),
		});
		let json = serde_json::to_value(&transfer).unwrap();
		assert_eq!(json["type"], "transfer");
		assert_eq!(json["originAsset"], "nep141:eth.omft.near");
		assert_eq!(json["amount"], "1000000");
	}

	#[test]
	fn test_wallet_quote_default_is_empty() {
		let quote = WalletQuote::default();
		assert!(quote.fees.is_empty());
		assert!(quote.send_param.is_none());
		assert!(quote.output_amount.is_none());

		let json = serde_json::to_value(&quote).unwrap();
		// Only the fees map survives serialization when everything is unset
		assert_eq!(json.as_object().unwrap().len(), 1);
	}
}
