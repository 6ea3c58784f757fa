//! Native-bridge trade wire types (`GET /v0/trade`, `POST /v0/trade/add`)

use serde::{Deserialize, Serialize};

/// Raw trade record keyed by deposit address or source tx hash
///
/// `status` is numeric: 1 = success, 2 = expired, anything else in flight.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TradeRecord {
	pub status: Option<i64>,
	pub deposit_address: Option<String>,
	pub tx_hash: Option<String>,
	/// Destination-chain transaction hash once minted
	pub receive_tx_hash: Option<String>,
	pub amount: Option<String>,
	pub address: Option<String>,
	pub receive_address: Option<String>,
	pub updated_at: Option<String>,
}

impl TradeRecord {
	pub const STATUS_SUCCESS: i64 = 1;
	pub const STATUS_EXPIRED: i64 = 2;
}

/// Post-send telemetry body; failures to deliver it are never surfaced
#[derive(Debug, Clone, Serialize)]
pub struct TradeReport {
	pub project: String,
	/// Sending address
	pub address: String,
	pub receive_address: String,
	/// Smallest-unit input amount
	pub amount: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tx_hash: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub deposit_address: Option<String>,
	/// Total fees in USD, when known
	#[serde(skip_serializing_if = "Option::is_none")]
	pub fee: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub source_domain_id: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub destination_domain_id: Option<u32>,
}
