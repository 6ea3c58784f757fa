//! Relay execution status wire types (`GET /v0/status`)

use serde::{Deserialize, Serialize};

/// Backend swap lifecycle state
///
/// `Unknown` absorbs any state token the backend adds later; callers treat
/// it as still in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutionStatus {
	KnownDepositTx,
	PendingDeposit,
	IncompleteDeposit,
	Processing,
	Success,
	Refunded,
	Failed,
	#[serde(other)]
	Unknown,
}

/// On-chain transaction reference
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionDetails {
	pub hash: String,
	pub explorer_url: Option<String>,
}

/// Swap execution details attached once the deposit is observed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SwapDetails {
	pub intent_hashes: Vec<String>,
	pub near_tx_hashes: Vec<String>,
	pub amount_in: Option<String>,
	pub amount_in_formatted: Option<String>,
	pub amount_in_usd: Option<String>,
	pub amount_out: Option<String>,
	pub amount_out_formatted: Option<String>,
	pub amount_out_usd: Option<String>,
	pub slippage: Option<f64>,
	pub origin_chain_tx_hashes: Vec<TransactionDetails>,
	pub destination_chain_tx_hashes: Vec<TransactionDetails>,
	pub refunded_amount: Option<String>,
	pub refunded_amount_formatted: Option<String>,
	pub refunded_amount_usd: Option<String>,
}

/// Full status response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionStatusResponse {
	#[serde(default)]
	pub quote_response: Option<serde_json::Value>,
	pub status: ExecutionStatus,
	#[serde(default)]
	pub updated_at: Option<String>,
	#[serde(default)]
	pub swap_details: Option<SwapDetails>,
}
