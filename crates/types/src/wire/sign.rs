//! Native-bridge co-signature wire types (`POST /v0/cctp/sign`)
//!
//! This endpoint speaks snake_case, unlike the relay endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Co-signature request for a burn-and-mint transfer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignTransferRequest {
	/// Refunding user address on the origin chain
	pub address: String,
	/// Transfer amount in human units, trailing zeros stripped
	pub amount: String,
	pub destination_domain_id: u32,
	/// Recipient on the destination chain
	pub receipt_address: String,
	pub source_domain_id: u32,
	/// Sender's associated token account for the transferred mint
	pub ata_address: String,
}

/// Backend co-signature response
///
/// Fee and amount figures are authoritative and denominated in the origin
/// token's smallest unit; the backend emits them as numbers or strings.
#[derive(Debug, Clone, Deserialize)]
pub struct SignTransferResponse {
	#[serde(default)]
	pub bridge_fee: Option<Decimal>,
	#[serde(default)]
	pub mint_fee: Option<Decimal>,
	#[serde(default)]
	pub receipt_amount: Option<Decimal>,
	/// Base64-encoded transaction already signed by the backend operator
	pub signature: String,
}
