//! Deposit submission wire types (`POST /v0/deposit/submit`)

use serde::{Deserialize, Serialize};

/// Notifies the backend of a sent deposit so it can verify it early
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitDepositTxRequest {
	/// Transaction hash of the deposit
	pub tx_hash: String,
	/// Deposit address the quote allocated
	pub deposit_address: String,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_wire_shape() {
		let request = SubmitDepositTxRequest {
			tx_hash: "5sig".to_string(),
			deposit_address: "depAddr".to_string(),
		};
		let json = serde_json::to_value(&request).unwrap();
		assert_eq!(json["txHash"], "5sig");
		assert_eq!(json["depositAddress"], "depAddr");
	}
}
