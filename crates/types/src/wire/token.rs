//! Token listing wire types (`GET /v0/tokens`)

use serde::{Deserialize, Serialize};

/// One supported token as reported by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenListing {
	pub asset_id: String,
	pub decimals: u32,
	/// Short chain key ("eth", "sol", "arb", ...)
	pub blockchain: String,
	pub symbol: String,
	/// Current USD price; absent for unpriced assets
	#[serde(default)]
	pub price: Option<f64>,
	#[serde(default)]
	pub price_updated_at: Option<String>,
	#[serde(default)]
	pub contract_address: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_listing_parse() {
		let json = r#"[{
			"assetId": "nep141:eth-0xdac17f958d2ee523a2206206994597c13d831ec7.omft.near",
			"decimals": 6,
			"blockchain": "eth",
			"symbol": "USDT",
			"price": 1.0005,
			"priceUpdatedAt": "2025-01-01T00:00:00Z",
			"contractAddress": "0xdAC17F958D2ee523a2206206994597C13D831ec7"
		}]"#;

		let listing: Vec<TokenListing> = serde_json::from_str(json).unwrap();
		assert_eq!(listing[0].symbol, "USDT");
		assert_eq!(listing[0].price, Some(1.0005));
	}
}
