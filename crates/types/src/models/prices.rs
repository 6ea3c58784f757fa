//! Caller-supplied USD price table

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::token::NativeToken;
use crate::wire::TokenListing;

/// Symbol-to-USD price map of decimal strings
///
/// Built by the caller, typically from the `/v0/tokens` listing. Missing
/// symbols price at zero rather than failing a quote.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceTable(pub HashMap<String, String>);

impl PriceTable {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, symbol: impl Into<String>, price: impl Into<String>) {
		self.0.insert(symbol.into(), price.into());
	}

	/// USD price for a symbol; zero when absent or unparsable
	pub fn usd(&self, symbol: &str) -> Decimal {
		self.0
			.get(symbol)
			.and_then(|p| p.parse::<Decimal>().ok())
			.unwrap_or(Decimal::ZERO)
	}

	/// Convert a native-gas quantity into USD: `gas / 10^decimals * price`
	pub fn gas_to_usd(&self, gas: u64, native: &NativeToken) -> Decimal {
		if native.decimals > 28 {
			return Decimal::ZERO;
		}
		let human = Decimal::from_i128_with_scale(gas as i128, native.decimals);
		human * self.usd(&native.symbol)
	}

	/// Build a table from the backend token listing
	pub fn from_token_listing(listing: &[TokenListing]) -> Self {
		let mut table = Self::new();
		for entry in listing {
			if let Some(price) = entry.price {
				table.insert(entry.symbol.clone(), price.to_string());
			}
		}
		table
	}
}
