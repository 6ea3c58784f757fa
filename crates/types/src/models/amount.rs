//! Amount model for smallest-unit token values carried as strings

use rust_decimal::Decimal;
use serde;

/// Smallest-unit token amount represented as a decimal string
///
/// Kept as a string to preserve precision across chains with differing
/// integer widths (EVM u256, Solana u64, Tron u64)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amount(pub String);

impl Amount {
	/// Create a new Amount from a string
	pub fn new(value: String) -> Self {
		Self(value)
	}

	/// Get the raw string value
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Try to parse as u128 (for smaller values)
	pub fn as_u128(&self) -> Result<u128, std::num::ParseIntError> {
		self.0.parse()
	}

	/// Try to parse as u64 (for smaller values)
	pub fn as_u64(&self) -> Result<u64, std::num::ParseIntError> {
		self.0.parse()
	}

	/// Check if the value is zero
	pub fn is_zero(&self) -> bool {
		!self.0.is_empty() && self.0.chars().all(|c| c == '0')
	}

	/// Validate that the string contains only digits
	pub fn validate(&self) -> Result<(), String> {
		if self.0.is_empty() {
			return Err("Amount value cannot be empty".to_string());
		}

		if !self.0.chars().all(|c| c.is_ascii_digit()) {
			return Err("Amount value must contain only digits".to_string());
		}

		Ok(())
	}

	/// Convert to human units by scaling down `decimals` places
	pub fn to_human(&self, decimals: u32) -> Result<Decimal, String> {
		to_human_units(&self.0, decimals)
	}
}

impl std::fmt::Display for Amount {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<String> for Amount {
	fn from(value: String) -> Self {
		Self(value)
	}
}

impl From<&str> for Amount {
	fn from(value: &str) -> Self {
		Self(value.to_string())
	}
}

impl From<u128> for Amount {
	fn from(value: u128) -> Self {
		Self(value.to_string())
	}
}

impl From<u64> for Amount {
	fn from(value: u64) -> Self {
		Self(value.to_string())
	}
}

/// Scale a smallest-unit decimal string down to human units
pub fn to_human_units(raw: &str, decimals: u32) -> Result<Decimal, String> {
	if decimals > 28 {
		return Err(format!("unsupported decimals: {}", decimals));
	}
	let value: i128 = raw
		.parse()
		.map_err(|e| format!("invalid amount '{}': {}", raw, e))?;
	Ok(Decimal::from_i128_with_scale(value, decimals))
}

/// Render a decimal with trailing zeros stripped ("1.2000" -> "1.2", "1.0" -> "1")
pub fn format_normalized(value: Decimal) -> String {
	value.normalize().to_string()
}

// Custom Serde implementation to serialize/deserialize as string
impl serde::Serialize for Amount {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_str(&self.0)
	}
}

impl<'de> serde::Deserialize<'de> for Amount {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let value = String::deserialize(deserializer)?;
		let amount = Self(value);
		amount.validate().map_err(serde::de::Error::custom)?;
		Ok(amount)
	}
}
