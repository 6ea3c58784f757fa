//! User-facing normalization of quote failures
//!
//! Raw backend messages leak solver internals, so the relay service's
//! known phrases are rewritten and everything unrecognized collapses into
//! a generic retry message. Other services surface their adapter error
//! text as-is.

use stableflow_types::models::to_human_units;
use stableflow_types::{AdapterError, ServiceType, TokenConfig};

const EXCEEDS_MAX: &str = "Amount exceeds max";
pub(crate) const GENERIC_FAILURE: &str = "Failed to get quote, please try again later";
const TOO_LOW_MARKER: &str = "Amount is too low for bridge, try at least ";

/// Convert an adapter failure into the message stored on a quote result
pub fn normalize_quote_error(
	service: ServiceType,
	error: &AdapterError,
	from_token: &TokenConfig,
) -> String {
	// Validation problems are already phrased for the caller
	if let AdapterError::Validation(validation) = error {
		return validation.to_string();
	}

	if service != ServiceType::RelayIntents {
		return error.to_string();
	}

	match error.backend_message() {
		Some(message) => normalize_relay_message(message, from_token),
		None => GENERIC_FAILURE.to_string(),
	}
}

fn normalize_relay_message(message: &str, from_token: &TokenConfig) -> String {
	if message.contains("Failed to get quote") {
		return EXCEEDS_MAX.to_string();
	}

	if let Some(rest) = message
		.find(TOO_LOW_MARKER)
		.map(|at| &message[at + TOO_LOW_MARKER.len()..])
	{
		let raw: String = rest.chars().take_while(char::is_ascii_digit).collect();
		if !raw.is_empty() {
			// Full token precision, trailing zeros kept
			if let Ok(human) = to_human_units(&raw, from_token.decimals) {
				return format!("Amount is too low, at least {}", human);
			}
		}
	}

	GENERIC_FAILURE.to_string()
}

#[cfg(test)]
mod tests {
	use super::*;
	use stableflow_types::models::{ChainType, NativeToken};

	fn usdc() -> TokenConfig {
		TokenConfig {
			chain_type: ChainType::Evm,
			chain_id: Some(42161),
			chain_name: "Arbitrum".to_string(),
			blockchain: "arb".to_string(),
			contract_address: "0xaf88d065e77c8cC2239327C5EDb3A432268e5831".to_string(),
			asset_id: "nep141:arb-usdc.omft.near".to_string(),
			decimals: 6,
			symbol: "USDC".to_string(),
			name: None,
			native_token: NativeToken {
				symbol: "ETH".to_string(),
				decimals: 18,
			},
			services: vec![ServiceType::RelayIntents],
			block_explorer_url: None,
			rpc_urls: vec![],
		}
	}

	fn backend(message: &str) -> AdapterError {
		AdapterError::Backend {
			status: 400,
			message: message.to_string(),
		}
	}

	#[test]
	fn test_exceeds_max_rewrite() {
		let message =
			normalize_quote_error(ServiceType::RelayIntents, &backend("Failed to get quote"), &usdc());
		assert_eq!(message, "Amount exceeds max");
	}

	#[test]
	fn test_too_low_extracts_and_scales_amount() {
		let error = backend("Amount is too low for bridge, try at least 1000000");
		let message = normalize_quote_error(ServiceType::RelayIntents, &error, &usdc());
		assert_eq!(message, "Amount is too low, at least 1.000000");
	}

	#[test]
	fn test_unrecognized_message_falls_back() {
		let error = backend("solver pool exhausted in region eu-1");
		let message = normalize_quote_error(ServiceType::RelayIntents, &error, &usdc());
		assert_eq!(message, "Failed to get quote, please try again later");
	}

	#[test]
	fn test_non_backend_relay_error_falls_back() {
		let error = AdapterError::invalid_response("missing quote body");
		let message = normalize_quote_error(ServiceType::RelayIntents, &error, &usdc());
		assert_eq!(message, "Failed to get quote, please try again later");
	}

	#[test]
	fn test_other_services_keep_error_text() {
		let error = backend("insufficient liquidity");
		let message = normalize_quote_error(ServiceType::TokenBridge, &error, &usdc());
		assert_eq!(message, "HTTP 400: insufficient liquidity");
	}

	#[test]
	fn test_validation_errors_pass_through() {
		let error = AdapterError::Validation(
			stableflow_types::quotes::QuoteValidationError::MissingRequiredField {
				field: "depositAddress".to_string(),
			},
		);
		let message = normalize_quote_error(ServiceType::RelayIntents, &error, &usdc());
		assert_eq!(message, "Missing required field: depositAddress");
	}
}
