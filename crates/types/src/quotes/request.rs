//! Quote request model and validation

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MIN_INPUT_AMOUNT;
use crate::models::{Amount, PriceTable, ServiceType, TokenConfig};
use crate::wire::{AppFee, SwapType};

use super::{QuoteValidationError, QuoteValidationResult};

/// Maximum slippage tolerance in basis points (100%)
pub const MAX_SLIPPAGE_BPS: u32 = 10_000;

/// Per-service overrides forwarded to the relay intents service
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayOverrides {
	/// Caller app fees appended after the built-in bridge fee
	#[serde(default)]
	pub app_fees: Vec<AppFee>,
	/// Swap type override (defaults to EXACT_INPUT)
	pub swap_type: Option<SwapType>,
	/// How long the relay backend waits for solver quotes (ms)
	pub quote_waiting_time_ms: Option<u64>,
}

/// Parameters for requesting quotes across bridge services
///
/// A single request fans out to every service supported by both tokens;
/// the same request is echoed back inside each returned quote so it can
/// be replayed verbatim when sending.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
	/// Source token configuration
	pub from_token: TokenConfig,

	/// Destination token configuration
	pub to_token: TokenConfig,

	/// Input amount in the source token's smallest units
	pub amount_wei: Amount,

	/// Slippage tolerance in basis points (100 = 1%)
	pub slippage_tolerance_bps: u32,

	/// Address refunded on the origin chain if the transfer fails
	pub refund_to: String,

	/// Recipient address on the destination chain
	pub recipient: String,

	/// Dry quotes skip deposit address generation on the backend
	#[serde(default)]
	pub dry: bool,

	/// Spot prices used for gas fee conversion, keyed by symbol
	#[serde(default)]
	pub prices: PriceTable,

	/// Minimum input amount in smallest units (values <= 0 coerce to 1)
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub min_input_amount: Option<String>,

	/// Restrict the fan-out to a single service
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub single_service: Option<ServiceType>,

	/// Relay-specific overrides
	#[serde(default)]
	pub relay_params: RelayOverrides,
}

impl QuoteRequest {
	/// Effective minimum input amount in smallest units
	///
	/// Unparseable or non-positive configured minimums fall back to 1,
	/// so a request for 0 can never pass validation.
	pub fn effective_min_input(&self) -> u128 {
		let fallback: u128 = DEFAULT_MIN_INPUT_AMOUNT.parse().unwrap_or(1);
		match &self.min_input_amount {
			Some(raw) => match raw.trim().parse::<u128>() {
				Ok(parsed) if parsed > 0 => parsed,
				_ => fallback,
			},
			None => fallback,
		}
	}

	/// Validate the quote request before it is fanned out to services
	///
	/// Applied validations:
	/// - **fromToken / toToken**: Must carry a non-empty contract address
	/// - **recipient / refundTo**: Must be non-empty
	/// - **amountWei**: Must be a non-empty decimal string of digits
	/// - **amountWei**: Must exceed the effective minimum input amount
	/// - **slippageToleranceBps**: Must be at most 10000 (100%)
	pub fn validate(&self) -> QuoteValidationResult<()> {
		// Validate token contract addresses
		if !self.from_token.has_contract_address() {
			return Err(QuoteValidationError::MissingContractAddress {
				field: "fromToken.contractAddress".to_string(),
			});
		}
		if !self.to_token.has_contract_address() {
			return Err(QuoteValidationError::MissingContractAddress {
				field: "toToken.contractAddress".to_string(),
			});
		}

		// Validate addresses
		if self.recipient.trim().is_empty() {
			return Err(QuoteValidationError::MissingRequiredField {
				field: "recipient".to_string(),
			});
		}
		if self.refund_to.trim().is_empty() {
			return Err(QuoteValidationError::MissingRequiredField {
				field: "refundTo".to_string(),
			});
		}

		// Validate the amount format
		self.amount_wei
			.validate()
			.map_err(|reason| QuoteValidationError::InvalidAmount {
				field: "amountWei".to_string(),
				reason,
			})?;

		// Validate the amount against the effective minimum
		let minimum = self.effective_min_input();
		let amount = self.amount_wei.as_u128().map_err(|e| {
			QuoteValidationError::InvalidAmount {
				field: "amountWei".to_string(),
				reason: e.to_string(),
			}
		})?;
		if amount <= minimum {
			return Err(QuoteValidationError::AmountBelowMinimum {
				amount: self.amount_wei.to_string(),
				minimum: minimum.to_string(),
			});
		}

		// Validate slippage tolerance
		if self.slippage_tolerance_bps > MAX_SLIPPAGE_BPS {
			return Err(QuoteValidationError::InvalidSlippageTolerance {
				bps: self.slippage_tolerance_bps,
			});
		}

		Ok(())
	}
}
