//! Error types for quote request validation

use thiserror::Error;

use crate::models::ServiceType;

/// Validation errors for quote requests
#[derive(Error, Debug)]
pub enum QuoteValidationError {
	#[error("Missing contract address: {field}")]
	MissingContractAddress { field: String },

	#[error("Missing required field: {field}")]
	MissingRequiredField { field: String },

	#[error("Invalid amount: {field} - {reason}")]
	InvalidAmount { field: String, reason: String },

	#[error("Amount {amount} is below the minimum input amount {minimum}")]
	AmountBelowMinimum { amount: String, minimum: String },

	#[error("Invalid slippage tolerance: {bps} bps (must be between 0 and 10000)")]
	InvalidSlippageTolerance { bps: u32 },

	#[error("Unsupported route for {service}: {reason}")]
	UnsupportedRoute { service: ServiceType, reason: String },

	#[error("Token pair not supported: {from} -> {to}")]
	UnsupportedTokenPair { from: String, to: String },
}
