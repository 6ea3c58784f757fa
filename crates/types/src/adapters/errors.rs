//! Error types for bridge service adapters

use thiserror::Error;

use crate::quotes::QuoteValidationError;
use crate::wallets::WalletError;

/// Adapter operation errors
#[derive(Error, Debug)]
pub enum AdapterError {
	#[error("Quote validation failed: {0}")]
	Validation(#[from] QuoteValidationError),

	#[error("HTTP request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("HTTP {status}: {message}")]
	Backend { status: u16, message: String },

	#[error("Invalid response format: {reason}")]
	InvalidResponse { reason: String },

	#[error("Fee estimation failed: {reason}")]
	Estimation { reason: String },

	#[error("Wallet error: {0}")]
	Wallet(#[from] WalletError),

	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),

	#[error("Unsupported operation: {operation} for service {service}")]
	UnsupportedOperation { operation: String, service: String },
}

impl AdapterError {
	/// Extract HTTP status code from the error if available
	pub fn status_code(&self) -> Option<u16> {
		match self {
			AdapterError::Backend { status, .. } => Some(*status),
			AdapterError::Http(reqwest_error) => {
				reqwest_error.status().map(|status| status.as_u16())
			},
			_ => None,
		}
	}

	/// Message returned by the service backend, if this error carries one
	///
	/// Used by error normalization, which rewrites known backend phrases
	/// into user-facing messages.
	pub fn backend_message(&self) -> Option<&str> {
		match self {
			AdapterError::Backend { message, .. } => Some(message),
			_ => None,
		}
	}

	pub fn invalid_response(reason: impl Into<String>) -> Self {
		Self::InvalidResponse {
			reason: reason.into(),
		}
	}
}
