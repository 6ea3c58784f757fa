//! Error types for the HTTP transport layer

use thiserror::Error;

use stableflow_types::{AdapterError, WalletError};

/// Transport and backend errors
#[derive(Error, Debug)]
pub enum ClientError {
	#[error("HTTP request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("HTTP {status}: {message}")]
	HttpStatus { status: u16, message: String },

	#[error("Invalid URL '{url}': {reason}")]
	InvalidUrl { url: String, reason: String },

	#[error("Failed to parse response from {endpoint}: {reason}")]
	InvalidResponse { endpoint: String, reason: String },

	#[error("Authentication failed: {reason}")]
	Auth { reason: String },
}

pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
	pub fn auth(reason: impl Into<String>) -> Self {
		Self::Auth {
			reason: reason.into(),
		}
	}

	/// HTTP status code carried by the error, if any
	pub fn status_code(&self) -> Option<u16> {
		match self {
			ClientError::HttpStatus { status, .. } => Some(*status),
			ClientError::Http(e) => e.status().map(|s| s.as_u16()),
			_ => None,
		}
	}
}

impl From<ClientError> for AdapterError {
	fn from(error: ClientError) -> Self {
		match error {
			ClientError::Http(e) => AdapterError::Http(e),
			ClientError::HttpStatus { status, message } => {
				AdapterError::Backend { status, message }
			},
			ClientError::InvalidUrl { url, reason } => AdapterError::InvalidResponse {
				reason: format!("invalid URL '{}': {}", url, reason),
			},
			ClientError::InvalidResponse { endpoint, reason } => AdapterError::InvalidResponse {
				reason: format!("{}: {}", endpoint, reason),
			},
			ClientError::Auth { reason } => AdapterError::Backend {
				status: 401,
				message: reason,
			},
		}
	}
}

impl From<ClientError> for WalletError {
	fn from(error: ClientError) -> Self {
		match error {
			ClientError::Http(e) => WalletError::Http(e),
			ClientError::HttpStatus { status, message } => WalletError::Rpc {
				reason: format!("HTTP {}: {}", status, message),
			},
			other => WalletError::Rpc {
				reason: other.to_string(),
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_backend_status_maps_to_adapter_backend() {
		let error = ClientError::HttpStatus {
			status: 400,
			message: "Failed to get quote".to_string(),
		};
		let adapter_error: AdapterError = error.into();
		assert_eq!(adapter_error.status_code(), Some(400));
		assert_eq!(adapter_error.backend_message(), Some("Failed to get quote"));
	}

	#[test]
	fn test_auth_failure_surfaces_as_401() {
		let error = ClientError::auth("token provider returned no token");
		assert_eq!(error.status_code(), None);

		let adapter_error: AdapterError = error.into();
		assert_eq!(adapter_error.status_code(), Some(401));
	}
}
