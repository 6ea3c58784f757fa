//! Error types for wallet operations

use thiserror::Error;

/// Wallet operation errors
#[derive(Error, Debug)]
pub enum WalletError {
	#[error("Wallet is not connected")]
	NotConnected,

	#[error("HTTP request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("RPC call failed: {reason}")]
	Rpc { reason: String },

	#[error("Transaction failed: {reason}")]
	Transaction { reason: String },

	#[error("Invalid address {address}: {reason}")]
	InvalidAddress { address: String, reason: String },

	#[error("Signing failed: {reason}")]
	Signing { reason: String },

	#[error("Unknown asset: {asset_id}")]
	UnknownAsset { asset_id: String },

	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),

	#[error("Unsupported operation: {operation} for {chain} wallets")]
	UnsupportedOperation { operation: String, chain: String },
}

impl WalletError {
	pub fn rpc(reason: impl Into<String>) -> Self {
		Self::Rpc {
			reason: reason.into(),
		}
	}

	pub fn transaction(reason: impl Into<String>) -> Self {
		Self::Transaction {
			reason: reason.into(),
		}
	}
}
