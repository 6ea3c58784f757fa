//! Core wallet trait for user implementations

use async_trait::async_trait;

use crate::models::{Amount, ChainType, ServiceType, TokenConfig};

use super::{
	GasEstimate, SendRequest, TransferParams, WalletError, WalletQuote, WalletQuoteParams,
	WalletResult,
};

/// Core trait for chain wallet implementations
///
/// This trait defines the interface bridge services use to interact with
/// the caller's wallet. Users can bring custom signers by implementing it.
#[async_trait]
pub trait WalletAdapter: Send + Sync {
	/// Chain family this wallet signs for
	fn chain_type(&self) -> ChainType;

	/// Address of the connected account
	fn address(&self) -> WalletResult<String>;

	/// Balance of a token in smallest units
	async fn balance_of(&self, token: &TokenConfig) -> WalletResult<Amount>;

	/// Transfer tokens and return the transaction hash
	async fn transfer(&self, params: &TransferParams) -> WalletResult<String>;

	/// Estimate the gas cost of a transfer without executing it
	async fn estimate_transfer_gas(&self, params: &TransferParams) -> WalletResult<GasEstimate>;

	/// Build and price a service-specific deposit transaction
	///
	/// Default implementation returns UnsupportedOperation error.
	/// Override this method for chains whose services deposit through a proxy.
	async fn quote(
		&self,
		service: ServiceType,
		_params: &WalletQuoteParams,
	) -> WalletResult<WalletQuote> {
		Err(WalletError::UnsupportedOperation {
			operation: format!("quote for {}", service),
			chain: self.chain_type().to_string(),
		})
	}

	/// Execute a send request and return the transaction hash
	async fn send(&self, request: &SendRequest) -> WalletResult<String>;

	/// Current allowance granted to a spender, in smallest units
	///
	/// Default implementation returns UnsupportedOperation error.
	/// Override this method on chains with an allowance model.
	async fn allowance(&self, _token: &TokenConfig, _spender: &str) -> WalletResult<Amount> {
		Err(WalletError::UnsupportedOperation {
			operation: "allowance".to_string(),
			chain: self.chain_type().to_string(),
		})
	}

	/// Grant an allowance to a spender and return the transaction hash
	///
	/// Default implementation returns UnsupportedOperation error.
	async fn approve(
		&self,
		_token: &TokenConfig,
		_spender: &str,
		_amount: &Amount,
	) -> WalletResult<String> {
		Err(WalletError::UnsupportedOperation {
			operation: "approve".to_string(),
			chain: self.chain_type().to_string(),
		})
	}
}
