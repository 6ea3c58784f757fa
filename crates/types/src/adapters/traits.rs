//! Core adapter trait implemented by every bridge service

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::ServiceType;
use crate::quotes::{NormalizedQuote, QuoteRequest};
use crate::wallets::WalletAdapter;
use crate::wire::{ExecutionStatusResponse, TradeRecord};

use super::{AdapterError, AdapterResult};

/// Lookup key for transfer status
///
/// Relay transfers are tracked by deposit address (plus memo on chains
/// that route by memo); trade-table services are tracked by the deposit
/// transaction hash.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusQuery {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub hash: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub deposit_address: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub deposit_memo: Option<String>,
}

impl StatusQuery {
	pub fn for_hash(hash: impl Into<String>) -> Self {
		Self {
			hash: Some(hash.into()),
			..Self::default()
		}
	}

	pub fn for_deposit_address(address: impl Into<String>) -> Self {
		Self {
			deposit_address: Some(address.into()),
			..Self::default()
		}
	}
}

/// Raw service status before translation into the canonical shape
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawStatus {
	Relay(ExecutionStatusResponse),
	Trade(TradeRecord),
}

/// Core trait for bridge service implementations
///
/// This trait defines the interface that all bridge services must
/// implement. Users can plug in custom services by implementing it.
#[async_trait]
pub trait BridgeAdapter: Send + Sync + Debug {
	/// Service identifier (for registration and routing)
	fn service_type(&self) -> ServiceType;

	/// Get a quote for the requested transfer
	///
	/// The wallet is consulted for chains where the deposit runs through
	/// a proxy contract and must be built and simulated locally.
	async fn get_quote(
		&self,
		request: &QuoteRequest,
		wallet: Arc<dyn WalletAdapter>,
	) -> AdapterResult<NormalizedQuote>;

	/// Execute a previously returned quote through the wallet
	///
	/// Returns the deposit transaction hash.
	async fn send(
		&self,
		quote: &NormalizedQuote,
		wallet: Arc<dyn WalletAdapter>,
	) -> AdapterResult<String>;

	/// Fetch the raw transfer status from the service backend
	async fn get_status(&self, query: &StatusQuery) -> AdapterResult<RawStatus>;

	/// Report a deposit transaction hash back to the service
	///
	/// Default implementation returns UnsupportedOperation error.
	/// Override this method if the service tracks deposits it cannot
	/// observe on its own.
	async fn submit_hash(&self, _query: &StatusQuery) -> AdapterResult<()> {
		Err(AdapterError::UnsupportedOperation {
			operation: "submit_hash".to_string(),
			service: self.service_type().to_string(),
		})
	}
}
