//! Configuration for the StableFlow SDK
//!
//! Settings loaded from file/environment, the per-chain RPC endpoint
//! table, and the static token configuration table.

pub mod loader;
pub mod rpc;
pub mod settings;
pub mod tokens;

pub use loader::load_config;
pub use rpc::{RpcTable, DEFAULT_RPC_URLS};
pub use settings::{ApiSettings, LogFormat, LoggingSettings, Settings};
pub use tokens::{TokenTable, USDC_TOKENS, USDT_TOKENS};

use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("Failed to load configuration: {0}")]
	Load(#[from] config::ConfigError),

	#[error("Invalid configuration for {field}: {reason}")]
	Invalid { field: String, reason: String },
}
