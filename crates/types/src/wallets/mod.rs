//! Wallet abstraction consumed by bridge services

pub mod errors;
pub mod params;
pub mod traits;

pub use errors::WalletError;
pub use params::{GasEstimate, SendRequest, TransferParams, WalletQuote, WalletQuoteParams};
pub use traits::WalletAdapter;

/// Result type for wallet operations
pub type WalletResult<T> = Result<T, WalletError>;
