//! StableFlow Types
//!
//! Shared models and traits for the StableFlow bridging SDK.
//! This crate contains the domain models (tokens, services, amounts,
//! statuses), the backend wire types, and the capability traits
//! implemented by bridge adapters and chain wallets.

pub mod adapters;
pub mod constants;
pub mod models;
pub mod quotes;
pub mod wallets;
pub mod wire;

// Re-export chrono, rust_decimal and serde_json for convenience
pub use chrono;
pub use rust_decimal;
pub use serde_json;

// Re-export commonly used types for convenience
pub use models::{
	Amount, CanonicalStatus, ChainType, NativeToken, PriceTable, SecretString, ServiceType,
	StatusInfo, TokenConfig,
};

pub use quotes::{
	NormalizedQuote, QuoteParams, QuoteRequest, QuoteResult, QuoteValidationError,
	QuoteValidationResult, RelayOverrides,
};

pub use adapters::{AdapterError, AdapterResult, BridgeAdapter, RawStatus, StatusQuery};

pub use wallets::{
	GasEstimate, SendRequest, TransferParams, WalletAdapter, WalletError, WalletQuote,
	WalletQuoteParams, WalletResult,
};

pub use wire::{
	AppFee, DepositMode, DepositType, ExecutionStatus, ExecutionStatusResponse, RecipientType,
	RefundType, RelayQuote, RelayQuoteRequest, RelayQuoteResponse, SignTransferRequest,
	SignTransferResponse, SubmitDepositTxRequest, SwapDetails, SwapType, TokenListing,
	TradeRecord, TradeReport, TransactionDetails,
};
