//! Backend wire types
//!
//! Request/response bodies exactly as the backend speaks them. Relay
//! endpoints use camelCase; the native-bridge co-sign and trade endpoints
//! use snake_case. Response types stay tolerant (unknown fields ignored,
//! absent fields defaulted) so backend additions never break parsing.

pub mod deposit;
pub mod quote;
pub mod sign;
pub mod status;
pub mod token;
pub mod trade;

pub use deposit::SubmitDepositTxRequest;
pub use quote::{
	new_session_id, AppFee, DepositMode, DepositType, RecipientType, RefundType, RelayQuote,
	RelayQuoteRequest, RelayQuoteResponse, SwapType,
};
pub use sign::{SignTransferRequest, SignTransferResponse};
pub use status::{ExecutionStatus, ExecutionStatusResponse, SwapDetails, TransactionDetails};
pub use token::TokenListing;
pub use trade::{TradeRecord, TradeReport};
