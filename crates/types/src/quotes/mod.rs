//! Quote request/response models shared across the SDK

pub mod errors;
pub mod request;
pub mod response;

pub use errors::QuoteValidationError;
pub use request::{QuoteRequest, RelayOverrides, MAX_SLIPPAGE_BPS};
pub use response::{NormalizedQuote, QuoteParams, QuoteResult};

/// Result type for quote validation operations
pub type QuoteValidationResult<T> = Result<T, QuoteValidationError>;
