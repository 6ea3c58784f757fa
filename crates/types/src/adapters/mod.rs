//! Bridge service adapter contract

pub mod errors;
pub mod traits;

pub use errors::AdapterError;
pub use traits::{BridgeAdapter, RawStatus, StatusQuery};

/// Result type for adapter operations
pub type AdapterResult<T> = Result<T, AdapterError>;
