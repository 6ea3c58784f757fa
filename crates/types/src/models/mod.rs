//! Shared domain models used across adapters, wallets, and the engine

pub mod amount;
pub mod chain;
pub mod prices;
pub mod secret_string;
pub mod service;
pub mod status;
pub mod token;

pub use amount::{format_normalized, to_human_units, Amount};
pub use chain::ChainType;
pub use prices::PriceTable;
pub use secret_string::SecretString;
pub use service::ServiceType;
pub use status::{CanonicalStatus, StatusInfo};
pub use token::{NativeToken, TokenConfig};
