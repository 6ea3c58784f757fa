//! StableFlow quote aggregation engine
//!
//! Fans a quote request out to every eligible bridge service, executes
//! quotes through the caller's wallet, and collapses backend statuses
//! into the canonical pending/success/failed shape.

pub mod engine;
pub mod errors;
pub mod normalize;
pub mod status;

pub use engine::BridgeService;
pub use errors::{ServiceError, ServiceResult};
pub use normalize::normalize_quote_error;
pub use status::translate_status;
