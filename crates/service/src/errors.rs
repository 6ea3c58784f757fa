//! Engine-level error types

use thiserror::Error;

use stableflow_types::quotes::QuoteValidationError;
use stableflow_types::AdapterError;

/// Errors raised by the aggregation engine itself
///
/// Per-service quote failures never appear here; they are folded into
/// `QuoteResult.error` entries. This enum covers pre-fan-out validation
/// and the direct `send`/`get_status`/`submit_deposit` paths.
#[derive(Error, Debug)]
pub enum ServiceError {
	#[error("Quote validation failed: {0}")]
	Validation(#[from] QuoteValidationError),

	#[error("Adapter error: {0}")]
	Adapter(#[from] AdapterError),

	#[error("No adapter registered for service {service}")]
	UnknownService { service: String },
}

pub type ServiceResult<T> = Result<T, ServiceError>;
