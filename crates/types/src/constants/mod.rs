//! Constants shared across the SDK

pub mod defaults;

pub use defaults::*;
