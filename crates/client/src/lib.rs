//! StableFlow Client
//!
//! HTTP transport for the StableFlow backend: cached `reqwest` clients,
//! bearer/provider authentication, and one typed method per backend
//! endpoint. Bridge adapters and wallet capabilities build on this crate
//! instead of talking HTTP themselves.

pub mod api;
pub mod auth;
pub mod client_cache;
pub mod errors;

pub use api::ApiClient;
pub use auth::{AuthConfig, TokenProvider};
pub use client_cache::{global_client_cache, ClientCache, ClientConfig};
pub use errors::{ClientError, ClientResult};
