//! Authentication configuration for backend requests
//!
//! Tokens are either set once on the configuration or produced on demand
//! by an async [`TokenProvider`], which lets callers plug in short-lived
//! credentials that refresh themselves.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use stableflow_types::constants::BEARER_TOKEN_ENV;
use stableflow_types::SecretString;

use crate::errors::ClientResult;

/// Produces a bearer token before each authenticated request
#[async_trait]
pub trait TokenProvider: Send + Sync {
	async fn token(&self) -> ClientResult<SecretString>;
}

/// Authentication configuration for backend requests
#[derive(Clone, Default)]
pub enum AuthConfig {
	/// No authentication header
	#[default]
	None,
	/// Fixed bearer token
	Bearer { token: SecretString },
	/// Token resolved lazily before each request
	Provider(Arc<dyn TokenProvider>),
}

impl AuthConfig {
	/// Fixed bearer token authentication
	pub fn bearer(token: impl Into<String>) -> Self {
		Self::Bearer {
			token: SecretString::from(token.into()),
		}
	}

	/// Token provider authentication (refresh-on-demand)
	pub fn provider(provider: Arc<dyn TokenProvider>) -> Self {
		Self::Provider(provider)
	}

	/// Read the bearer token from `STABLEFLOW_BEARER_TOKEN`, if set
	pub fn from_env() -> Self {
		match std::env::var(BEARER_TOKEN_ENV) {
			Ok(token) if !token.trim().is_empty() => Self::bearer(token),
			_ => Self::None,
		}
	}

	/// Resolve the token to send with the next request
	pub async fn bearer_token(&self) -> ClientResult<Option<SecretString>> {
		match self {
			AuthConfig::None => Ok(None),
			AuthConfig::Bearer { token } => Ok(Some(token.clone())),
			AuthConfig::Provider(provider) => provider.token().await.map(Some),
		}
	}
}

impl fmt::Debug for AuthConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			AuthConfig::None => write!(f, "AuthConfig::None"),
			AuthConfig::Bearer { .. } => write!(f, "AuthConfig::Bearer {{ token: [REDACTED] }}"),
			AuthConfig::Provider(_) => write!(f, "AuthConfig::Provider(..)"),
		}
	}
}
