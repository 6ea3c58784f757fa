//! Typed endpoints for the StableFlow backend
//!
//! One method per backend operation. Every call resolves the auth token,
//! borrows a pooled client from the cache, and parses the response body
//! as text first so malformed payloads surface with context.

use std::sync::Arc;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use stableflow_types::constants::DEFAULT_BASE_URL;
use stableflow_types::wire::{
	RelayQuoteRequest, RelayQuoteResponse, SignTransferRequest, SignTransferResponse,
	SubmitDepositTxRequest, TokenListing, TradeRecord, TradeReport,
};
use stableflow_types::ExecutionStatusResponse;

use crate::auth::AuthConfig;
use crate::client_cache::{global_client_cache, ClientCache, ClientConfig};
use crate::errors::{ClientError, ClientResult};

/// HTTP client for the StableFlow backend API
#[derive(Debug, Clone)]
pub struct ApiClient {
	base_url: String,
	auth: AuthConfig,
	cache: ClientCache,
}

impl ApiClient {
	/// Client against the production backend, token from the environment
	pub fn new() -> Self {
		Self::with_config(DEFAULT_BASE_URL, AuthConfig::from_env())
	}

	/// Client against a custom base URL, token from the environment
	pub fn with_base_url(base_url: impl Into<String>) -> Self {
		Self::with_config(base_url, AuthConfig::from_env())
	}

	pub fn with_config(base_url: impl Into<String>, auth: AuthConfig) -> Self {
		Self {
			base_url: base_url.into(),
			auth,
			cache: global_client_cache().clone(),
		}
	}

	/// Replace the client cache (useful for tests with short TTLs)
	pub fn with_cache(mut self, cache: ClientCache) -> Self {
		self.cache = cache;
		self
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	/// Properly construct URL by joining the base endpoint with a path
	fn build_url(&self, path: &str) -> ClientResult<String> {
		let mut base = Url::parse(&self.base_url).map_err(|e| ClientError::InvalidUrl {
			url: self.base_url.clone(),
			reason: e.to_string(),
		})?;

		// Ensure the base URL is treated as a directory by ensuring it ends with a slash
		if !base.path().ends_with('/') {
			base.set_path(&format!("{}/", base.path()));
		}

		let joined = base.join(path).map_err(|e| ClientError::InvalidUrl {
			url: format!("{}/{}", self.base_url, path),
			reason: e.to_string(),
		})?;

		Ok(joined.to_string())
	}

	/// Borrow a pooled client carrying the current auth header
	async fn client(&self) -> ClientResult<Arc<Client>> {
		let mut config = ClientConfig::new(&self.base_url);
		if let Some(token) = self.auth.bearer_token().await? {
			config = config.with_bearer(token.expose_secret());
		}
		self.cache.get_client(&config)
	}

	/// Parse a response, mapping backend failures to `HttpStatus`
	async fn read_json<T: DeserializeOwned>(
		response: reqwest::Response,
		endpoint: &str,
	) -> ClientResult<T> {
		let status = response.status();
		let body = response.text().await.unwrap_or_default();

		if !status.is_success() {
			let message = extract_backend_message(&body, status.as_u16());
			warn!("Backend {} returned HTTP {}: {}", endpoint, status, message);
			return Err(ClientError::HttpStatus {
				status: status.as_u16(),
				message,
			});
		}

		serde_json::from_str(&body).map_err(|e| ClientError::InvalidResponse {
			endpoint: endpoint.to_string(),
			reason: e.to_string(),
		})
	}

	/// List tokens supported by the backend, with current USD prices
	pub async fn get_tokens(&self) -> ClientResult<Vec<TokenListing>> {
		let url = self.build_url("v0/tokens")?;
		debug!("Fetching token listing from {}", url);

		let response = self.client().await?.get(&url).send().await?;
		Self::read_json(response, "v0/tokens").await
	}

	/// Request a relay swap quote
	pub async fn get_quote(&self, request: &RelayQuoteRequest) -> ClientResult<RelayQuoteResponse> {
		let url = self.build_url("v0/quote")?;
		debug!(
			"Requesting relay quote from {} (session: {})",
			url, request.session_id
		);

		let response = self.client().await?.post(&url).json(request).send().await?;
		Self::read_json(response, "v0/quote").await
	}

	/// Fetch the execution status of a relay transfer
	pub async fn get_execution_status(
		&self,
		deposit_address: &str,
		deposit_memo: Option<&str>,
	) -> ClientResult<ExecutionStatusResponse> {
		let url = self.build_url("v0/status")?;
		debug!("Fetching execution status for deposit {}", deposit_address);

		let mut query = vec![("depositAddress", deposit_address)];
		if let Some(memo) = deposit_memo {
			query.push(("depositMemo", memo));
		}

		let response = self
			.client()
			.await?
			.get(&url)
			.query(&query)
			.send()
			.await?;
		Self::read_json(response, "v0/status").await
	}

	/// Notify the backend of a sent deposit transaction
	pub async fn submit_deposit_tx(
		&self,
		request: &SubmitDepositTxRequest,
	) -> ClientResult<serde_json::Value> {
		let url = self.build_url("v0/deposit/submit")?;
		debug!(
			"Submitting deposit tx {} for {}",
			request.tx_hash, request.deposit_address
		);

		let response = self.client().await?.post(&url).json(request).send().await?;
		Self::read_json(response, "v0/deposit/submit").await
	}

	/// Request a backend co-signature for a native-bridge transfer
	pub async fn sign_transfer(
		&self,
		request: &SignTransferRequest,
	) -> ClientResult<SignTransferResponse> {
		let url = self.build_url("v0/cctp/sign")?;
		debug!(
			"Requesting co-signature for {} -> {} (domains {} -> {})",
			request.address,
			request.receipt_address,
			request.source_domain_id,
			request.destination_domain_id
		);

		let response = self.client().await?.post(&url).json(request).send().await?;
		Self::read_json(response, "v0/cctp/sign").await
	}

	/// Fetch the native-bridge trade record for a deposit
	pub async fn get_trade(&self, deposit_address: &str) -> ClientResult<TradeRecord> {
		let url = self.build_url("v0/trade")?;
		debug!("Fetching trade record for {}", deposit_address);

		let response = self
			.client()
			.await?
			.get(&url)
			.query(&[("deposit_address", deposit_address)])
			.send()
			.await?;
		Self::read_json(response, "v0/trade").await
	}

	/// Report a sent transfer to the backend (telemetry; caller ignores failures)
	pub async fn add_trade(&self, report: &TradeReport) -> ClientResult<()> {
		let url = self.build_url("v0/trade/add")?;
		debug!("Reporting trade for {}", report.address);

		let response = self.client().await?.post(&url).json(report).send().await?;
		let status = response.status();
		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			return Err(ClientError::HttpStatus {
				status: status.as_u16(),
				message: extract_backend_message(&body, status.as_u16()),
			});
		}
		Ok(())
	}
}

impl Default for ApiClient {
	fn default() -> Self {
		Self::new()
	}
}

/// Pull the human-readable message out of an error body
///
/// The backend wraps errors as `{"message": "..."}`; anything else is
/// used as-is, and an empty body falls back to the status code.
fn extract_backend_message(body: &str, status: u16) -> String {
	if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
		if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
			return message.to_string();
		}
	}
	let trimmed = body.trim();
	if trimmed.is_empty() {
		format!("HTTP {}", status)
	} else {
		trimmed.to_string()
	}
}
