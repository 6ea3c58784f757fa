//! StableFlow SDK
//!
//! Cross-chain stablecoin bridging: one quote request fans out to every
//! bridge service a token pair supports (relay intents, native token
//! bridge, OFT bridge), and one interface executes the chosen quote and
//! tracks it to completion.
//!
//! ```no_run
//! use std::sync::Arc;
//! use stableflow_sdk::{SdkBuilder, USDC_TOKENS};
//! use stableflow_sdk::types::{Amount, PriceTable, QuoteRequest};
//! use stableflow_sdk::types::quotes::RelayOverrides;
//!
//! # async fn example(wallet: Arc<dyn stableflow_sdk::types::WalletAdapter>) -> Result<(), Box<dyn std::error::Error>> {
//! let sdk = SdkBuilder::new().build()?;
//! let results = sdk
//! 	.get_all_quote(
//! 		QuoteRequest {
//! 			from_token: USDC_TOKENS[1].clone(),
//! 			to_token: USDC_TOKENS[0].clone(),
//! 			amount_wei: Amount::from("1000000"),
//! 			slippage_tolerance_bps: 100,
//! 			refund_to: "0x...".to_string(),
//! 			recipient: "0x...".to_string(),
//! 			dry: true,
//! 			prices: PriceTable::new(),
//! 			min_input_amount: None,
//! 			single_service: None,
//! 			relay_params: RelayOverrides::default(),
//! 		},
//! 		wallet,
//! 	)
//! 	.await?;
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;
use tracing_subscriber::EnvFilter;

pub use stableflow_adapters as adapters;
pub use stableflow_client as client;
pub use stableflow_config as config;
pub use stableflow_service as service;
pub use stableflow_types as types;
pub use stableflow_wallets as wallets;

pub use stableflow_adapters::AdapterRegistry;
pub use stableflow_client::{ApiClient, AuthConfig, TokenProvider};
pub use stableflow_config::{
	ConfigError, LogFormat, LoggingSettings, RpcTable, Settings, TokenTable, USDC_TOKENS,
	USDT_TOKENS,
};
pub use stableflow_service::{BridgeService, ServiceError, ServiceResult};
pub use stableflow_types::{
	BridgeAdapter, NormalizedQuote, QuoteRequest, QuoteResult, ServiceType, StatusInfo,
	StatusQuery, WalletAdapter,
};

pub mod mocks;

/// Builder for a configured [`StableflowSdk`]
///
/// Everything is optional: the default build talks to the production
/// backend with the static token table and no authentication.
#[derive(Default)]
pub struct SdkBuilder {
	settings: Option<Settings>,
	base_url: Option<String>,
	auth: Option<AuthConfig>,
	rpc_urls: HashMap<String, Vec<String>>,
	tokens: Option<TokenTable>,
	extra_adapters: Vec<Arc<dyn BridgeAdapter>>,
}

impl SdkBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Use pre-loaded settings instead of the file/env loader
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Override the backend base URL
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = Some(base_url.into());
		self
	}

	/// Authenticate with a fixed bearer token
	pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
		self.auth = Some(AuthConfig::bearer(token));
		self
	}

	/// Authenticate through an async token provider (refresh-on-demand)
	pub fn with_token_provider(mut self, provider: Arc<dyn TokenProvider>) -> Self {
		self.auth = Some(AuthConfig::provider(provider));
		self
	}

	/// Prepend RPC URLs for chains, ahead of the built-in defaults
	pub fn with_rpc_urls(mut self, urls: HashMap<String, Vec<String>>) -> Self {
		self.rpc_urls.extend(urls);
		self
	}

	/// Replace the static token table
	pub fn with_tokens(mut self, tokens: TokenTable) -> Self {
		self.tokens = Some(tokens);
		self
	}

	/// Register an additional (or replacement) bridge adapter
	pub fn with_adapter(mut self, adapter: Arc<dyn BridgeAdapter>) -> Self {
		self.extra_adapters.push(adapter);
		self
	}

	pub fn build(self) -> Result<StableflowSdk, ConfigError> {
		// A missing .env file is not an error
		let _ = dotenvy::dotenv();

		let settings = match self.settings {
			Some(settings) => settings,
			None => stableflow_config::load_config()?,
		};
		settings.validate()?;

		let base_url = self
			.base_url
			.unwrap_or_else(|| settings.api.base_url.clone());
		let auth = match self.auth {
			Some(auth) => auth,
			None => match &settings.api.bearer_token {
				Some(token) => AuthConfig::bearer(token.clone()),
				None => AuthConfig::from_env(),
			},
		};

		let api = ApiClient::with_config(base_url, auth);
		let mut registry = AdapterRegistry::with_defaults(api.clone());
		for adapter in self.extra_adapters {
			registry.register(adapter);
		}

		let tokens = self.tokens.unwrap_or_default();
		let rpc = RpcTable::new();
		if !self.rpc_urls.is_empty() {
			rpc.set_rpc_urls(self.rpc_urls);
		}

		Ok(StableflowSdk {
			engine: BridgeService::new(registry, api.clone(), tokens),
			api,
			rpc,
			settings,
		})
	}
}

/// Configured SDK facade
///
/// Thin delegation layer over the aggregation engine plus the shared
/// RPC table and API client.
pub struct StableflowSdk {
	engine: BridgeService,
	api: ApiClient,
	rpc: RpcTable,
	settings: Settings,
}

impl StableflowSdk {
	pub fn builder() -> SdkBuilder {
		SdkBuilder::new()
	}

	/// Quote every bridge service the token pair is eligible for
	pub async fn get_all_quote(
		&self,
		request: QuoteRequest,
		wallet: Arc<dyn WalletAdapter>,
	) -> ServiceResult<Vec<QuoteResult>> {
		self.engine.get_all_quote(request, wallet).await
	}

	/// Execute a quote through the wallet; returns the deposit tx hash
	pub async fn send(
		&self,
		service: ServiceType,
		quote: &NormalizedQuote,
		wallet: Arc<dyn WalletAdapter>,
	) -> ServiceResult<String> {
		self.engine.send(service, quote, wallet).await
	}

	/// Canonical status of a sent transfer
	pub async fn get_status(
		&self,
		service: ServiceType,
		query: &StatusQuery,
	) -> ServiceResult<StatusInfo> {
		self.engine.get_status(service, query).await
	}

	/// Report a deposit transaction the service cannot observe itself
	pub async fn submit_deposit(
		&self,
		service: ServiceType,
		query: &StatusQuery,
	) -> ServiceResult<()> {
		self.engine.submit_deposit(service, query).await
	}

	pub fn engine(&self) -> &BridgeService {
		&self.engine
	}

	pub fn api(&self) -> &ApiClient {
		&self.api
	}

	pub fn settings(&self) -> &Settings {
		&self.settings
	}

	/// RPC URLs for a chain key, highest priority first
	pub fn get_rpc_urls(&self, chain: &str) -> Vec<String> {
		self.rpc.get(chain)
	}

	/// Prepend RPC URLs; existing entries are kept, duplicates skipped
	pub fn set_rpc_urls(&self, urls: HashMap<String, Vec<String>>) {
		self.rpc.set_rpc_urls(urls);
	}

	pub fn rpc_table(&self) -> &RpcTable {
		&self.rpc
	}
}

/// Initialize the global tracing subscriber from logging settings
///
/// `RUST_LOG` wins over the configured level. Calling this twice is
/// harmless; the second call is ignored.
pub fn init_tracing(settings: &LoggingSettings) {
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level));
	let builder = tracing_subscriber::fmt().with_env_filter(filter);

	let format = if settings.structured {
		LogFormat::Json
	} else {
		settings.format.clone()
	};
	let initialized = match format {
		LogFormat::Json => builder.json().try_init(),
		LogFormat::Pretty => builder.pretty().try_init(),
		LogFormat::Compact => builder.compact().try_init(),
	};
	if initialized.is_err() {
		debug!("tracing subscriber already installed");
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_builder_defaults() {
		let sdk = SdkBuilder::new()
			.with_settings(Settings::default())
			.build()
			.unwrap();
		assert_eq!(
			sdk.api().base_url(),
			stableflow_types::constants::DEFAULT_BASE_URL
		);
		// All three built-in adapters are registered
		assert_eq!(sdk.engine().registry().len(), 3);
	}

	#[test]
	fn test_builder_base_url_override_wins() {
		let mut settings = Settings::default();
		settings.api.base_url = "https://staging.stableflow.ai".to_string();
		let sdk = SdkBuilder::new()
			.with_settings(settings)
			.with_base_url("http://localhost:8080")
			.build()
			.unwrap();
		assert_eq!(sdk.api().base_url(), "http://localhost:8080");
	}

	#[test]
	fn test_builder_rejects_invalid_settings() {
		let mut settings = Settings::default();
		settings.api.base_url = "not-a-url".to_string();
		assert!(SdkBuilder::new().with_settings(settings).build().is_err());
	}

	#[test]
	fn test_rpc_urls_flow_through() {
		let sdk = SdkBuilder::new()
			.with_settings(Settings::default())
			.with_rpc_urls(HashMap::from([(
				"sol".to_string(),
				vec!["https://my-private-rpc".to_string()],
			)]))
			.build()
			.unwrap();

		let urls = sdk.get_rpc_urls("sol");
		assert_eq!(urls[0], "https://my-private-rpc");
		// Defaults stay behind the override
		assert!(urls.len() > 1);
	}
}
