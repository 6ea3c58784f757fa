//! Quote aggregation and execution engine

use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, info, warn};

use stableflow_adapters::AdapterRegistry;
use stableflow_client::ApiClient;
use stableflow_config::TokenTable;
use stableflow_types::constants::PROJECT_TAG;
use stableflow_types::quotes::QuoteValidationError;
use stableflow_types::wire::TradeReport;
use stableflow_types::{
	NormalizedQuote, QuoteRequest, QuoteResult, ServiceType, StatusInfo, StatusQuery, TokenConfig,
	WalletAdapter,
};

use crate::errors::{ServiceError, ServiceResult};
use crate::normalize::{normalize_quote_error, GENERIC_FAILURE};
use crate::status::translate_status;

/// Front door of the SDK: fans quotes out, executes them, tracks status
///
/// Stateless between calls; quotes echo everything `send` and
/// `get_status` need, so the engine holds only its collaborators.
pub struct BridgeService {
	registry: Arc<AdapterRegistry>,
	client: ApiClient,
	tokens: Arc<TokenTable>,
}

impl BridgeService {
	pub fn new(registry: AdapterRegistry, client: ApiClient, tokens: TokenTable) -> Self {
		Self {
			registry: Arc::new(registry),
			client,
			tokens: Arc::new(tokens),
		}
	}

	pub fn registry(&self) -> &AdapterRegistry {
		&self.registry
	}

	pub fn tokens(&self) -> &TokenTable {
		&self.tokens
	}

	/// Quote every service both tokens are eligible for
	///
	/// Validation failures abort the whole call before any network
	/// traffic. Past that point each service settles independently: one
	/// entry per eligible service, success or normalized error, in no
	/// guaranteed order.
	pub async fn get_all_quote(
		&self,
		request: QuoteRequest,
		wallet: Arc<dyn WalletAdapter>,
	) -> ServiceResult<Vec<QuoteResult>> {
		request.validate()?;
		self.check_token_pair(&request)?;

		let eligible: Vec<ServiceType> = ServiceType::all()
			.iter()
			.copied()
			.filter(|s| request.from_token.supports(*s) && request.to_token.supports(*s))
			.collect();
		debug!("eligible services: {:?}", eligible);

		if let Some(single) = request.single_service {
			// Ineligible single-service requests yield no results, not an error
			if !eligible.contains(&single) {
				return Ok(Vec::new());
			}
			return Ok(vec![self.quote_one(single, &request, wallet).await]);
		}

		let tasks: Vec<_> = eligible
			.iter()
			.map(|service| {
				let service = *service;
				let engine_registry = Arc::clone(&self.registry);
				let request = request.clone();
				let wallet = Arc::clone(&wallet);
				tokio::spawn(async move {
					quote_with_registry(&engine_registry, service, &request, wallet).await
				})
			})
			.collect();

		let settled = join_all(tasks).await;
		let results = eligible
			.into_iter()
			.zip(settled)
			.map(|(service, joined)| match joined {
				Ok(result) => result,
				Err(join_error) => {
					warn!("quote task for {} aborted: {}", service, join_error);
					QuoteResult::err(service, GENERIC_FAILURE)
				},
			})
			.collect();
		Ok(results)
	}

	async fn quote_one(
		&self,
		service: ServiceType,
		request: &QuoteRequest,
		wallet: Arc<dyn WalletAdapter>,
	) -> QuoteResult {
		quote_with_registry(&self.registry, service, request, wallet).await
	}

	/// Execute a quote and report the deposit to backend telemetry
	pub async fn send(
		&self,
		service: ServiceType,
		quote: &NormalizedQuote,
		wallet: Arc<dyn WalletAdapter>,
	) -> ServiceResult<String> {
		let adapter = self
			.registry
			.get(service)
			.ok_or_else(|| ServiceError::UnknownService {
				service: service.to_string(),
			})?;

		let hash = adapter.send(quote, Arc::clone(&wallet)).await?;
		info!("sent {} deposit: {}", service, hash);

		self.report_trade(quote, &wallet, hash.clone());
		Ok(hash)
	}

	/// Canonical status of a previously sent transfer
	pub async fn get_status(
		&self,
		service: ServiceType,
		query: &StatusQuery,
	) -> ServiceResult<StatusInfo> {
		let adapter = self
			.registry
			.get(service)
			.ok_or_else(|| ServiceError::UnknownService {
				service: service.to_string(),
			})?;
		let raw = adapter.get_status(query).await?;
		Ok(translate_status(&raw))
	}

	/// Notify the service of a deposit transaction it cannot observe
	pub async fn submit_deposit(
		&self,
		service: ServiceType,
		query: &StatusQuery,
	) -> ServiceResult<()> {
		let adapter = self
			.registry
			.get(service)
			.ok_or_else(|| ServiceError::UnknownService {
				service: service.to_string(),
			})?;
		adapter.submit_hash(query).await?;
		Ok(())
	}

	fn check_token_pair(&self, request: &QuoteRequest) -> ServiceResult<()> {
		let known = |token: &TokenConfig| self.tokens.contains_contract(&token.contract_address);
		if !known(&request.from_token) || !known(&request.to_token) {
			return Err(ServiceError::Validation(
				QuoteValidationError::UnsupportedTokenPair {
					from: request.from_token.contract_address.clone(),
					to: request.to_token.contract_address.clone(),
				},
			));
		}
		Ok(())
	}

	/// Fire-and-forget telemetry; failures are logged and discarded
	fn report_trade(&self, quote: &NormalizedQuote, wallet: &Arc<dyn WalletAdapter>, hash: String) {
		let params = &quote.quote_param;
		let report = TradeReport {
			project: PROJECT_TAG.to_string(),
			address: wallet.address().unwrap_or_default(),
			receive_address: params.recipient.clone(),
			amount: params.amount_wei.to_string(),
			tx_hash: Some(hash),
			deposit_address: quote.deposit_address.clone(),
			fee: Some(quote.total_fees_usd.clone()),
			source_domain_id: params.source_domain,
			destination_domain_id: params.destination_domain,
		};
		let client = self.client.clone();
		tokio::spawn(async move {
			if let Err(error) = client.add_trade(&report).await {
				warn!("trade report failed: {}", error);
			}
		});
	}
}

async fn quote_with_registry(
	registry: &AdapterRegistry,
	service: ServiceType,
	request: &QuoteRequest,
	wallet: Arc<dyn WalletAdapter>,
) -> QuoteResult {
	let Some(adapter) = registry.get(service) else {
		return QuoteResult::err(service, format!("no adapter registered for {}", service));
	};
	match adapter.get_quote(request, wallet).await {
		Ok(quote) => QuoteResult::ok(quote),
		Err(error) => {
			debug!("{} quote failed: {}", service, error);
			QuoteResult::err(
				service,
				normalize_quote_error(service, &error, &request.from_token),
			)
		},
	}
}
