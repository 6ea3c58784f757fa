//! Token bridge adapter (burn-and-mint)
//!
//! Routes transfers by numeric domain id. All amount and fee math lives
//! in the chain wallet capability: the adapter resolves the domain pair
//! and the origin-chain proxy program, delegates quoting to the wallet,
//! and tracks transfers through the trade table.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use stableflow_client::ApiClient;
use stableflow_types::constants::FEE_ESTIMATE_APPROVE_GAS_USD;
use stableflow_types::models::format_normalized;
use stableflow_types::{
	AdapterError, AdapterResult, BridgeAdapter, NormalizedQuote, QuoteParams, QuoteRequest,
	QuoteValidationError, RawStatus, SendRequest, ServiceType, StatusQuery, WalletAdapter,
	WalletQuoteParams,
};

use crate::{merge_wallet_quote, sum_fees};

/// Fee keys reported but left out of `totalFeesUsd`
const EXCLUDED_FEES: &[&str] = &[FEE_ESTIMATE_APPROVE_GAS_USD];

/// Burn/mint domain ids keyed by chain name
const DOMAINS: &[(&str, u32)] = &[
	("Ethereum", 0),
	("Avalanche", 1),
	("Optimism", 2),
	("Arbitrum", 3),
	("Solana", 5),
	("Base", 6),
	("Polygon", 7),
];

/// Origin-chain proxy programs keyed by chain name
const TOKEN_BRIDGE_PROXY: &[(&str, &str)] =
	&[("Solana", "8LRoKp3GwFdXnwCT8PFTVRnPXM1CnRZpPyVDdkXgCBSy")];

fn domain_for(chain_name: &str) -> Option<u32> {
	DOMAINS
		.iter()
		.find(|(chain, _)| *chain == chain_name)
		.map(|(_, domain)| *domain)
}

fn proxy_for(chain_name: &str) -> Option<&'static str> {
	TOKEN_BRIDGE_PROXY
		.iter()
		.find(|(chain, _)| *chain == chain_name)
		.map(|(_, proxy)| *proxy)
}

/// Adapter for the native burn-and-mint token bridge
#[derive(Debug, Clone)]
pub struct TokenBridgeAdapter {
	client: ApiClient,
}

impl TokenBridgeAdapter {
	pub fn new(client: ApiClient) -> Self {
		Self { client }
	}

	fn unsupported_route(reason: impl Into<String>) -> AdapterError {
		AdapterError::Validation(QuoteValidationError::UnsupportedRoute {
			service: ServiceType::TokenBridge,
			reason: reason.into(),
		})
	}
}

#[async_trait]
impl BridgeAdapter for TokenBridgeAdapter {
	fn service_type(&self) -> ServiceType {
		ServiceType::TokenBridge
	}

	async fn get_quote(
		&self,
		request: &QuoteRequest,
		wallet: Arc<dyn WalletAdapter>,
	) -> AdapterResult<NormalizedQuote> {
		let source_domain = domain_for(&request.from_token.chain_name).ok_or_else(|| {
			Self::unsupported_route(format!(
				"no burn domain for origin chain {}",
				request.from_token.chain_name
			))
		})?;
		let destination_domain = domain_for(&request.to_token.chain_name).ok_or_else(|| {
			Self::unsupported_route(format!(
				"no mint domain for destination chain {}",
				request.to_token.chain_name
			))
		})?;
		let proxy = proxy_for(&request.from_token.chain_name).ok_or_else(|| {
			Self::unsupported_route(format!(
				"no proxy program on origin chain {}",
				request.from_token.chain_name
			))
		})?;
		debug!(
			"token-bridge route: domain {} -> {} via {}",
			source_domain, destination_domain, proxy
		);

		let params = WalletQuoteParams {
			proxy_address: proxy.to_string(),
			from_token: request.from_token.clone(),
			to_token: Some(request.to_token.clone()),
			amount_wei: request.amount_wei.clone(),
			prices: request.prices.clone(),
			refund_to: request.refund_to.clone(),
			recipient: request.recipient.clone(),
			deposit_address: None,
			slippage_tolerance_bps: Some(request.slippage_tolerance_bps),
			exclude_fees: EXCLUDED_FEES.iter().map(|s| s.to_string()).collect(),
			source_domain: Some(source_domain),
			destination_domain: Some(destination_domain),
		};
		let wallet_quote = wallet.quote(ServiceType::TokenBridge, &params).await?;

		let mut quote_param = QuoteParams::from_request(request);
		quote_param.proxy_address = Some(proxy.to_string());
		quote_param.source_domain = Some(source_domain);
		quote_param.destination_domain = Some(destination_domain);

		let mut normalized = NormalizedQuote::new(ServiceType::TokenBridge, quote_param);
		normalized.amount_in = Some(request.amount_wei.to_string());
		normalized.amount_in_formatted = request
			.amount_wei
			.to_human(request.from_token.decimals)
			.ok()
			.map(format_normalized);

		let wallet_total = wallet_quote.total_fees_usd.clone();
		merge_wallet_quote(&mut normalized, wallet_quote, &[]);
		normalized.total_fees_usd =
			wallet_total.unwrap_or_else(|| sum_fees(&normalized.fees, EXCLUDED_FEES));

		Ok(normalized)
	}

	async fn send(
		&self,
		quote: &NormalizedQuote,
		wallet: Arc<dyn WalletAdapter>,
	) -> AdapterResult<String> {
		let send_param = quote.send_param.clone().ok_or_else(|| {
			AdapterError::invalid_response("token-bridge quote carries no prepared transaction")
		})?;
		let hash = wallet.send(&SendRequest::Send { send_param }).await?;
		Ok(hash)
	}

	async fn get_status(&self, query: &StatusQuery) -> AdapterResult<RawStatus> {
		let hash = query.hash.as_deref().ok_or_else(|| {
			AdapterError::Validation(QuoteValidationError::MissingRequiredField {
				field: "hash".to_string(),
			})
		})?;
		let record = self.client.get_trade(hash).await?;
		Ok(RawStatus::Trade(record))
	}
}
