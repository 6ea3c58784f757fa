//! OFT bridge adapter (omnichain messaging)
//!
//! Structurally mirrors the token bridge but routes by chain name rather
//! than numeric domain. Quoting delegates to the wallet capability, which
//! builds and prices the deposit against the origin-chain OFT proxy;
//! transfers are tracked through the trade table.

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

/// Origin-chain OFT proxy contracts keyed by chain name
const OFT_PROXY: &[(&str, &str)] = &[
	("Ethereum", "0x6C96dE32CEa08842dcc4058c14d3aaAD7Fa41dee"),
	("Arbitrum", "0x14E4A1B13bf7F943c8ff7C51fb60FA964A298D92"),
	("Tron", "TXFBqBbqJommqZf7BV8NNYzePh97UmJodJ"),
];

/// Chains reachable as an OFT destination
const OFT_DESTINATIONS: &[&str] = &["Ethereum", "Arbitrum", "Tron"];

fn proxy_for(chain_name: &str) -> Option<&'static str> {
	OFT_PROXY
		.iter()
		.find(|(chain, _)| *chain == chain_name)
		.map(|(_, proxy)| *proxy)
}

/// Adapter for the OFT-style messaging bridge
#[derive(Debug, Clone)]
pub struct OftBridgeAdapter {
	client: ApiClient,
}

impl OftBridgeAdapter {
	pub fn new(client: ApiClient) -> Self {
		Self { client }
	}

	fn unsupported_route(reason: impl Into<String>) -> AdapterError {
		AdapterError::Validation(QuoteValidationError::UnsupportedRoute {
			service: ServiceType::OftBridge,
			reason: reason.into(),
		})
	}
}

#[async_trait]
impl BridgeAdapter for OftBridgeAdapter {
	fn service_type(&self) -> ServiceType {
		ServiceType::OftBridge
	}

	async fn get_quote(
		&self,
		request: &QuoteRequest,
		wallet: Arc<dyn WalletAdapter>,
	) -> AdapterResult<NormalizedQuote> {
		let proxy = proxy_for(&request.from_token.chain_name).ok_or_else(|| {
			Self::unsupported_route(format!(
				"no OFT proxy on origin chain {}",
				request.from_token.chain_name
			))
		})?;
		if !OFT_DESTINATIONS.contains(&request.to_token.chain_name.as_str()) {
			return Err(Self::unsupported_route(format!(
				"destination chain {} is not OFT-reachable",
				request.to_token.chain_name
			)));
		}
		debug!(
			"oft-bridge route: {} -> {} via {}",
			request.from_token.chain_name, request.to_token.chain_name, proxy
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
			source_domain: None,
			destination_domain: None,
		};
		let wallet_quote = wallet.quote(ServiceType::OftBridge, &params).await?;

		let mut quote_param = QuoteParams::from_request(request);
		quote_param.proxy_address = Some(proxy.to_string());

		let mut normalized = NormalizedQuote::new(ServiceType::OftBridge, quote_param);
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
			AdapterError::invalid_response("oft-bridge quote carries no prepared transaction")
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
