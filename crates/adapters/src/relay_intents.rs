//! Relay intents adapter
//!
//! Quotes through the relay backend (`POST /v0/quote`) and derives the
//! fee breakdown locally from the quoted amounts. On chains where the
//! deposit is routed through a proxy program the wallet builds and
//! simulates the deposit transaction; its partial quote is merged over
//! the adapter's derivation.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use stableflow_client::ApiClient;
use stableflow_types::constants::{
	BRIDGE_FEE_BPS, BRIDGE_FEE_RECIPIENT, DEFAULT_QUOTE_WAITING_TIME_MS, FEE_BRIDGE_USD,
	FEE_DESTINATION_GAS_USD, FEE_SOURCE_GAS_USD, QUOTE_DEADLINE_MINUTES, REFERRAL_ID,
};
use stableflow_types::models::{format_normalized, to_human_units};
use stableflow_types::wire::{
	new_session_id, AppFee, DepositMode, DepositType, RecipientType, RefundType,
	RelayQuoteRequest, SubmitDepositTxRequest, SwapType,
};
use stableflow_types::{
	AdapterError, AdapterResult, BridgeAdapter, NormalizedQuote, QuoteParams, QuoteRequest,
	QuoteValidationError, RawStatus, SendRequest, ServiceType, StatusQuery, TransferParams,
	WalletAdapter, WalletQuoteParams,
};

use crate::{fallback_deposit_address, merge_wallet_quote, sum_fees};

/// Fee keys reported but left out of `totalFeesUsd`
const EXCLUDED_FEES: &[&str] = &[FEE_SOURCE_GAS_USD];

/// Origin chains whose deposits route through a relay proxy program
const RELAY_PROXY: &[(&str, &str)] = &[("Solana", "3Gx2XxkPzHenWYffE2SsYzcsQeMCwSjpVRRbyJjeKnmT")];

fn relay_proxy(chain_name: &str) -> Option<&'static str> {
	RELAY_PROXY
		.iter()
		.find(|(chain, _)| *chain == chain_name)
		.map(|(_, proxy)| *proxy)
}

/// Adapter for the relay intents bridge service
#[derive(Debug, Clone)]
pub struct RelayIntentsAdapter {
	client: ApiClient,
}

impl RelayIntentsAdapter {
	pub fn new(client: ApiClient) -> Self {
		Self { client }
	}

	fn build_wire_request(&self, request: &QuoteRequest) -> RelayQuoteRequest {
		let mut app_fees = vec![AppFee {
			recipient: BRIDGE_FEE_RECIPIENT.to_string(),
			fee: BRIDGE_FEE_BPS,
		}];
		app_fees.extend(request.relay_params.app_fees.iter().cloned());

		RelayQuoteRequest {
			dry: request.dry,
			deposit_mode: DepositMode::Simple,
			swap_type: request
				.relay_params
				.swap_type
				.unwrap_or(SwapType::ExactInput),
			slippage_tolerance: request.slippage_tolerance_bps,
			origin_asset: request.from_token.asset_id.clone(),
			deposit_type: DepositType::OriginChain,
			destination_asset: request.to_token.asset_id.clone(),
			amount: request.amount_wei.to_string(),
			refund_to: request.refund_to.clone(),
			refund_type: RefundType::OriginChain,
			recipient: request.recipient.clone(),
			virtual_chain_recipient: None,
			virtual_chain_refund_recipient: None,
			recipient_type: RecipientType::DestinationChain,
			deadline: Utc::now() + Duration::minutes(QUOTE_DEADLINE_MINUTES),
			referral: REFERRAL_ID.to_string(),
			quote_waiting_time_ms: request
				.relay_params
				.quote_waiting_time_ms
				.unwrap_or(DEFAULT_QUOTE_WAITING_TIME_MS),
			session_id: new_session_id(),
			app_fees,
		}
	}
}

#[async_trait]
impl BridgeAdapter for RelayIntentsAdapter {
	fn service_type(&self) -> ServiceType {
		ServiceType::RelayIntents
	}

	async fn get_quote(
		&self,
		request: &QuoteRequest,
		wallet: Arc<dyn WalletAdapter>,
	) -> AdapterResult<NormalizedQuote> {
		let wire = self.build_wire_request(request);
		let swap_type = wire.swap_type;
		let response = self.client.get_quote(&wire).await?;
		let quote = response.quote.clone().unwrap_or_default();

		let mut normalized = NormalizedQuote::new(
			ServiceType::RelayIntents,
			QuoteParams::from_request(request),
		);
		normalized.deposit_address = quote.deposit_address.clone();
		normalized.deposit_memo = quote.deposit_memo.clone();
		normalized.amount_in = quote.amount_in.clone();
		normalized.amount_in_formatted = quote.amount_in_formatted.clone();
		normalized.amount_out = quote.amount_out.clone();
		normalized.amount_out_formatted = quote.amount_out_formatted.clone();
		normalized.estimate_time = quote.time_estimate.unwrap_or(0);
		normalized.raw = serde_json::to_value(&response).ok();

		let from_decimals = request.from_token.decimals;
		let to_decimals = request.to_token.decimals;

		let amount_human = request
			.amount_wei
			.to_human(from_decimals)
			.map_err(AdapterError::invalid_response)?;
		let out_human = match quote.amount_out.as_deref() {
			Some(raw) => {
				to_human_units(raw, to_decimals).map_err(AdapterError::invalid_response)?
			},
			None => Decimal::ZERO,
		};
		let in_human = match quote.amount_in.as_deref() {
			Some(raw) => {
				to_human_units(raw, from_decimals).map_err(AdapterError::invalid_response)?
			},
			None => Decimal::ZERO,
		};
		normalized.output_amount = format_normalized(out_human);

		// Net fee is what the swap loses end to end; the bridge app fee
		// comes out of it and the rest is destination-side gas.
		let net_fee = match swap_type {
			SwapType::ExactOutput => in_human - amount_human,
			_ => amount_human - out_human,
		};
		let bridge_fee = wire.app_fees.iter().fold(Decimal::ZERO, |acc, fee| {
			acc + amount_human * Decimal::from(fee.fee) / Decimal::from(10_000u32)
		});
		let destination_gas_fee = net_fee - bridge_fee;
		normalized
			.fees
			.insert(FEE_BRIDGE_USD.to_string(), format_normalized(bridge_fee));
		normalized.fees.insert(
			FEE_DESTINATION_GAS_USD.to_string(),
			format_normalized(destination_gas_fee),
		);

		// Best effort: a failed gas estimate never fails the quote
		let deposit_target = quote.deposit_address.clone().unwrap_or_else(|| {
			fallback_deposit_address(request.from_token.chain_type).to_string()
		});
		let transfer = TransferParams {
			origin_asset: request.from_token.contract_address.clone(),
			deposit_address: deposit_target.clone(),
			amount: request.amount_wei.clone(),
		};
		match wallet.estimate_transfer_gas(&transfer).await {
			Ok(estimate) => {
				let gas_usd = request
					.prices
					.gas_to_usd(estimate.gas, &request.from_token.native_token);
				normalized
					.fees
					.insert(FEE_SOURCE_GAS_USD.to_string(), format_normalized(gas_usd));
				normalized.estimate_source_gas = Some(estimate.gas);
				normalized.estimate_source_gas_usd = Some(format_normalized(gas_usd));
			},
			Err(e) => {
				warn!("relay-intents source gas estimation failed: {}", e);
			},
		}

		normalized.total_fees_usd = sum_fees(&normalized.fees, EXCLUDED_FEES);

		if let Some(proxy) = relay_proxy(&request.from_token.chain_name) {
			debug!(
				"routing {} deposit through proxy {}",
				request.from_token.chain_name, proxy
			);
			let params = WalletQuoteParams {
				proxy_address: proxy.to_string(),
				from_token: request.from_token.clone(),
				to_token: Some(request.to_token.clone()),
				amount_wei: request.amount_wei.clone(),
				prices: request.prices.clone(),
				refund_to: request.refund_to.clone(),
				recipient: request.recipient.clone(),
				deposit_address: Some(deposit_target),
				slippage_tolerance_bps: Some(request.slippage_tolerance_bps),
				exclude_fees: EXCLUDED_FEES.iter().map(|s| s.to_string()).collect(),
				source_domain: None,
				destination_domain: None,
			};
			let wallet_quote = wallet.quote(ServiceType::RelayIntents, &params).await?;
			merge_wallet_quote(&mut normalized, wallet_quote, EXCLUDED_FEES);
			normalized.quote_param.proxy_address = Some(proxy.to_string());
			normalized.total_fees_usd = sum_fees(&normalized.fees, EXCLUDED_FEES);
		}

		Ok(normalized)
	}

	async fn send(
		&self,
		quote: &NormalizedQuote,
		wallet: Arc<dyn WalletAdapter>,
	) -> AdapterResult<String> {
		if let Some(send_param) = &quote.send_param {
			let hash = wallet
				.send(&SendRequest::Send {
					send_param: send_param.clone(),
				})
				.await?;
			return Ok(hash);
		}

		let deposit_address = quote.deposit_address.clone().ok_or_else(|| {
			AdapterError::invalid_response("quote carries no deposit address to transfer to")
		})?;
		let hash = wallet
			.send(&SendRequest::Transfer(TransferParams {
				origin_asset: quote.quote_param.from_token.contract_address.clone(),
				deposit_address,
				amount: quote.quote_param.amount_wei.clone(),
			}))
			.await?;
		Ok(hash)
	}

	async fn get_status(&self, query: &StatusQuery) -> AdapterResult<RawStatus> {
		let deposit_address = query.deposit_address.as_deref().ok_or_else(|| {
			AdapterError::Validation(QuoteValidationError::MissingRequiredField {
				field: "depositAddress".to_string(),
			})
		})?;
		let response = self
			.client
			.get_execution_status(deposit_address, query.deposit_memo.as_deref())
			.await?;
		Ok(RawStatus::Relay(response))
	}

	async fn submit_hash(&self, query: &StatusQuery) -> AdapterResult<()> {
		let tx_hash = query.hash.clone().ok_or_else(|| {
			AdapterError::Validation(QuoteValidationError::MissingRequiredField {
				field: "hash".to_string(),
			})
		})?;
		let deposit_address = query.deposit_address.clone().ok_or_else(|| {
			AdapterError::Validation(QuoteValidationError::MissingRequiredField {
				field: "depositAddress".to_string(),
			})
		})?;
		self.client
			.submit_deposit_tx(&SubmitDepositTxRequest {
				tx_hash,
				deposit_address,
			})
			.await?;
		Ok(())
	}
}
