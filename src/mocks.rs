//! Mock adapters and wallets for tests and downstream consumers
//!
//! Deterministic stand-ins with failure injection, configurable delay,
//! and call counters, so eligibility and isolation behavior can be
//! asserted without a live backend.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use stableflow_types::quotes::QuoteParams;
use stableflow_types::{
	AdapterError, AdapterResult, Amount, BridgeAdapter, ChainType, GasEstimate, NormalizedQuote,
	QuoteRequest, RawStatus, SendRequest, ServiceType, StatusQuery, TokenConfig, TransferParams,
	WalletAdapter, WalletError, WalletQuote, WalletQuoteParams, WalletResult,
};

/// Scriptable bridge adapter
#[derive(Debug)]
pub struct MockBridgeAdapter {
	service: ServiceType,
	fail_with: Option<String>,
	delay: Option<Duration>,
	fees: HashMap<String, String>,
	status: Option<RawStatus>,
	send_hash: String,
	quote_calls: AtomicUsize,
	send_calls: AtomicUsize,
}

impl MockBridgeAdapter {
	pub fn new(service: ServiceType) -> Self {
		Self {
			service,
			fail_with: None,
			delay: None,
			fees: HashMap::new(),
			status: None,
			send_hash: "0xmockdeposit".to_string(),
			quote_calls: AtomicUsize::new(0),
			send_calls: AtomicUsize::new(0),
		}
	}

	/// Every quote call fails with this backend message
	pub fn failing(mut self, message: impl Into<String>) -> Self {
		self.fail_with = Some(message.into());
		self
	}

	/// Sleep before answering, to exercise settle-all behavior
	pub fn with_delay(mut self, delay: Duration) -> Self {
		self.delay = Some(delay);
		self
	}

	pub fn with_fee(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.fees.insert(key.into(), value.into());
		self
	}

	pub fn with_status(mut self, status: RawStatus) -> Self {
		self.status = Some(status);
		self
	}

	pub fn with_send_hash(mut self, hash: impl Into<String>) -> Self {
		self.send_hash = hash.into();
		self
	}

	pub fn quote_calls(&self) -> usize {
		self.quote_calls.load(Ordering::SeqCst)
	}

	pub fn send_calls(&self) -> usize {
		self.send_calls.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl BridgeAdapter for MockBridgeAdapter {
	fn service_type(&self) -> ServiceType {
		self.service
	}

	async fn get_quote(
		&self,
		request: &QuoteRequest,
		_wallet: Arc<dyn WalletAdapter>,
	) -> AdapterResult<NormalizedQuote> {
		self.quote_calls.fetch_add(1, Ordering::SeqCst);
		if let Some(delay) = self.delay {
			tokio::time::sleep(delay).await;
		}
		if let Some(message) = &self.fail_with {
			return Err(AdapterError::Backend {
				status: 400,
				message: message.clone(),
			});
		}

		let mut quote =
			NormalizedQuote::new(self.service, QuoteParams::from_request(request));
		quote.fees = self.fees.clone();
		let total: rust_decimal::Decimal = self
			.fees
			.values()
			.filter_map(|v| v.parse::<rust_decimal::Decimal>().ok())
			.sum();
		quote.total_fees_usd = stableflow_types::models::format_normalized(total);
		if let Ok(human) = request.amount_wei.to_human(request.from_token.decimals) {
			let formatted = stableflow_types::models::format_normalized(human);
			quote.amount_in = Some(request.amount_wei.to_string());
			quote.amount_in_formatted = Some(formatted.clone());
			quote.output_amount = formatted;
		}
		if !request.dry {
			quote.deposit_address = Some("mock-deposit-address".to_string());
		}
		Ok(quote)
	}

	async fn send(
		&self,
		_quote: &NormalizedQuote,
		_wallet: Arc<dyn WalletAdapter>,
	) -> AdapterResult<String> {
		self.send_calls.fetch_add(1, Ordering::SeqCst);
		Ok(self.send_hash.clone())
	}

	async fn get_status(&self, _query: &StatusQuery) -> AdapterResult<RawStatus> {
		self.status
			.clone()
			.ok_or_else(|| AdapterError::invalid_response("no status configured on mock"))
	}
}

/// Wallet stub with a fixed address and scriptable quote/gas answers
#[derive(Debug)]
pub struct MockWallet {
	chain_type: ChainType,
	address: String,
	balance: Amount,
	gas: Option<GasEstimate>,
	wallet_quote: Option<WalletQuote>,
	send_hash: String,
}

impl MockWallet {
	pub fn new(chain_type: ChainType, address: impl Into<String>) -> Self {
		Self {
			chain_type,
			address: address.into(),
			balance: Amount::from("0"),
			gas: Some(GasEstimate {
				gas: 21_000,
				gas_price: 1_000_000_000,
			}),
			wallet_quote: None,
			send_hash: "0xmocksend".to_string(),
		}
	}

	pub fn evm(address: impl Into<String>) -> Self {
		Self::new(ChainType::Evm, address)
	}

	pub fn with_balance(mut self, balance: Amount) -> Self {
		self.balance = balance;
		self
	}

	/// Make gas estimation fail (best-effort paths must swallow it)
	pub fn without_gas_estimate(mut self) -> Self {
		self.gas = None;
		self
	}

	pub fn with_wallet_quote(mut self, quote: WalletQuote) -> Self {
		self.wallet_quote = Some(quote);
		self
	}

	pub fn with_send_hash(mut self, hash: impl Into<String>) -> Self {
		self.send_hash = hash.into();
		self
	}
}

#[async_trait]
impl WalletAdapter for MockWallet {
	fn chain_type(&self) -> ChainType {
		self.chain_type
	}

	fn address(&self) -> WalletResult<String> {
		Ok(self.address.clone())
	}

	async fn balance_of(&self, _token: &TokenConfig) -> WalletResult<Amount> {
		Ok(self.balance.clone())
	}

	async fn transfer(&self, _params: &TransferParams) -> WalletResult<String> {
		Ok(self.send_hash.clone())
	}

	async fn estimate_transfer_gas(&self, _params: &TransferParams) -> WalletResult<GasEstimate> {
		self.gas
			.ok_or_else(|| WalletError::rpc("gas estimation unavailable"))
	}

	async fn quote(
		&self,
		service: ServiceType,
		_params: &WalletQuoteParams,
	) -> WalletResult<WalletQuote> {
		match &self.wallet_quote {
			Some(quote) => Ok(quote.clone()),
			None => Err(WalletError::UnsupportedOperation {
				operation: format!("quote for {}", service),
				chain: self.chain_type.to_string(),
			}),
		}
	}

	async fn send(&self, _request: &SendRequest) -> WalletResult<String> {
		Ok(self.send_hash.clone())
	}
}
