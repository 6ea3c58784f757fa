//! WalletAdapter implementation for Solana

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use tracing::{debug, warn};

use stableflow_client::ApiClient;
use stableflow_types::constants::{
	FEE_BRIDGE_USD, FEE_ESTIMATE_DEPOSIT_GAS_USD, FEE_ESTIMATE_MINT_GAS_USD, FEE_SOURCE_GAS_USD,
};
use stableflow_types::models::format_normalized;
use stableflow_types::wire::SignTransferRequest;
use stableflow_types::{
	Amount, ChainType, GasEstimate, SendRequest, ServiceType, TokenConfig, TransferParams,
	WalletAdapter, WalletError, WalletQuote, WalletQuoteParams, WalletResult,
};

use super::instructions::{
	create_associated_token_account, proxy_transfer, spl_transfer, system_transfer,
	ProxyTransferAccounts,
};
use super::pubkey::{derive_associated_token_account, Pubkey};
use super::rpc::RpcClient;
use super::transaction::{Instruction, Message, Transaction};
use crate::signer::TransactionSigner;

/// State account of the relay deposit proxy program
const RELAY_PROXY_STATE: &str = "9E8az3Y9sdXvM2f3CCH6c9N3iFyNfDryQCZhqDxRYGUw";

/// Confirmation polling: 30 attempts, 2 seconds apart
const CONFIRM_ATTEMPTS: u32 = 30;
const CONFIRM_POLL_MS: u64 = 2_000;

/// Solana wallet backed by an in-process signer
///
/// Implements plain transfers, relay proxy deposits (built and simulated
/// locally), and backend co-signed token-bridge deposits.
pub struct SolanaWallet {
	rpc: RpcClient,
	signer: Arc<dyn TransactionSigner>,
	api: ApiClient,
}

impl SolanaWallet {
	pub fn new(rpc_url: impl Into<String>, signer: Arc<dyn TransactionSigner>, api: ApiClient) -> Self {
		Self {
			rpc: RpcClient::new(rpc_url),
			signer,
			api,
		}
	}

	pub fn rpc(&self) -> &RpcClient {
		&self.rpc
	}

	fn pubkey(&self) -> Pubkey {
		self.signer.pubkey()
	}

	/// Compile, sign, submit, and wait for confirmation
	async fn sign_and_send(&self, instructions: &[Instruction]) -> WalletResult<String> {
		let payer = self.pubkey();
		let blockhash = self.rpc.get_latest_blockhash().await?;
		let message = Message::compile(&payer, instructions, blockhash)?;
		let mut tx = Transaction::new_unsigned(message);
		tx.sign(self.signer.as_ref())?;

		let signature = self.rpc.send_transaction(&tx.serialize()).await?;
		self.confirm(&signature).await?;
		Ok(signature)
	}

	async fn confirm(&self, signature: &str) -> WalletResult<()> {
		for attempt in 1..=CONFIRM_ATTEMPTS {
			match self.rpc.get_signature_status(signature).await? {
				Some(status) if status == "confirmed" || status == "finalized" => {
					return Ok(());
				},
				_ => {
					debug!(
						"confirmation attempt {}/{} for {}",
						attempt, CONFIRM_ATTEMPTS, signature
					);
				},
			}
			tokio::time::sleep(Duration::from_millis(CONFIRM_POLL_MS)).await;
		}
		Err(WalletError::transaction(format!(
			"confirmation timed out for {}",
			signature
		)))
	}

	async fn account_exists(&self, account: &Pubkey) -> WalletResult<bool> {
		Ok(self.rpc.get_account_data(account).await?.is_some())
	}

	/// Instructions for a transfer, creating the recipient ATA when missing
	async fn transfer_instructions(&self, params: &TransferParams) -> WalletResult<Vec<Instruction>> {
		let from = self.pubkey();
		let to = Pubkey::parse(&params.deposit_address)?;
		let amount = params
			.amount
			.as_u64()
			.map_err(|e| WalletError::transaction(format!("invalid amount: {}", e)))?;

		if is_native_asset(&params.origin_asset) {
			return Ok(vec![system_transfer(&from, &to, amount)]);
		}

		let mint = Pubkey::parse(&params.origin_asset)?;
		let from_ata = derive_associated_token_account(&from, &mint);
		let to_ata = derive_associated_token_account(&to, &mint);

		let mut instructions = Vec::with_capacity(2);
		if !self.account_exists(&to_ata).await? {
			instructions.push(create_associated_token_account(&from, &to_ata, &to, &mint));
		}
		instructions.push(spl_transfer(&from_ata, &to_ata, &from, amount));
		Ok(instructions)
	}

	/// Build and price a relay proxy deposit
	async fn quote_relay_proxy(&self, params: &WalletQuoteParams) -> WalletResult<WalletQuote> {
		let program = Pubkey::parse(&params.proxy_address)?;
		let state = Pubkey::parse(RELAY_PROXY_STATE)?;
		let mint = Pubkey::parse(&params.from_token.contract_address)?;
		let user = self.pubkey();
		let recipient = params
			.deposit_address
			.as_deref()
			.ok_or_else(|| WalletError::transaction("proxy deposit quote requires a deposit address"))?;
		let to_user = Pubkey::parse(recipient)?;
		let amount = params
			.amount_wei
			.as_u64()
			.map_err(|e| WalletError::transaction(format!("invalid amount: {}", e)))?;

		let user_token_account = derive_associated_token_account(&user, &mint);
		let to_token_account = derive_associated_token_account(&to_user, &mint);

		let mut instructions = Vec::with_capacity(2);
		if !self.account_exists(&to_token_account).await? {
			instructions.push(create_associated_token_account(
				&user,
				&to_token_account,
				&to_user,
				&mint,
			));
		}
		instructions.push(proxy_transfer(
			&program,
			&ProxyTransferAccounts {
				state,
				mint,
				user_token_account,
				to_token_account,
				user,
				to_user,
			},
			amount,
		));

		let blockhash = self.rpc.get_latest_blockhash().await?;
		let message = Message::compile(&user, &instructions, blockhash)?;
		let tx = Transaction::new_unsigned(message);
		let serialized = tx.serialize();

		let simulation = self.rpc.simulate_transaction(&serialized).await?;
		if let Some(err) = simulation.err {
			return Err(WalletError::transaction(format!(
				"deposit simulation failed: {}",
				err
			)));
		}

		let gas_usd = format_normalized(
			params
				.prices
				.gas_to_usd(simulation.fee, &params.from_token.native_token),
		);
		let mut fees = HashMap::new();
		fees.insert(FEE_SOURCE_GAS_USD.to_string(), gas_usd.clone());

		Ok(WalletQuote {
			send_param: Some(json!({ "transaction": BASE64.encode(&serialized) })),
			fees,
			estimate_source_gas: Some(simulation.fee),
			estimate_source_gas_usd: Some(gas_usd),
			..WalletQuote::default()
		})
	}

	/// Quote a token-bridge deposit via backend co-signature
	async fn quote_token_bridge(&self, params: &WalletQuoteParams) -> WalletResult<WalletQuote> {
		let program = Pubkey::parse(&params.proxy_address)?;
		let mint = Pubkey::parse(&params.from_token.contract_address)?;
		let sender = self.pubkey();
		let user = if params.refund_to.is_empty() {
			sender
		} else {
			Pubkey::parse(&params.refund_to)?
		};
		let source_domain = params
			.source_domain
			.ok_or_else(|| WalletError::transaction("token bridge quote requires a source domain"))?;
		let destination_domain = params.destination_domain.ok_or_else(|| {
			WalletError::transaction("token bridge quote requires a destination domain")
		})?;

		// The user state account carries a nonce the program maintains
		// itself; read it for diagnostics only.
		let (user_state, _) = Pubkey::find_program_address(&[b"user", user.as_bytes()], &program);
		let nonce = match self.rpc.get_account_data(&user_state).await {
			Ok(Some(data)) if data.len() >= 40 => {
				u64::from_le_bytes(data[32..40].try_into().unwrap_or_default())
			},
			_ => 0,
		};
		debug!("user state nonce for {}: {}", user, nonce);

		let user_token_account = derive_associated_token_account(&sender, &mint);
		let human_amount = format_normalized(
			params
				.amount_wei
				.to_human(params.from_token.decimals)
				.map_err(WalletError::transaction)?,
		);

		let signed = self
			.api
			.sign_transfer(&SignTransferRequest {
				address: user.to_string(),
				amount: human_amount,
				destination_domain_id: destination_domain,
				receipt_address: params.recipient.clone(),
				source_domain_id: source_domain,
				ata_address: user_token_account.to_string(),
			})
			.await?;

		let mut fees = HashMap::new();
		fees.insert(
			FEE_ESTIMATE_MINT_GAS_USD.to_string(),
			format_normalized(div_pow10(
				signed.mint_fee.unwrap_or(Decimal::ZERO),
				params.from_token.decimals,
			)),
		);
		fees.insert(
			FEE_BRIDGE_USD.to_string(),
			format_normalized(div_pow10(
				signed.bridge_fee.unwrap_or(Decimal::ZERO),
				params.from_token.decimals,
			)),
		);
		let output_amount = format_normalized(div_pow10(
			signed.receipt_amount.unwrap_or(Decimal::ZERO),
			params.from_token.decimals,
		));

		let operator_bytes = BASE64
			.decode(signed.signature.as_bytes())
			.map_err(|e| WalletError::transaction(format!("invalid co-signed transaction: {}", e)))?;
		let operator_tx = Transaction::deserialize(&operator_bytes)?;
		if !operator_tx.verify_signatures() {
			warn!("co-signed transaction carries an invalid operator signature");
		}

		let simulation = self.rpc.simulate_transaction(&operator_bytes).await?;
		let gas_usd = format_normalized(
			params
				.prices
				.gas_to_usd(simulation.fee, &params.from_token.native_token),
		);
		fees.insert(FEE_ESTIMATE_DEPOSIT_GAS_USD.to_string(), gas_usd.clone());

		let total = total_usd_fees(&fees, &params.exclude_fees);

		Ok(WalletQuote {
			need_approve: Some(false),
			approve_spender: Some(params.proxy_address.clone()),
			send_param: Some(json!({ "transaction": signed.signature })),
			fees,
			total_fees_usd: Some(total),
			estimate_source_gas: Some(simulation.fee),
			estimate_source_gas_usd: Some(gas_usd),
			estimate_time: Some(0),
			output_amount: Some(output_amount),
		})
	}

	/// Sign our slot of a prepared transaction and submit it
	async fn send_prepared(&self, send_param: &Value) -> WalletResult<String> {
		let encoded = send_param
			.get("transaction")
			.and_then(Value::as_str)
			.ok_or_else(|| WalletError::transaction("send parameter carries no transaction"))?;
		let bytes = BASE64
			.decode(encoded.as_bytes())
			.map_err(|e| WalletError::transaction(format!("invalid transaction encoding: {}", e)))?;
		let mut tx = Transaction::deserialize(&bytes)?;
		tx.sign(self.signer.as_ref())?;

		let signature = self.rpc.send_transaction(&tx.serialize()).await?;
		self.confirm(&signature).await?;
		Ok(signature)
	}
}

#[async_trait]
impl WalletAdapter for SolanaWallet {
	fn chain_type(&self) -> ChainType {
		ChainType::Sol
	}

	fn address(&self) -> WalletResult<String> {
		Ok(self.pubkey().to_string())
	}

	async fn balance_of(&self, token: &TokenConfig) -> WalletResult<Amount> {
		let owner = self.pubkey();
		if token.is_native() {
			let lamports = self.rpc.get_balance(&owner).await?;
			return Ok(Amount::from(lamports.to_string()));
		}

		let mint = Pubkey::parse(&token.contract_address)?;
		let ata = derive_associated_token_account(&owner, &mint);
		if !self.account_exists(&ata).await? {
			return Ok(Amount::from("0"));
		}
		let amount = self.rpc.get_token_account_balance(&ata).await?;
		Ok(Amount::from(amount))
	}

	async fn transfer(&self, params: &TransferParams) -> WalletResult<String> {
		let instructions = self.transfer_instructions(params).await?;
		self.sign_and_send(&instructions).await
	}

	async fn estimate_transfer_gas(&self, params: &TransferParams) -> WalletResult<GasEstimate> {
		// Fees are per signature; creating the recipient ATA costs one more
		let mut gas = stableflow_types::constants::BASE_SIGNATURE_FEE_LAMPORTS;
		if !is_native_asset(&params.origin_asset) {
			let mint = Pubkey::parse(&params.origin_asset)?;
			let to = Pubkey::parse(&params.deposit_address)?;
			let to_ata = derive_associated_token_account(&to, &mint);
			if !self.account_exists(&to_ata).await? {
				gas += stableflow_types::constants::BASE_SIGNATURE_FEE_LAMPORTS;
			}
		}
		Ok(GasEstimate { gas, gas_price: 1 })
	}

	async fn quote(
		&self,
		service: ServiceType,
		params: &WalletQuoteParams,
	) -> WalletResult<WalletQuote> {
		match service {
			ServiceType::RelayIntents => self.quote_relay_proxy(params).await,
			ServiceType::TokenBridge => self.quote_token_bridge(params).await,
			other => Err(WalletError::UnsupportedOperation {
				operation: format!("quote for {}", other),
				chain: self.chain_type().to_string(),
			}),
		}
	}

	async fn send(&self, request: &SendRequest) -> WalletResult<String> {
		match request {
			SendRequest::Send { send_param } => self.send_prepared(send_param).await,
			SendRequest::Transfer(params) => self.transfer(params).await,
		}
	}
}

fn is_native_asset(asset: &str) -> bool {
	asset.eq_ignore_ascii_case("sol") || asset.eq_ignore_ascii_case("native")
}

/// Divide by 10^decimals without losing precision
fn div_pow10(value: Decimal, decimals: u32) -> Decimal {
	let mut scaled = value;
	let target = scaled.scale() + decimals;
	if target <= 28 && scaled.set_scale(target).is_ok() {
		scaled
	} else {
		Decimal::ZERO
	}
}

/// Sum fee entries ending in "Usd", honoring exclusions
fn total_usd_fees(fees: &HashMap<String, String>, exclude: &[String]) -> String {
	let mut total = Decimal::ZERO;
	for (key, value) in fees {
		if !key.ends_with("Usd") || exclude.iter().any(|e| e == key) {
			continue;
		}
		if let Ok(parsed) = value.parse::<Decimal>() {
			total += parsed;
		}
	}
	format_normalized(total)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::signer::KeypairSigner;
	use axum::routing::post;
	use axum::{Json, Router};
	use stableflow_types::models::{NativeToken, PriceTable};
	use stableflow_types::ServiceType;

	async fn spawn(router: Router) -> String {
		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
		let addr = listener.local_addr().unwrap();
		tokio::spawn(async move {
			axum::serve(listener, router).await.unwrap();
		});
		format!("http://{}", addr)
	}

	fn rpc_result(value: Value) -> Json<Value> {
		Json(json!({
			"jsonrpc": "2.0",
			"id": 1,
			"result": { "context": { "slot": 1 }, "value": value },
		}))
	}

	/// RPC stub: no accounts exist, simulation succeeds, sends confirm
	async fn stub_rpc(Json(body): Json<Value>) -> Json<Value> {
		match body["method"].as_str().unwrap_or_default() {
			"getLatestBlockhash" => rpc_result(json!({
				"blockhash": bs58::encode([3u8; 32]).into_string(),
				"lastValidBlockHeight": 100,
			})),
			"getAccountInfo" => rpc_result(Value::Null),
			"getBalance" => rpc_result(json!(2_000_000_000u64)),
			"simulateTransaction" => rpc_result(json!({ "err": null, "fee": 5000 })),
			"sendTransaction" => Json(json!({ "jsonrpc": "2.0", "id": 1, "result": "sig111" })),
			"getSignatureStatuses" => rpc_result(json!([
				{ "confirmationStatus": "confirmed", "err": null },
			])),
			other => panic!("unexpected RPC method {}", other),
		}
	}

	fn sol_usdc() -> TokenConfig {
		TokenConfig {
			chain_type: ChainType::Sol,
			chain_id: None,
			chain_name: "Solana".to_string(),
			blockchain: "sol".to_string(),
			contract_address: "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v".to_string(),
			asset_id: "nep141:sol-usdc.omft.near".to_string(),
			decimals: 6,
			symbol: "USDC".to_string(),
			name: None,
			native_token: NativeToken {
				symbol: "SOL".to_string(),
				decimals: 9,
			},
			services: vec![ServiceType::RelayIntents, ServiceType::TokenBridge],
			block_explorer_url: None,
			rpc_urls: Vec::new(),
		}
	}

	fn quote_params(wallet: &SolanaWallet, proxy: &str) -> WalletQuoteParams {
		let mut prices = PriceTable::new();
		prices.insert("SOL", "200");
		WalletQuoteParams {
			proxy_address: proxy.to_string(),
			from_token: sol_usdc(),
			to_token: None,
			amount_wei: Amount::from("1000000"),
			prices,
			refund_to: wallet.address().unwrap(),
			recipient: "0x2222222222222222222222222222222222222222".to_string(),
			deposit_address: Some(KeypairSigner::from_bytes(&[9u8; 32]).pubkey().to_string()),
			slippage_tolerance_bps: Some(100),
			exclude_fees: Vec::new(),
			source_domain: Some(5),
			destination_domain: Some(0),
		}
	}

	fn wallet(rpc_url: &str, api_url: &str) -> SolanaWallet {
		SolanaWallet::new(
			rpc_url,
			Arc::new(KeypairSigner::from_bytes(&[1u8; 32])),
			ApiClient::with_base_url(api_url),
		)
	}

	#[tokio::test]
	async fn test_relay_proxy_quote_prices_simulated_fee() {
		let rpc_url = spawn(Router::new().route("/", post(stub_rpc))).await;
		let wallet = wallet(&rpc_url, "http://unused.invalid");

		let params = quote_params(&wallet, "3Gx2XxkPzHenWYffE2SsYzcsQeMCwSjpVRRbyJjeKnmT");
		let quote = wallet.quote(ServiceType::RelayIntents, &params).await.unwrap();

		// 5000 lamports at $200/SOL
		assert_eq!(quote.fees[FEE_SOURCE_GAS_USD], "0.000001");
		assert_eq!(quote.estimate_source_gas, Some(5000));
		assert_eq!(quote.estimate_source_gas_usd.as_deref(), Some("0.000001"));

		// The prepared transaction round-trips and awaits our signature
		let encoded = quote.send_param.unwrap()["transaction"]
			.as_str()
			.unwrap()
			.to_string();
		let tx = Transaction::deserialize(&BASE64.decode(encoded).unwrap()).unwrap();
		assert_eq!(tx.message.account_keys[0], wallet.pubkey());
		// Missing recipient ATA prepends a create instruction
		assert_eq!(tx.message.instructions.len(), 2);
	}

	#[tokio::test]
	async fn test_relay_proxy_quote_requires_deposit_address() {
		let rpc_url = spawn(Router::new().route("/", post(stub_rpc))).await;
		let wallet = wallet(&rpc_url, "http://unused.invalid");

		let mut params = quote_params(&wallet, "3Gx2XxkPzHenWYffE2SsYzcsQeMCwSjpVRRbyJjeKnmT");
		params.deposit_address = None;
		assert!(wallet.quote(ServiceType::RelayIntents, &params).await.is_err());
	}

	#[tokio::test]
	async fn test_token_bridge_quote_merges_backend_fees() {
		let operator = KeypairSigner::from_bytes(&[8u8; 32]);
		let recipient = KeypairSigner::from_bytes(&[9u8; 32]).pubkey();
		let instruction =
			super::super::instructions::system_transfer(&operator.pubkey(), &recipient, 1);
		let message = Message::compile(&operator.pubkey(), &[instruction], [2u8; 32]).unwrap();
		let mut operator_tx = Transaction::new_unsigned(message);
		operator_tx.sign(&operator).unwrap();
		let signed_b64 = BASE64.encode(operator_tx.serialize());

		let rpc_url = spawn(Router::new().route("/", post(stub_rpc))).await;
		let api = Router::new().route(
			"/v0/cctp/sign",
			post(move |Json(body): Json<Value>| {
				let signed = signed_b64.clone();
				async move {
					assert_eq!(body["amount"], "1");
					assert_eq!(body["source_domain_id"], 5);
					assert_eq!(body["destination_domain_id"], 0);
					Json(json!({
						"bridge_fee": 2500,
						"mint_fee": 1200,
						"receipt_amount": 996300,
						"signature": signed,
					}))
				}
			}),
		);
		let api_url = spawn(api).await;
		let wallet = wallet(&rpc_url, &api_url);

		let params = quote_params(&wallet, "8LRoKp3GwFdXnwCT8PFTVRnPXM1CnRZpPyVDdkXgCBSy");
		let quote = wallet.quote(ServiceType::TokenBridge, &params).await.unwrap();

		assert_eq!(quote.fees[FEE_BRIDGE_USD], "0.0025");
		assert_eq!(quote.fees[FEE_ESTIMATE_MINT_GAS_USD], "0.0012");
		assert_eq!(quote.fees[FEE_ESTIMATE_DEPOSIT_GAS_USD], "0.000001");
		assert_eq!(quote.output_amount.as_deref(), Some("0.9963"));
		assert_eq!(quote.need_approve, Some(false));
		// 0.0025 + 0.0012 + 0.000001
		assert_eq!(quote.total_fees_usd.as_deref(), Some("0.003701"));
	}

	#[tokio::test]
	async fn test_token_bridge_quote_honors_fee_exclusions() {
		let operator = KeypairSigner::from_bytes(&[8u8; 32]);
		let recipient = KeypairSigner::from_bytes(&[9u8; 32]).pubkey();
		let instruction =
			super::super::instructions::system_transfer(&operator.pubkey(), &recipient, 1);
		let message = Message::compile(&operator.pubkey(), &[instruction], [2u8; 32]).unwrap();
		let mut operator_tx = Transaction::new_unsigned(message);
		operator_tx.sign(&operator).unwrap();
		let signed_b64 = BASE64.encode(operator_tx.serialize());

		let rpc_url = spawn(Router::new().route("/", post(stub_rpc))).await;
		let api = Router::new().route(
			"/v0/cctp/sign",
			post(move || {
				let signed = signed_b64.clone();
				async move {
					Json(json!({
						"bridge_fee": 2500,
						"mint_fee": 1200,
						"receipt_amount": 996300,
						"signature": signed,
					}))
				}
			}),
		);
		let api_url = spawn(api).await;
		let wallet = wallet(&rpc_url, &api_url);

		let mut params = quote_params(&wallet, "8LRoKp3GwFdXnwCT8PFTVRnPXM1CnRZpPyVDdkXgCBSy");
		params.exclude_fees = vec![FEE_ESTIMATE_DEPOSIT_GAS_USD.to_string()];
		let quote = wallet.quote(ServiceType::TokenBridge, &params).await.unwrap();

		// Excluded deposit gas stays in the breakdown but not the total
		assert_eq!(quote.fees[FEE_ESTIMATE_DEPOSIT_GAS_USD], "0.000001");
		assert_eq!(quote.total_fees_usd.as_deref(), Some("0.0037"));
	}

	#[tokio::test]
	async fn test_oft_quote_is_unsupported() {
		let wallet = wallet("http://unused.invalid", "http://unused.invalid");
		let params = quote_params(&wallet, "whatever");
		let err = wallet.quote(ServiceType::OftBridge, &params).await.unwrap_err();
		assert!(matches!(err, WalletError::UnsupportedOperation { .. }));
	}

	#[tokio::test]
	async fn test_native_balance_and_transfer() {
		let rpc_url = spawn(Router::new().route("/", post(stub_rpc))).await;
		let wallet = wallet(&rpc_url, "http://unused.invalid");

		let mut token = sol_usdc();
		token.contract_address = "SOL".to_string();
		let balance = wallet.balance_of(&token).await.unwrap();
		assert_eq!(balance.as_str(), "2000000000");

		let hash = wallet
			.transfer(&TransferParams {
				origin_asset: "SOL".to_string(),
				deposit_address: KeypairSigner::from_bytes(&[9u8; 32]).pubkey().to_string(),
				amount: Amount::from("1000"),
			})
			.await
			.unwrap();
		assert_eq!(hash, "sig111");
	}

	#[tokio::test]
	async fn test_spl_balance_is_zero_without_token_account() {
		let rpc_url = spawn(Router::new().route("/", post(stub_rpc))).await;
		let wallet = wallet(&rpc_url, "http://unused.invalid");

		let balance = wallet.balance_of(&sol_usdc()).await.unwrap();
		assert_eq!(balance.as_str(), "0");
	}

	#[tokio::test]
	async fn test_gas_estimate_doubles_when_ata_missing() {
		let rpc_url = spawn(Router::new().route("/", post(stub_rpc))).await;
		let wallet = wallet(&rpc_url, "http://unused.invalid");

		let params = TransferParams {
			origin_asset: "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v".to_string(),
			deposit_address: KeypairSigner::from_bytes(&[9u8; 32]).pubkey().to_string(),
			amount: Amount::from("1000000"),
		};
		let estimate = wallet.estimate_transfer_gas(&params).await.unwrap();
		assert_eq!(estimate.gas, 10_000);
		assert_eq!(estimate.gas_price, 1);

		let native = TransferParams {
			origin_asset: "SOL".to_string(),
			..params
		};
		let estimate = wallet.estimate_transfer_gas(&native).await.unwrap();
		assert_eq!(estimate.gas, 5_000);
	}

	#[tokio::test]
	async fn test_send_signs_prepared_transaction() {
		let rpc_url = spawn(Router::new().route("/", post(stub_rpc))).await;
		let wallet = wallet(&rpc_url, "http://unused.invalid");

		let recipient = KeypairSigner::from_bytes(&[9u8; 32]).pubkey();
		let instruction =
			super::super::instructions::system_transfer(&wallet.pubkey(), &recipient, 77);
		let message = Message::compile(&wallet.pubkey(), &[instruction], [2u8; 32]).unwrap();
		let unsigned = Transaction::new_unsigned(message);

		let hash = wallet
			.send(&SendRequest::Send {
				send_param: json!({ "transaction": BASE64.encode(unsigned.serialize()) }),
			})
			.await
			.unwrap();
		assert_eq!(hash, "sig111");
	}

	#[test]
	fn test_total_usd_fees_skips_non_usd_keys() {
		let mut fees = HashMap::new();
		fees.insert("bridgeFeeUsd".to_string(), "0.5".to_string());
		fees.insert("bridgeFee".to_string(), "99".to_string());
		fees.insert("estimateMintGasUsd".to_string(), "0.25".to_string());
		assert_eq!(total_usd_fees(&fees, &[]), "0.75");
		assert_eq!(
			total_usd_fees(&fees, &["estimateMintGasUsd".to_string()]),
			"0.5"
		);
	}

	#[test]
	fn test_div_pow10() {
		assert_eq!(format_normalized(div_pow10(Decimal::from(2500), 6)), "0.0025");
		assert_eq!(format_normalized(div_pow10(Decimal::ZERO, 6)), "0");
	}
}
