//! Minimal Solana JSON-RPC client
//!
//! Covers the handful of methods the wallet needs: blockhash lookup,
//! account reads, balance queries, simulation, submission, and signature
//! status polling. HTTP connections come from the shared pooled client
//! cache so repeated calls to one endpoint reuse sockets.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use stableflow_client::{global_client_cache, ClientConfig};
use stableflow_types::constants::BASE_SIGNATURE_FEE_LAMPORTS;
use stableflow_types::{WalletError, WalletResult};

use super::pubkey::Pubkey;

/// Outcome of `simulateTransaction`
#[derive(Debug, Clone)]
pub struct SimulationOutcome {
	/// Execution error reported by the simulator, if any
	pub err: Option<Value>,
	/// Fee the transaction would pay, in lamports
	pub fee: u64,
}

#[derive(Debug, Deserialize)]
struct RpcEnvelope<T> {
	result: Option<T>,
	#[serde(default)]
	error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
	code: i64,
	message: String,
}

/// Responses wrapped in `{ "context": ..., "value": ... }`
#[derive(Debug, Deserialize)]
struct WithContext<T> {
	value: T,
}

#[derive(Debug, Clone)]
pub struct RpcClient {
	url: String,
}

impl RpcClient {
	pub fn new(url: impl Into<String>) -> Self {
		Self { url: url.into() }
	}

	pub fn url(&self) -> &str {
		&self.url
	}

	async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> WalletResult<T> {
		let client = global_client_cache()
			.get_client(&ClientConfig::new(&self.url))
			.map_err(|e| WalletError::rpc(e.to_string()))?;
		let body = json!({
			"jsonrpc": "2.0",
			"id": 1,
			"method": method,
			"params": params,
		});
		debug!("Solana RPC {} -> {}", method, self.url);

		let response = client.post(&self.url).json(&body).send().await?;
		let status = response.status();
		if !status.is_success() {
			return Err(WalletError::rpc(format!(
				"{} returned HTTP {}",
				method, status
			)));
		}
		let envelope: RpcEnvelope<T> = response.json().await?;
		if let Some(error) = envelope.error {
			return Err(WalletError::rpc(format!(
				"{} failed: {} (code {})",
				method, error.message, error.code
			)));
		}
		envelope
			.result
			.ok_or_else(|| WalletError::rpc(format!("{} returned no result", method)))
	}

	/// Latest confirmed blockhash as raw bytes
	pub async fn get_latest_blockhash(&self) -> WalletResult<[u8; 32]> {
		#[derive(Deserialize)]
		struct BlockhashValue {
			blockhash: String,
		}
		let result: WithContext<BlockhashValue> = self
			.call(
				"getLatestBlockhash",
				json!([{ "commitment": "confirmed" }]),
			)
			.await?;
		let decoded = bs58::decode(&result.value.blockhash)
			.into_vec()
			.map_err(|e| WalletError::rpc(format!("invalid blockhash: {}", e)))?;
		decoded
			.try_into()
			.map_err(|_| WalletError::rpc("blockhash must be 32 bytes"))
	}

	/// Raw account data, or None when the account does not exist
	pub async fn get_account_data(&self, account: &Pubkey) -> WalletResult<Option<Vec<u8>>> {
		#[derive(Deserialize)]
		struct AccountValue {
			data: (String, String),
		}
		let result: WithContext<Option<AccountValue>> = self
			.call(
				"getAccountInfo",
				json!([account.to_string(), { "encoding": "base64" }]),
			)
			.await?;
		match result.value {
			Some(account) => {
				let bytes = BASE64
					.decode(account.data.0.as_bytes())
					.map_err(|e| WalletError::rpc(format!("invalid account data: {}", e)))?;
				Ok(Some(bytes))
			},
			None => Ok(None),
		}
	}

	/// Lamport balance of an account
	pub async fn get_balance(&self, account: &Pubkey) -> WalletResult<u64> {
		let result: WithContext<u64> = self
			.call("getBalance", json!([account.to_string()]))
			.await?;
		Ok(result.value)
	}

	/// Token balance of a token account, in smallest units
	pub async fn get_token_account_balance(&self, token_account: &Pubkey) -> WalletResult<String> {
		#[derive(Deserialize)]
		struct TokenAmount {
			amount: String,
		}
		let result: WithContext<TokenAmount> = self
			.call(
				"getTokenAccountBalance",
				json!([token_account.to_string()]),
			)
			.await?;
		Ok(result.value.amount)
	}

	/// Simulate a serialized transaction without signature checks
	pub async fn simulate_transaction(&self, transaction: &[u8]) -> WalletResult<SimulationOutcome> {
		#[derive(Deserialize)]
		struct SimulationValue {
			#[serde(default)]
			err: Option<Value>,
			#[serde(default)]
			fee: Option<u64>,
		}
		let encoded = BASE64.encode(transaction);
		let result: WithContext<SimulationValue> = self
			.call(
				"simulateTransaction",
				json!([encoded, { "sigVerify": false, "encoding": "base64" }]),
			)
			.await?;
		Ok(SimulationOutcome {
			err: result.value.err,
			fee: result.value.fee.unwrap_or(BASE_SIGNATURE_FEE_LAMPORTS),
		})
	}

	/// Submit a signed transaction and return its signature
	pub async fn send_transaction(&self, transaction: &[u8]) -> WalletResult<String> {
		let encoded = BASE64.encode(transaction);
		self.call(
			"sendTransaction",
			json!([encoded, {
				"skipPreflight": false,
				"maxRetries": 3,
				"encoding": "base64",
			}]),
		)
		.await
	}

	/// Confirmation status of a signature, if the cluster has seen it
	pub async fn get_signature_status(&self, signature: &str) -> WalletResult<Option<String>> {
		#[derive(Deserialize)]
		#[serde(rename_all = "camelCase")]
		struct SignatureStatus {
			#[serde(default)]
			confirmation_status: Option<String>,
			#[serde(default)]
			err: Option<Value>,
		}
		let result: WithContext<Vec<Option<SignatureStatus>>> = self
			.call(
				"getSignatureStatuses",
				json!([[signature], { "searchTransactionHistory": true }]),
			)
			.await?;
		match result.value.into_iter().next().flatten() {
			Some(status) => {
				if let Some(err) = status.err {
					return Err(WalletError::transaction(format!(
						"transaction {} failed: {}",
						signature, err
					)));
				}
				Ok(status.confirmation_status)
			},
			None => Ok(None),
		}
	}
}
