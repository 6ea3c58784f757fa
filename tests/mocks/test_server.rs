//! In-process backend stubs built on axum

#![allow(dead_code)]

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};

/// Serve a router on an ephemeral port, returning its base URL
pub async fn spawn_backend(app: Router) -> String {
	let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
		.await
		.expect("bind test port");
	let addr = listener.local_addr().unwrap();
	tokio::spawn(async move {
		let _ = axum::serve(listener, app).await;
	});
	format!("http://{}", addr)
}

/// Happy-path relay quote for a 1 USDC dry request
pub fn relay_quote_ok() -> Router {
	Router::new().route(
		"/v0/quote",
		post(|| async {
			Json(serde_json::json!({
				"timestamp": "2025-01-01T00:00:00Z",
				"quote": {
					"amountIn": "1000000",
					"amountInFormatted": "1",
					"amountOut": "997000",
					"amountOutFormatted": "0.997",
					"timeEstimate": 60
				}
			}))
		}),
	)
}

/// Relay quote endpoint that always fails with the given backend message
pub fn relay_quote_failing(message: &'static str) -> Router {
	Router::new().route(
		"/v0/quote",
		post(move || async move {
			(
				StatusCode::BAD_REQUEST,
				Json(serde_json::json!({"message": message})),
			)
		}),
	)
}

/// Relay status endpoint answering with a fixed execution status
pub fn relay_status(status: &'static str, dest_hash: Option<&'static str>) -> Router {
	Router::new().route(
		"/v0/status",
		get(move || async move {
			let hashes: Vec<serde_json::Value> = dest_hash
				.into_iter()
				.map(|hash| serde_json::json!({"hash": hash}))
				.collect();
			Json(serde_json::json!({
				"status": status,
				"updatedAt": "2025-01-01T00:00:00Z",
				"swapDetails": {"destinationChainTxHashes": hashes}
			}))
		}),
	)
}

/// Trade-record endpoint for token-bridge and OFT status lookups
pub fn trade_record(status: u8, receive_tx_hash: Option<&'static str>) -> Router {
	Router::new().route(
		"/v0/trade",
		get(move || async move {
			Json(serde_json::json!({
				"status": status,
				"receive_tx_hash": receive_tx_hash,
				"deposit_address": "0xsrc"
			}))
		}),
	)
}

/// Telemetry sink accepting any trade report
pub fn trade_sink() -> Router {
	Router::new().route("/v0/trade/add", post(|| async { Json(serde_json::json!({"ok": true})) }))
}
