//! Per-chain RPC endpoint table
//!
//! One shared table of RPC URLs keyed by the short backend chain key.
//! Updates prepend caller URLs so they take priority over the built-in
//! defaults; entries are never removed, and reads are safe concurrently
//! with the rare reconfiguration call.

use std::collections::HashMap;
use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

/// Built-in mainnet RPC endpoints per chain key
pub const DEFAULT_RPC_URLS: &[(&str, &str)] = &[
	("eth", "https://eth.merkle.io"),
	("arb", "https://arb1.arbitrum.io/rpc"),
	("bsc", "https://56.rpc.thirdweb.com"),
	("avax", "https://api.avax.network/ext/bc/C/rpc"),
	("base", "https://mainnet.base.org"),
	("pol", "https://polygon-rpc.com"),
	("gnosis", "https://rpc.gnosischain.com"),
	("op", "https://mainnet.optimism.io"),
	("bera", "https://rpc.berachain.com"),
	("tron", "https://api.trongrid.io"),
	("aptos", "https://api.mainnet.aptoslabs.com/v1"),
	("sol", "https://solana-rpc.publicnode.com"),
	("near", "https://nearinner.deltarpc.com"),
	("xlayer", "https://rpc.xlayer.tech"),
	("plasma", "https://rpc.plasma.to"),
];

/// Concurrent chain-to-URLs map seeded with [`DEFAULT_RPC_URLS`]
#[derive(Debug, Clone)]
pub struct RpcTable {
	urls: Arc<DashMap<String, Vec<String>>>,
}

impl RpcTable {
	/// Table pre-populated with the built-in defaults
	pub fn new() -> Self {
		let urls = DashMap::new();
		for (chain, url) in DEFAULT_RPC_URLS {
			urls.insert(chain.to_string(), vec![url.to_string()]);
		}
		Self {
			urls: Arc::new(urls),
		}
	}

	/// Empty table without defaults (tests, fully custom deployments)
	pub fn empty() -> Self {
		Self {
			urls: Arc::new(DashMap::new()),
		}
	}

	/// RPC URLs for a chain, highest priority first
	pub fn get(&self, chain: &str) -> Vec<String> {
		self.urls
			.get(chain)
			.map(|entry| entry.value().clone())
			.unwrap_or_default()
	}

	/// Preferred (first) RPC URL for a chain
	pub fn primary(&self, chain: &str) -> Option<String> {
		self.urls
			.get(chain)
			.and_then(|entry| entry.value().first().cloned())
	}

	/// Merge caller-supplied URLs into the table
	///
	/// New URLs are prepended in their given order so the first supplied
	/// URL ends up first overall. Duplicates (case-insensitive) are
	/// skipped; existing entries are never removed.
	pub fn set_rpc_urls(&self, updates: HashMap<String, Vec<String>>) {
		for (chain, new_urls) in updates {
			let mut entry = self.urls.entry(chain.clone()).or_default();
			for url in new_urls.iter().rev() {
				let exists = entry
					.iter()
					.any(|existing| existing.eq_ignore_ascii_case(url));
				if exists {
					continue;
				}
				entry.insert(0, url.clone());
			}
			debug!("RPC table for {} now has {} URLs", chain, entry.len());
		}
	}
}

impl Default for RpcTable {
	fn default() -> Self {
		Self::new()
	}
}
