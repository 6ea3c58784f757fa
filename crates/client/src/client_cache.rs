//! Pooled `reqwest` clients, one per distinct configuration
//!
//! Building a reqwest client is not free and every client owns its own
//! connection pool, so the SDK shares them process-wide. The cache key is
//! the full [`ClientConfig`] including auth headers: a rotated bearer
//! token gets a fresh client rather than a stale authenticated session.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, ClientBuilder};
use tracing::{debug, warn};

use crate::errors::{ClientError, ClientResult};

const DEFAULT_TTL: Duration = Duration::from_secs(30 * 60);
const KEEP_ALIVE: Duration = Duration::from_millis(90_000);

/// Cache key and construction recipe for one pooled client
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientConfig {
	pub base_url: String,
	/// Idle connections kept per host
	pub max_idle_per_host: usize,
	/// Extra default headers, auth included
	pub headers: Vec<(String, String)>,
}

impl ClientConfig {
	pub fn new(base_url: impl Into<String>) -> Self {
		Self {
			base_url: base_url.into(),
			max_idle_per_host: 10,
			headers: vec![
				("User-Agent".to_string(), "StableFlow-SDK/0.1".to_string()),
				("Content-Type".to_string(), "application/json".to_string()),
			],
		}
	}

	/// Attach an `Authorization: Bearer ...` default header
	pub fn with_bearer(mut self, token: &str) -> Self {
		self.headers
			.push(("Authorization".to_string(), format!("Bearer {}", token)));
		self
	}

	fn build_client(&self) -> ClientResult<Client> {
		let mut headers = HeaderMap::new();
		for (name, value) in &self.headers {
			match (
				HeaderName::from_bytes(name.as_bytes()),
				HeaderValue::from_str(value),
			) {
				(Ok(name), Ok(value)) => {
					headers.insert(name, value);
				},
				_ => warn!("skipping malformed default header {}", name),
			}
		}

		ClientBuilder::new()
			.pool_max_idle_per_host(self.max_idle_per_host)
			.pool_idle_timeout(KEEP_ALIVE)
			.http2_keep_alive_timeout(KEEP_ALIVE)
			.tcp_keepalive(Duration::from_secs(60))
			.default_headers(headers)
			.build()
			.map_err(ClientError::Http)
	}
}

#[derive(Debug, Clone)]
struct PooledEntry {
	client: Arc<Client>,
	built_at: Instant,
}

/// Concurrent client cache with TTL eviction
#[derive(Clone, Debug)]
pub struct ClientCache {
	entries: Arc<DashMap<ClientConfig, PooledEntry>>,
	ttl: Duration,
}

impl ClientCache {
	pub fn new() -> Self {
		Self::with_ttl(DEFAULT_TTL)
	}

	/// Shorter TTLs are useful in tests
	pub fn with_ttl(ttl: Duration) -> Self {
		Self {
			entries: Arc::new(DashMap::new()),
			ttl,
		}
	}

	pub fn ttl(&self) -> Duration {
		self.ttl
	}

	/// Borrow the pooled client for this configuration, building it on miss
	pub fn get_client(&self, config: &ClientConfig) -> ClientResult<Arc<Client>> {
		// Evict-then-read keeps the expiry check atomic per key
		self.entries
			.remove_if(config, |_, entry| entry.built_at.elapsed() > self.ttl);

		if let Some(entry) = self.entries.get(config) {
			return Ok(Arc::clone(&entry.client));
		}

		debug!("building pooled http client for {}", config.base_url);
		let fresh = PooledEntry {
			client: Arc::new(config.build_client()?),
			built_at: Instant::now(),
		};
		// A racing task may have inserted first; its client wins
		match self.entries.entry(config.clone()) {
			Entry::Occupied(existing) => Ok(Arc::clone(&existing.get().client)),
			Entry::Vacant(slot) => {
				let client = Arc::clone(&fresh.client);
				slot.insert(fresh);
				Ok(client)
			},
		}
	}
}

impl Default for ClientCache {
	fn default() -> Self {
		Self::new()
	}
}

lazy_static::lazy_static! {
	static ref GLOBAL_CLIENT_CACHE: ClientCache = ClientCache::new();
}

/// Process-wide cache shared by all `ApiClient`s and wallet RPC clients
pub fn global_client_cache() -> &'static ClientCache {
	&GLOBAL_CLIENT_CACHE
}
