//! Canonical transfer status exposed uniformly across services

use serde::{Deserialize, Serialize};

/// Three-valued status every backend state collapses into
///
/// In-flight and unrecognized backend states report as `Pending`; refunds
/// are terminal failures from the engine's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalStatus {
	Pending,
	Success,
	Failed,
}

impl std::fmt::Display for CanonicalStatus {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let s = match self {
			CanonicalStatus::Pending => "pending",
			CanonicalStatus::Success => "success",
			CanonicalStatus::Failed => "failed",
		};
		write!(f, "{}", s)
	}
}

/// Normalized status report for one transfer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusInfo {
	pub status: CanonicalStatus,
	/// Destination-chain transaction hash, available once successful
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub to_chain_tx_hash: Option<String>,
}

impl StatusInfo {
	pub fn pending() -> Self {
		Self {
			status: CanonicalStatus::Pending,
			to_chain_tx_hash: None,
		}
	}

	pub fn success(to_chain_tx_hash: Option<String>) -> Self {
		Self {
			status: CanonicalStatus::Success,
			to_chain_tx_hash,
		}
	}

	pub fn failed() -> Self {
		Self {
			status: CanonicalStatus::Failed,
			to_chain_tx_hash: None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_status_serde_lowercase() {
		assert_eq!(
			serde_json::to_string(&CanonicalStatus::Pending).unwrap(),
			"\"pending\""
		);
		let parsed: CanonicalStatus = serde_json::from_str("\"success\"").unwrap();
		assert_eq!(parsed, CanonicalStatus::Success);
	}

	#[test]
	fn test_status_info_shape() {
		let info = StatusInfo::success(Some("0xabc".to_string()));
		let json = serde_json::to_value(&info).unwrap();
		assert_eq!(json["status"], "success");
		assert_eq!(json["toChainTxHash"], "0xabc");

		let pending = serde_json::to_value(StatusInfo::pending()).unwrap();
		assert!(pending.get("toChainTxHash").is_none());
	}
}
