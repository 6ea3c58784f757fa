//! Translation of raw backend statuses into the canonical three states
//!
//! Unrecognized and in-flight states fail open to `Pending`; refunds and
//! expirations are terminal failures.

use stableflow_types::wire::{ExecutionStatus, ExecutionStatusResponse, TradeRecord};
use stableflow_types::{RawStatus, StatusInfo};

/// Collapse a raw service status into `{ Pending, Success, Failed }`
pub fn translate_status(raw: &RawStatus) -> StatusInfo {
	match raw {
		RawStatus::Relay(response) => translate_relay(response),
		RawStatus::Trade(record) => translate_trade(record),
	}
}

fn translate_relay(response: &ExecutionStatusResponse) -> StatusInfo {
	match response.status {
		ExecutionStatus::Success => {
			let hash = response
				.swap_details
				.as_ref()
				.and_then(|details| details.destination_chain_tx_hashes.first())
				.map(|tx| tx.hash.clone());
			StatusInfo::success(hash)
		},
		ExecutionStatus::Refunded | ExecutionStatus::Failed => StatusInfo::failed(),
		_ => StatusInfo::pending(),
	}
}

fn translate_trade(record: &TradeRecord) -> StatusInfo {
	match record.status {
		Some(TradeRecord::STATUS_SUCCESS) => StatusInfo::success(record.receive_tx_hash.clone()),
		Some(TradeRecord::STATUS_EXPIRED) => StatusInfo::failed(),
		_ => StatusInfo::pending(),
	}
}
