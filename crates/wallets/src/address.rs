//! Cross-chain address conversion utilities
//!
//! OFT routing encodes every recipient as a 32-byte value. EVM addresses
//! are zero-padded, Solana public keys pass through unchanged, and Tron
//! addresses go through base58check (0x41 prefix, double-SHA256
//! checksum).

use sha2::{Digest, Sha256};

use stableflow_types::{ChainType, WalletError, WalletResult};

/// Tron address version prefix
const TRON_PREFIX: u8 = 0x41;

fn invalid(address: &str, reason: impl Into<String>) -> WalletError {
	WalletError::InvalidAddress {
		address: address.to_string(),
		reason: reason.into(),
	}
}

fn double_sha256(data: &[u8]) -> [u8; 32] {
	let first = Sha256::digest(data);
	let second = Sha256::digest(first);
	second.into()
}

fn strip_hex_prefix(value: &str) -> &str {
	value.strip_prefix("0x").unwrap_or(value)
}

/// Zero-pad a 20-byte EVM address to bytes32 hex
pub fn evm_address_to_bytes32(address: &str) -> WalletResult<String> {
	let hex_part = strip_hex_prefix(address);
	let bytes = hex::decode(hex_part).map_err(|e| invalid(address, e.to_string()))?;
	if bytes.len() != 20 {
		return Err(invalid(address, "EVM address must be 20 bytes"));
	}
	let mut padded = [0u8; 32];
	padded[12..].copy_from_slice(&bytes);
	Ok(format!("0x{}", hex::encode(padded)))
}

/// Convert a base58check Tron address to bytes32 hex
pub fn tron_address_to_bytes32(address: &str) -> WalletResult<String> {
	let decoded = bs58::decode(address)
		.into_vec()
		.map_err(|e| invalid(address, e.to_string()))?;
	// [0x41] + 20-byte address + 4-byte checksum
	if decoded.len() != 25 || decoded[0] != TRON_PREFIX {
		return Err(invalid(address, "not a base58check Tron address"));
	}
	let checksum = double_sha256(&decoded[..21]);
	if checksum[..4] != decoded[21..] {
		return Err(invalid(address, "checksum mismatch"));
	}
	let mut padded = [0u8; 32];
	padded[12..].copy_from_slice(&decoded[1..21]);
	Ok(format!("0x{}", hex::encode(padded)))
}

/// Convert a bytes32 hex value back to a base58check Tron address
pub fn bytes32_to_tron_address(bytes32: &str) -> WalletResult<String> {
	let bytes = hex::decode(strip_hex_prefix(bytes32))
		.map_err(|e| invalid(bytes32, e.to_string()))?;
	if bytes.len() != 32 {
		return Err(invalid(bytes32, "expected 32 bytes"));
	}
	let mut payload = Vec::with_capacity(25);
	payload.push(TRON_PREFIX);
	payload.extend_from_slice(&bytes[12..]);
	let checksum = double_sha256(&payload);
	payload.extend_from_slice(&checksum[..4]);
	Ok(bs58::encode(payload).into_string())
}

/// Convert a base58 Solana public key to bytes32 hex
pub fn solana_address_to_bytes32(address: &str) -> WalletResult<String> {
	let decoded = bs58::decode(address)
		.into_vec()
		.map_err(|e| invalid(address, e.to_string()))?;
	if decoded.len() != 32 {
		return Err(invalid(address, "Solana public key must be 32 bytes"));
	}
	Ok(format!("0x{}", hex::encode(decoded)))
}

/// Convert a bytes32 hex value back to a base58 Solana public key
pub fn bytes32_to_solana_address(bytes32: &str) -> WalletResult<String> {
	let bytes = hex::decode(strip_hex_prefix(bytes32))
		.map_err(|e| invalid(bytes32, e.to_string()))?;
	if bytes.len() != 32 {
		return Err(invalid(bytes32, "expected 32 bytes"));
	}
	Ok(bs58::encode(bytes).into_string())
}

/// Convert any supported address to its bytes32 routing form
pub fn address_to_bytes32(chain_type: ChainType, address: &str) -> WalletResult<String> {
	match chain_type {
		ChainType::Evm => evm_address_to_bytes32(address),
		ChainType::Sol => solana_address_to_bytes32(address),
		ChainType::Tron => tron_address_to_bytes32(address),
		other => Err(invalid(
			address,
			format!("no bytes32 form for {} addresses", other),
		)),
	}
}
