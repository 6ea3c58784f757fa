//! Signing abstraction for the Solana wallet
//!
//! The wallet never touches key material directly; it signs through this
//! trait so callers can plug in hardware or remote signers.

use ed25519_dalek::{Signer as _, SigningKey};
use zeroize::Zeroizing;

use stableflow_types::{WalletError, WalletResult};

use crate::solana::Pubkey;

/// Message signer bound to one ed25519 public key
pub trait TransactionSigner: Send + Sync {
	/// Public key the signatures verify against
	fn pubkey(&self) -> Pubkey;

	/// Sign an arbitrary message (a compiled transaction message here)
	fn sign_message(&self, message: &[u8]) -> WalletResult<[u8; 64]>;
}

/// In-memory ed25519 keypair signer
pub struct KeypairSigner {
	key: SigningKey,
}

impl KeypairSigner {
	/// Signer from a raw 32-byte secret key
	pub fn from_bytes(secret: &[u8; 32]) -> Self {
		Self {
			key: SigningKey::from_bytes(secret),
		}
	}

	/// Signer from a base58-encoded secret key (32-byte seed or 64-byte keypair)
	pub fn from_base58(encoded: &str) -> WalletResult<Self> {
		let decoded = Zeroizing::new(bs58::decode(encoded).into_vec().map_err(|e| {
			WalletError::Signing {
				reason: format!("invalid base58 secret key: {}", e),
			}
		})?);
		let seed: [u8; 32] = match decoded.len() {
			// Raw seed
			32 => decoded[..32].try_into().unwrap_or([0u8; 32]),
			// Solana keypair export: seed followed by the public key
			64 => decoded[..32].try_into().unwrap_or([0u8; 32]),
			other => {
				return Err(WalletError::Signing {
					reason: format!("secret key must be 32 or 64 bytes, got {}", other),
				})
			},
		};
		Ok(Self::from_bytes(&seed))
	}
}

impl std::fmt::Debug for KeypairSigner {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("KeypairSigner")
			.field("pubkey", &self.pubkey().to_string())
			.finish_non_exhaustive()
	}
}

impl TransactionSigner for KeypairSigner {
	fn pubkey(&self) -> Pubkey {
		Pubkey::new(self.key.verifying_key().to_bytes())
	}

	fn sign_message(&self, message: &[u8]) -> WalletResult<[u8; 64]> {
		Ok(self.key.sign(message).to_bytes())
	}
}
