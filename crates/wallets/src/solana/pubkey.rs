//! Solana public keys and address derivation

use std::fmt;
use std::str::FromStr;

use ed25519_dalek::VerifyingKey;
use sha2::{Digest, Sha256};

use stableflow_types::{WalletError, WalletResult};

/// Marker appended when hashing program-derived address candidates
const PDA_MARKER: &[u8] = b"ProgramDerivedAddress";

/// System program id (all zeros)
pub const SYSTEM_PROGRAM_ID: Pubkey = Pubkey([0u8; 32]);

/// 32-byte ed25519 public key (or program-derived address)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pubkey(pub [u8; 32]);

impl Pubkey {
	pub const fn new(bytes: [u8; 32]) -> Self {
		Self(bytes)
	}

	pub fn as_bytes(&self) -> &[u8; 32] {
		&self.0
	}

	pub fn parse(address: &str) -> WalletResult<Self> {
		address.parse()
	}

	/// Whether the bytes decompress to a valid curve point
	///
	/// Program-derived addresses must be off-curve so no private key can
	/// ever sign for them.
	pub fn is_on_curve(&self) -> bool {
		VerifyingKey::from_bytes(&self.0).is_ok()
	}

	/// Derive a program address from seeds, scanning bumps from 255 down
	pub fn find_program_address(seeds: &[&[u8]], program_id: &Pubkey) -> (Pubkey, u8) {
		for bump in (0..=255u8).rev() {
			let mut hasher = Sha256::new();
			for seed in seeds {
				hasher.update(seed);
			}
			hasher.update([bump]);
			hasher.update(program_id.as_bytes());
			hasher.update(PDA_MARKER);
			let candidate = Pubkey::new(hasher.finalize().into());
			if !candidate.is_on_curve() {
				return (candidate, bump);
			}
		}
		// Statistically unreachable: half of all candidates are off-curve
		(Pubkey([0u8; 32]), 0)
	}
}

impl FromStr for Pubkey {
	type Err = WalletError;

	fn from_str(address: &str) -> Result<Self, Self::Err> {
		let decoded = bs58::decode(address)
			.into_vec()
			.map_err(|e| WalletError::InvalidAddress {
				address: address.to_string(),
				reason: e.to_string(),
			})?;
		let bytes: [u8; 32] = decoded
			.try_into()
			.map_err(|_| WalletError::InvalidAddress {
				address: address.to_string(),
				reason: "public key must be 32 bytes".to_string(),
			})?;
		Ok(Self(bytes))
	}
}

impl fmt::Display for Pubkey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", bs58::encode(self.0).into_string())
	}
}

impl fmt::Debug for Pubkey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Pubkey({})", self)
	}
}

/// SPL token program id
pub fn token_program_id() -> Pubkey {
	"TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA"
		.parse()
		.unwrap_or(SYSTEM_PROGRAM_ID)
}

/// Associated token account program id
pub fn associated_token_program_id() -> Pubkey {
	"ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL"
		.parse()
		.unwrap_or(SYSTEM_PROGRAM_ID)
}

/// Derive the associated token account for an owner and mint
pub fn derive_associated_token_account(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
	let token_program = token_program_id();
	let seeds: [&[u8]; 3] = [
		owner.as_bytes(),
		token_program.as_bytes(),
		mint.as_bytes(),
	];
	Pubkey::find_program_address(&seeds, &associated_token_program_id()).0
}
