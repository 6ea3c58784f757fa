//! StableFlow chain wallets
//!
//! In-repo wallet implementation for Solana (transfers, proxy deposit
//! building, backend co-signed bridge transactions) plus the address
//! conversion utilities used for cross-chain routing. Wallets for other
//! chain families are supplied by the caller through the
//! [`stableflow_types::WalletAdapter`] trait.

pub mod address;
pub mod signer;
pub mod solana;

pub use address::{
	address_to_bytes32, bytes32_to_solana_address, bytes32_to_tron_address,
	evm_address_to_bytes32, solana_address_to_bytes32, tron_address_to_bytes32,
};
pub use signer::{KeypairSigner, TransactionSigner};
pub use solana::SolanaWallet;
