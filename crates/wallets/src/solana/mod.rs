//! Solana wallet: transfers, proxy deposits, and co-signed bridge sends

pub mod instructions;
pub mod pubkey;
pub mod rpc;
pub mod transaction;
mod wallet;

pub use pubkey::{derive_associated_token_account, Pubkey, SYSTEM_PROGRAM_ID};
pub use rpc::{RpcClient, SimulationOutcome};
pub use transaction::{AccountMeta, Instruction, Message, Transaction};
pub use wallet::SolanaWallet;
