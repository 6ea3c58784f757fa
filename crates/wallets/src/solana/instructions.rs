//! Instruction builders for the programs the wallet touches
//!
//! System transfers, SPL token transfers, associated-token-account
//! creation, and the Anchor `transfer` entry point of the relay deposit
//! proxy program.

use sha2::{Digest, Sha256};

use super::pubkey::{
	associated_token_program_id, token_program_id, Pubkey, SYSTEM_PROGRAM_ID,
};
use super::transaction::{AccountMeta, Instruction};

/// System program transfer instruction index
const SYSTEM_TRANSFER_INDEX: u32 = 2;

/// SPL token program `Transfer` instruction tag
const SPL_TRANSFER_TAG: u8 = 3;

/// Native SOL transfer
pub fn system_transfer(from: &Pubkey, to: &Pubkey, lamports: u64) -> Instruction {
	let mut data = SYSTEM_TRANSFER_INDEX.to_le_bytes().to_vec();
	data.extend_from_slice(&lamports.to_le_bytes());
	Instruction {
		program_id: SYSTEM_PROGRAM_ID,
		accounts: vec![
			AccountMeta::writable(*from, true),
			AccountMeta::writable(*to, false),
		],
		data,
	}
}

/// SPL token transfer between two token accounts
pub fn spl_transfer(source: &Pubkey, destination: &Pubkey, owner: &Pubkey, amount: u64) -> Instruction {
	let mut data = vec![SPL_TRANSFER_TAG];
	data.extend_from_slice(&amount.to_le_bytes());
	Instruction {
		program_id: token_program_id(),
		accounts: vec![
			AccountMeta::writable(*source, false),
			AccountMeta::writable(*destination, false),
			AccountMeta::readonly(*owner, true),
		],
		data,
	}
}

/// Create the associated token account for an owner and mint
pub fn create_associated_token_account(
	payer: &Pubkey,
	ata: &Pubkey,
	owner: &Pubkey,
	mint: &Pubkey,
) -> Instruction {
	Instruction {
		program_id: associated_token_program_id(),
		accounts: vec![
			AccountMeta::writable(*payer, true),
			AccountMeta::writable(*ata, false),
			AccountMeta::readonly(*owner, false),
			AccountMeta::readonly(*mint, false),
			AccountMeta::readonly(SYSTEM_PROGRAM_ID, false),
			AccountMeta::readonly(token_program_id(), false),
		],
		data: Vec::new(),
	}
}

/// Arguments for the deposit proxy program's `transfer` method
pub struct ProxyTransferAccounts {
	pub state: Pubkey,
	pub mint: Pubkey,
	pub user_token_account: Pubkey,
	pub to_token_account: Pubkey,
	pub user: Pubkey,
	pub to_user: Pubkey,
}

/// Anchor `transfer(amount)` call on the deposit proxy program
///
/// The eight-byte discriminator is the Anchor convention:
/// `sha256("global:transfer")[..8]`.
pub fn proxy_transfer(program_id: &Pubkey, accounts: &ProxyTransferAccounts, amount: u64) -> Instruction {
	let discriminator = Sha256::digest(b"global:transfer");
	let mut data = discriminator[..8].to_vec();
	data.extend_from_slice(&amount.to_le_bytes());
	Instruction {
		program_id: *program_id,
		accounts: vec![
			AccountMeta::readonly(accounts.state, false),
			AccountMeta::readonly(accounts.mint, false),
			AccountMeta::writable(accounts.user_token_account, false),
			AccountMeta::writable(accounts.to_token_account, false),
			AccountMeta::readonly(token_program_id(), false),
			AccountMeta::writable(accounts.user, true),
			AccountMeta::readonly(accounts.to_user, false),
			AccountMeta::readonly(SYSTEM_PROGRAM_ID, false),
		],
		data,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(byte: u8) -> Pubkey {
		Pubkey::new([byte; 32])
	}

	#[test]
	fn test_system_transfer_data_layout() {
		let ix = system_transfer(&key(1), &key(2), 1_000_000);
		assert_eq!(ix.program_id, SYSTEM_PROGRAM_ID);
		assert_eq!(&ix.data[..4], &2u32.to_le_bytes());
		assert_eq!(&ix.data[4..], &1_000_000u64.to_le_bytes());
		assert!(ix.accounts[0].is_signer && ix.accounts[0].is_writable);
		assert!(!ix.accounts[1].is_signer && ix.accounts[1].is_writable);
	}

	#[test]
	fn test_spl_transfer_data_layout() {
		let ix = spl_transfer(&key(1), &key(2), &key(3), 42);
		assert_eq!(ix.program_id, token_program_id());
		assert_eq!(ix.data[0], 3);
		assert_eq!(&ix.data[1..], &42u64.to_le_bytes());
		// Owner signs but stays readonly
		assert!(ix.accounts[2].is_signer && !ix.accounts[2].is_writable);
	}

	#[test]
	fn test_create_ata_has_empty_data() {
		let ix = create_associated_token_account(&key(1), &key(2), &key(3), &key(4));
		assert_eq!(ix.program_id, associated_token_program_id());
		assert!(ix.data.is_empty());
		assert_eq!(ix.accounts.len(), 6);
	}

	#[test]
	fn test_proxy_transfer_discriminator() {
		let accounts = ProxyTransferAccounts {
			state: key(1),
			mint: key(2),
			user_token_account: key(3),
			to_token_account: key(4),
			user: key(5),
			to_user: key(6),
		};
		let ix = proxy_transfer(&key(9), &accounts, 7);
		let expected = Sha256::digest(b"global:transfer");
		assert_eq!(&ix.data[..8], &expected[..8]);
		assert_eq!(&ix.data[8..], &7u64.to_le_bytes());
		assert_eq!(ix.accounts.len(), 8);
		assert!(ix.accounts[5].is_signer && ix.accounts[5].is_writable);
	}
}
