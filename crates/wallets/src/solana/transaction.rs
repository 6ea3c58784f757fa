//! Legacy Solana transaction codec
//!
//! Minimal message compiler and wire codec for legacy (non-versioned)
//! transactions: enough to build proxy deposits, re-sign backend
//! co-signed transactions, and verify signatures. Lengths use the
//! compact-u16 encoding; the message header is three bytes.

use ed25519_dalek::{Signature, Verifier, VerifyingKey};

use stableflow_types::{WalletError, WalletResult};

use super::pubkey::Pubkey;
use crate::signer::TransactionSigner;

const SIGNATURE_BYTES: usize = 64;
const BLOCKHASH_BYTES: usize = 32;

/// One account reference inside an instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountMeta {
	pub pubkey: Pubkey,
	pub is_signer: bool,
	pub is_writable: bool,
}

impl AccountMeta {
	pub fn writable(pubkey: Pubkey, is_signer: bool) -> Self {
		Self {
			pubkey,
			is_signer,
			is_writable: true,
		}
	}

	pub fn readonly(pubkey: Pubkey, is_signer: bool) -> Self {
		Self {
			pubkey,
			is_signer,
			is_writable: false,
		}
	}
}

/// Uncompiled instruction
#[derive(Debug, Clone)]
pub struct Instruction {
	pub program_id: Pubkey,
	pub accounts: Vec<AccountMeta>,
	pub data: Vec<u8>,
}

/// Instruction with account indexes resolved against the message keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledInstruction {
	pub program_id_index: u8,
	pub accounts: Vec<u8>,
	pub data: Vec<u8>,
}

/// Compiled legacy message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
	pub num_required_signatures: u8,
	pub num_readonly_signed: u8,
	pub num_readonly_unsigned: u8,
	pub account_keys: Vec<Pubkey>,
	pub recent_blockhash: [u8; 32],
	pub instructions: Vec<CompiledInstruction>,
}

impl Message {
	/// Compile instructions into a message with the payer as first signer
	pub fn compile(
		payer: &Pubkey,
		instructions: &[Instruction],
		recent_blockhash: [u8; 32],
	) -> WalletResult<Self> {
		// Merge duplicate keys, OR-ing their privileges; payer stays first
		let mut metas: Vec<AccountMeta> = vec![AccountMeta::writable(*payer, true)];
		let mut upsert = |meta: AccountMeta| {
			if let Some(existing) = metas.iter_mut().find(|m| m.pubkey == meta.pubkey) {
				existing.is_signer |= meta.is_signer;
				existing.is_writable |= meta.is_writable;
			} else {
				metas.push(meta);
			}
		};
		for instruction in instructions {
			for account in &instruction.accounts {
				upsert(account.clone());
			}
			upsert(AccountMeta::readonly(instruction.program_id, false));
		}

		// Writable signers, readonly signers, writable non-signers, readonly
		// non-signers. The sort is stable so the payer keeps index 0.
		let mut ordered = metas;
		ordered.sort_by_key(|m| (!m.is_signer, !m.is_writable));

		let num_required_signatures = ordered.iter().filter(|m| m.is_signer).count() as u8;
		let num_readonly_signed = ordered
			.iter()
			.filter(|m| m.is_signer && !m.is_writable)
			.count() as u8;
		let num_readonly_unsigned = ordered
			.iter()
			.filter(|m| !m.is_signer && !m.is_writable)
			.count() as u8;
		let account_keys: Vec<Pubkey> = ordered.iter().map(|m| m.pubkey).collect();

		let index_of = |key: &Pubkey| -> WalletResult<u8> {
			account_keys
				.iter()
				.position(|k| k == key)
				.map(|i| i as u8)
				.ok_or_else(|| WalletError::transaction("account missing from compiled keys"))
		};

		let mut compiled = Vec::with_capacity(instructions.len());
		for instruction in instructions {
			let accounts = instruction
				.accounts
				.iter()
				.map(|meta| index_of(&meta.pubkey))
				.collect::<WalletResult<Vec<u8>>>()?;
			compiled.push(CompiledInstruction {
				program_id_index: index_of(&instruction.program_id)?,
				accounts,
				data: instruction.data.clone(),
			});
		}

		Ok(Self {
			num_required_signatures,
			num_readonly_signed,
			num_readonly_unsigned,
			account_keys,
			recent_blockhash,
			instructions: compiled,
		})
	}

	/// Wire bytes of the message (the payload every signature covers)
	pub fn serialize(&self) -> Vec<u8> {
		let mut out = Vec::with_capacity(128);
		out.push(self.num_required_signatures);
		out.push(self.num_readonly_signed);
		out.push(self.num_readonly_unsigned);
		encode_compact_u16(&mut out, self.account_keys.len() as u16);
		for key in &self.account_keys {
			out.extend_from_slice(key.as_bytes());
		}
		out.extend_from_slice(&self.recent_blockhash);
		encode_compact_u16(&mut out, self.instructions.len() as u16);
		for instruction in &self.instructions {
			out.push(instruction.program_id_index);
			encode_compact_u16(&mut out, instruction.accounts.len() as u16);
			out.extend_from_slice(&instruction.accounts);
			encode_compact_u16(&mut out, instruction.data.len() as u16);
			out.extend_from_slice(&instruction.data);
		}
		out
	}

	pub fn deserialize(bytes: &[u8]) -> WalletResult<Self> {
		let mut cursor = Cursor::new(bytes);
		let num_required_signatures = cursor.read_u8()?;
		let num_readonly_signed = cursor.read_u8()?;
		let num_readonly_unsigned = cursor.read_u8()?;

		let key_count = cursor.read_compact_u16()? as usize;
		let mut account_keys = Vec::with_capacity(key_count);
		for _ in 0..key_count {
			account_keys.push(Pubkey::new(cursor.read_array::<32>()?));
		}
		let recent_blockhash = cursor.read_array::<BLOCKHASH_BYTES>()?;

		let instruction_count = cursor.read_compact_u16()? as usize;
		let mut instructions = Vec::with_capacity(instruction_count);
		for _ in 0..instruction_count {
			let program_id_index = cursor.read_u8()?;
			let account_count = cursor.read_compact_u16()? as usize;
			let accounts = cursor.read_bytes(account_count)?.to_vec();
			let data_len = cursor.read_compact_u16()? as usize;
			let data = cursor.read_bytes(data_len)?.to_vec();
			instructions.push(CompiledInstruction {
				program_id_index,
				accounts,
				data,
			});
		}

		Ok(Self {
			num_required_signatures,
			num_readonly_signed,
			num_readonly_unsigned,
			account_keys,
			recent_blockhash,
			instructions,
		})
	}
}

/// Legacy transaction: signatures followed by the compiled message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
	pub signatures: Vec<[u8; 64]>,
	pub message: Message,
}

impl Transaction {
	/// Unsigned transaction with zeroed signature slots
	pub fn new_unsigned(message: Message) -> Self {
		let signatures = vec![[0u8; SIGNATURE_BYTES]; message.num_required_signatures as usize];
		Self {
			signatures,
			message,
		}
	}

	/// Sign with the given signer, filling its slot among the required signers
	pub fn sign(&mut self, signer: &dyn TransactionSigner) -> WalletResult<()> {
		let pubkey = signer.pubkey();
		let required = self.message.num_required_signatures as usize;
		let index = self.message.account_keys[..required.min(self.message.account_keys.len())]
			.iter()
			.position(|key| *key == pubkey)
			.ok_or_else(|| {
				WalletError::Signing {
					reason: format!("{} is not a required signer", pubkey),
				}
			})?;
		let signature = signer.sign_message(&self.message.serialize())?;
		self.signatures[index] = signature;
		Ok(())
	}

	/// Verify all present signatures; zeroed slots are treated as unsigned
	pub fn verify_signatures(&self) -> bool {
		let message_bytes = self.message.serialize();
		for (index, signature) in self.signatures.iter().enumerate() {
			if signature.iter().all(|b| *b == 0) {
				continue;
			}
			let Some(key) = self.message.account_keys.get(index) else {
				return false;
			};
			let Ok(verifying) = VerifyingKey::from_bytes(key.as_bytes()) else {
				return false;
			};
			if verifying
				.verify(&message_bytes, &Signature::from_bytes(signature))
				.is_err()
			{
				return false;
			}
		}
		true
	}

	pub fn serialize(&self) -> Vec<u8> {
		let mut out = Vec::with_capacity(64 + 128);
		encode_compact_u16(&mut out, self.signatures.len() as u16);
		for signature in &self.signatures {
			out.extend_from_slice(signature);
		}
		out.extend_from_slice(&self.message.serialize());
		out
	}

	pub fn deserialize(bytes: &[u8]) -> WalletResult<Self> {
		let mut cursor = Cursor::new(bytes);
		let signature_count = cursor.read_compact_u16()? as usize;
		let mut signatures = Vec::with_capacity(signature_count);
		for _ in 0..signature_count {
			signatures.push(cursor.read_array::<SIGNATURE_BYTES>()?);
		}
		let message = Message::deserialize(cursor.remaining())?;
		Ok(Self {
			signatures,
			message,
		})
	}
}

/// Append a compact-u16 (1-3 bytes, 7 bits per byte, little endian)
fn encode_compact_u16(out: &mut Vec<u8>, mut value: u16) {
	loop {
		let mut byte = (value & 0x7f) as u8;
		value >>= 7;
		if value != 0 {
			byte |= 0x80;
		}
		out.push(byte);
		if value == 0 {
			break;
		}
	}
}

struct Cursor<'a> {
	bytes: &'a [u8],
	offset: usize,
}

impl<'a> Cursor<'a> {
	fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, offset: 0 }
	}

	fn read_u8(&mut self) -> WalletResult<u8> {
		let byte = self
			.bytes
			.get(self.offset)
			.copied()
			.ok_or_else(|| WalletError::transaction("truncated transaction bytes"))?;
		self.offset += 1;
		Ok(byte)
	}

	fn read_compact_u16(&mut self) -> WalletResult<u16> {
		let mut value: u16 = 0;
		for shift in [0u32, 7, 14] {
			let byte = self.read_u8()?;
			value |= u16::from(byte & 0x7f) << shift;
			if byte & 0x80 == 0 {
				return Ok(value);
			}
		}
		Err(WalletError::transaction("compact-u16 length overflow"))
	}

	fn read_bytes(&mut self, len: usize) -> WalletResult<&'a [u8]> {
		let end = self
			.offset
			.checked_add(len)
			.filter(|end| *end <= self.bytes.len())
			.ok_or_else(|| WalletError::transaction("truncated transaction bytes"))?;
		let slice = &self.bytes[self.offset..end];
		self.offset = end;
		Ok(slice)
	}

	fn read_array<const N: usize>(&mut self) -> WalletResult<[u8; N]> {
		let slice = self.read_bytes(N)?;
		let mut array = [0u8; N];
		array.copy_from_slice(slice);
		Ok(array)
	}

	fn remaining(&self) -> &'a [u8] {
		&self.bytes[self.offset..]
	}
}
