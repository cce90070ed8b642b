use crate::cursor::{encode_compact_u16, ByteCursor};
use crate::error::WireError;
use solana_sdk::hash::Hash;
use solana_sdk::instruction::CompiledInstruction;
use solana_sdk::message::v0::MessageAddressTableLookup;
use solana_sdk::message::MessageHeader;
use solana_sdk::pubkey::Pubkey;

/// High bit of the first message byte marks a versioned message; the low
/// seven bits carry the version number.
pub const MESSAGE_VERSION_PREFIX: u8 = 0x80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageVersion {
    Legacy,
    V0(u8),
}

/// A transaction message decoded from raw bytes.
///
/// Decoding validates only the wire shape. Program ids, opcodes, and
/// account indexes are accepted verbatim; the virtual index space
/// (static keys, then writable lookups, then readonly lookups) is
/// interpreted by the report assembler once tables are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub version: MessageVersion,
    pub header: MessageHeader,
    pub static_account_keys: Vec<Pubkey>,
    pub recent_blockhash: Hash,
    pub instructions: Vec<CompiledInstruction>,
    /// Empty for legacy messages.
    pub address_table_lookups: Vec<MessageAddressTableLookup>,
}

impl Message {
    /// Decode a message from the start of `bytes`. Trailing bytes beyond
    /// the message are ignored.
    pub fn deserialize(bytes: &[u8]) -> Result<Self, WireError> {
        let mut cursor = ByteCursor::new(bytes);
        let version = match cursor.peek_u8() {
            Some(prefix) if prefix & MESSAGE_VERSION_PREFIX != 0 => {
                cursor.read_u8()?;
                MessageVersion::V0(prefix & !MESSAGE_VERSION_PREFIX)
            }
            Some(_) => MessageVersion::Legacy,
            None => return Err(WireError::MalformedMessage("empty buffer".to_string())),
        };

        let header = MessageHeader {
            num_required_signatures: cursor.read_u8()?,
            num_readonly_signed_accounts: cursor.read_u8()?,
            num_readonly_unsigned_accounts: cursor.read_u8()?,
        };

        let num_keys = cursor.read_compact_len()?;
        if num_keys
            .checked_mul(32)
            .map_or(true, |len| len > cursor.remaining())
        {
            return Err(WireError::MalformedMessage(format!(
                "account key count {num_keys} exceeds the remaining buffer"
            )));
        }
        let mut static_account_keys = Vec::with_capacity(num_keys);
        for _ in 0..num_keys {
            static_account_keys.push(cursor.read_pubkey()?);
        }

        let recent_blockhash = cursor.read_hash()?;

        let num_instructions = cursor.read_compact_len()?;
        if num_instructions > cursor.remaining() {
            return Err(WireError::MalformedMessage(format!(
                "instruction count {num_instructions} exceeds the remaining buffer"
            )));
        }
        let mut instructions = Vec::with_capacity(num_instructions);
        for _ in 0..num_instructions {
            instructions.push(read_instruction(&mut cursor)?);
        }

        let address_table_lookups = match version {
            MessageVersion::Legacy => vec![],
            MessageVersion::V0(_) => {
                let num_lookups = cursor.read_compact_len()?;
                if num_lookups > cursor.remaining() {
                    return Err(WireError::MalformedMessage(format!(
                        "lookup count {num_lookups} exceeds the remaining buffer"
                    )));
                }
                let mut lookups = Vec::with_capacity(num_lookups);
                for _ in 0..num_lookups {
                    lookups.push(read_lookup(&mut cursor)?);
                }
                lookups
            }
        };

        Ok(Self {
            version,
            header,
            static_account_keys,
            recent_blockhash,
            instructions,
            address_table_lookups,
        })
    }

    /// Re-encode the message. Decoding the result yields an equal
    /// message, and for any buffer accepted by [`Message::deserialize`]
    /// with minimal compact lengths this reproduces the consumed bytes.
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::new();
        if let MessageVersion::V0(version) = self.version {
            out.push(MESSAGE_VERSION_PREFIX | version);
        }
        out.push(self.header.num_required_signatures);
        out.push(self.header.num_readonly_signed_accounts);
        out.push(self.header.num_readonly_unsigned_accounts);
        encode_compact_u16(self.static_account_keys.len() as u16, &mut out);
        for key in &self.static_account_keys {
            out.extend_from_slice(key.as_ref());
        }
        out.extend_from_slice(self.recent_blockhash.as_ref());
        encode_compact_u16(self.instructions.len() as u16, &mut out);
        for ix in &self.instructions {
            out.push(ix.program_id_index);
            encode_compact_u16(ix.accounts.len() as u16, &mut out);
            out.extend_from_slice(&ix.accounts);
            encode_compact_u16(ix.data.len() as u16, &mut out);
            out.extend_from_slice(&ix.data);
        }
        if let MessageVersion::V0(_) = self.version {
            encode_compact_u16(self.address_table_lookups.len() as u16, &mut out);
            for lookup in &self.address_table_lookups {
                out.extend_from_slice(lookup.account_key.as_ref());
                encode_compact_u16(lookup.writable_indexes.len() as u16, &mut out);
                out.extend_from_slice(&lookup.writable_indexes);
                encode_compact_u16(lookup.readonly_indexes.len() as u16, &mut out);
                out.extend_from_slice(&lookup.readonly_indexes);
            }
        }
        out
    }

    /// Number of addresses the lookup tables contribute to the writable
    /// region of the virtual index space.
    pub fn num_lookup_writable(&self) -> usize {
        self.address_table_lookups
            .iter()
            .map(|lookup| lookup.writable_indexes.len())
            .sum()
    }

    pub fn num_lookup_readonly(&self) -> usize {
        self.address_table_lookups
            .iter()
            .map(|lookup| lookup.readonly_indexes.len())
            .sum()
    }

    /// Total size of the virtual index space: static keys, then writable
    /// lookup addresses, then readonly lookup addresses.
    pub fn account_key_count(&self) -> usize {
        self.static_account_keys.len() + self.num_lookup_writable() + self.num_lookup_readonly()
    }

    pub fn is_signer(&self, index: usize) -> bool {
        index < self.header.num_required_signatures as usize
    }

    /// Writable flag for an index into the virtual index space, derived
    /// from header math alone. Saturating arithmetic keeps this total on
    /// adversarial headers.
    pub fn is_writable(&self, index: usize) -> bool {
        let header = &self.header;
        let num_static = self.static_account_keys.len();
        if index < header.num_required_signatures as usize {
            index
                < (header.num_required_signatures as usize)
                    .saturating_sub(header.num_readonly_signed_accounts as usize)
        } else if index < num_static {
            index < num_static.saturating_sub(header.num_readonly_unsigned_accounts as usize)
        } else {
            index < num_static + self.num_lookup_writable()
        }
    }
}

fn read_instruction(cursor: &mut ByteCursor) -> Result<CompiledInstruction, WireError> {
    let program_id_index = cursor.read_u8()?;
    let num_accounts = cursor.read_compact_len()?;
    let accounts = cursor.read_bytes(num_accounts)?.to_vec();
    let data_len = cursor.read_compact_len()?;
    let data = cursor.read_bytes(data_len)?.to_vec();
    Ok(CompiledInstruction {
        program_id_index,
        accounts,
        data,
    })
}

fn read_lookup(cursor: &mut ByteCursor) -> Result<MessageAddressTableLookup, WireError> {
    let account_key = cursor.read_pubkey()?;
    let num_writable = cursor.read_compact_len()?;
    let writable_indexes = cursor.read_bytes(num_writable)?.to_vec();
    let num_readonly = cursor.read_compact_len()?;
    let readonly_indexes = cursor.read_bytes(num_readonly)?.to_vec();
    Ok(MessageAddressTableLookup {
        account_key,
        writable_indexes,
        readonly_indexes,
    })
}
