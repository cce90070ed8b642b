use serde::{Deserialize, Serialize};
use serde_json::Value;
use solana_inspect_serde::{option_pubkey, pubkey};
use solana_sdk::pubkey::Pubkey;

/// One account passed to an instruction, after its message index has
/// been mapped through the static keys and any resolved lookup
/// addresses.
///
/// `address` is `None` when the index missed the virtual index space or
/// its lookup table could not be resolved; `error` says why. Accounts
/// start out with positional `Account #N` labels and dedicated decoders
/// rename the leading ones to their semantic roles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstructionAccount {
    pub name: String,
    #[serde(with = "option_pubkey")]
    pub address: Option<Pubkey>,
    pub writable: bool,
    pub signer: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl InstructionAccount {
    pub fn new(name: impl Into<String>, address: Pubkey, writable: bool, signer: bool) -> Self {
        Self {
            name: name.into(),
            address: Some(address),
            writable,
            signer,
            error: None,
        }
    }

    pub fn unresolved(
        name: impl Into<String>,
        writable: bool,
        signer: bool,
        error: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: None,
            writable,
            signer,
            error: Some(error.into()),
        }
    }
}

/// Rename the leading accounts to their semantic roles. Accounts beyond
/// the named set keep their positional labels; missing accounts are not
/// an error here, the per-program layouts tolerate short lists.
pub fn apply_account_names(accounts: &mut [InstructionAccount], names: &[&str]) {
    for (account, name) in accounts.iter_mut().zip(names) {
        account.name = (*name).to_string();
    }
}

/// One decoded instruction argument. Integers of 64 bits and wider are
/// rendered as decimal strings so the value survives JSON consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstructionArgument {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub value: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl InstructionArgument {
    pub fn new(name: &str, ty: &str, value: impl Into<Value>) -> Self {
        Self {
            name: name.to_string(),
            ty: ty.to_string(),
            value: value.into(),
            error: None,
        }
    }

    pub fn failed(name: &str, ty: &str, error: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            ty: ty.to_string(),
            value: Value::Null,
            error: Some(error.into()),
        }
    }

    pub fn u8(name: &str, value: u8) -> Self {
        Self::new(name, "u8", value)
    }

    pub fn u16(name: &str, value: u16) -> Self {
        Self::new(name, "u16", value)
    }

    pub fn u32(name: &str, value: u32) -> Self {
        Self::new(name, "u32", value)
    }

    pub fn u64(name: &str, value: u64) -> Self {
        Self::new(name, "u64", value.to_string())
    }

    pub fn u128(name: &str, value: u128) -> Self {
        Self::new(name, "u128", value.to_string())
    }

    pub fn i64(name: &str, value: i64) -> Self {
        Self::new(name, "i64", value.to_string())
    }

    pub fn f64(name: &str, value: f64) -> Self {
        Self::new(name, "f64", value.to_string())
    }

    pub fn bool(name: &str, value: bool) -> Self {
        Self::new(name, "bool", value)
    }

    pub fn string(name: &str, value: impl Into<String>) -> Self {
        Self::new(name, "string", value.into())
    }

    pub fn pubkey(name: &str, value: &Pubkey) -> Self {
        Self::new(name, "pubkey", value.to_string())
    }

    pub fn option_pubkey(name: &str, value: Option<&Pubkey>) -> Self {
        match value {
            Some(key) => Self::new(name, "pubkey", key.to_string()),
            None => Self::new(name, "pubkey", Value::Null),
        }
    }

    pub fn bytes(name: &str, value: &[u8]) -> Self {
        Self::new(name, "bytes", hex::encode(value))
    }
}

/// An instruction matched by a dedicated decoder or an IDL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnownInstruction {
    #[serde(with = "pubkey")]
    pub program_id: Pubkey,
    pub program_name: String,
    pub instruction_name: String,
    pub accounts: Vec<InstructionAccount>,
    pub arguments: Vec<InstructionArgument>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl KnownInstruction {
    pub fn new(
        program_id: Pubkey,
        program_name: &str,
        instruction_name: &str,
        accounts: Vec<InstructionAccount>,
        arguments: Vec<InstructionArgument>,
    ) -> Self {
        Self {
            program_id,
            program_name: program_name.to_string(),
            instruction_name: instruction_name.to_string(),
            accounts,
            arguments,
            error: None,
        }
    }

    /// The program matched but its data did not decode; the accounts are
    /// still reported under their positional labels.
    pub fn err(
        program_id: Pubkey,
        program_name: &str,
        accounts: Vec<InstructionAccount>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            program_id,
            program_name: program_name.to_string(),
            instruction_name: "Unknown".to_string(),
            accounts,
            arguments: vec![],
            error: Some(error.into()),
        }
    }
}

/// Fallback for programs outside the registry with no usable IDL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnknownInstruction {
    #[serde(with = "option_pubkey")]
    pub program_id: Option<Pubkey>,
    /// A well-known display name when one exists, otherwise the base58
    /// program id, or a description of why the program id is missing.
    pub program_name: String,
    pub accounts: Vec<InstructionAccount>,
    pub data_hex: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of the registry: every input decodes to exactly one of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DecodedInstruction {
    Known(KnownInstruction),
    Unknown(UnknownInstruction),
}

impl DecodedInstruction {
    pub fn as_known(&self) -> Option<&KnownInstruction> {
        match self {
            Self::Known(known) => Some(known),
            Self::Unknown(_) => None,
        }
    }

    pub fn as_unknown(&self) -> Option<&UnknownInstruction> {
        match self {
            Self::Known(_) => None,
            Self::Unknown(unknown) => Some(unknown),
        }
    }
}
