use crate::resolve::ResolvedAddress;
use crate::signatures::SignatureStatus;
use serde::Serialize;
use solana_inspect_decoders::DecodedInstruction;
use solana_inspect_serde::pubkey;
use solana_sdk::pubkey::Pubkey;

/// On-chain context for an account, fetched from the ledger node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountContext {
    pub lamports: u64,
    #[serde(with = "pubkey")]
    pub owner: Pubkey,
    pub data_len: usize,
}

/// One static account of the message, with header-derived flags and
/// optional fetched context. A missing account yields `context: None`,
/// not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectedAccount {
    #[serde(with = "pubkey")]
    pub address: Pubkey,
    pub writable: bool,
    pub signer: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<AccountContext>,
}

/// The complete inspection result. Owned by the caller; nothing in it
/// is shared across inspections.
#[derive(Debug, Clone, Serialize)]
pub struct InspectionReport {
    /// `"legacy"` or `"v0"`, `"v1"`, ... for versioned messages.
    pub version: String,
    pub serialized_size: u64,
    pub fee: u64,
    /// The first static account key. Absent only for degenerate
    /// messages that declare no accounts at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_payer: Option<InspectedAccount>,
    pub signatures: Vec<SignatureStatus>,
    pub accounts: Vec<InspectedAccount>,
    pub address_table_lookups: Vec<ResolvedAddress>,
    pub instructions: Vec<DecodedInstruction>,
}
