use anchor_syn::idl::types::Idl;
use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

/// Failures surfaced by the external fetch collaborator. The core never
/// retries; a failed fetch becomes a per-item error on the report.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("account fetch failed: {0}")]
    Accounts(String),
    #[error("interface description fetch failed: {0}")]
    InterfaceDescription(String),
}

/// As much of a fetched account as the report needs.
#[derive(Debug, Clone)]
pub struct FetchedAccount {
    pub lamports: u64,
    pub owner: Pubkey,
    pub data: Vec<u8>,
}

/// The external account/data fetch service.
///
/// Both methods are latency-bearing, fallible black boxes. The core
/// issues independent calls concurrently but imposes no timeouts and
/// manages no connections; wrap the implementation if cancellation is
/// needed.
#[async_trait]
pub trait AccountFetcher: Send + Sync {
    /// One optional entry per requested key, in request order; a missing
    /// account is `None`, not an error.
    async fn fetch_accounts(&self, keys: &[Pubkey])
        -> Result<Vec<Option<FetchedAccount>>, FetchError>;

    /// The program's published interface description, if it has one.
    async fn fetch_idl(&self, program_id: &Pubkey) -> Result<Option<Idl>, FetchError>;
}
