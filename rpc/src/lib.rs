//! The production [`AccountFetcher`] over a Solana RPC node.
//!
//! Thin by design: account batches go through `getMultipleAccounts`
//! chunked at the RPC request-size limit, and interface descriptions
//! come from the program's canonical on-chain Anchor IDL account.
//! Retries, rate limiting, and timeouts belong to whatever constructs
//! the [`RpcClient`], not here.

use anchor_syn::idl::types::Idl;
use async_trait::async_trait;
use log::debug;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_request::MAX_MULTIPLE_ACCOUNTS;
use solana_inspect::{AccountFetcher, FetchError, FetchedAccount};
use solana_inspect_decoders::idl::on_chain::{deserialize_idl_account, idl_account_address};
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;

pub struct RpcAccountFetcher {
    client: RpcClient,
}

impl RpcAccountFetcher {
    pub fn new(url: impl ToString) -> Self {
        Self {
            client: RpcClient::new(url.to_string()),
        }
    }

    pub fn new_with_commitment(url: impl ToString, commitment: CommitmentConfig) -> Self {
        Self {
            client: RpcClient::new_with_commitment(url.to_string(), commitment),
        }
    }

    /// Wrap an already-configured client (custom sender, middleware,
    /// rate limits).
    pub fn from_client(client: RpcClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AccountFetcher for RpcAccountFetcher {
    async fn fetch_accounts(
        &self,
        keys: &[Pubkey],
    ) -> Result<Vec<Option<FetchedAccount>>, FetchError> {
        let mut out = Vec::with_capacity(keys.len());
        for chunk in keys.chunks(MAX_MULTIPLE_ACCOUNTS) {
            let accounts = self
                .client
                .get_multiple_accounts(chunk)
                .await
                .map_err(|e| FetchError::Accounts(e.to_string()))?;
            out.extend(accounts.into_iter().map(|account| {
                account.map(|account| FetchedAccount {
                    lamports: account.lamports,
                    owner: account.owner,
                    data: account.data,
                })
            }));
        }
        Ok(out)
    }

    async fn fetch_idl(&self, program_id: &Pubkey) -> Result<Option<Idl>, FetchError> {
        let idl_address = idl_account_address(program_id);
        let account = match self.client.get_account(&idl_address).await {
            Ok(account) => account,
            // Most programs publish no IDL; a missing account is the
            // normal case, not a fetch failure.
            Err(e) => {
                debug!("no IDL account for {program_id}: {e}");
                return Ok(None);
            }
        };
        match deserialize_idl_account(&account.data) {
            Ok(idl) => Ok(Some(idl)),
            Err(e) => {
                debug!("IDL account for {program_id} did not parse: {e}");
                Ok(None)
            }
        }
    }
}
