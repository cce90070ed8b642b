use crate::fetch::AccountFetcher;
use log::{debug, warn};
use serde::Serialize;
use solana_address_lookup_table_program::state::AddressLookupTable;
use solana_inspect_serde::{option_pubkey, pubkey};
use solana_sdk::message::v0::MessageAddressTableLookup;
use solana_sdk::pubkey::Pubkey;
use std::collections::HashMap;

pub const LOOKUP_TABLE_NOT_FOUND: &str = "Address lookup table not found";

/// One address resolved (or not) through an on-chain lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedAddress {
    #[serde(with = "pubkey")]
    pub lookup_table_key: Pubkey,
    pub lookup_table_index: u8,
    #[serde(with = "option_pubkey")]
    pub address: Option<Pubkey>,
    pub readonly: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Resolve every lookup entry of a message.
///
/// Output order defines the virtual index space consumed by compiled
/// instructions: all writable entries across all lookups in
/// lookup-then-index order, followed by all readonly entries in the
/// same order. A missing or unparseable table marks its entries with
/// [`LOOKUP_TABLE_NOT_FOUND`]; an index past the table's end marks that
/// entry alone. Neither aborts resolution of the rest.
///
/// Decoded tables land in `cache` (keyed by table address), so repeated
/// inspections against the same tables skip the fetch.
pub async fn resolve_lookups<F: AccountFetcher + ?Sized>(
    fetcher: &F,
    lookups: &[MessageAddressTableLookup],
    cache: &mut HashMap<Pubkey, Vec<Pubkey>>,
) -> Vec<ResolvedAddress> {
    let mut missing: Vec<Pubkey> = Vec::new();
    for lookup in lookups {
        if !cache.contains_key(&lookup.account_key) && !missing.contains(&lookup.account_key) {
            missing.push(lookup.account_key);
        }
    }

    if !missing.is_empty() {
        match fetcher.fetch_accounts(&missing).await {
            Ok(accounts) => {
                for (key, account) in missing.iter().zip(accounts) {
                    let Some(account) = account else {
                        debug!("lookup table {key} does not exist");
                        continue;
                    };
                    match AddressLookupTable::deserialize(&account.data) {
                        Ok(table) => {
                            cache.insert(*key, table.addresses.to_vec());
                        }
                        Err(e) => debug!("account {key} is not a lookup table: {e}"),
                    }
                }
            }
            Err(e) => warn!("lookup table fetch failed: {e}"),
        }
    }

    let mut resolved = Vec::new();
    for readonly in [false, true] {
        for lookup in lookups {
            let indexes = if readonly {
                &lookup.readonly_indexes
            } else {
                &lookup.writable_indexes
            };
            let table = cache.get(&lookup.account_key);
            for &index in indexes {
                let entry = match table {
                    None => ResolvedAddress {
                        lookup_table_key: lookup.account_key,
                        lookup_table_index: index,
                        address: None,
                        readonly,
                        error: Some(LOOKUP_TABLE_NOT_FOUND.to_string()),
                    },
                    Some(addresses) => match addresses.get(index as usize) {
                        Some(address) => ResolvedAddress {
                            lookup_table_key: lookup.account_key,
                            lookup_table_index: index,
                            address: Some(*address),
                            readonly,
                            error: None,
                        },
                        None => ResolvedAddress {
                            lookup_table_key: lookup.account_key,
                            lookup_table_index: index,
                            address: None,
                            readonly,
                            error: Some(format!(
                                "index {index} out of range for table of {} addresses",
                                addresses.len()
                            )),
                        },
                    },
                };
                resolved.push(entry);
            }
        }
    }
    resolved
}
