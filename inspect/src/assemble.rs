use crate::error::InspectError;
use crate::fetch::AccountFetcher;
use crate::report::{AccountContext, InspectedAccount, InspectionReport};
use crate::resolve::resolve_lookups;
use crate::signatures::verify_signatures;
use anchor_syn::idl::types::Idl;
use futures_util::future::join_all;
use log::{debug, warn};
use solana_inspect_decoders::{
    decode_instruction, DecodedInstruction, IdlWithDiscriminators, InstructionAccount,
    ProgramDecoder, UnknownInstruction,
};
use solana_inspect_wire::{
    decode_input, serialized_size, transaction_fee, MessageVersion,
};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use std::collections::HashMap;

/// Account-context requests are chunked to stay under the fetch
/// service's request-size limit.
pub const ACCOUNT_CONTEXT_BATCH: usize = 100;

#[derive(Debug, Clone, Default)]
pub struct InspectOptions {
    /// Fetch balance/owner/size context for every static account, not
    /// just the fee payer.
    pub all_account_context: bool,
}

/// Assembles inspection reports.
///
/// Owns the fetch collaborator and two explicit caches with the
/// inspector's lifetime: decoded lookup tables by table address, and
/// interface descriptions by program id. Nothing is cached globally;
/// drop the inspector to drop its caches.
pub struct Inspector<F> {
    fetcher: F,
    idl_cache: HashMap<Pubkey, IdlWithDiscriminators>,
    lookup_table_cache: HashMap<Pubkey, Vec<Pubkey>>,
}

impl<F: AccountFetcher> Inspector<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            idl_cache: HashMap::new(),
            lookup_table_cache: HashMap::new(),
        }
    }

    /// Seed the IDL cache, e.g. from a file, bypassing the fetcher.
    pub fn cache_idl(&mut self, program_id: Pubkey, idl: Idl) {
        self.idl_cache
            .insert(program_id, IdlWithDiscriminators::new(idl));
    }

    /// Inspect a transaction or bare message.
    ///
    /// `supplied_signatures` fills signer slots the payload itself does
    /// not carry; see [`verify_signatures`] for the merge rules. The
    /// only errors are input-tier ([`InspectError`]); once the message
    /// decodes, failures are recorded per report field.
    pub async fn inspect(
        &mut self,
        bytes: &[u8],
        supplied_signatures: &[Option<Signature>],
        options: &InspectOptions,
    ) -> Result<InspectionReport, InspectError> {
        let input = decode_input(bytes)?;
        let message = &input.message;

        // Tables must resolve before instructions decode: any account
        // index past the static keys refers into the resolved set.
        let address_table_lookups = resolve_lookups(
            &self.fetcher,
            &message.address_table_lookups,
            &mut self.lookup_table_cache,
        )
        .await;

        // The virtual index space: static keys, then the resolved
        // writable-then-readonly lookup addresses, with a per-entry
        // reason when a slot has no address.
        let mut virtual_keys: Vec<(Option<Pubkey>, Option<String>)> = message
            .static_account_keys
            .iter()
            .map(|key| (Some(*key), None))
            .collect();
        virtual_keys.extend(
            address_table_lookups
                .iter()
                .map(|entry| (entry.address, entry.error.clone())),
        );

        let mut accounts: Vec<InspectedAccount> = message
            .static_account_keys
            .iter()
            .enumerate()
            .map(|(index, key)| InspectedAccount {
                address: *key,
                writable: message.is_writable(index),
                signer: message.is_signer(index),
                context: None,
            })
            .collect();

        let contexts = self.fetch_account_contexts(message, options).await;
        for account in accounts.iter_mut() {
            account.context = contexts.get(&account.address).cloned();
        }

        self.fetch_missing_idls(&virtual_keys, message).await;

        let instructions: Vec<DecodedInstruction> = message
            .instructions
            .iter()
            .map(|ix| {
                let ix_accounts: Vec<InstructionAccount> = ix
                    .accounts
                    .iter()
                    .enumerate()
                    .map(|(position, &index)| {
                        let name = format!("Account #{}", position + 1);
                        let idx = index as usize;
                        match virtual_keys.get(idx) {
                            Some((Some(address), _)) => InstructionAccount::new(
                                name,
                                *address,
                                message.is_writable(idx),
                                message.is_signer(idx),
                            ),
                            Some((None, error)) => InstructionAccount::unresolved(
                                name,
                                message.is_writable(idx),
                                message.is_signer(idx),
                                error.clone().unwrap_or_else(|| "unresolved address".to_string()),
                            ),
                            None => InstructionAccount::unresolved(
                                name,
                                false,
                                false,
                                format!("account index {index} out of range"),
                            ),
                        }
                    })
                    .collect();

                match virtual_keys.get(ix.program_id_index as usize) {
                    Some((Some(program_id), _)) => decode_instruction(
                        program_id,
                        &ix.data,
                        ix_accounts,
                        self.idl_cache.get(program_id),
                    ),
                    _ => DecodedInstruction::Unknown(UnknownInstruction {
                        program_id: None,
                        program_name: format!("Unknown Program (index {})", ix.program_id_index),
                        accounts: ix_accounts,
                        data_hex: hex::encode(&ix.data),
                        error: Some(format!(
                            "program index {} does not resolve to an address",
                            ix.program_id_index
                        )),
                    }),
                }
            })
            .collect();

        let signatures = verify_signatures(
            message,
            &input.message_bytes,
            &input.signatures,
            supplied_signatures,
        );

        let version = match message.version {
            MessageVersion::Legacy => "legacy".to_string(),
            MessageVersion::V0(v) => format!("v{v}"),
        };

        Ok(InspectionReport {
            version,
            serialized_size: serialized_size(&message.header, &input.message_bytes),
            fee: transaction_fee(&message.header),
            fee_payer: accounts.first().cloned(),
            signatures,
            accounts,
            address_table_lookups,
            instructions,
        })
    }

    /// Fetch balance/owner/size for the fee payer (always) and every
    /// static account (on request), in independent batches of at most
    /// [`ACCOUNT_CONTEXT_BATCH`] keys. A failed batch logs and leaves
    /// its accounts without context.
    async fn fetch_account_contexts(
        &self,
        message: &solana_inspect_wire::Message,
        options: &InspectOptions,
    ) -> HashMap<Pubkey, AccountContext> {
        let keys: Vec<Pubkey> = if options.all_account_context {
            message.static_account_keys.clone()
        } else {
            message.static_account_keys.first().copied().into_iter().collect()
        };

        let mut contexts = HashMap::new();
        if keys.is_empty() {
            return contexts;
        }
        let batches = join_all(
            keys.chunks(ACCOUNT_CONTEXT_BATCH)
                .map(|chunk| self.fetcher.fetch_accounts(chunk)),
        )
        .await;
        for (chunk, result) in keys.chunks(ACCOUNT_CONTEXT_BATCH).zip(batches) {
            match result {
                Ok(fetched) => {
                    for (key, account) in chunk.iter().zip(fetched) {
                        if let Some(account) = account {
                            contexts.insert(
                                *key,
                                AccountContext {
                                    lamports: account.lamports,
                                    owner: account.owner,
                                    data_len: account.data.len(),
                                },
                            );
                        }
                    }
                }
                Err(e) => warn!("account context fetch failed: {e}"),
            }
        }
        contexts
    }

    /// Fetch interface descriptions for every program the message
    /// invokes that has neither a dedicated decoder nor a cached IDL.
    /// Failures are quiet: the instruction falls through to the raw
    /// form.
    async fn fetch_missing_idls(
        &mut self,
        virtual_keys: &[(Option<Pubkey>, Option<String>)],
        message: &solana_inspect_wire::Message,
    ) {
        let mut targets: Vec<Pubkey> = Vec::new();
        for ix in &message.instructions {
            if let Some((Some(program_id), _)) = virtual_keys.get(ix.program_id_index as usize) {
                if ProgramDecoder::for_program_id(program_id).is_none()
                    && !self.idl_cache.contains_key(program_id)
                    && !targets.contains(program_id)
                {
                    targets.push(*program_id);
                }
            }
        }
        if targets.is_empty() {
            return;
        }
        let results = join_all(
            targets
                .iter()
                .map(|program_id| self.fetcher.fetch_idl(program_id)),
        )
        .await;
        for (program_id, result) in targets.iter().zip(results) {
            match result {
                Ok(Some(idl)) => {
                    self.idl_cache
                        .insert(*program_id, IdlWithDiscriminators::new(idl));
                }
                Ok(None) => debug!("no interface description published for {program_id}"),
                Err(e) => debug!("interface description fetch for {program_id} failed: {e}"),
            }
        }
    }
}
