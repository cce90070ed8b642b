use anchor_syn::idl::types::Idl;
use async_trait::async_trait;
use solana_address_lookup_table_program::state::{
    LookupTableMeta, ProgramState, LOOKUP_TABLE_META_SIZE,
};
use solana_inspect::{
    AccountFetcher, FetchError, FetchedAccount, InspectOptions, Inspector,
};
use solana_inspect_decoders::idl::discriminator::ix_discriminator;
use solana_inspect_wire::LAMPORTS_PER_SIGNATURE;
use solana_sdk::hash::Hash;
use solana_sdk::instruction::CompiledInstruction;
use solana_sdk::message::v0;
use solana_sdk::message::{MessageHeader, VersionedMessage};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::system_instruction;
use std::collections::HashMap;

#[derive(Default)]
struct MockFetcher {
    accounts: HashMap<Pubkey, FetchedAccount>,
    idls: HashMap<Pubkey, Idl>,
    fail_accounts: bool,
}

#[async_trait]
impl AccountFetcher for MockFetcher {
    async fn fetch_accounts(
        &self,
        keys: &[Pubkey],
    ) -> Result<Vec<Option<FetchedAccount>>, FetchError> {
        if self.fail_accounts {
            return Err(FetchError::Accounts("mock outage".to_string()));
        }
        Ok(keys.iter().map(|key| self.accounts.get(key).cloned()).collect())
    }

    async fn fetch_idl(&self, program_id: &Pubkey) -> Result<Option<Idl>, FetchError> {
        Ok(self.idls.get(program_id).cloned())
    }
}

fn lookup_table_account(addresses: &[Pubkey]) -> FetchedAccount {
    let mut data =
        bincode::serialize(&ProgramState::LookupTable(LookupTableMeta::default())).unwrap();
    data.resize(LOOKUP_TABLE_META_SIZE, 0);
    for address in addresses {
        data.extend_from_slice(address.as_ref());
    }
    FetchedAccount {
        lamports: 1_000_000,
        owner: solana_address_lookup_table_program::id(),
        data,
    }
}

fn system_account(lamports: u64) -> FetchedAccount {
    FetchedAccount {
        lamports,
        owner: solana_sdk::system_program::ID,
        data: vec![],
    }
}

/// A legacy message with one required signature and a System transfer
/// of 1_000_000 lamports must report a 5000-lamport fee, its declared
/// accounts, and a decoded "Transfer" with a string lamports argument.
#[tokio::test]
async fn legacy_system_transfer_end_to_end() {
    let payer = Pubkey::new_unique();
    let dest = Pubkey::new_unique();
    let message = solana_sdk::message::Message::new(
        &[system_instruction::transfer(&payer, &dest, 1_000_000)],
        Some(&payer),
    );
    let bytes = message.serialize();

    let mut fetcher = MockFetcher::default();
    fetcher.accounts.insert(payer, system_account(10_000_000));

    let mut inspector = Inspector::new(fetcher);
    let report = inspector
        .inspect(&bytes, &[], &InspectOptions::default())
        .await
        .unwrap();

    assert_eq!(report.version, "legacy");
    assert_eq!(report.fee, LAMPORTS_PER_SIGNATURE);
    assert_eq!(report.serialized_size, 1 + 64 + bytes.len() as u64);
    assert_eq!(report.accounts.len(), message.account_keys.len());
    assert!(report.address_table_lookups.is_empty());

    let fee_payer = report.fee_payer.as_ref().unwrap();
    assert_eq!(fee_payer.address, payer);
    assert!(fee_payer.signer && fee_payer.writable);
    assert_eq!(fee_payer.context.as_ref().unwrap().lamports, 10_000_000);

    // one unsigned slot, reported without error
    assert_eq!(report.signatures.len(), 1);
    assert_eq!(report.signatures[0].verified, None);

    let known = report.instructions[0].as_known().unwrap();
    assert_eq!(known.program_name, "System Program");
    assert_eq!(known.instruction_name, "Transfer");
    assert_eq!(known.arguments[0].name, "lamports");
    assert_eq!(known.arguments[0].value, "1000000");
    assert_eq!(known.accounts[0].address, Some(payer));
    assert_eq!(known.accounts[1].address, Some(dest));
}

fn v0_transfer_message(
    payer: Pubkey,
    table_key: Pubkey,
    writable_index: u8,
    readonly_index: u8,
) -> v0::Message {
    v0::Message {
        header: MessageHeader {
            num_required_signatures: 1,
            num_readonly_signed_accounts: 0,
            num_readonly_unsigned_accounts: 1,
        },
        account_keys: vec![payer, solana_sdk::system_program::ID],
        recent_blockhash: Hash::new_unique(),
        instructions: vec![CompiledInstruction {
            program_id_index: 1,
            // payer, then the writable lookup address
            accounts: vec![0, 2],
            data: bincode::serialize(&solana_sdk::system_instruction::SystemInstruction::Transfer {
                lamports: 777,
            })
            .unwrap(),
        }],
        address_table_lookups: vec![solana_sdk::message::v0::MessageAddressTableLookup {
            account_key: table_key,
            writable_indexes: vec![writable_index],
            readonly_indexes: vec![readonly_index],
        }],
    }
}

#[tokio::test]
async fn v0_message_resolves_lookup_addresses() {
    let payer = Pubkey::new_unique();
    let table_key = Pubkey::new_unique();
    let table_addresses: Vec<Pubkey> = (0..4).map(|_| Pubkey::new_unique()).collect();

    let message = v0_transfer_message(payer, table_key, 2, 3);
    let bytes = VersionedMessage::V0(message).serialize();

    let mut fetcher = MockFetcher::default();
    fetcher
        .accounts
        .insert(table_key, lookup_table_account(&table_addresses));

    let mut inspector = Inspector::new(fetcher);
    let report = inspector
        .inspect(&bytes, &[], &InspectOptions::default())
        .await
        .unwrap();

    assert_eq!(report.version, "v0");
    // one writable + one readonly entry, writable first
    assert_eq!(report.address_table_lookups.len(), 2);
    assert_eq!(report.address_table_lookups[0].address, Some(table_addresses[2]));
    assert!(!report.address_table_lookups[0].readonly);
    assert_eq!(report.address_table_lookups[1].address, Some(table_addresses[3]));
    assert!(report.address_table_lookups[1].readonly);

    // the transfer destination came out of the table and is writable
    let known = report.instructions[0].as_known().unwrap();
    assert_eq!(known.instruction_name, "Transfer");
    assert_eq!(known.accounts[1].address, Some(table_addresses[2]));
    assert!(known.accounts[1].writable);
    assert!(known.error.is_none());
}

#[tokio::test]
async fn missing_lookup_table_is_a_per_item_error() {
    let payer = Pubkey::new_unique();
    let message = v0_transfer_message(payer, Pubkey::new_unique(), 0, 1);
    let bytes = VersionedMessage::V0(message).serialize();

    // fetcher knows nothing; the report must still come out whole
    let mut inspector = Inspector::new(MockFetcher::default());
    let report = inspector
        .inspect(&bytes, &[], &InspectOptions::default())
        .await
        .unwrap();

    for entry in &report.address_table_lookups {
        assert_eq!(entry.address, None);
        assert_eq!(entry.error.as_deref(), Some("Address lookup table not found"));
    }
    // the instruction decoded, carrying the unresolved account as data
    let known = report.instructions[0].as_known().unwrap();
    assert_eq!(known.instruction_name, "Transfer");
    assert_eq!(known.accounts[1].address, None);
    assert_eq!(known.error.as_deref(), Some("Address lookup table not found"));
}

#[tokio::test]
async fn lookup_index_out_of_range_is_isolated() {
    let payer = Pubkey::new_unique();
    let table_key = Pubkey::new_unique();
    // table holds 2 addresses; readonly index 7 is out of range
    let message = v0_transfer_message(payer, table_key, 1, 7);
    let bytes = VersionedMessage::V0(message).serialize();

    let mut fetcher = MockFetcher::default();
    fetcher.accounts.insert(
        table_key,
        lookup_table_account(&[Pubkey::new_unique(), Pubkey::new_unique()]),
    );

    let mut inspector = Inspector::new(fetcher);
    let report = inspector
        .inspect(&bytes, &[], &InspectOptions::default())
        .await
        .unwrap();

    assert!(report.address_table_lookups[0].address.is_some());
    assert_eq!(report.address_table_lookups[1].address, None);
    assert!(report.address_table_lookups[1]
        .error
        .as_deref()
        .unwrap()
        .contains("out of range"));
}

/// Swapping two lookups renumbers the virtual index space, so an
/// instruction referencing the tail lookup resolves differently.
#[tokio::test]
async fn lookup_order_is_significant() {
    let payer = Pubkey::new_unique();
    let table_a = Pubkey::new_unique();
    let table_b = Pubkey::new_unique();
    let addresses_a: Vec<Pubkey> = (0..2).map(|_| Pubkey::new_unique()).collect();
    let addresses_b: Vec<Pubkey> = (0..2).map(|_| Pubkey::new_unique()).collect();

    let lookups = |first: (Pubkey, u8), second: (Pubkey, u8)| {
        vec![
            solana_sdk::message::v0::MessageAddressTableLookup {
                account_key: first.0,
                writable_indexes: vec![first.1],
                readonly_indexes: vec![],
            },
            solana_sdk::message::v0::MessageAddressTableLookup {
                account_key: second.0,
                writable_indexes: vec![second.1],
                readonly_indexes: vec![],
            },
        ]
    };

    let build = |lookups: Vec<solana_sdk::message::v0::MessageAddressTableLookup>| {
        VersionedMessage::V0(v0::Message {
            header: MessageHeader {
                num_required_signatures: 1,
                num_readonly_signed_accounts: 0,
                num_readonly_unsigned_accounts: 1,
            },
            account_keys: vec![payer, solana_sdk::system_program::ID],
            recent_blockhash: Hash::default(),
            instructions: vec![CompiledInstruction {
                program_id_index: 1,
                // index 3: the SECOND lookup's writable entry
                accounts: vec![0, 3],
                data: bincode::serialize(
                    &solana_sdk::system_instruction::SystemInstruction::Transfer { lamports: 1 },
                )
                .unwrap(),
            }],
            address_table_lookups: lookups,
        })
        .serialize()
    };

    let mut fetcher = MockFetcher::default();
    fetcher.accounts.insert(table_a, lookup_table_account(&addresses_a));
    fetcher.accounts.insert(table_b, lookup_table_account(&addresses_b));
    let mut inspector = Inspector::new(fetcher);

    let report_ab = inspector
        .inspect(&build(lookups((table_a, 0), (table_b, 1))), &[], &InspectOptions::default())
        .await
        .unwrap();
    let report_ba = inspector
        .inspect(&build(lookups((table_b, 1), (table_a, 0))), &[], &InspectOptions::default())
        .await
        .unwrap();

    let dest_ab = report_ab.instructions[0].as_known().unwrap().accounts[1].address;
    let dest_ba = report_ba.instructions[0].as_known().unwrap().accounts[1].address;
    assert_eq!(dest_ab, Some(addresses_b[1]));
    assert_eq!(dest_ba, Some(addresses_a[0]));
    assert_ne!(dest_ab, dest_ba);
}

/// A System transfer pointing one account index past everything the
/// message declares must still decode, with the failure in `error`,
/// and its sibling instruction must be untouched.
#[tokio::test]
async fn out_of_range_account_index_is_data_not_a_panic() {
    let payer = Pubkey::new_unique();
    let dest = Pubkey::new_unique();
    let mut message = solana_sdk::message::Message::new(
        &[
            system_instruction::transfer(&payer, &dest, 5),
            system_instruction::transfer(&payer, &dest, 6),
        ],
        Some(&payer),
    );
    // corrupt the first instruction's destination index
    message.instructions[0].accounts[1] = 9;
    let bytes = message.serialize();

    let mut inspector = Inspector::new(MockFetcher::default());
    let report = inspector
        .inspect(&bytes, &[], &InspectOptions::default())
        .await
        .unwrap();

    let broken = report.instructions[0].as_known().unwrap();
    assert_eq!(broken.instruction_name, "Transfer");
    assert_eq!(broken.error.as_deref(), Some("account index 9 out of range"));
    assert_eq!(broken.accounts[1].address, None);

    let sibling = report.instructions[1].as_known().unwrap();
    assert_eq!(sibling.instruction_name, "Transfer");
    assert!(sibling.error.is_none());
    assert_eq!(sibling.accounts[1].address, Some(dest));
}

#[tokio::test]
async fn idl_decoding_flows_through_the_inspector() {
    let program_id = Pubkey::new_unique();
    let payer = Pubkey::new_unique();

    let idl: Idl = serde_json::from_value(serde_json::json!({
        "version": "0.1.0",
        "name": "counter",
        "instructions": [{
            "name": "increment",
            "accounts": [{ "name": "counter", "isMut": true, "isSigner": false }],
            "args": [{ "name": "by", "type": "u64" }]
        }]
    }))
    .unwrap();

    let mut data = ix_discriminator("increment").to_vec();
    data.extend_from_slice(&3u64.to_le_bytes());

    let message = solana_sdk::message::Message::new(
        &[solana_sdk::instruction::Instruction::new_with_bytes(
            program_id,
            &data,
            vec![solana_sdk::instruction::AccountMeta::new(payer, true)],
        )],
        Some(&payer),
    );
    let bytes = message.serialize();

    let mut fetcher = MockFetcher::default();
    fetcher.idls.insert(program_id, idl);

    let mut inspector = Inspector::new(fetcher);
    let report = inspector
        .inspect(&bytes, &[], &InspectOptions::default())
        .await
        .unwrap();

    let known = report.instructions[0].as_known().unwrap();
    assert_eq!(known.program_name, "counter");
    assert_eq!(known.instruction_name, "increment");
    assert_eq!(known.arguments[0].value, 3);
    assert_eq!(known.accounts[0].name, "counter");
}

#[tokio::test]
async fn fetch_outage_leaves_context_and_tables_empty_but_reports() {
    let payer = Pubkey::new_unique();
    let message = v0_transfer_message(payer, Pubkey::new_unique(), 0, 1);
    let bytes = VersionedMessage::V0(message).serialize();

    let fetcher = MockFetcher {
        fail_accounts: true,
        ..Default::default()
    };
    let mut inspector = Inspector::new(fetcher);
    let report = inspector
        .inspect(&bytes, &[], &InspectOptions::default())
        .await
        .unwrap();

    assert!(report.fee_payer.as_ref().unwrap().context.is_none());
    assert!(report
        .address_table_lookups
        .iter()
        .all(|entry| entry.error.is_some()));
}

#[tokio::test]
async fn all_account_context_fetches_every_static_key() {
    let payer = Pubkey::new_unique();
    let dest = Pubkey::new_unique();
    let message = solana_sdk::message::Message::new(
        &[system_instruction::transfer(&payer, &dest, 1)],
        Some(&payer),
    );
    let bytes = message.serialize();

    let mut fetcher = MockFetcher::default();
    fetcher.accounts.insert(payer, system_account(5));
    fetcher.accounts.insert(dest, system_account(7));

    let mut inspector = Inspector::new(fetcher);
    let report = inspector
        .inspect(
            &bytes,
            &[],
            &InspectOptions {
                all_account_context: true,
            },
        )
        .await
        .unwrap();

    let by_address: HashMap<Pubkey, &solana_inspect::InspectedAccount> = report
        .accounts
        .iter()
        .map(|account| (account.address, account))
        .collect();
    assert_eq!(by_address[&payer].context.as_ref().unwrap().lamports, 5);
    assert_eq!(by_address[&dest].context.as_ref().unwrap().lamports, 7);
    // the system program has no mock account and stays context-free
    assert!(by_address[&solana_sdk::system_program::ID].context.is_none());
}
