use crate::instruction::{
    apply_account_names, InstructionAccount, InstructionArgument, KnownInstruction,
};
use serde_json::Value;
use solana_address_lookup_table_program::instruction::ProgramInstruction;
use solana_sdk::pubkey::Pubkey;

pub const PROGRAM_NAME: &str = "Address Lookup Table Program";

pub fn decode(
    program_id: &Pubkey,
    data: &[u8],
    mut accounts: Vec<InstructionAccount>,
) -> KnownInstruction {
    let ix: ProgramInstruction = match bincode::deserialize(data) {
        Ok(ix) => ix,
        Err(e) => {
            return KnownInstruction::err(
                *program_id,
                PROGRAM_NAME,
                accounts,
                format!("could not decode instruction data: {e}"),
            )
        }
    };

    let (name, account_names, arguments): (&str, &[&str], Vec<InstructionArgument>) = match ix {
        ProgramInstruction::CreateLookupTable {
            recent_slot,
            bump_seed,
        } => (
            "Create Lookup Table",
            &["Lookup Table", "Authority", "Payer", "System Program"],
            vec![
                InstructionArgument::u64("recent_slot", recent_slot),
                InstructionArgument::u8("bump_seed", bump_seed),
            ],
        ),
        ProgramInstruction::FreezeLookupTable => {
            ("Freeze Lookup Table", &["Lookup Table", "Authority"], vec![])
        }
        ProgramInstruction::ExtendLookupTable { new_addresses } => (
            "Extend Lookup Table",
            &["Lookup Table", "Authority", "Payer", "System Program"],
            vec![InstructionArgument::new(
                "new_addresses",
                "vec<pubkey>",
                Value::Array(
                    new_addresses
                        .iter()
                        .map(|address| Value::String(address.to_string()))
                        .collect(),
                ),
            )],
        ),
        ProgramInstruction::DeactivateLookupTable => (
            "Deactivate Lookup Table",
            &["Lookup Table", "Authority"],
            vec![],
        ),
        ProgramInstruction::CloseLookupTable => (
            "Close Lookup Table",
            &["Lookup Table", "Authority", "Recipient"],
            vec![],
        ),
    };

    apply_account_names(&mut accounts, account_names);
    KnownInstruction::new(*program_id, PROGRAM_NAME, name, accounts, arguments)
}
