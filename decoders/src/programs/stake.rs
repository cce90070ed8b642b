use crate::instruction::{
    apply_account_names, InstructionAccount, InstructionArgument, KnownInstruction,
};
use serde_json::Value;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::stake::instruction::StakeInstruction;
use solana_sdk::stake::state::StakeAuthorize;

pub const PROGRAM_NAME: &str = "Stake Program";

fn authorize_kind(authorize: &StakeAuthorize) -> &'static str {
    match authorize {
        StakeAuthorize::Staker => "Staker",
        StakeAuthorize::Withdrawer => "Withdrawer",
    }
}

fn option_i64(name: &str, value: Option<i64>) -> InstructionArgument {
    match value {
        Some(value) => InstructionArgument::i64(name, value),
        None => InstructionArgument::new(name, "i64", Value::Null),
    }
}

fn option_u64(name: &str, value: Option<u64>) -> InstructionArgument {
    match value {
        Some(value) => InstructionArgument::u64(name, value),
        None => InstructionArgument::new(name, "u64", Value::Null),
    }
}

pub fn decode(
    program_id: &Pubkey,
    data: &[u8],
    mut accounts: Vec<InstructionAccount>,
) -> KnownInstruction {
    let ix: StakeInstruction = match bincode::deserialize(data) {
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
        StakeInstruction::Initialize(authorized, lockup) => (
            "Initialize",
            &["Stake Account", "Rent Sysvar"],
            vec![
                InstructionArgument::pubkey("staker", &authorized.staker),
                InstructionArgument::pubkey("withdrawer", &authorized.withdrawer),
                InstructionArgument::i64("lockup_unix_timestamp", lockup.unix_timestamp),
                InstructionArgument::u64("lockup_epoch", lockup.epoch),
                InstructionArgument::pubkey("lockup_custodian", &lockup.custodian),
            ],
        ),
        StakeInstruction::Authorize(new_authority, authorize) => (
            "Authorize",
            &["Stake Account", "Clock Sysvar", "Authority", "Custodian"],
            vec![
                InstructionArgument::pubkey("new_authority", &new_authority),
                InstructionArgument::new("stake_authorize", "enum", authorize_kind(&authorize)),
            ],
        ),
        StakeInstruction::DelegateStake => (
            "Delegate Stake",
            &[
                "Stake Account",
                "Vote Account",
                "Clock Sysvar",
                "Stake History Sysvar",
                "Stake Config Account",
                "Stake Authority",
            ],
            vec![],
        ),
        StakeInstruction::Split(lamports) => (
            "Split",
            &["Stake Account", "Split Account", "Stake Authority"],
            vec![InstructionArgument::u64("lamports", lamports)],
        ),
        StakeInstruction::Withdraw(lamports) => (
            "Withdraw",
            &[
                "Stake Account",
                "Destination",
                "Clock Sysvar",
                "Stake History Sysvar",
                "Withdraw Authority",
            ],
            vec![InstructionArgument::u64("lamports", lamports)],
        ),
        StakeInstruction::Deactivate => (
            "Deactivate",
            &["Stake Account", "Clock Sysvar", "Stake Authority"],
            vec![],
        ),
        StakeInstruction::SetLockup(args) => (
            "Set Lockup",
            &["Stake Account", "Custodian"],
            vec![
                option_i64("unix_timestamp", args.unix_timestamp),
                option_u64("epoch", args.epoch),
                InstructionArgument::option_pubkey("custodian", args.custodian.as_ref()),
            ],
        ),
        StakeInstruction::Merge => (
            "Merge",
            &[
                "Destination Stake Account",
                "Source Stake Account",
                "Clock Sysvar",
                "Stake History Sysvar",
                "Stake Authority",
            ],
            vec![],
        ),
        StakeInstruction::AuthorizeWithSeed(args) => (
            "Authorize With Seed",
            &["Stake Account", "Base Account", "Clock Sysvar", "Custodian"],
            vec![
                InstructionArgument::pubkey("new_authority", &args.new_authorized_pubkey),
                InstructionArgument::new(
                    "stake_authorize",
                    "enum",
                    authorize_kind(&args.stake_authorize),
                ),
                InstructionArgument::string("authority_seed", args.authority_seed),
                InstructionArgument::pubkey("authority_owner", &args.authority_owner),
            ],
        ),
        StakeInstruction::InitializeChecked => (
            "Initialize Checked",
            &[
                "Stake Account",
                "Rent Sysvar",
                "Stake Authority",
                "Withdraw Authority",
            ],
            vec![],
        ),
        StakeInstruction::AuthorizeChecked(authorize) => (
            "Authorize Checked",
            &[
                "Stake Account",
                "Clock Sysvar",
                "Authority",
                "New Authority",
                "Custodian",
            ],
            vec![InstructionArgument::new(
                "stake_authorize",
                "enum",
                authorize_kind(&authorize),
            )],
        ),
        StakeInstruction::AuthorizeCheckedWithSeed(args) => (
            "Authorize Checked With Seed",
            &[
                "Stake Account",
                "Base Account",
                "Clock Sysvar",
                "New Authority",
                "Custodian",
            ],
            vec![
                InstructionArgument::new(
                    "stake_authorize",
                    "enum",
                    authorize_kind(&args.stake_authorize),
                ),
                InstructionArgument::string("authority_seed", args.authority_seed),
                InstructionArgument::pubkey("authority_owner", &args.authority_owner),
            ],
        ),
        StakeInstruction::SetLockupChecked(args) => (
            "Set Lockup Checked",
            &["Stake Account", "Custodian", "New Custodian"],
            vec![
                option_i64("unix_timestamp", args.unix_timestamp),
                option_u64("epoch", args.epoch),
            ],
        ),
        StakeInstruction::GetMinimumDelegation => ("Get Minimum Delegation", &[], vec![]),
        StakeInstruction::DeactivateDelinquent => (
            "Deactivate Delinquent",
            &[
                "Stake Account",
                "Delinquent Vote Account",
                "Reference Vote Account",
            ],
            vec![],
        ),
        StakeInstruction::Redelegate => (
            "Redelegate",
            &[
                "Stake Account",
                "Uninitialized Stake Account",
                "Vote Account",
                "Stake Config Account",
                "Stake Authority",
            ],
            vec![],
        ),
    };

    apply_account_names(&mut accounts, account_names);
    KnownInstruction::new(*program_id, PROGRAM_NAME, name, accounts, arguments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::stake::instruction as stake_instruction;
    use solana_sdk::stake::state::{Authorized, Lockup};

    #[test]
    fn initialize_carries_authorities() {
        let staker = Pubkey::new_unique();
        let withdrawer = Pubkey::new_unique();
        let ix = stake_instruction::initialize(
            &Pubkey::new_unique(),
            &Authorized { staker, withdrawer },
            &Lockup::default(),
        );
        let decoded = decode(&ix.program_id, &ix.data, vec![]);
        assert_eq!(decoded.instruction_name, "Initialize");
        assert_eq!(decoded.arguments[0].value, staker.to_string());
        assert_eq!(decoded.arguments[1].value, withdrawer.to_string());
    }

    #[test]
    fn withdraw_amount_is_a_string() {
        let ix = stake_instruction::withdraw(
            &Pubkey::new_unique(),
            &Pubkey::new_unique(),
            &Pubkey::new_unique(),
            7_000_000,
            None,
        );
        let decoded = decode(&ix.program_id, &ix.data, vec![]);
        assert_eq!(decoded.instruction_name, "Withdraw");
        assert_eq!(decoded.arguments[0].value, "7000000");
    }
}
