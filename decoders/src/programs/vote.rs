use crate::instruction::{
    apply_account_names, InstructionAccount, InstructionArgument, KnownInstruction,
};
use serde_json::{json, Value};
use solana_sdk::pubkey::Pubkey;
use solana_vote_program::vote_instruction::VoteInstruction;
use solana_vote_program::vote_state::{Vote, VoteAuthorize, VoteStateUpdate};

pub const PROGRAM_NAME: &str = "Vote Program";

fn authorize_kind(authorize: &VoteAuthorize) -> &'static str {
    match authorize {
        VoteAuthorize::Voter => "Voter",
        VoteAuthorize::Withdrawer => "Withdrawer",
    }
}

fn vote_arguments(vote: &Vote) -> Vec<InstructionArgument> {
    vec![
        InstructionArgument::new(
            "slots",
            "vec<u64>",
            Value::Array(
                vote.slots
                    .iter()
                    .map(|slot| Value::String(slot.to_string()))
                    .collect(),
            ),
        ),
        InstructionArgument::new("hash", "hash", vote.hash.to_string()),
        match vote.timestamp {
            Some(timestamp) => InstructionArgument::i64("timestamp", timestamp),
            None => InstructionArgument::new("timestamp", "i64", Value::Null),
        },
    ]
}

fn vote_state_update_arguments(update: &VoteStateUpdate) -> Vec<InstructionArgument> {
    vec![
        InstructionArgument::new("lockout_count", "u32", update.lockouts.len() as u32),
        match update.root {
            Some(root) => InstructionArgument::u64("root", root),
            None => InstructionArgument::new("root", "u64", Value::Null),
        },
        InstructionArgument::new("hash", "hash", update.hash.to_string()),
    ]
}

pub fn decode(
    program_id: &Pubkey,
    data: &[u8],
    mut accounts: Vec<InstructionAccount>,
) -> KnownInstruction {
    let ix: VoteInstruction = match bincode::deserialize(data) {
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

    let (name, account_names, arguments): (&str, &[&str], Vec<InstructionArgument>) = match &ix {
        VoteInstruction::InitializeAccount(init) => (
            "Initialize Account",
            &[
                "Vote Account",
                "Rent Sysvar",
                "Clock Sysvar",
                "Validator Identity",
            ],
            vec![
                InstructionArgument::pubkey("node_pubkey", &init.node_pubkey),
                InstructionArgument::pubkey("authorized_voter", &init.authorized_voter),
                InstructionArgument::pubkey("authorized_withdrawer", &init.authorized_withdrawer),
                InstructionArgument::u8("commission", init.commission),
            ],
        ),
        VoteInstruction::Authorize(new_authority, authorize) => (
            "Authorize",
            &["Vote Account", "Clock Sysvar", "Authority"],
            vec![
                InstructionArgument::pubkey("new_authority", new_authority),
                InstructionArgument::new("vote_authorize", "enum", authorize_kind(authorize)),
            ],
        ),
        VoteInstruction::Vote(vote) => (
            "Vote",
            &[
                "Vote Account",
                "Slot Hashes Sysvar",
                "Clock Sysvar",
                "Vote Authority",
            ],
            vote_arguments(vote),
        ),
        VoteInstruction::Withdraw(lamports) => (
            "Withdraw",
            &["Vote Account", "Destination", "Withdraw Authority"],
            vec![InstructionArgument::u64("lamports", *lamports)],
        ),
        VoteInstruction::UpdateValidatorIdentity => (
            "Update Validator Identity",
            &[
                "Vote Account",
                "New Validator Identity",
                "Withdraw Authority",
            ],
            vec![],
        ),
        VoteInstruction::UpdateCommission(commission) => (
            "Update Commission",
            &["Vote Account", "Withdraw Authority"],
            vec![InstructionArgument::u8("commission", *commission)],
        ),
        VoteInstruction::VoteSwitch(vote, proof_hash) => (
            "Vote Switch",
            &[
                "Vote Account",
                "Slot Hashes Sysvar",
                "Clock Sysvar",
                "Vote Authority",
            ],
            {
                let mut arguments = vote_arguments(vote);
                arguments.push(InstructionArgument::new(
                    "proof_hash",
                    "hash",
                    proof_hash.to_string(),
                ));
                arguments
            },
        ),
        VoteInstruction::AuthorizeChecked(authorize) => (
            "Authorize Checked",
            &["Vote Account", "Clock Sysvar", "Authority", "New Authority"],
            vec![InstructionArgument::new(
                "vote_authorize",
                "enum",
                authorize_kind(authorize),
            )],
        ),
        VoteInstruction::UpdateVoteState(update) => (
            "Update Vote State",
            &["Vote Account", "Vote Authority"],
            vote_state_update_arguments(update),
        ),
        VoteInstruction::UpdateVoteStateSwitch(update, proof_hash) => (
            "Update Vote State Switch",
            &["Vote Account", "Vote Authority"],
            {
                let mut arguments = vote_state_update_arguments(update);
                arguments.push(InstructionArgument::new(
                    "proof_hash",
                    "hash",
                    proof_hash.to_string(),
                ));
                arguments
            },
        ),
        VoteInstruction::AuthorizeWithSeed(args) => (
            "Authorize With Seed",
            &["Vote Account", "Clock Sysvar", "Base Account"],
            vec![
                InstructionArgument::pubkey("new_authority", &args.new_authority),
                InstructionArgument::new(
                    "vote_authorize",
                    "enum",
                    authorize_kind(&args.authorization_type),
                ),
                InstructionArgument::string("current_authority_seed", args.current_authority_derived_key_seed.clone()),
                InstructionArgument::pubkey(
                    "current_authority_owner",
                    &args.current_authority_derived_key_owner,
                ),
            ],
        ),
        VoteInstruction::AuthorizeCheckedWithSeed(args) => (
            "Authorize Checked With Seed",
            &[
                "Vote Account",
                "Clock Sysvar",
                "Base Account",
                "New Authority",
            ],
            vec![
                InstructionArgument::new(
                    "vote_authorize",
                    "enum",
                    authorize_kind(&args.authorization_type),
                ),
                InstructionArgument::string("current_authority_seed", args.current_authority_derived_key_seed.clone()),
                InstructionArgument::pubkey(
                    "current_authority_owner",
                    &args.current_authority_derived_key_owner,
                ),
            ],
        ),
        VoteInstruction::CompactUpdateVoteState(update) => (
            "Compact Update Vote State",
            &["Vote Account", "Vote Authority"],
            vote_state_update_arguments(update),
        ),
        VoteInstruction::CompactUpdateVoteStateSwitch(update, proof_hash) => (
            "Compact Update Vote State Switch",
            &["Vote Account", "Vote Authority"],
            {
                let mut arguments = vote_state_update_arguments(update);
                arguments.push(InstructionArgument::new(
                    "proof_hash",
                    "hash",
                    proof_hash.to_string(),
                ));
                arguments
            },
        ),
        other => (
            "Vote Instruction",
            &[],
            vec![InstructionArgument::new(
                "instruction",
                "string",
                json!(format!("{other:?}")),
            )],
        ),
    };

    apply_account_names(&mut accounts, account_names);
    KnownInstruction::new(*program_id, PROGRAM_NAME, name, accounts, arguments)
}
