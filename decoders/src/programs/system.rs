use crate::instruction::{
    apply_account_names, InstructionAccount, InstructionArgument, KnownInstruction,
};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::system_instruction::SystemInstruction;

pub const PROGRAM_NAME: &str = "System Program";

pub fn decode(
    program_id: &Pubkey,
    data: &[u8],
    mut accounts: Vec<InstructionAccount>,
) -> KnownInstruction {
    let ix: SystemInstruction = match bincode::deserialize(data) {
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
        SystemInstruction::CreateAccount {
            lamports,
            space,
            owner,
        } => (
            "Create Account",
            &["Funding Account", "New Account"],
            vec![
                InstructionArgument::u64("lamports", lamports),
                InstructionArgument::u64("space", space),
                InstructionArgument::pubkey("owner", &owner),
            ],
        ),
        SystemInstruction::Assign { owner } => (
            "Assign",
            &["Assigned Account"],
            vec![InstructionArgument::pubkey("owner", &owner)],
        ),
        SystemInstruction::Transfer { lamports } => (
            "Transfer",
            &["Source", "Destination"],
            vec![InstructionArgument::u64("lamports", lamports)],
        ),
        SystemInstruction::CreateAccountWithSeed {
            base,
            seed,
            lamports,
            space,
            owner,
        } => (
            "Create Account With Seed",
            &["Funding Account", "New Account", "Base Account"],
            vec![
                InstructionArgument::pubkey("base", &base),
                InstructionArgument::string("seed", seed),
                InstructionArgument::u64("lamports", lamports),
                InstructionArgument::u64("space", space),
                InstructionArgument::pubkey("owner", &owner),
            ],
        ),
        SystemInstruction::AdvanceNonceAccount => (
            "Advance Nonce Account",
            &["Nonce Account", "Recent Blockhashes Sysvar", "Nonce Authority"],
            vec![],
        ),
        SystemInstruction::WithdrawNonceAccount(lamports) => (
            "Withdraw Nonce Account",
            &[
                "Nonce Account",
                "Destination",
                "Recent Blockhashes Sysvar",
                "Rent Sysvar",
                "Nonce Authority",
            ],
            vec![InstructionArgument::u64("lamports", lamports)],
        ),
        SystemInstruction::InitializeNonceAccount(authority) => (
            "Initialize Nonce Account",
            &["Nonce Account", "Recent Blockhashes Sysvar", "Rent Sysvar"],
            vec![InstructionArgument::pubkey("authority", &authority)],
        ),
        SystemInstruction::AuthorizeNonceAccount(authority) => (
            "Authorize Nonce Account",
            &["Nonce Account", "Nonce Authority"],
            vec![InstructionArgument::pubkey("authority", &authority)],
        ),
        SystemInstruction::Allocate { space } => (
            "Allocate",
            &["Allocated Account"],
            vec![InstructionArgument::u64("space", space)],
        ),
        SystemInstruction::AllocateWithSeed {
            base,
            seed,
            space,
            owner,
        } => (
            "Allocate With Seed",
            &["Allocated Account", "Base Account"],
            vec![
                InstructionArgument::pubkey("base", &base),
                InstructionArgument::string("seed", seed),
                InstructionArgument::u64("space", space),
                InstructionArgument::pubkey("owner", &owner),
            ],
        ),
        SystemInstruction::AssignWithSeed { base, seed, owner } => (
            "Assign With Seed",
            &["Assigned Account", "Base Account"],
            vec![
                InstructionArgument::pubkey("base", &base),
                InstructionArgument::string("seed", seed),
                InstructionArgument::pubkey("owner", &owner),
            ],
        ),
        SystemInstruction::TransferWithSeed {
            lamports,
            from_seed,
            from_owner,
        } => (
            "Transfer With Seed",
            &["Source", "Base Account", "Destination"],
            vec![
                InstructionArgument::u64("lamports", lamports),
                InstructionArgument::string("from_seed", from_seed),
                InstructionArgument::pubkey("from_owner", &from_owner),
            ],
        ),
        SystemInstruction::UpgradeNonceAccount => {
            ("Upgrade Nonce Account", &["Nonce Account"], vec![])
        }
    };

    apply_account_names(&mut accounts, account_names);
    KnownInstruction::new(*program_id, PROGRAM_NAME, name, accounts, arguments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::system_instruction;

    #[test]
    fn create_account_with_seed() {
        let base = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let ix = system_instruction::create_account_with_seed(
            &Pubkey::new_unique(),
            &Pubkey::new_unique(),
            &base,
            "seed",
            1,
            2,
            &owner,
        );
        let decoded = decode(&ix.program_id, &ix.data, vec![]);
        assert_eq!(decoded.instruction_name, "Create Account With Seed");
        assert_eq!(decoded.arguments[1].value, "seed");
        assert_eq!(decoded.arguments[4].value, owner.to_string());
    }

    #[test]
    fn advance_nonce_names_accounts() {
        let ix = system_instruction::advance_nonce_account(
            &Pubkey::new_unique(),
            &Pubkey::new_unique(),
        );
        let accounts = ix
            .accounts
            .iter()
            .enumerate()
            .map(|(n, meta)| {
                InstructionAccount::new(
                    format!("Account #{}", n + 1),
                    meta.pubkey,
                    meta.is_writable,
                    meta.is_signer,
                )
            })
            .collect();
        let decoded = decode(&ix.program_id, &ix.data, accounts);
        assert_eq!(decoded.instruction_name, "Advance Nonce Account");
        assert_eq!(decoded.accounts[0].name, "Nonce Account");
        assert_eq!(decoded.accounts[2].name, "Nonce Authority");
    }
}
