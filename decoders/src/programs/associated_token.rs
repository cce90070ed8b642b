use crate::instruction::{apply_account_names, InstructionAccount, KnownInstruction};
use anchor_lang::AnchorDeserialize;
use solana_sdk::pubkey::Pubkey;
use spl_associated_token_account::instruction::AssociatedTokenAccountInstruction;

pub const PROGRAM_NAME: &str = "Associated Token Program";

const CREATE_ACCOUNTS: &[&str] = &[
    "Funding Account",
    "Associated Token Account",
    "Wallet",
    "Token Mint",
    "System Program",
    "Token Program",
];

pub fn decode(
    program_id: &Pubkey,
    data: &[u8],
    mut accounts: Vec<InstructionAccount>,
) -> KnownInstruction {
    // The original ATA instruction carried no data at all and meant
    // `Create`.
    if data.is_empty() {
        apply_account_names(&mut accounts, CREATE_ACCOUNTS);
        return KnownInstruction::new(*program_id, PROGRAM_NAME, "Create", accounts, vec![]);
    }

    let ix = match AssociatedTokenAccountInstruction::deserialize(&mut &data[..]) {
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

    let (name, account_names): (&str, &[&str]) = match ix {
        AssociatedTokenAccountInstruction::Create => ("Create", CREATE_ACCOUNTS),
        AssociatedTokenAccountInstruction::CreateIdempotent => {
            ("Create Idempotent", CREATE_ACCOUNTS)
        }
        AssociatedTokenAccountInstruction::RecoverNested => (
            "Recover Nested",
            &[
                "Nested Associated Token Account",
                "Nested Token Mint",
                "Destination Associated Token Account",
                "Owner Associated Token Account",
                "Owner Token Mint",
                "Wallet",
                "Token Program",
            ],
        ),
    };

    apply_account_names(&mut accounts, account_names);
    KnownInstruction::new(*program_id, PROGRAM_NAME, name, accounts, vec![])
}

#[cfg(test)]
mod tests {
    use super::*;
    use spl_associated_token_account::instruction::create_associated_token_account_idempotent;

    #[test]
    fn create_idempotent() {
        let ix = create_associated_token_account_idempotent(
            &Pubkey::new_unique(),
            &Pubkey::new_unique(),
            &Pubkey::new_unique(),
            &spl_token::ID,
        );
        let decoded = decode(&ix.program_id, &ix.data, vec![]);
        assert_eq!(decoded.instruction_name, "Create Idempotent");
        assert!(decoded.error.is_none());
    }

    #[test]
    fn empty_data_is_the_legacy_create() {
        let decoded = decode(&spl_associated_token_account::ID, &[], vec![]);
        assert_eq!(decoded.instruction_name, "Create");
    }
}
