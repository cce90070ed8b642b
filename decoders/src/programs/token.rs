use crate::instruction::{
    apply_account_names, InstructionAccount, InstructionArgument, KnownInstruction,
};
use solana_program::program_option::COption;
use solana_sdk::pubkey::Pubkey;
use spl_token::instruction::TokenInstruction;

/// Also used for Token-2022 instructions, whose leading layout matches.
pub const PROGRAM_NAME: &str = "Token Program";

fn coption_pubkey(name: &str, value: &COption<Pubkey>) -> InstructionArgument {
    match value {
        COption::Some(key) => InstructionArgument::pubkey(name, key),
        COption::None => InstructionArgument::new(name, "pubkey", serde_json::Value::Null),
    }
}

pub fn decode(
    program_id: &Pubkey,
    data: &[u8],
    mut accounts: Vec<InstructionAccount>,
) -> KnownInstruction {
    let ix = match TokenInstruction::unpack(data) {
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
        TokenInstruction::InitializeMint {
            decimals,
            mint_authority,
            freeze_authority,
        } => (
            "Initialize Mint",
            &["Mint", "Rent Sysvar"],
            vec![
                InstructionArgument::u8("decimals", decimals),
                InstructionArgument::pubkey("mint_authority", &mint_authority),
                coption_pubkey("freeze_authority", &freeze_authority),
            ],
        ),
        TokenInstruction::InitializeAccount => (
            "Initialize Account",
            &["Account", "Mint", "Owner", "Rent Sysvar"],
            vec![],
        ),
        TokenInstruction::InitializeMultisig { m } => (
            "Initialize Multisig",
            &["Multisig", "Rent Sysvar"],
            vec![InstructionArgument::u8("m", m)],
        ),
        TokenInstruction::Transfer { amount } => (
            "Transfer",
            &["Source", "Destination", "Owner"],
            vec![InstructionArgument::u64("amount", amount)],
        ),
        TokenInstruction::Approve { amount } => (
            "Approve",
            &["Source", "Delegate", "Owner"],
            vec![InstructionArgument::u64("amount", amount)],
        ),
        TokenInstruction::Revoke => ("Revoke", &["Source", "Owner"], vec![]),
        TokenInstruction::SetAuthority {
            authority_type,
            new_authority,
        } => (
            "Set Authority",
            &["Account", "Current Authority"],
            vec![
                InstructionArgument::new("authority_type", "enum", format!("{authority_type:?}")),
                coption_pubkey("new_authority", &new_authority),
            ],
        ),
        TokenInstruction::MintTo { amount } => (
            "Mint To",
            &["Mint", "Destination", "Mint Authority"],
            vec![InstructionArgument::u64("amount", amount)],
        ),
        TokenInstruction::Burn { amount } => (
            "Burn",
            &["Account", "Mint", "Owner"],
            vec![InstructionArgument::u64("amount", amount)],
        ),
        TokenInstruction::CloseAccount => (
            "Close Account",
            &["Account", "Destination", "Owner"],
            vec![],
        ),
        TokenInstruction::FreezeAccount => (
            "Freeze Account",
            &["Account", "Mint", "Freeze Authority"],
            vec![],
        ),
        TokenInstruction::ThawAccount => (
            "Thaw Account",
            &["Account", "Mint", "Freeze Authority"],
            vec![],
        ),
        TokenInstruction::TransferChecked { amount, decimals } => (
            "Transfer Checked",
            &["Source", "Mint", "Destination", "Owner"],
            vec![
                InstructionArgument::u64("amount", amount),
                InstructionArgument::u8("decimals", decimals),
            ],
        ),
        TokenInstruction::ApproveChecked { amount, decimals } => (
            "Approve Checked",
            &["Source", "Mint", "Delegate", "Owner"],
            vec![
                InstructionArgument::u64("amount", amount),
                InstructionArgument::u8("decimals", decimals),
            ],
        ),
        TokenInstruction::MintToChecked { amount, decimals } => (
            "Mint To Checked",
            &["Mint", "Destination", "Mint Authority"],
            vec![
                InstructionArgument::u64("amount", amount),
                InstructionArgument::u8("decimals", decimals),
            ],
        ),
        TokenInstruction::BurnChecked { amount, decimals } => (
            "Burn Checked",
            &["Account", "Mint", "Owner"],
            vec![
                InstructionArgument::u64("amount", amount),
                InstructionArgument::u8("decimals", decimals),
            ],
        ),
        TokenInstruction::InitializeAccount2 { owner } => (
            "Initialize Account 2",
            &["Account", "Mint", "Rent Sysvar"],
            vec![InstructionArgument::pubkey("owner", &owner)],
        ),
        TokenInstruction::SyncNative => ("Sync Native", &["Native Account"], vec![]),
        TokenInstruction::InitializeAccount3 { owner } => (
            "Initialize Account 3",
            &["Account", "Mint"],
            vec![InstructionArgument::pubkey("owner", &owner)],
        ),
        TokenInstruction::InitializeMultisig2 { m } => (
            "Initialize Multisig 2",
            &["Multisig"],
            vec![InstructionArgument::u8("m", m)],
        ),
        TokenInstruction::InitializeMint2 {
            decimals,
            mint_authority,
            freeze_authority,
        } => (
            "Initialize Mint 2",
            &["Mint"],
            vec![
                InstructionArgument::u8("decimals", decimals),
                InstructionArgument::pubkey("mint_authority", &mint_authority),
                coption_pubkey("freeze_authority", &freeze_authority),
            ],
        ),
        TokenInstruction::GetAccountDataSize => ("Get Account Data Size", &["Mint"], vec![]),
        TokenInstruction::InitializeImmutableOwner => {
            ("Initialize Immutable Owner", &["Account"], vec![])
        }
        TokenInstruction::AmountToUiAmount { amount } => (
            "Amount To UiAmount",
            &["Mint"],
            vec![InstructionArgument::u64("amount", amount)],
        ),
        TokenInstruction::UiAmountToAmount { ui_amount } => (
            "UiAmount To Amount",
            &["Mint"],
            vec![InstructionArgument::string("ui_amount", ui_amount)],
        ),
    };

    apply_account_names(&mut accounts, account_names);
    KnownInstruction::new(*program_id, PROGRAM_NAME, name, accounts, arguments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use spl_token::instruction as token_instruction;

    #[test]
    fn transfer_checked_names_the_mint() {
        let keys: Vec<Pubkey> = (0..4).map(|_| Pubkey::new_unique()).collect();
        let ix = token_instruction::transfer_checked(
            &spl_token::ID,
            &keys[0],
            &keys[1],
            &keys[2],
            &keys[3],
            &[],
            1_500,
            6,
        )
        .unwrap();
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
        let decoded = decode(&spl_token::ID, &ix.data, accounts);
        assert_eq!(decoded.instruction_name, "Transfer Checked");
        assert_eq!(decoded.accounts[1].name, "Mint");
        assert_eq!(decoded.arguments[0].value, "1500");
        assert_eq!(decoded.arguments[1].value, 6);
    }

    #[test]
    fn set_authority_reports_enum_and_option() {
        let ix = token_instruction::set_authority(
            &spl_token::ID,
            &Pubkey::new_unique(),
            None,
            token_instruction::AuthorityType::MintTokens,
            &Pubkey::new_unique(),
            &[],
        )
        .unwrap();
        let decoded = decode(&spl_token::ID, &ix.data, vec![]);
        assert_eq!(decoded.instruction_name, "Set Authority");
        assert_eq!(decoded.arguments[0].value, "MintTokens");
        assert_eq!(decoded.arguments[1].value, serde_json::Value::Null);
    }

    #[test]
    fn garbage_data_is_an_error_not_a_panic() {
        let decoded = decode(&spl_token::ID, &[0xf7], vec![]);
        assert_eq!(decoded.instruction_name, "Unknown");
        assert!(decoded.error.is_some());
    }
}
