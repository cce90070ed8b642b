use crate::instruction::{InstructionAccount, InstructionArgument, KnownInstruction};
use solana_sdk::pubkey::Pubkey;

pub const PROGRAM_NAME: &str = "Memo Program";

/// Memo data is plain UTF-8 text; every account passed in is a signer
/// the memo is attributed to.
pub fn decode(
    program_id: &Pubkey,
    data: &[u8],
    mut accounts: Vec<InstructionAccount>,
) -> KnownInstruction {
    let memo = match std::str::from_utf8(data) {
        Ok(memo) => memo,
        Err(e) => {
            return KnownInstruction::err(
                *program_id,
                PROGRAM_NAME,
                accounts,
                format!("memo is not valid utf-8: {e}"),
            )
        }
    };

    for account in accounts.iter_mut() {
        account.name = "Signer".to_string();
    }
    KnownInstruction::new(
        *program_id,
        PROGRAM_NAME,
        "Memo",
        accounts,
        vec![InstructionArgument::string("memo", memo)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_text_decodes() {
        let decoded = decode(&spl_memo::id(), "gm".as_bytes(), vec![]);
        assert_eq!(decoded.instruction_name, "Memo");
        assert_eq!(decoded.arguments[0].value, "gm");
    }

    #[test]
    fn invalid_utf8_is_captured() {
        let decoded = decode(&spl_memo::id(), &[0xff, 0xfe], vec![]);
        assert!(decoded.error.is_some());
    }
}
