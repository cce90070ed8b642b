use crate::instruction::{
    apply_account_names, InstructionAccount, InstructionArgument, KnownInstruction,
};
use solana_inspect_wire::ByteCursor;
use solana_sdk::pubkey::Pubkey;

pub const PROGRAM_NAME: &str = "Token Swap Program";

/// Token-swap instruction data is a u8 tag followed by little-endian
/// u64 fields.
pub fn decode(
    program_id: &Pubkey,
    data: &[u8],
    mut accounts: Vec<InstructionAccount>,
) -> KnownInstruction {
    match decode_inner(data, &mut accounts) {
        Ok((name, arguments)) => {
            KnownInstruction::new(*program_id, PROGRAM_NAME, name, accounts, arguments)
        }
        Err(error) => KnownInstruction::err(*program_id, PROGRAM_NAME, accounts, error),
    }
}

fn decode_inner(
    data: &[u8],
    accounts: &mut [InstructionAccount],
) -> Result<(&'static str, Vec<InstructionArgument>), String> {
    let mut cursor = ByteCursor::new(data);
    let tag = cursor.read_u8().map_err(|e| e.to_string())?;

    let decoded = match tag {
        0 => (
            "Initialize",
            {
                apply_account_names(
                    accounts,
                    &[
                        "Token Swap",
                        "Authority",
                        "Token A",
                        "Token B",
                        "Pool Mint",
                        "Fee Account",
                        "Destination",
                        "Token Program",
                    ],
                );
                vec![]
            },
        ),
        1 => {
            apply_account_names(
                accounts,
                &[
                    "Token Swap",
                    "Authority",
                    "User Transfer Authority",
                    "Source",
                    "Swap Source",
                    "Swap Destination",
                    "Destination",
                    "Pool Mint",
                    "Fee Account",
                    "Token Program",
                ],
            );
            (
                "Swap",
                vec![
                    InstructionArgument::u64(
                        "amount_in",
                        cursor.read_u64_le().map_err(|e| e.to_string())?,
                    ),
                    InstructionArgument::u64(
                        "minimum_amount_out",
                        cursor.read_u64_le().map_err(|e| e.to_string())?,
                    ),
                ],
            )
        }
        2 => (
            "Deposit All Token Types",
            vec![
                InstructionArgument::u64(
                    "pool_token_amount",
                    cursor.read_u64_le().map_err(|e| e.to_string())?,
                ),
                InstructionArgument::u64(
                    "maximum_token_a_amount",
                    cursor.read_u64_le().map_err(|e| e.to_string())?,
                ),
                InstructionArgument::u64(
                    "maximum_token_b_amount",
                    cursor.read_u64_le().map_err(|e| e.to_string())?,
                ),
            ],
        ),
        3 => (
            "Withdraw All Token Types",
            vec![
                InstructionArgument::u64(
                    "pool_token_amount",
                    cursor.read_u64_le().map_err(|e| e.to_string())?,
                ),
                InstructionArgument::u64(
                    "minimum_token_a_amount",
                    cursor.read_u64_le().map_err(|e| e.to_string())?,
                ),
                InstructionArgument::u64(
                    "minimum_token_b_amount",
                    cursor.read_u64_le().map_err(|e| e.to_string())?,
                ),
            ],
        ),
        4 => (
            "Deposit Single Token Type Exact Amount In",
            vec![
                InstructionArgument::u64(
                    "source_token_amount",
                    cursor.read_u64_le().map_err(|e| e.to_string())?,
                ),
                InstructionArgument::u64(
                    "minimum_pool_token_amount",
                    cursor.read_u64_le().map_err(|e| e.to_string())?,
                ),
            ],
        ),
        5 => (
            "Withdraw Single Token Type Exact Amount Out",
            vec![
                InstructionArgument::u64(
                    "destination_token_amount",
                    cursor.read_u64_le().map_err(|e| e.to_string())?,
                ),
                InstructionArgument::u64(
                    "maximum_pool_token_amount",
                    cursor.read_u64_le().map_err(|e| e.to_string())?,
                ),
            ],
        ),
        other => return Err(format!("unknown token-swap instruction tag {other}")),
    };
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::TOKEN_SWAP_PROGRAM_ID;

    #[test]
    fn swap_amounts() {
        let mut data = vec![1u8];
        data.extend_from_slice(&10_000u64.to_le_bytes());
        data.extend_from_slice(&9_500u64.to_le_bytes());
        let decoded = decode(&TOKEN_SWAP_PROGRAM_ID, &data, vec![]);
        assert_eq!(decoded.instruction_name, "Swap");
        assert_eq!(decoded.arguments[0].value, "10000");
        assert_eq!(decoded.arguments[1].value, "9500");
    }
}
