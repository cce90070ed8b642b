use crate::instruction::{InstructionAccount, InstructionArgument, KnownInstruction};
use solana_inspect_wire::ByteCursor;
use solana_sdk::pubkey::Pubkey;

pub const PROGRAM_NAME: &str = "Token Lending Program";

/// Token-lending instruction data is a u8 tag; the variants the
/// inspector cares about carry a single little-endian u64 amount.
pub fn decode(
    program_id: &Pubkey,
    data: &[u8],
    accounts: Vec<InstructionAccount>,
) -> KnownInstruction {
    match decode_inner(data) {
        Ok((name, arguments)) => {
            KnownInstruction::new(*program_id, PROGRAM_NAME, name, accounts, arguments)
        }
        Err(error) => KnownInstruction::err(*program_id, PROGRAM_NAME, accounts, error),
    }
}

fn decode_inner(data: &[u8]) -> Result<(&'static str, Vec<InstructionArgument>), String> {
    let mut cursor = ByteCursor::new(data);
    let tag = cursor.read_u8().map_err(|e| e.to_string())?;

    let mut amount = |name: &str| -> Result<Vec<InstructionArgument>, String> {
        Ok(vec![InstructionArgument::u64(
            name,
            cursor.read_u64_le().map_err(|e| e.to_string())?,
        )])
    };

    let decoded = match tag {
        0 => ("Init Lending Market", vec![]),
        1 => ("Set Lending Market Owner", vec![]),
        2 => ("Init Reserve", amount("liquidity_amount")?),
        3 => ("Refresh Reserve", vec![]),
        4 => ("Deposit Reserve Liquidity", amount("liquidity_amount")?),
        5 => ("Redeem Reserve Collateral", amount("collateral_amount")?),
        6 => ("Init Obligation", vec![]),
        7 => ("Refresh Obligation", vec![]),
        8 => ("Deposit Obligation Collateral", amount("collateral_amount")?),
        9 => (
            "Withdraw Obligation Collateral",
            amount("collateral_amount")?,
        ),
        10 => ("Borrow Obligation Liquidity", amount("liquidity_amount")?),
        11 => ("Repay Obligation Liquidity", amount("liquidity_amount")?),
        12 => ("Liquidate Obligation", amount("liquidity_amount")?),
        13 => ("Flash Loan", amount("amount")?),
        other => return Err(format!("unknown token-lending instruction tag {other}")),
    };
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::TOKEN_LENDING_PROGRAM_ID;

    #[test]
    fn deposit_reserve_liquidity() {
        let mut data = vec![4u8];
        data.extend_from_slice(&123_456u64.to_le_bytes());
        let decoded = decode(&TOKEN_LENDING_PROGRAM_ID, &data, vec![]);
        assert_eq!(decoded.instruction_name, "Deposit Reserve Liquidity");
        assert_eq!(decoded.arguments[0].value, "123456");
    }

    #[test]
    fn empty_data_is_an_error() {
        let decoded = decode(&TOKEN_LENDING_PROGRAM_ID, &[], vec![]);
        assert!(decoded.error.is_some());
    }
}
