use crate::instruction::{
    apply_account_names, InstructionAccount, InstructionArgument, KnownInstruction,
};
use solana_inspect_wire::ByteCursor;
use solana_sdk::pubkey::Pubkey;

pub const PROGRAM_NAME: &str = "Serum Dex Program v3";

const NEW_ORDER_V3_ACCOUNTS: &[&str] = &[
    "Market",
    "Open Orders",
    "Request Queue",
    "Event Queue",
    "Bids",
    "Asks",
    "Order Payer",
    "Open Orders Owner",
    "Coin Vault",
    "PC Vault",
    "Token Program",
    "Rent Sysvar",
];

fn side_name(side: u32) -> String {
    match side {
        0 => "Bid".to_string(),
        1 => "Ask".to_string(),
        other => format!("Side({other})"),
    }
}

fn order_type_name(order_type: u32) -> String {
    match order_type {
        0 => "Limit".to_string(),
        1 => "ImmediateOrCancel".to_string(),
        2 => "PostOnly".to_string(),
        other => format!("OrderType({other})"),
    }
}

/// Serum instruction data is a single version byte followed by a u32
/// little-endian instruction tag and a fixed per-tag payload.
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
    let version = cursor.read_u8().map_err(|e| e.to_string())?;
    if version != 0 {
        return Err(format!("unsupported serum instruction version {version}"));
    }
    let tag = cursor.read_u32_le().map_err(|e| e.to_string())?;

    let decoded = match tag {
        0 => ("Initialize Market", vec![]),
        1 => ("New Order", vec![]),
        2 => (
            "Match Orders",
            vec![InstructionArgument::u16(
                "limit",
                cursor.read_u16_le().map_err(|e| e.to_string())?,
            )],
        ),
        3 => (
            "Consume Events",
            vec![InstructionArgument::u16(
                "limit",
                cursor.read_u16_le().map_err(|e| e.to_string())?,
            )],
        ),
        4 => ("Cancel Order", vec![]),
        5 => {
            apply_account_names(
                accounts,
                &[
                    "Market",
                    "Open Orders",
                    "Open Orders Owner",
                    "Coin Vault",
                    "PC Vault",
                    "Coin Wallet",
                    "PC Wallet",
                    "Vault Signer",
                    "Token Program",
                ],
            );
            ("Settle Funds", vec![])
        }
        6 => ("Cancel Order By Client Id", vec![]),
        7 => ("Disable Market", vec![]),
        8 => ("Sweep Fees", vec![]),
        9 => ("New Order v2", vec![]),
        10 => {
            apply_account_names(accounts, NEW_ORDER_V3_ACCOUNTS);
            let side = cursor.read_u32_le().map_err(|e| e.to_string())?;
            let limit_price = cursor.read_u64_le().map_err(|e| e.to_string())?;
            let max_coin_qty = cursor.read_u64_le().map_err(|e| e.to_string())?;
            let max_native_pc_qty = cursor.read_u64_le().map_err(|e| e.to_string())?;
            let self_trade_behavior = cursor.read_u32_le().map_err(|e| e.to_string())?;
            let order_type = cursor.read_u32_le().map_err(|e| e.to_string())?;
            let client_order_id = cursor.read_u64_le().map_err(|e| e.to_string())?;
            let limit = cursor.read_u16_le().map_err(|e| e.to_string())?;
            (
                "New Order v3",
                vec![
                    InstructionArgument::new("side", "enum", side_name(side)),
                    InstructionArgument::u64("limit_price", limit_price),
                    InstructionArgument::u64("max_coin_qty", max_coin_qty),
                    InstructionArgument::u64("max_native_pc_qty_including_fees", max_native_pc_qty),
                    InstructionArgument::u32("self_trade_behavior", self_trade_behavior),
                    InstructionArgument::new("order_type", "enum", order_type_name(order_type)),
                    InstructionArgument::u64("client_order_id", client_order_id),
                    InstructionArgument::u16("limit", limit),
                ],
            )
        }
        11 => {
            apply_account_names(
                accounts,
                &[
                    "Market",
                    "Bids",
                    "Asks",
                    "Open Orders",
                    "Open Orders Owner",
                    "Event Queue",
                ],
            );
            let side = cursor.read_u32_le().map_err(|e| e.to_string())?;
            let order_id = cursor.read_u128_le().map_err(|e| e.to_string())?;
            (
                "Cancel Order v2",
                vec![
                    InstructionArgument::new("side", "enum", side_name(side)),
                    InstructionArgument::u128("order_id", order_id),
                ],
            )
        }
        12 => (
            "Cancel Order By Client Id v2",
            vec![InstructionArgument::u64(
                "client_order_id",
                cursor.read_u64_le().map_err(|e| e.to_string())?,
            )],
        ),
        13 => ("Send Take", vec![]),
        14 => (
            "Close Open Orders",
            {
                apply_account_names(
                    accounts,
                    &["Open Orders", "Open Orders Owner", "Destination", "Market"],
                );
                vec![]
            },
        ),
        15 => (
            "Init Open Orders",
            {
                apply_account_names(
                    accounts,
                    &["Open Orders", "Open Orders Owner", "Market", "Rent Sysvar"],
                );
                vec![]
            },
        ),
        16 => ("Prune", vec![]),
        17 => ("Consume Events Permissioned", vec![]),
        other => return Err(format!("unknown serum instruction tag {other}")),
    };
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::SERUM_DEX_V3_PROGRAM_ID;

    fn new_order_v3_data() -> Vec<u8> {
        let mut data = vec![0u8]; // version
        data.extend_from_slice(&10u32.to_le_bytes()); // tag
        data.extend_from_slice(&1u32.to_le_bytes()); // side: ask
        data.extend_from_slice(&250u64.to_le_bytes()); // limit price
        data.extend_from_slice(&10u64.to_le_bytes()); // max coin qty
        data.extend_from_slice(&2_500u64.to_le_bytes()); // max pc qty
        data.extend_from_slice(&0u32.to_le_bytes()); // self trade behavior
        data.extend_from_slice(&2u32.to_le_bytes()); // order type: post only
        data.extend_from_slice(&77u64.to_le_bytes()); // client order id
        data.extend_from_slice(&5u16.to_le_bytes()); // limit
        data
    }

    #[test]
    fn new_order_v3() {
        let decoded = decode(&SERUM_DEX_V3_PROGRAM_ID, &new_order_v3_data(), vec![]);
        assert_eq!(decoded.instruction_name, "New Order v3");
        assert_eq!(decoded.arguments[0].value, "Ask");
        assert_eq!(decoded.arguments[1].value, "250");
        assert_eq!(decoded.arguments[5].value, "PostOnly");
        assert!(decoded.error.is_none());
    }

    #[test]
    fn truncated_payload_is_an_error() {
        let decoded = decode(&SERUM_DEX_V3_PROGRAM_ID, &new_order_v3_data()[..9], vec![]);
        assert_eq!(decoded.instruction_name, "Unknown");
        assert!(decoded.error.is_some());
    }

    #[test]
    fn unknown_tag_is_an_error() {
        let mut data = vec![0u8];
        data.extend_from_slice(&99u32.to_le_bytes());
        let decoded = decode(&SERUM_DEX_V3_PROGRAM_ID, &data, vec![]);
        assert!(decoded
            .error
            .as_deref()
            .unwrap()
            .contains("unknown serum instruction tag"));
    }
}
