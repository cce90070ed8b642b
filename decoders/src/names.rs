//! Display names for well-known program ids.
//!
//! Programs with a dedicated decoder get their name from the registry;
//! this table additionally covers named ecosystem programs that fall
//! through to the IDL or raw paths, so an unknown instruction can still
//! say "Jupiter Aggregator v6" instead of a bare base58 id.

use solana_program::pubkey;
use solana_sdk::pubkey::Pubkey;

pub const CONFIG_PROGRAM_ID: Pubkey = pubkey!("Config1111111111111111111111111111111111111");
pub const TOKEN_2022_PROGRAM_ID: Pubkey = pubkey!("TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb");
pub const SERUM_DEX_V3_PROGRAM_ID: Pubkey = pubkey!("9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin");
pub const TOKEN_SWAP_PROGRAM_ID: Pubkey = pubkey!("SwaPpA9LAaLfeLi3a68M4DjnLqgtticKg6CnyNwgAC8");
pub const TOKEN_LENDING_PROGRAM_ID: Pubkey = pubkey!("LendZqTs7gn5CTSJU1jWKhKuVpjJGom45nnwPb2AMTi");

static PROGRAM_NAMES: &[(Pubkey, &str)] = &[
    (pubkey!("metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s"), "Token Metadata Program"),
    (pubkey!("675kPX9MHTjS2zt1qfr1NYHuzeLXfQM9H24wFSUt1Mp8"), "Raydium Liquidity Pool V4"),
    (pubkey!("whirLbMiicVdio4qvUfM5KAg6Ct8VwpYzGff3uctyCc"), "Orca Whirlpool Program"),
    (pubkey!("JUP6LkbZbjS1jKKwapdHNy74zcZ3tLUZoi5QNyVTaV4"), "Jupiter Aggregator v6"),
    (pubkey!("MarBmsSgKXdrN1egZf5sqe1TMai9K1rChYNDJgjq7aD"), "Marinade Staking Program"),
    (pubkey!("So1endDq2YkqhipRh3WViPa8hdiSpxWy6z3Z6tMCpAo"), "Solend Program"),
    (pubkey!("SPoo1Ku8WFXoNDMHPsrGSTSG1Y47rzgn41SLUNakuHy"), "Stake Pool Program"),
    (pubkey!("KeccakSecp256k11111111111111111111111111111"), "Secp256k1 SigVerify Precompile"),
    (pubkey!("Ed25519SigVerify111111111111111111111111111"), "Ed25519 SigVerify Precompile"),
];

/// Friendly name for a program id outside the dedicated-decoder set, if
/// it is one we recognize.
pub fn program_display_name(program_id: &Pubkey) -> Option<&'static str> {
    PROGRAM_NAMES
        .iter()
        .find(|(id, _)| id == program_id)
        .map(|(_, name)| *name)
}
