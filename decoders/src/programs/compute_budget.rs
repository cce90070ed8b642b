use crate::instruction::{InstructionAccount, InstructionArgument, KnownInstruction};
use solana_sdk::borsh0_10::try_from_slice_unchecked;
use solana_sdk::compute_budget::ComputeBudgetInstruction;
use solana_sdk::pubkey::Pubkey;

pub const PROGRAM_NAME: &str = "Compute Budget Program";

pub fn decode(
    program_id: &Pubkey,
    data: &[u8],
    accounts: Vec<InstructionAccount>,
) -> KnownInstruction {
    let ix: ComputeBudgetInstruction = match try_from_slice_unchecked(data) {
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

    let (name, arguments) = match ix {
        ComputeBudgetInstruction::RequestUnitsDeprecated {
            units,
            additional_fee,
        } => (
            "Request Units (Deprecated)",
            vec![
                InstructionArgument::u32("units", units),
                InstructionArgument::u32("additional_fee", additional_fee),
            ],
        ),
        ComputeBudgetInstruction::RequestHeapFrame(bytes) => (
            "Request Heap Frame",
            vec![InstructionArgument::u32("bytes", bytes)],
        ),
        ComputeBudgetInstruction::SetComputeUnitLimit(units) => (
            "Set Compute Unit Limit",
            vec![InstructionArgument::u32("units", units)],
        ),
        ComputeBudgetInstruction::SetComputeUnitPrice(micro_lamports) => (
            "Set Compute Unit Price",
            vec![InstructionArgument::u64("micro_lamports", micro_lamports)],
        ),
        ComputeBudgetInstruction::SetLoadedAccountsDataSizeLimit(bytes) => (
            "Set Loaded Accounts Data Size Limit",
            vec![InstructionArgument::u32("bytes", bytes)],
        ),
    };

    KnownInstruction::new(*program_id, PROGRAM_NAME, name, accounts, arguments)
}
