use crate::instruction::{
    apply_account_names, InstructionAccount, InstructionArgument, KnownInstruction,
};
use solana_sdk::loader_instruction::LoaderInstruction;
use solana_sdk::loader_upgradeable_instruction::UpgradeableLoaderInstruction;
use solana_sdk::pubkey::Pubkey;

pub const LOADER_NAME: &str = "BPF Loader 2";
pub const UPGRADEABLE_LOADER_NAME: &str = "BPF Upgradeable Loader";

pub fn decode(
    program_id: &Pubkey,
    data: &[u8],
    mut accounts: Vec<InstructionAccount>,
) -> KnownInstruction {
    let ix: LoaderInstruction = match bincode::deserialize(data) {
        Ok(ix) => ix,
        Err(e) => {
            return KnownInstruction::err(
                *program_id,
                LOADER_NAME,
                accounts,
                format!("could not decode instruction data: {e}"),
            )
        }
    };

    let (name, account_names, arguments): (&str, &[&str], Vec<InstructionArgument>) = match ix {
        LoaderInstruction::Write { offset, bytes } => (
            "Write",
            &["Program Account"],
            vec![
                InstructionArgument::u32("offset", offset),
                InstructionArgument::bytes("bytes", &bytes),
            ],
        ),
        LoaderInstruction::Finalize => ("Finalize", &["Program Account", "Rent Sysvar"], vec![]),
    };

    apply_account_names(&mut accounts, account_names);
    KnownInstruction::new(*program_id, LOADER_NAME, name, accounts, arguments)
}

pub fn decode_upgradeable(
    program_id: &Pubkey,
    data: &[u8],
    mut accounts: Vec<InstructionAccount>,
) -> KnownInstruction {
    let ix: UpgradeableLoaderInstruction = match bincode::deserialize(data) {
        Ok(ix) => ix,
        Err(e) => {
            return KnownInstruction::err(
                *program_id,
                UPGRADEABLE_LOADER_NAME,
                accounts,
                format!("could not decode instruction data: {e}"),
            )
        }
    };

    let (name, account_names, arguments): (&str, &[&str], Vec<InstructionArgument>) = match ix {
        UpgradeableLoaderInstruction::InitializeBuffer => (
            "Initialize Buffer",
            &["Buffer", "Buffer Authority"],
            vec![],
        ),
        UpgradeableLoaderInstruction::Write { offset, bytes } => (
            "Write",
            &["Buffer", "Buffer Authority"],
            vec![
                InstructionArgument::u32("offset", offset),
                InstructionArgument::bytes("bytes", &bytes),
            ],
        ),
        UpgradeableLoaderInstruction::DeployWithMaxDataLen { max_data_len } => (
            "Deploy With Max Data Len",
            &[
                "Payer",
                "Program Data",
                "Program",
                "Buffer",
                "Rent Sysvar",
                "Clock Sysvar",
                "System Program",
                "Authority",
            ],
            vec![InstructionArgument::u64("max_data_len", max_data_len as u64)],
        ),
        UpgradeableLoaderInstruction::Upgrade => (
            "Upgrade",
            &[
                "Program Data",
                "Program",
                "Buffer",
                "Spill Account",
                "Rent Sysvar",
                "Clock Sysvar",
                "Authority",
            ],
            vec![],
        ),
        UpgradeableLoaderInstruction::SetAuthority => (
            "Set Authority",
            &["Account", "Current Authority", "New Authority"],
            vec![],
        ),
        UpgradeableLoaderInstruction::Close => (
            "Close",
            &["Account", "Recipient", "Authority", "Program"],
            vec![],
        ),
        UpgradeableLoaderInstruction::ExtendProgram { additional_bytes } => (
            "Extend Program",
            &["Program Data", "Program", "System Program", "Payer"],
            vec![InstructionArgument::u32("additional_bytes", additional_bytes)],
        ),
        UpgradeableLoaderInstruction::SetAuthorityChecked => (
            "Set Authority Checked",
            &["Account", "Current Authority", "New Authority"],
            vec![],
        ),
    };

    apply_account_names(&mut accounts, account_names);
    KnownInstruction::new(*program_id, UPGRADEABLE_LOADER_NAME, name, accounts, arguments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upgradeable_write_reports_offset_and_bytes() {
        let data = bincode::serialize(&UpgradeableLoaderInstruction::Write {
            offset: 1024,
            bytes: vec![0xca, 0xfe],
        })
        .unwrap();
        let decoded = decode_upgradeable(&solana_sdk::bpf_loader_upgradeable::ID, &data, vec![]);
        assert_eq!(decoded.instruction_name, "Write");
        assert_eq!(decoded.arguments[0].value, 1024);
        assert_eq!(decoded.arguments[1].value, "cafe");
    }
}
