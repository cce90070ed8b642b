use crate::idl::{self, IdlWithDiscriminators};
use crate::instruction::{
    DecodedInstruction, InstructionAccount, KnownInstruction, UnknownInstruction,
};
use crate::names::{
    program_display_name, CONFIG_PROGRAM_ID, SERUM_DEX_V3_PROGRAM_ID, TOKEN_2022_PROGRAM_ID,
    TOKEN_LENDING_PROGRAM_ID, TOKEN_SWAP_PROGRAM_ID,
};
use crate::programs;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::{bpf_loader, bpf_loader_upgradeable, compute_budget, system_program};

/// The closed set of programs with a dedicated decoder.
///
/// Adding support for a program means adding a variant here, routing its
/// id in [`ProgramDecoder::for_program_id`], and writing its decode
/// function under `programs/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramDecoder {
    System,
    Stake,
    Vote,
    Config,
    ComputeBudget,
    AddressLookupTable,
    BpfLoader,
    BpfLoaderUpgradeable,
    AssociatedToken,
    Token,
    Memo,
    SerumDex,
    TokenSwap,
    TokenLending,
}

impl ProgramDecoder {
    pub fn for_program_id(program_id: &Pubkey) -> Option<Self> {
        if *program_id == system_program::ID {
            Some(Self::System)
        } else if *program_id == solana_sdk::stake::program::ID {
            Some(Self::Stake)
        } else if *program_id == solana_vote_program::id() {
            Some(Self::Vote)
        } else if *program_id == CONFIG_PROGRAM_ID {
            Some(Self::Config)
        } else if *program_id == compute_budget::ID {
            Some(Self::ComputeBudget)
        } else if *program_id == solana_address_lookup_table_program::id() {
            Some(Self::AddressLookupTable)
        } else if *program_id == bpf_loader::ID {
            Some(Self::BpfLoader)
        } else if *program_id == bpf_loader_upgradeable::ID {
            Some(Self::BpfLoaderUpgradeable)
        } else if *program_id == spl_associated_token_account::ID {
            Some(Self::AssociatedToken)
        } else if *program_id == spl_token::ID || *program_id == TOKEN_2022_PROGRAM_ID {
            Some(Self::Token)
        } else if *program_id == spl_memo::id() || *program_id == spl_memo::v1::id() {
            Some(Self::Memo)
        } else if *program_id == SERUM_DEX_V3_PROGRAM_ID {
            Some(Self::SerumDex)
        } else if *program_id == TOKEN_SWAP_PROGRAM_ID {
            Some(Self::TokenSwap)
        } else if *program_id == TOKEN_LENDING_PROGRAM_ID {
            Some(Self::TokenLending)
        } else {
            None
        }
    }

    pub fn program_name(&self) -> &'static str {
        match self {
            Self::System => programs::system::PROGRAM_NAME,
            Self::Stake => programs::stake::PROGRAM_NAME,
            Self::Vote => programs::vote::PROGRAM_NAME,
            Self::Config => programs::config::PROGRAM_NAME,
            Self::ComputeBudget => programs::compute_budget::PROGRAM_NAME,
            Self::AddressLookupTable => programs::address_lookup_table::PROGRAM_NAME,
            Self::BpfLoader => programs::loader::LOADER_NAME,
            Self::BpfLoaderUpgradeable => programs::loader::UPGRADEABLE_LOADER_NAME,
            Self::AssociatedToken => programs::associated_token::PROGRAM_NAME,
            Self::Token => programs::token::PROGRAM_NAME,
            Self::Memo => programs::memo::PROGRAM_NAME,
            Self::SerumDex => programs::serum_dex::PROGRAM_NAME,
            Self::TokenSwap => programs::token_swap::PROGRAM_NAME,
            Self::TokenLending => programs::token_lending::PROGRAM_NAME,
        }
    }

    fn decode(
        self,
        program_id: &Pubkey,
        data: &[u8],
        accounts: Vec<InstructionAccount>,
    ) -> KnownInstruction {
        match self {
            Self::System => programs::system::decode(program_id, data, accounts),
            Self::Stake => programs::stake::decode(program_id, data, accounts),
            Self::Vote => programs::vote::decode(program_id, data, accounts),
            Self::Config => programs::config::decode(program_id, data, accounts),
            Self::ComputeBudget => programs::compute_budget::decode(program_id, data, accounts),
            Self::AddressLookupTable => {
                programs::address_lookup_table::decode(program_id, data, accounts)
            }
            Self::BpfLoader => programs::loader::decode(program_id, data, accounts),
            Self::BpfLoaderUpgradeable => {
                programs::loader::decode_upgradeable(program_id, data, accounts)
            }
            Self::AssociatedToken => programs::associated_token::decode(program_id, data, accounts),
            Self::Token => programs::token::decode(program_id, data, accounts),
            Self::Memo => programs::memo::decode(program_id, data, accounts),
            Self::SerumDex => programs::serum_dex::decode(program_id, data, accounts),
            Self::TokenSwap => programs::token_swap::decode(program_id, data, accounts),
            Self::TokenLending => programs::token_lending::decode(program_id, data, accounts),
        }
    }
}

/// Decode one instruction. Total over arbitrary input: a dedicated
/// decoder or the IDL path may record an error, the raw fallback cannot
/// fail.
pub fn decode_instruction(
    program_id: &Pubkey,
    data: &[u8],
    accounts: Vec<InstructionAccount>,
    idl: Option<&IdlWithDiscriminators>,
) -> DecodedInstruction {
    if let Some(decoder) = ProgramDecoder::for_program_id(program_id) {
        let known = decoder.decode(program_id, data, accounts);
        return DecodedInstruction::Known(flag_account_errors(known));
    }

    if let Some(idl) = idl {
        match idl::decode_with_idl(idl, program_id, data, accounts.clone()) {
            Ok(known) => return DecodedInstruction::Known(flag_account_errors(known)),
            Err(error) => {
                return DecodedInstruction::Unknown(UnknownInstruction {
                    program_id: Some(*program_id),
                    program_name: idl.name.clone(),
                    accounts,
                    data_hex: hex::encode(data),
                    error: Some(error.to_string()),
                })
            }
        }
    }

    DecodedInstruction::Unknown(UnknownInstruction {
        program_id: Some(*program_id),
        program_name: program_display_name(program_id)
            .map(str::to_string)
            .unwrap_or_else(|| program_id.to_string()),
        accounts,
        data_hex: hex::encode(data),
        error: None,
    })
}

/// Surface the first unresolved account reference on the instruction
/// itself, without discarding anything that did decode.
fn flag_account_errors(mut known: KnownInstruction) -> KnownInstruction {
    if known.error.is_none() {
        if let Some(account) = known.accounts.iter().find(|account| account.error.is_some()) {
            known.error = account.error.clone();
        }
    }
    known
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruction::InstructionArgument;
    use solana_sdk::system_instruction::SystemInstruction;

    fn transfer_accounts() -> Vec<InstructionAccount> {
        vec![
            InstructionAccount::new("Account #1", Pubkey::new_unique(), true, true),
            InstructionAccount::new("Account #2", Pubkey::new_unique(), true, false),
        ]
    }

    #[test]
    fn dispatches_system_transfer() {
        let data = bincode::serialize(&SystemInstruction::Transfer { lamports: 1_000_000 }).unwrap();
        let decoded =
            decode_instruction(&system_program::ID, &data, transfer_accounts(), None);
        let known = decoded.as_known().expect("known instruction");
        assert_eq!(known.program_name, "System Program");
        assert_eq!(known.instruction_name, "Transfer");
        assert_eq!(
            known.arguments,
            vec![InstructionArgument::u64("lamports", 1_000_000)]
        );
        assert_eq!(known.accounts[0].name, "Source");
        assert_eq!(known.accounts[1].name, "Destination");
        assert!(known.error.is_none());
    }

    #[test]
    fn unresolved_account_marks_the_instruction() {
        let data = bincode::serialize(&SystemInstruction::Transfer { lamports: 5 }).unwrap();
        let accounts = vec![
            InstructionAccount::new("Account #1", Pubkey::new_unique(), true, true),
            InstructionAccount::unresolved(
                "Account #2",
                true,
                false,
                "account index 9 out of range",
            ),
        ];
        let decoded = decode_instruction(&system_program::ID, &data, accounts, None);
        let known = decoded.as_known().unwrap();
        // still decoded, with the failure carried as data
        assert_eq!(known.instruction_name, "Transfer");
        assert_eq!(known.error.as_deref(), Some("account index 9 out of range"));
    }

    #[test]
    fn undecodable_data_stays_known() {
        let decoded =
            decode_instruction(&system_program::ID, &[0xff, 0xff], transfer_accounts(), None);
        let known = decoded.as_known().unwrap();
        assert_eq!(known.instruction_name, "Unknown");
        assert!(known.error.is_some());
    }

    #[test]
    fn unregistered_program_is_raw() {
        let program_id = Pubkey::new_unique();
        let decoded = decode_instruction(&program_id, &[1, 2, 3], vec![], None);
        let unknown = decoded.as_unknown().unwrap();
        assert_eq!(unknown.program_name, program_id.to_string());
        assert_eq!(unknown.data_hex, "010203");
    }
}
