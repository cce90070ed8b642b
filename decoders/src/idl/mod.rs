//! Generic instruction decoding driven by a program's published Anchor
//! IDL.
//!
//! When no dedicated decoder matches a program id, the registry looks
//! for an interface description and decodes the instruction against it:
//! the leading 8 bytes select an instruction by discriminator, declared
//! arguments decode by their declared types, and declared account names
//! map positionally onto the resolved account list.

pub mod discriminator;
pub mod fields;
pub mod on_chain;

use crate::instruction::{InstructionAccount, InstructionArgument, KnownInstruction};
use anchor_syn::idl::types::{Idl, IdlAccountItem, IdlInstruction};
use anyhow::anyhow;
use discriminator::{
    ix_discriminator, ix_state_discriminator, partition_discriminator_from_data, Discriminator,
};
use fields::{deserialize_idl_type, idl_type_name};
use serde_json::Value;
use solana_sdk::pubkey::Pubkey;
use std::collections::BTreeMap;
use std::ops::Deref;

/// An [`Idl`] with its instructions indexed by discriminator, so a
/// single map lookup classifies instruction data.
///
/// Both the `global:` and legacy `state:` namespaces are indexed, the
/// discriminator being the first 8 bytes of the namespace-qualified
/// name hash.
#[derive(Debug, Clone)]
pub struct IdlWithDiscriminators {
    idl: Idl,
    pub instruction_definitions: BTreeMap<Discriminator, IdlInstruction>,
}

impl From<Idl> for IdlWithDiscriminators {
    fn from(idl: Idl) -> Self {
        let instruction_definitions = idl
            .instructions
            .iter()
            .flat_map(|ix| {
                [
                    (ix_state_discriminator(&ix.name), ix.clone()),
                    (ix_discriminator(&ix.name), ix.clone()),
                ]
            })
            .collect();
        Self {
            idl,
            instruction_definitions,
        }
    }
}

impl IdlWithDiscriminators {
    pub fn new(idl: Idl) -> Self {
        Self::from(idl)
    }
}

impl Deref for IdlWithDiscriminators {
    type Target = Idl;

    fn deref(&self) -> &Self::Target {
        &self.idl
    }
}

/// Collect the IDL's account names in instruction-account order,
/// flattening nested account groups into dotted paths.
fn flatten_account_names(items: &[IdlAccountItem], prefix: &str, names: &mut Vec<String>) {
    for item in items {
        match item {
            IdlAccountItem::IdlAccount(account) => {
                if prefix.is_empty() {
                    names.push(account.name.clone());
                } else {
                    names.push(format!("{prefix}.{}", account.name));
                }
            }
            IdlAccountItem::IdlAccounts(group) => {
                let nested_prefix = if prefix.is_empty() {
                    group.name.clone()
                } else {
                    format!("{prefix}.{}", group.name)
                };
                flatten_account_names(&group.accounts, &nested_prefix, names);
            }
        }
    }
}

/// Decode instruction data against an IDL.
///
/// An unmatched discriminator is an `Err` (the caller demotes the
/// instruction to its raw form); a failing argument is captured on that
/// argument and on the instruction, with everything decoded so far
/// retained.
pub fn decode_with_idl(
    idl: &IdlWithDiscriminators,
    program_id: &Pubkey,
    data: &[u8],
    mut accounts: Vec<InstructionAccount>,
) -> anyhow::Result<KnownInstruction> {
    let (discriminator, arg_data) = partition_discriminator_from_data(data);
    let ix = idl
        .instruction_definitions
        .get(&discriminator)
        .ok_or_else(|| anyhow!("no instruction matches discriminator {discriminator:?}"))?;

    let mut arguments = Vec::with_capacity(ix.args.len());
    let mut error = None;
    let mut rest: &[u8] = &arg_data;
    for field in &ix.args {
        let ty = idl_type_name(&field.ty);
        match deserialize_idl_type(&field.ty, &idl.types, &mut rest) {
            Ok(value) => arguments.push(InstructionArgument {
                name: field.name.clone(),
                ty,
                value,
                error: None,
            }),
            Err(e) => {
                arguments.push(InstructionArgument {
                    name: field.name.clone(),
                    ty,
                    value: Value::Null,
                    error: Some(e.to_string()),
                });
                error = Some(format!("failed to decode argument `{}`", field.name));
                break;
            }
        }
    }

    let mut names = Vec::new();
    flatten_account_names(&ix.accounts, "", &mut names);
    for (account, name) in accounts.iter_mut().zip(&names) {
        account.name = name.clone();
    }

    Ok(KnownInstruction {
        program_id: *program_id,
        program_name: idl.name.clone(),
        instruction_name: ix.name.clone(),
        accounts,
        arguments,
        error,
    })
}
