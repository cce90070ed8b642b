use anchor_syn::idl::types::{
    EnumFields, IdlField, IdlType, IdlTypeDefinition, IdlTypeDefinitionTy,
};
use anyhow::anyhow;
use serde_json::{json, Value};
use solana_sdk::pubkey::Pubkey;

/// Borsh-decode one value of `idl_type` from the front of `data`,
/// advancing the slice.
///
/// Numbers up to 64 bits become JSON numbers; 128-bit integers and
/// floats become strings since not every JSON consumer can hold them.
/// `Defined` types recurse through the IDL's type definitions; a
/// circular IDL could in principle recurse forever, but such an IDL
/// cannot correspond to a compilable program.
pub fn deserialize_idl_type(
    idl_type: &IdlType,
    type_defs: &[IdlTypeDefinition],
    data: &mut &[u8],
) -> anyhow::Result<Value> {
    match idl_type {
        IdlType::Bool => {
            let value: bool = borsh::BorshDeserialize::deserialize(data)?;
            Ok(Value::Bool(value))
        }
        IdlType::U8 => {
            let value: u8 = borsh::BorshDeserialize::deserialize(data)?;
            Ok(Value::Number(value.into()))
        }
        IdlType::I8 => {
            let value: i8 = borsh::BorshDeserialize::deserialize(data)?;
            Ok(Value::Number(value.into()))
        }
        IdlType::U16 => {
            let value: u16 = borsh::BorshDeserialize::deserialize(data)?;
            Ok(Value::Number(value.into()))
        }
        IdlType::I16 => {
            let value: i16 = borsh::BorshDeserialize::deserialize(data)?;
            Ok(Value::Number(value.into()))
        }
        IdlType::U32 => {
            let value: u32 = borsh::BorshDeserialize::deserialize(data)?;
            Ok(Value::Number(value.into()))
        }
        IdlType::I32 => {
            let value: i32 = borsh::BorshDeserialize::deserialize(data)?;
            Ok(Value::Number(value.into()))
        }
        IdlType::U64 => {
            let value: u64 = borsh::BorshDeserialize::deserialize(data)?;
            Ok(Value::Number(value.into()))
        }
        IdlType::I64 => {
            let value: i64 = borsh::BorshDeserialize::deserialize(data)?;
            Ok(Value::Number(value.into()))
        }
        IdlType::F32 => {
            let value: f32 = borsh::BorshDeserialize::deserialize(data)?;
            Ok(Value::String(value.to_string()))
        }
        IdlType::F64 => {
            let value: f64 = borsh::BorshDeserialize::deserialize(data)?;
            Ok(Value::String(value.to_string()))
        }
        IdlType::U128 => {
            let value: u128 = borsh::BorshDeserialize::deserialize(data)?;
            Ok(Value::String(value.to_string()))
        }
        IdlType::I128 => {
            let value: i128 = borsh::BorshDeserialize::deserialize(data)?;
            Ok(Value::String(value.to_string()))
        }
        IdlType::Bytes => {
            let value: Vec<u8> = borsh::BorshDeserialize::deserialize(data)?;
            Ok(Value::String(hex::encode(value)))
        }
        IdlType::String => {
            let value: String = borsh::BorshDeserialize::deserialize(data)?;
            Ok(Value::String(value))
        }
        IdlType::PublicKey => {
            let value: Pubkey = borsh::BorshDeserialize::deserialize(data)?;
            Ok(Value::String(value.to_string()))
        }
        IdlType::Option(inner) => {
            let is_some: bool = borsh::BorshDeserialize::deserialize(data)?;
            if is_some {
                deserialize_idl_type(inner, type_defs, data)
            } else {
                Ok(Value::Null)
            }
        }
        IdlType::Vec(inner) => {
            let len: u32 = borsh::BorshDeserialize::deserialize(data)?;
            let mut values = Vec::with_capacity(len.min(1024) as usize);
            for _ in 0..len {
                values.push(deserialize_idl_type(inner, type_defs, data)?);
            }
            Ok(Value::Array(values))
        }
        IdlType::Array(inner, len) => {
            let mut values = Vec::with_capacity(*len);
            for _ in 0..*len {
                values.push(deserialize_idl_type(inner, type_defs, data)?);
            }
            Ok(Value::Array(values))
        }
        IdlType::Defined(name) => {
            let type_def = type_defs
                .iter()
                .find(|def| def.name == *name)
                .ok_or_else(|| anyhow!("IDL does not define type `{name}`"))?;
            deserialize_type_definition(type_def, type_defs, data)
        }
        other => Err(anyhow!("unsupported IDL type {other:?}")),
    }
}

fn deserialize_type_definition(
    type_def: &IdlTypeDefinition,
    type_defs: &[IdlTypeDefinition],
    data: &mut &[u8],
) -> anyhow::Result<Value> {
    match &type_def.ty {
        IdlTypeDefinitionTy::Struct { fields } => deserialize_named_fields(fields, type_defs, data),
        IdlTypeDefinitionTy::Enum { variants } => {
            let index: u8 = borsh::BorshDeserialize::deserialize(data)?;
            let variant = variants.get(index as usize).ok_or_else(|| {
                anyhow!(
                    "enum `{}` has no variant {index} ({} declared)",
                    type_def.name,
                    variants.len()
                )
            })?;
            let fields = match &variant.fields {
                None => Value::Null,
                Some(EnumFields::Named(fields)) => {
                    deserialize_named_fields(fields, type_defs, data)?
                }
                Some(EnumFields::Tuple(types)) => {
                    let mut values = Vec::with_capacity(types.len());
                    for ty in types {
                        values.push(deserialize_idl_type(ty, type_defs, data)?);
                    }
                    Value::Array(values)
                }
            };
            Ok(json!({ "name": variant.name, "fields": fields }))
        }
        other => Err(anyhow!(
            "unsupported type definition for `{}`: {other:?}",
            type_def.name
        )),
    }
}

fn deserialize_named_fields(
    fields: &[IdlField],
    type_defs: &[IdlTypeDefinition],
    data: &mut &[u8],
) -> anyhow::Result<Value> {
    let mut map = serde_json::Map::new();
    for field in fields {
        let value = deserialize_idl_type(&field.ty, type_defs, data)
            .map_err(|e| anyhow!("field `{}`: {e}", field.name))?;
        map.insert(field.name.clone(), value);
    }
    Ok(Value::Object(map))
}

/// Human-readable type label for a report argument.
pub fn idl_type_name(idl_type: &IdlType) -> String {
    match idl_type {
        IdlType::Bool => "bool".to_string(),
        IdlType::U8 => "u8".to_string(),
        IdlType::I8 => "i8".to_string(),
        IdlType::U16 => "u16".to_string(),
        IdlType::I16 => "i16".to_string(),
        IdlType::U32 => "u32".to_string(),
        IdlType::I32 => "i32".to_string(),
        IdlType::F32 => "f32".to_string(),
        IdlType::U64 => "u64".to_string(),
        IdlType::I64 => "i64".to_string(),
        IdlType::F64 => "f64".to_string(),
        IdlType::U128 => "u128".to_string(),
        IdlType::I128 => "i128".to_string(),
        IdlType::Bytes => "bytes".to_string(),
        IdlType::String => "string".to_string(),
        IdlType::PublicKey => "publicKey".to_string(),
        IdlType::Defined(name) => name.clone(),
        IdlType::Option(inner) => format!("Option<{}>", idl_type_name(inner)),
        IdlType::Vec(inner) => format!("Vec<{}>", idl_type_name(inner)),
        IdlType::Array(inner, len) => format!("[{}; {len}]", idl_type_name(inner)),
        other => format!("{other:?}"),
    }
}
