use crate::instruction::{
    apply_account_names, InstructionAccount, InstructionArgument, KnownInstruction,
};
use serde::Deserialize;
use serde_json::{json, Value};
use solana_sdk::pubkey::Pubkey;

pub const PROGRAM_NAME: &str = "Config Program";

/// The config program's single `Store` instruction starts with a
/// bincode-encoded list of (key, signer) pairs; the rest of the data is
/// the opaque config payload. The teacher's stack carries no crate for
/// this program, so the prefix is declared here.
#[derive(Debug, Deserialize)]
struct ConfigKeys {
    keys: Vec<(Pubkey, bool)>,
}

pub fn decode(
    program_id: &Pubkey,
    data: &[u8],
    mut accounts: Vec<InstructionAccount>,
) -> KnownInstruction {
    let config_keys: ConfigKeys = match bincode::deserialize(data) {
        Ok(keys) => keys,
        Err(e) => {
            return KnownInstruction::err(
                *program_id,
                PROGRAM_NAME,
                accounts,
                format!("could not decode instruction data: {e}"),
            )
        }
    };

    // bincode layout: u64 element count, then 32 key bytes + 1 signer
    // byte per element.
    let prefix_len = 8 + 33 * config_keys.keys.len();
    let payload = data.get(prefix_len..).unwrap_or(&[]);

    let keys = Value::Array(
        config_keys
            .keys
            .iter()
            .map(|(key, signer)| json!({ "pubkey": key.to_string(), "signer": signer }))
            .collect(),
    );

    apply_account_names(&mut accounts, &["Config Account"]);
    KnownInstruction::new(
        *program_id,
        PROGRAM_NAME,
        "Store",
        accounts,
        vec![
            InstructionArgument::new("keys", "vec<(pubkey, bool)>", keys),
            InstructionArgument::bytes("data", payload),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::CONFIG_PROGRAM_ID;
    use serde::Serialize;

    #[derive(Serialize)]
    struct ConfigKeysOwned {
        keys: Vec<(Pubkey, bool)>,
    }

    #[test]
    fn store_splits_keys_from_payload() {
        let signer = Pubkey::new_unique();
        let mut data = bincode::serialize(&ConfigKeysOwned {
            keys: vec![(signer, true)],
        })
        .unwrap();
        data.extend_from_slice(&[0xab, 0xcd]);

        let decoded = decode(&CONFIG_PROGRAM_ID, &data, vec![]);
        assert_eq!(decoded.instruction_name, "Store");
        assert_eq!(
            decoded.arguments[0].value,
            serde_json::json!([{ "pubkey": signer.to_string(), "signer": true }])
        );
        assert_eq!(decoded.arguments[1].value, "abcd");
    }
}
