use anchor_lang::idl::IdlAccount;
use anchor_lang::AccountDeserialize;
use anchor_syn::idl::types::Idl;
use anyhow::anyhow;
use flate2::read::ZlibDecoder;
use solana_sdk::pubkey::Pubkey;
use std::io::Read;

/// Derive the canonical on-chain address of a program's IDL account.
pub fn idl_account_address(program_id: &Pubkey) -> Pubkey {
    IdlAccount::address(program_id)
}

/// Deserialize an on-chain IDL account: an Anchor account header
/// followed by a zlib-compressed JSON document.
pub fn deserialize_idl_account(data: &[u8]) -> anyhow::Result<Idl> {
    let idl_account: IdlAccount = AccountDeserialize::try_deserialize(&mut &data[..])
        .map_err(|e| anyhow!("not an IDL account: {e}"))?;
    let compressed_len: usize = idl_account.data_len as usize;
    let compressed_bytes = data
        .get(44..44 + compressed_len)
        .ok_or_else(|| anyhow!("IDL account data shorter than its declared length"))?;
    let mut decoder = ZlibDecoder::new(compressed_bytes);
    let mut json = Vec::new();
    decoder
        .read_to_end(&mut json)
        .map_err(|e| anyhow!("could not decompress IDL data: {e}"))?;
    serde_json::from_slice(&json).map_err(|e| anyhow!("could not parse IDL JSON: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_is_not_an_idl_account() {
        assert!(deserialize_idl_account(&[0u8; 4]).is_err());
        assert!(deserialize_idl_account(&[0u8; 64]).is_err());
    }
}
