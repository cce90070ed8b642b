use crate::error::InspectError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use solana_sdk::bs58;
use solana_sdk::signature::Signature;
use std::str::FromStr;

/// Decode a user-supplied payload string, trying base64 first (the
/// common encoding for signing flows) and falling back to base58.
pub fn decode_payload_str(encoded: &str) -> Result<Vec<u8>, InspectError> {
    if let Ok(bytes) = STANDARD.decode(encoded) {
        return Ok(bytes);
    }
    bs58::decode(encoded)
        .into_vec()
        .map_err(|_| InspectError::InvalidEncoding)
}

/// Parse an out-of-band signature list: a JSON array whose entries are
/// base58 signature strings or explicit nulls ("not yet signed").
pub fn parse_signature_list(json: &str) -> Result<Vec<Option<Signature>>, InspectError> {
    let entries: Vec<Option<String>> = serde_json::from_str(json).map_err(|_| {
        InspectError::InvalidSignatureList(
            "expected a JSON array of base58 strings and nulls".to_string(),
        )
    })?;
    entries
        .into_iter()
        .map(|entry| match entry {
            None => Ok(None),
            Some(s) => Signature::from_str(&s)
                .map(Some)
                .map_err(|_| InspectError::InvalidSignatureList(format!("not base58: {s}"))),
        })
        .collect()
}
