use crate::error::WireError;
use crate::message::{Message, MESSAGE_VERSION_PREFIX};
use solana_sdk::signature::Signature;

pub const SIGNATURE_BYTES: usize = 64;

/// Smallest buffer worth attempting: header (3), account-count prefix
/// (1), one account key (32), blockhash (32), instruction-count prefix
/// (1).
pub const MIN_MESSAGE_LEN: usize = 69;

/// A buffer split into its signatures and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedInput {
    /// Empty when the input was a bare message. An all-zeroes entry is a
    /// placeholder for a signature that has not been produced yet.
    pub signatures: Vec<Signature>,
    pub message: Message,
    /// The exact bytes the message was decoded from; signatures are
    /// verified against these and the serialized size is derived from
    /// them.
    pub message_bytes: Vec<u8>,
}

/// Decide whether `bytes` holds a signed transaction or a bare message,
/// and decode accordingly.
///
/// The split is a best-effort probe, not a grammar: the first byte is
/// read as a candidate signature count N, and the byte where a
/// transaction's message header would start (skipping a version byte if
/// one is present) is compared against N. A bare message whose bytes
/// happen to satisfy the probe decodes as a transaction; byte patterns
/// can collide and no stricter rule exists in the wire format. Any probe
/// failure falls back to parsing the whole buffer as a bare message.
pub fn decode_input(bytes: &[u8]) -> Result<DecodedInput, WireError> {
    if bytes.len() < MIN_MESSAGE_LEN {
        return Err(WireError::BufferTooShort {
            len: bytes.len(),
            min: MIN_MESSAGE_LEN,
        });
    }
    if let Some(input) = try_split_transaction(bytes) {
        return Ok(input);
    }
    let message = Message::deserialize(bytes)?;
    Ok(DecodedInput {
        signatures: vec![],
        message,
        message_bytes: bytes.to_vec(),
    })
}

fn try_split_transaction(bytes: &[u8]) -> Option<DecodedInput> {
    let signature_count = bytes[0] as usize;
    let message_offset = 1 + SIGNATURE_BYTES * signature_count;

    let &first_message_byte = bytes.get(message_offset)?;
    let version_len = usize::from(first_message_byte & MESSAGE_VERSION_PREFIX != 0);
    let &num_required_signatures = bytes.get(message_offset + version_len)?;
    if num_required_signatures as usize != signature_count {
        return None;
    }

    // A decode failure here means the probe matched coincidentally;
    // treat the buffer as a bare message instead.
    let message = Message::deserialize(&bytes[message_offset..]).ok()?;

    let signatures = bytes[1..message_offset]
        .chunks_exact(SIGNATURE_BYTES)
        .map(|chunk| {
            let mut signature = [0u8; SIGNATURE_BYTES];
            signature.copy_from_slice(chunk);
            Signature::from(signature)
        })
        .collect();

    Some(DecodedInput {
        signatures,
        message,
        message_bytes: bytes[message_offset..].to_vec(),
    })
}
