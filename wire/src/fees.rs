use solana_sdk::message::MessageHeader;

/// Flat network fee charged per required signature.
pub const LAMPORTS_PER_SIGNATURE: u64 = 5_000;

/// Size of the fully signed transaction on the wire: one byte for the
/// signature-count compact prefix (valid while the count stays below
/// 128), the signatures themselves, then the message.
pub fn serialized_size(header: &MessageHeader, message_bytes: &[u8]) -> u64 {
    1 + 64 * header.num_required_signatures as u64 + message_bytes.len() as u64
}

pub fn transaction_fee(header: &MessageHeader) -> u64 {
    header.num_required_signatures as u64 * LAMPORTS_PER_SIGNATURE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(num_required_signatures: u8) -> MessageHeader {
        MessageHeader {
            num_required_signatures,
            num_readonly_signed_accounts: 0,
            num_readonly_unsigned_accounts: 0,
        }
    }

    #[test]
    fn two_signatures_over_two_hundred_bytes() {
        let header = header(2);
        assert_eq!(serialized_size(&header, &[0u8; 200]), 329);
        assert_eq!(transaction_fee(&header), 10_000);
    }

    #[test]
    fn zero_signatures() {
        let header = header(0);
        assert_eq!(serialized_size(&header, &[0u8; 69]), 70);
        assert_eq!(transaction_fee(&header), 0);
    }
}
