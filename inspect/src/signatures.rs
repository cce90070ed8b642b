use serde::Serialize;
use solana_inspect_serde::{option_signature, pubkey};
use solana_inspect_wire::Message;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;

/// Verification outcome for one required-signer slot. `verified` is
/// `None` when no signature was supplied for the slot; an unsigned slot
/// is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignatureStatus {
    #[serde(with = "option_signature")]
    pub signature: Option<Signature>,
    #[serde(with = "pubkey")]
    pub signer: Pubkey,
    pub verified: Option<bool>,
}

/// Verify one Ed25519 signature per required signer against the raw
/// message bytes.
///
/// `embedded` signatures (from a decoded transaction) win per index;
/// the out-of-band `supplied` list fills slots the transaction did not
/// carry. Surplus entries in either list are ignored and an all-zeroes
/// embedded placeholder counts as unsigned.
pub fn verify_signatures(
    message: &Message,
    message_bytes: &[u8],
    embedded: &[Signature],
    supplied: &[Option<Signature>],
) -> Vec<SignatureStatus> {
    let count = (message.header.num_required_signatures as usize)
        .min(message.static_account_keys.len());
    (0..count)
        .map(|i| {
            let signer = message.static_account_keys[i];
            let signature = embedded
                .get(i)
                .copied()
                .filter(|signature| *signature != Signature::default())
                .or_else(|| supplied.get(i).copied().flatten());
            let verified =
                signature.map(|signature| signature.verify(signer.as_ref(), message_bytes));
            SignatureStatus {
                signature,
                signer,
                verified,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_inspect_wire::decode_input;
    use solana_sdk::signature::{Keypair, Signer};
    use solana_sdk::system_instruction;

    fn one_signer_message(payer: &Keypair) -> (Message, Vec<u8>) {
        let sdk_message = solana_sdk::message::Message::new(
            &[system_instruction::transfer(
                &payer.pubkey(),
                &Pubkey::new_unique(),
                1,
            )],
            Some(&payer.pubkey()),
        );
        let bytes = sdk_message.serialize();
        let input = decode_input(&bytes).unwrap();
        (input.message, input.message_bytes)
    }

    #[test]
    fn valid_signature_verifies() {
        let payer = Keypair::new();
        let (message, bytes) = one_signer_message(&payer);
        let signature = payer.sign_message(&bytes);

        let statuses = verify_signatures(&message, &bytes, &[signature], &[]);
        assert_eq!(statuses.len(), 1);
        assert_eq!(statuses[0].signer, payer.pubkey());
        assert_eq!(statuses[0].verified, Some(true));
    }

    #[test]
    fn flipped_byte_fails_verification() {
        let payer = Keypair::new();
        let (message, bytes) = one_signer_message(&payer);
        let signature = payer.sign_message(&bytes);

        let mut tampered = bytes.clone();
        tampered[10] ^= 0x01;
        let statuses = verify_signatures(&message, &tampered, &[signature], &[]);
        assert_eq!(statuses[0].verified, Some(false));
    }

    #[test]
    fn missing_and_surplus_supplied_signatures() {
        let payer = Keypair::new();
        let (message, bytes) = one_signer_message(&payer);
        let signature = payer.sign_message(&bytes);

        // nothing embedded, nothing supplied: unsigned, not an error
        let statuses = verify_signatures(&message, &bytes, &[], &[]);
        assert_eq!(statuses[0].signature, None);
        assert_eq!(statuses[0].verified, None);

        // supplied list fills the slot; surplus entries are ignored
        let statuses =
            verify_signatures(&message, &bytes, &[], &[Some(signature), Some(signature)]);
        assert_eq!(statuses.len(), 1);
        assert_eq!(statuses[0].verified, Some(true));

        // an explicit null slot stays unsigned
        let statuses = verify_signatures(&message, &bytes, &[], &[None]);
        assert_eq!(statuses[0].verified, None);
    }

    #[test]
    fn placeholder_embedded_signature_counts_as_unsigned() {
        let payer = Keypair::new();
        let (message, bytes) = one_signer_message(&payer);
        let statuses = verify_signatures(&message, &bytes, &[Signature::default()], &[]);
        assert_eq!(statuses[0].signature, None);
        assert_eq!(statuses[0].verified, None);
    }
}
