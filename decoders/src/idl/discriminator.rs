use anchor_syn::codegen::program::common::{sighash, SIGHASH_GLOBAL_NAMESPACE};
use anchor_syn::hash::hash;
use heck::SnakeCase;

pub type Discriminator = [u8; 8];

/// Discriminator of an instruction in the global namespace, as found in
/// an IDL: the first 8 bytes of `sha256("global:<snake_case_name>")`.
pub fn ix_discriminator(name: &str) -> Discriminator {
    sighash(SIGHASH_GLOBAL_NAMESPACE, &name.to_snake_case())
}

/// Discriminator of a legacy state-namespace instruction.
pub fn ix_state_discriminator(name: &str) -> Discriminator {
    hash(format!("state:{}", name.to_snake_case()).as_bytes()).to_bytes()[0..8]
        .try_into()
        .unwrap()
}

/// Split instruction data into its leading discriminator and the
/// argument bytes. Short data zero-pads the discriminator, which simply
/// will not match anything.
pub fn partition_discriminator_from_data(data: &[u8]) -> (Discriminator, Vec<u8>) {
    let mut discriminator = [0u8; 8];
    let len = data.len().min(8);
    discriminator[..len].copy_from_slice(&data[..len]);
    (discriminator, data[len..].to_vec())
}
