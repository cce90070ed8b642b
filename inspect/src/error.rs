use solana_inspect_wire::WireError;
use thiserror::Error;

/// Input-rejection errors: the only tier that aborts an inspection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InspectError {
    #[error(transparent)]
    Wire(#[from] WireError),
    #[error("payload is not valid base64 or base58")]
    InvalidEncoding,
    #[error("invalid signature list: {0}")]
    InvalidSignatureList(String),
}
