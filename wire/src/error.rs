use thiserror::Error;

/// Errors raised while reading raw transaction or message bytes.
///
/// These are the only failures that prevent an inspection report from
/// being produced at all; everything downstream of a successful message
/// decode records its failures as per-item data instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    #[error("buffer too short: {len} bytes, expected at least {min}")]
    BufferTooShort { len: usize, min: usize },
    #[error("malformed message: {0}")]
    MalformedMessage(String),
}
