//! Byte-level decoding of Solana transaction and message wire formats.
//!
//! Nothing in this crate talks to the network or interprets instruction
//! semantics. It turns raw bytes into a structured [`Message`], splits a
//! signed transaction from a bare message, and computes the serialized
//! size and fee that follow directly from the wire layout.

pub mod cursor;
pub mod error;
pub mod fees;
pub mod message;
pub mod transaction;

pub use cursor::ByteCursor;
pub use error::WireError;
pub use fees::{serialized_size, transaction_fee, LAMPORTS_PER_SIGNATURE};
pub use message::{Message, MessageVersion, MESSAGE_VERSION_PREFIX};
pub use transaction::{decode_input, DecodedInput, MIN_MESSAGE_LEN};
