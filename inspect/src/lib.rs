//! Transaction inspection: orchestrates wire decoding, address-table
//! resolution, instruction classification, fee math, and signature
//! verification into a single [`InspectionReport`].
//!
//! The only failures that prevent a report are input-rejection errors
//! raised before decoding succeeds ([`InspectError`]). Once the message
//! decodes, every downstream failure (an unresolvable lookup table, an
//! undecodable instruction, an unfetchable account) is recorded on the
//! specific report field it affects and the rest of the report is still
//! produced.

pub mod assemble;
pub mod error;
pub mod fetch;
pub mod input;
pub mod report;
pub mod resolve;
pub mod signatures;

pub use assemble::{InspectOptions, Inspector, ACCOUNT_CONTEXT_BATCH};
pub use error::InspectError;
pub use fetch::{AccountFetcher, FetchError, FetchedAccount};
pub use input::{decode_payload_str, parse_signature_list};
pub use report::{AccountContext, InspectedAccount, InspectionReport};
pub use resolve::{resolve_lookups, ResolvedAddress};
pub use signatures::{verify_signatures, SignatureStatus};
