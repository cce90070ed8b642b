//! The instruction-decoder registry.
//!
//! Every decode path in this crate is total: feeding it arbitrary or
//! adversarial instruction data yields a [`DecodedInstruction`] with any
//! failure captured in an `error` field, never an `Err` or a panic
//! crossing the crate boundary.
//!
//! Dispatch order is a static table of program ids (the closed
//! [`ProgramDecoder`] enum), then a dynamic Anchor-IDL decoder for
//! programs that publish one, then a raw fallback that hex-encodes the
//! data under generic account labels.

pub mod idl;
pub mod instruction;
pub mod names;
pub mod programs;
pub mod registry;

pub use idl::IdlWithDiscriminators;
pub use instruction::{
    DecodedInstruction, InstructionAccount, InstructionArgument, KnownInstruction,
    UnknownInstruction,
};
pub use registry::{decode_instruction, ProgramDecoder};
