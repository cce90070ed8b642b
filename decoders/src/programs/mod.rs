//! Dedicated per-program decoders.
//!
//! Each module exposes `decode(program_id, data, accounts) ->
//! KnownInstruction`. The account lists arrive with positional labels
//! and header-derived flags; decoders rename the leading entries to the
//! roles the program's documented account layout assigns them.

pub mod address_lookup_table;
pub mod associated_token;
pub mod compute_budget;
pub mod config;
pub mod loader;
pub mod memo;
pub mod serum_dex;
pub mod stake;
pub mod system;
pub mod token;
pub mod token_lending;
pub mod token_swap;
pub mod vote;
