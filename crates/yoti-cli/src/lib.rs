//! # yoti-cli -- Yoti SDK Command-Line Interface
//!
//! ## Subcommands
//!
//! - `receipt` -- Decode a receipt JSON file offline with a private key
//! - `token` -- Decrypt a one-time-use token into its receipt token
//! - `fetch` -- Exchange a token for a profile against the live API
//!
//! Every subcommand prints JSON to stdout.
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to the library crates.

pub mod fetch;
pub mod receipt;
pub mod summary;
pub mod token;
