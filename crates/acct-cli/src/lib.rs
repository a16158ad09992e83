//! acct-cli library
//!
//! Command tree, logger setup and the on-disk session store behind the
//! `acct` binary.

pub mod cli;
pub mod commands;
pub mod credentials;
pub mod error;
pub mod image;
pub mod logger;
pub mod session_store;

#[cfg(test)]
mod tests;

pub use error::{CliError, Result as CliResult};
