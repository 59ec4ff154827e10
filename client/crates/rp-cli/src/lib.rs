//! rp-cli library
//!
//! Exposes the HTTP client and command dispatch for the `rapport` binary and
//! its integration tests.

pub mod cli;
pub mod client;
pub mod commands;
pub mod dispatch;
pub mod error;
pub mod logger;
pub mod resource_commands;
pub mod session_store;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use client::{CliClientResult, Client, ClientError, Resource};
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
pub use resource_commands::ResourceCommands;
