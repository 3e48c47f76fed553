//! tf-cli library
//!
//! Command definitions and the HTTP client for the TaskFlow REST API.

pub mod cli;
pub(crate) mod client;
pub mod column_commands;
pub mod commands;
pub mod project_commands;
pub mod task_commands;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use client::{CliClientResult, Client, ClientError};
pub use column_commands::ColumnCommands;
pub use commands::Commands;
pub use project_commands::ProjectCommands;
pub use task_commands::TaskCommands;
