//! CLI layer: argument parsing and command execution for the demo driver

pub mod args;
pub mod commands;
pub mod error;

pub use args::{Cli, Traversal};
pub use commands::execute_command;
pub use error::{CliError, CliResult};
