//! CLI-level errors and their exit codes

use std::io;

use thiserror::Error;

/// Command line usage error (BSD sysexits.h)
pub const USAGE: i32 = 64;

/// Input/output error (BSD sysexits.h)
pub const IOERR: i32 = 74;

/// Errors reported to the user by the demo driver.
#[derive(Error, Debug)]
pub enum CliError {
    /// Writing the output failed.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// The arguments parsed but make no sense together.
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Io(_) => IOERR,
            CliError::InvalidArgs(_) => USAGE,
        }
    }
}
