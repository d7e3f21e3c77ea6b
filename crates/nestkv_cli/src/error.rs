//! CLI error types.

use std::io;
use thiserror::Error;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors raised while reading or interpreting commands.
///
/// Parse errors are reported to the user and the session continues; only
/// I/O errors end a session.
#[derive(Debug, Error)]
pub enum CliError {
    /// The command word is not recognised.
    #[error("Invalid command: {0}")]
    UnknownCommand(String),

    /// A required argument was not given.
    #[error("{command}: missing {argument}")]
    MissingArgument {
        /// Command being parsed.
        command: &'static str,
        /// Name of the missing argument.
        argument: &'static str,
    },

    /// More arguments were given than the command takes.
    #[error("{command}: unexpected argument {argument:?}")]
    UnexpectedArgument {
        /// Command being parsed.
        command: &'static str,
        /// The first surplus argument.
        argument: String,
    },

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Creates a missing argument error.
    pub fn missing(command: &'static str, argument: &'static str) -> Self {
        Self::MissingArgument { command, argument }
    }

    /// Creates an unexpected argument error.
    pub fn unexpected(command: &'static str, argument: impl Into<String>) -> Self {
        Self::UnexpectedArgument {
            command,
            argument: argument.into(),
        }
    }

    /// Returns true if this error came from parsing a line.
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}
