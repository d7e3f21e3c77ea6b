//! Command line parsing.

use crate::error::{CliError, CliResult};
use std::fmt;

/// One interpreter command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open a nested transaction.
    Begin,
    /// Commit every open transaction.
    Commit,
    /// Discard the innermost transaction.
    Rollback,
    /// Bind a key to a value.
    Set {
        /// Key name.
        name: String,
        /// Value to bind.
        value: String,
    },
    /// Print the value bound to a key.
    Get {
        /// Key name.
        name: String,
    },
    /// Remove a key's binding.
    Unset {
        /// Key name.
        name: String,
    },
    /// Print how many keys hold a value.
    NumEqualTo {
        /// Value to count.
        value: String,
    },
    /// Leave the interpreter.
    End,
}

impl Command {
    /// Parses one input line.
    ///
    /// The command word is matched case-insensitively; arguments are taken
    /// verbatim. Returns `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> CliResult<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Ok(None);
        };

        let word = word.to_ascii_lowercase();
        let command = match word.as_str() {
            "begin" => Self::Begin,
            "commit" => Self::Commit,
            "rollback" => Self::Rollback,
            "end" => Self::End,
            "set" => Self::Set {
                name: required(&mut words, "set", "name")?,
                value: required(&mut words, "set", "value")?,
            },
            "get" => Self::Get {
                name: required(&mut words, "get", "name")?,
            },
            "unset" => Self::Unset {
                name: required(&mut words, "unset", "name")?,
            },
            "numequalto" => Self::NumEqualTo {
                value: required(&mut words, "numequalto", "value")?,
            },
            _ => return Err(CliError::UnknownCommand(word)),
        };

        if let Some(extra) = words.next() {
            return Err(CliError::unexpected(command.name(), extra));
        }
        Ok(Some(command))
    }

    /// Returns the command word.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Begin => "begin",
            Self::Commit => "commit",
            Self::Rollback => "rollback",
            Self::Set { .. } => "set",
            Self::Get { .. } => "get",
            Self::Unset { .. } => "unset",
            Self::NumEqualTo { .. } => "numequalto",
            Self::End => "end",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Set { name, value } => write!(f, "set {name} {value}"),
            Self::Get { name } | Self::Unset { name } => write!(f, "{} {name}", self.name()),
            Self::NumEqualTo { value } => write!(f, "numequalto {value}"),
            _ => f.write_str(self.name()),
        }
    }
}

fn required<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
    argument: &'static str,
) -> CliResult<String> {
    words
        .next()
        .map(str::to_owned)
        .ok_or_else(|| CliError::missing(command, argument))
}
