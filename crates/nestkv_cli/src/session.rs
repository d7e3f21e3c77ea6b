//! Interpreter session.

use crate::command::Command;
use crate::error::CliResult;
use nestkv_core::{CoreError, CoreResult, Store};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Token printed for a key with no value.
pub const NULL_TOKEN: &str = "NULL";

/// Message printed when commit or rollback finds no open transaction.
pub const NO_TRANSACTION: &str = "NO TRANSACTION";

const BANNER: &str = "Welcome to the in-memory DB!";
const FAREWELL: &str = "Goodbye!";

/// Whether the session should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Stop reading.
    Exit,
}

/// A command interpreter bound to one store and one output sink.
pub struct Session<W: Write> {
    store: Store,
    out: W,
    prompt: Option<String>,
    quiet: bool,
}

impl<W: Write> Session<W> {
    /// Creates a session over `store` that writes results to `out`.
    pub fn new(store: Store, out: W) -> Self {
        Self {
            store,
            out,
            prompt: None,
            quiet: false,
        }
    }

    /// Shows `prompt` before each line is read.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Suppresses the banner and farewell messages.
    #[must_use]
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Returns the store.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Consumes the session, returning the store and output sink.
    pub fn into_parts(self) -> (Store, W) {
        (self.store, self.out)
    }

    /// Reads and executes lines from `input` until `end` or end of input.
    pub fn run<R: BufRead>(&mut self, input: R) -> CliResult<()> {
        if !self.quiet {
            writeln!(self.out, "{BANNER}")?;
        }
        info!("session started");

        let mut lines = input.lines();
        loop {
            if let Some(prompt) = &self.prompt {
                write!(self.out, "{prompt}")?;
                self.out.flush()?;
            }

            let Some(line) = lines.next() else {
                if self.prompt.is_some() {
                    writeln!(self.out)?;
                }
                break;
            };
            if self.handle_line(&line?)? == Flow::Exit {
                break;
            }
        }

        if !self.quiet {
            writeln!(self.out, "{FAREWELL}")?;
        }
        self.out.flush()?;
        info!(depth = self.store.depth(), "session finished");
        Ok(())
    }

    /// Parses and executes one line.
    ///
    /// Parse errors are printed and do not stop the session.
    pub fn handle_line(&mut self, line: &str) -> CliResult<Flow> {
        match Command::parse(line) {
            Ok(Some(command)) => self.execute(command),
            Ok(None) => Ok(Flow::Continue),
            Err(err) if err.is_parse_error() => {
                debug!(line, error = %err, "rejected input");
                writeln!(self.out, "{err}")?;
                Ok(Flow::Continue)
            }
            Err(err) => Err(err),
        }
    }

    /// Executes one command against the store.
    pub fn execute(&mut self, command: Command) -> CliResult<Flow> {
        debug!(%command, "execute");
        match command {
            Command::Begin => {
                if let Err(err) = self.store.begin() {
                    warn!(error = %err, "begin refused");
                    writeln!(self.out, "{err}")?;
                }
            }
            Command::Commit => {
                let result = self.store.commit();
                self.report(result)?;
            }
            Command::Rollback => {
                let result = self.store.rollback();
                self.report(result)?;
            }
            Command::Set { name, value } => self.store.set(&name, value),
            Command::Get { name } => match self.store.get(&name) {
                Some(value) => writeln!(self.out, "{value}")?,
                None => writeln!(self.out, "{NULL_TOKEN}")?,
            },
            Command::Unset { name } => {
                self.store.unset(&name);
            }
            Command::NumEqualTo { value } => {
                writeln!(self.out, "{}", self.store.num_equal_to(&value))?;
            }
            Command::End => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn report(&mut self, result: CoreResult<()>) -> CliResult<()> {
        match result {
            Ok(()) => Ok(()),
            Err(CoreError::NoActiveTransaction) => {
                writeln!(self.out, "{NO_TRANSACTION}")?;
                Ok(())
            }
            Err(err) => {
                writeln!(self.out, "{err}")?;
                Ok(())
            }
        }
    }
}
