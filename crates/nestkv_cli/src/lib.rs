//! NestKV command interpreter.
//!
//! Reads line-oriented commands and applies them to an explicitly owned
//! [`Store`](nestkv_core::Store).
//!
//! # Commands
//!
//! - `set NAME VALUE` - bind a key
//! - `get NAME` - print the value, or `NULL`
//! - `unset NAME` - remove a binding
//! - `numequalto VALUE` - print how many keys hold a value
//! - `begin` / `rollback` / `commit` - nested transactions
//! - `end` - leave the interpreter

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod command;
mod error;
mod session;

pub use command::Command;
pub use error::{CliError, CliResult};
pub use session::{Flow, Session, NO_TRANSACTION, NULL_TOKEN};
