//! CLI module for libman
//!
//! Thin dispatch into the store layer:
//! - book add | list | update | delete
//! - member add | list | update | delete
//! - borrow / return / history
//! - report

mod args;
mod commands;
mod errors;
mod io;

pub use args::{BookCommand, Cli, Command, MemberCommand};
pub use commands::{run, run_command};
pub use errors::{CliError, CliResult};
