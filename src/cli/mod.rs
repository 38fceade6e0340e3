//! CLI module for cluedex
//!
//! Provides the command-line interface:
//! - identify: interactive deduction session
//! - filter: one-shot match against explicit marks
//! - clues: print the ordered clue list
//! - validate: strict catalog check

mod args;
mod commands;
mod errors;
mod io;

pub use args::{CatalogArgs, Cli, Command};
pub use commands::run;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{parse_command, SessionCommand};
