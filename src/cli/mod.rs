//! CLI module for memberd
//!
//! Provides the command-line interface:
//! - serve: boot the HTTP service and enter the serving loop

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, serve};
pub use errors::{CliError, CliResult};
