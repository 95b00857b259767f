//! Command-line interface: clap definitions and command handlers.

mod commands;
pub mod handlers;

pub use commands::{Cli, Commands, FormatArg, IdModeArg};
