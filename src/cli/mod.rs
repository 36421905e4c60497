//! CLI layer for promptbox.
//!
//! Provides the command-line interface using clap, with one subcommand
//! per app plus prompt-template scaffolding.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, Commands};
