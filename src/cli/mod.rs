//! CLI module for interfaced
//!
//! This module provides the command-line interface, including:
//! - Argument parsing (`args`)
//! - Command handlers (`commands`)
//! - Runtime setup (`setup`)

pub mod args;
pub mod commands;
pub mod setup;

pub use args::{Cli, Commands, OutputFormat};
pub use commands::run;
pub use setup::init_logging;

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    args::parse_args()
}
