//! Command handlers for CLI subcommands
//!
//! Every handler returns `Ok(true)` when the answer is "yes", `Ok(false)`
//! when it is "no", and `Err` only when the question could not be asked
//! (unreadable manifest, unknown type name, bad config).

mod check;
mod inspect;

pub use check::{handle_check_command, handle_matrix_command};
pub use inspect::{handle_construct_command, handle_equal_command, handle_parents_command};

use super::args::{Cli, Commands};
use crate::config::load_config;
use anyhow::Result;

/// Dispatch a parsed command line
pub fn run(cli: Cli) -> Result<bool> {
    let config = load_config(cli.config.as_deref())?;
    let options = config.match_options();
    tracing::debug!(?options, "matching options");

    match cli.command {
        Commands::Check {
            manifest,
            candidate,
            interface,
            format,
        } => handle_check_command(&manifest, &candidate, &interface, format, options),
        Commands::Equal {
            manifest,
            first,
            second,
        } => handle_equal_command(&manifest, &first, &second, options),
        Commands::Parents {
            manifest,
            candidate,
            parent,
        } => handle_parents_command(&manifest, &candidate, &parent),
        Commands::Matrix { manifest, format } => handle_matrix_command(&manifest, format, options),
        Commands::Construct {
            manifest,
            type_name,
        } => handle_construct_command(&manifest, &type_name),
    }
}
