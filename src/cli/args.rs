//! Command-line argument definitions

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "interfaced")]
#[command(about = "Structural interface conformance checks over declared type shapes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to the nearest .interfaced.toml)
    #[arg(long, global = true, env = "INTERFACED_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check whether a type conforms to an interface (exit 1 if not)
    Check {
        /// Manifest declaring the types
        manifest: PathBuf,

        /// Candidate type name
        candidate: String,

        /// Interface type name
        interface: String,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Compare two types for exact signature equality (exit 1 if different)
    Equal {
        manifest: PathBuf,
        first: String,
        second: String,
    },

    /// Check whether a type names another as an immediate parent (exit 1 if not)
    Parents {
        manifest: PathBuf,
        candidate: String,
        parent: String,
    },

    /// Check every type against every declared interface
    Matrix {
        manifest: PathBuf,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Try to construct a type (exit 1 if the interface guard denies it)
    Construct {
        manifest: PathBuf,

        #[arg(value_name = "TYPE")]
        type_name: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    Cli::parse()
}
