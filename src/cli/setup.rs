//! Runtime setup for the CLI
//!
//! Installs the tracing subscriber. Library code only emits events; the
//! binary decides where they go.

use tracing_subscriber::EnvFilter;

/// Default filter directive for a `-v` count
pub fn verbosity_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Log to stderr; `RUST_LOG` overrides the verbosity flag
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_directive(verbosity)));

    // A subscriber may already be installed (tests); keep it
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
