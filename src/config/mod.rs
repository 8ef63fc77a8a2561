//! Configuration for interfaced
//!
//! Read from `.interfaced.toml`, either given explicitly or found by walking
//! up from the working directory:
//!
//! ```toml
//! [matching]
//! parameter_names = "sensitive"   # or "insensitive"
//! defaults = "trust-parent"       # or "verify-reachable"
//! ```

mod loader;

pub use loader::{directory_ancestors, discover_config, load_config, parse_config};

use crate::conformance::{DefaultPolicy, MatchOptions};
use crate::signature::ParameterNames;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".interfaced.toml";

/// Root configuration structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InterfacedConfig {
    #[serde(default)]
    pub matching: MatchingConfig,
}

/// How member signatures are compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchingConfig {
    #[serde(default)]
    pub parameter_names: ParameterNames,
    #[serde(default)]
    pub defaults: DefaultPolicy,
}

impl InterfacedConfig {
    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            parameter_names: self.matching.parameter_names,
            defaults: self.matching.defaults,
        }
    }
}
