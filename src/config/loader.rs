use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::{InterfacedConfig, CONFIG_FILE_NAME};
use crate::errors::{Error, Result};

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse config from a TOML string
pub fn parse_config(contents: &str) -> Result<InterfacedConfig> {
    toml::from_str::<InterfacedConfig>(contents).map_err(|e| {
        Error::Configuration(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))
    })
}

/// Try loading a discovered config file; missing or malformed files yield `None`
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<InterfacedConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            tracing::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Only log actual errors, not "file not found"
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        tracing::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Directory ancestors up to a depth limit, starting with `start`
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file
pub fn discover_config(start: PathBuf) -> InterfacedConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            tracing::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            InterfacedConfig::default()
        })
}

/// Load an explicit config file, or discover one from the working directory.
///
/// An explicit path must exist and parse; discovery falls back to defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<InterfacedConfig> {
    if let Some(path) = explicit {
        let contents = read_config_file(path).map_err(|e| {
            Error::Configuration(format!("Cannot read {}: {}", path.display(), e))
        })?;
        return parse_config(&contents);
    }

    match std::env::current_dir() {
        Ok(dir) => Ok(discover_config(dir)),
        Err(e) => {
            tracing::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            Ok(InterfacedConfig::default())
        }
    }
}
