//! Type declaration manifests
//!
//! A manifest lists type declarations in order, parents first, in TOML, JSON
//! or YAML. Loading one yields a ready [`TypeRegistry`].
//!
//! ```toml
//! [[types]]
//! name = "Shape"
//! interface = true
//!
//! [[types.members]]
//! name = "area"
//! kind = "method"
//! params = [{ name = "self" }]
//! returns = "float"
//! ```

use crate::errors::{Error, Result};
use crate::reflect::{TypeDecl, TypeRegistry};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Toml,
    Json,
    Yaml,
}

impl ManifestFormat {
    /// Pick a format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub types: Vec<TypeDecl>,
}

impl Manifest {
    pub fn parse(contents: &str, format: ManifestFormat) -> Result<Self> {
        let manifest: Manifest = match format {
            ManifestFormat::Toml => toml::from_str(contents)?,
            ManifestFormat::Json => serde_json::from_str(contents)?,
            ManifestFormat::Yaml => serde_yaml::from_str(contents)?,
        };
        Ok(manifest)
    }

    /// Register every declaration in order
    pub fn into_registry(self) -> Result<TypeRegistry> {
        let mut registry = TypeRegistry::new();
        for decl in self.types {
            let name = decl.name.clone();
            registry
                .register(decl)
                .map_err(|e| e.with_context(format!("Registering `{}`", name)))?;
        }
        Ok(registry)
    }
}

/// Read, parse and register a manifest file
pub fn load_manifest(path: &Path) -> Result<TypeRegistry> {
    let format = ManifestFormat::from_path(path).ok_or_else(|| {
        Error::manifest(path, "unsupported extension (expected toml, json, yaml or yml)")
    })?;
    let contents = fs::read_to_string(path)?;

    let manifest = Manifest::parse(&contents, format)
        .map_err(|e| Error::manifest(path, e.to_string()))?;
    let registry = manifest
        .into_registry()
        .map_err(|e| Error::manifest(path, e.to_string()))?;

    tracing::debug!(path = %path.display(), types = registry.len(), "loaded manifest");
    Ok(registry)
}
