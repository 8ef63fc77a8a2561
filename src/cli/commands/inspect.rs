//! Equality, parentage and construction command handlers

use crate::conformance::{ConformanceEngine, MatchOptions};
use crate::interface::instantiate;
use crate::manifest::load_manifest;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

/// Handle the equal command
pub fn handle_equal_command(
    manifest: &Path,
    first: &str,
    second: &str,
    options: MatchOptions,
) -> Result<bool> {
    let registry = load_manifest(manifest)?;
    let a = registry.resolve(first)?;
    let b = registry.resolve(second)?;

    let equal = ConformanceEngine::with_options(&registry, options).signatures_equal(a, b);
    if equal {
        println!(
            "{} and {} have {} signatures",
            first.bold(),
            second.bold(),
            "identical".green().bold()
        );
    } else {
        println!(
            "{} and {} have {} signatures",
            first.bold(),
            second.bold(),
            "different".red().bold()
        );
    }
    Ok(equal)
}

/// Handle the parents command
pub fn handle_parents_command(manifest: &Path, candidate: &str, parent: &str) -> Result<bool> {
    let registry = load_manifest(manifest)?;
    let candidate_id = registry.resolve(candidate)?;
    let parent_id = registry.resolve(parent)?;

    let declared = ConformanceEngine::new(&registry).declares_parent(candidate_id, parent_id);
    let verdict = if declared {
        "declares".green().bold()
    } else {
        "does not declare".red().bold()
    };
    println!(
        "{} {} {} as an immediate parent",
        candidate.bold(),
        verdict,
        parent.bold()
    );
    Ok(declared)
}

/// Handle the construct command
pub fn handle_construct_command(manifest: &Path, type_name: &str) -> Result<bool> {
    let registry = load_manifest(manifest)?;
    let id = registry.resolve(type_name)?;

    match instantiate(&registry, id) {
        Ok(_) => {
            println!("{} {}", type_name.bold(), "constructed".green().bold());
            Ok(true)
        }
        Err(e) if e.is_construction_denied() => {
            println!("{}", e.to_string().red().bold());
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}
