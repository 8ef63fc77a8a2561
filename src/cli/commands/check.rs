//! Check and matrix command handlers

use crate::cli::args::OutputFormat;
use crate::conformance::{ConformanceEngine, ConformanceReport, MatchOptions};
use crate::manifest::load_manifest;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

/// Handle the check command
pub fn handle_check_command(
    manifest: &Path,
    candidate: &str,
    interface: &str,
    format: OutputFormat,
    options: MatchOptions,
) -> Result<bool> {
    let registry = load_manifest(manifest)?;
    let candidate = registry.resolve(candidate)?;
    let interface = registry.resolve(interface)?;

    let engine = ConformanceEngine::with_options(&registry, options);
    let report = engine.check(candidate, interface);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print_report_terminal(&report),
    }
    Ok(report.conforms)
}

/// Handle the matrix command: every type against every declared interface
pub fn handle_matrix_command(
    manifest: &Path,
    format: OutputFormat,
    options: MatchOptions,
) -> Result<bool> {
    let registry = load_manifest(manifest)?;
    let engine = ConformanceEngine::with_options(&registry, options);

    let reports: Vec<ConformanceReport> = registry
        .ids()
        .filter(|&id| registry.declares_interface(id))
        .flat_map(|interface| {
            registry
                .ids()
                .filter(move |&candidate| candidate != interface)
                .map(move |candidate| engine.check(candidate, interface))
        })
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        OutputFormat::Text => print_matrix_terminal(&reports),
    }
    Ok(true)
}

fn verdict(conforms: bool) -> colored::ColoredString {
    if conforms {
        "conforms to".green().bold()
    } else {
        "does not conform to".red().bold()
    }
}

fn print_report_terminal(report: &ConformanceReport) {
    println!(
        "{} {} {}",
        report.candidate.bold(),
        verdict(report.conforms),
        report.interface.bold()
    );
    println!("  {}", format!("via {}", report.branch).dimmed());
    if !report.exempted.is_empty() {
        println!(
            "  {}",
            format!("inherited defaults: {}", report.exempted.join(", ")).dimmed()
        );
    }
    for mismatch in &report.mismatches {
        println!("  {} {}", "-".red(), mismatch);
    }
}

fn print_matrix_terminal(reports: &[ConformanceReport]) {
    let width = reports
        .iter()
        .map(|report| report.candidate.len())
        .max()
        .unwrap_or(0);

    let mut current: Option<&str> = None;
    for report in reports {
        if current != Some(report.interface.as_str()) {
            println!("{}", report.interface.bold().underline());
            current = Some(report.interface.as_str());
        }
        println!(
            "  {:<width$}  {} {}",
            report.candidate,
            verdict(report.conforms),
            format!("({})", report.branch).dimmed(),
            width = width
        );
    }
}
