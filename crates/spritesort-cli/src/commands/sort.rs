//! Sort command implementation
//!
//! Loads a sprite collection, puts it into grid scan order, and emits it as
//! JSON to standard output or a file.

use anyhow::{Context, Result};
use colored::Colorize;
use spritesort_core::{read_collection, write_collection, SortSummary, SpriteCollection};
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use super::json_output::report_warnings;
use crate::config::{SortConfig, SortSettings};

/// Run the sort command
///
/// # Arguments
/// * `config_path` - Optional JSON/YAML config file
/// * `overrides` - Settings given on the command line
/// * `pretty` - Whether to pretty-print the output JSON
/// * `quiet` - Suppress status lines on stderr
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    config_path: Option<&str>,
    overrides: SortSettings,
    pretty: bool,
    quiet: bool,
) -> Result<ExitCode> {
    run_with_writer(config_path, overrides, pretty, quiet, &mut io::stdout().lock())
}

/// Run the sort command, sending JSON that has no output path to `out`.
pub fn run_with_writer<W: Write>(
    config_path: Option<&str>,
    overrides: SortSettings,
    pretty: bool,
    quiet: bool,
    out: &mut W,
) -> Result<ExitCode> {
    let config = SortConfig::resolve(config_path.map(Path::new), overrides)?;

    if !quiet {
        eprintln!(
            "{} {}",
            "Sorting:".cyan().bold(),
            config.input_path.display()
        );
        eprintln!("{} {}", "Grid:".dimmed(), config.grid);
    }

    let (collection, summary) = sort_file(&config)?;

    match &config.output_path {
        Some(output_path) => {
            write_collection(output_path, &collection, pretty)
                .with_context(|| format!("Failed to write {}", output_path.display()))?;
        }
        None => {
            let json = if pretty {
                collection.to_json_pretty()?
            } else {
                collection.to_json()?
            };
            writeln!(out, "{}", json)
                .and_then(|()| out.flush())
                .context("Failed to write to stdout")?;
        }
    }

    if !quiet {
        print_summary(&config, &collection, &summary);
    }

    Ok(ExitCode::SUCCESS)
}

/// Loads and sorts the configured input without writing anything.
pub fn sort_file(config: &SortConfig) -> Result<(SpriteCollection, SortSummary)> {
    let mut collection = read_collection(&config.input_path)
        .with_context(|| format!("Failed to load {}", config.input_path.display()))?;
    let summary = collection.sort_grid(config.grid);
    Ok((collection, summary))
}

fn print_summary(config: &SortConfig, collection: &SpriteCollection, summary: &SortSummary) {
    let report = spritesort_core::inspect_order(collection.records(), config.grid);
    for warning in report_warnings(&report) {
        eprintln!("  {} {}", "!".yellow(), warning.message);
    }

    let destination = config
        .output_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "stdout".to_string());
    eprintln!(
        "{} Sorted {} record(s) in {} row(s) to {}",
        "SUCCESS".green().bold(),
        summary.record_count,
        summary.windows_sorted,
        destination
    );
}
