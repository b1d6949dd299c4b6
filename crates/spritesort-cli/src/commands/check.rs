//! Check command implementation
//!
//! Reports whether a sprite collection is already in grid scan order, that
//! is, whether sorting it again would change nothing.

use anyhow::{Context, Result};
use colored::Colorize;
use spritesort_core::{inspect_order, read_collection, OrderReport};
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{error_codes, report_warnings, CheckOutput, JsonError};
use crate::config::{SortConfig, SortSettings};

/// Maximum number of individual problems listed in human output.
const MAX_LISTED: usize = 10;

/// Run the check command
///
/// # Arguments
/// * `config_path` - Optional JSON/YAML config file
/// * `overrides` - Settings given on the command line
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 if already in grid order, 1 otherwise
pub fn run(
    config_path: Option<&str>,
    overrides: SortSettings,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(config_path, overrides)
    } else {
        run_human(config_path, overrides)
    }
}

fn run_human(config_path: Option<&str>, overrides: SortSettings) -> Result<ExitCode> {
    let config = SortConfig::resolve(config_path.map(Path::new), overrides)?;

    println!(
        "{} {}",
        "Checking:".cyan().bold(),
        config.input_path.display()
    );
    println!("{} {}", "Grid:".dimmed(), config.grid);

    let collection = read_collection(&config.input_path)
        .with_context(|| format!("Failed to load {}", config.input_path.display()))?;
    let report = inspect_order(collection.records(), config.grid);

    print_report(&report);

    if report.is_fixed_point {
        println!(
            "{} {} record(s) already in grid order",
            "SUCCESS".green().bold(),
            report.record_count
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "{} {} row inversion(s), {} window violation(s)",
            "FAILED".red().bold(),
            report.row_inversions.len(),
            report.violations.len()
        );
        Ok(ExitCode::from(1))
    }
}

fn run_json(config_path: Option<&str>, overrides: SortSettings) -> Result<ExitCode> {
    let output = match SortConfig::resolve(config_path.map(Path::new), overrides) {
        Ok(config) => {
            let input = config.input_path.display().to_string();
            match read_collection(&config.input_path) {
                Ok(collection) => CheckOutput::from_report(
                    input,
                    inspect_order(collection.records(), config.grid),
                ),
                Err(e) => CheckOutput::failure(
                    input.clone(),
                    vec![JsonError::from(&e).with_file(input)],
                ),
            }
        }
        Err(e) => {
            let input = config_path.unwrap_or_default();
            CheckOutput::failure(
                input,
                vec![JsonError::new(error_codes::CONFIG, format!("{:#}", e))],
            )
        }
    };

    let json = serde_json::to_string_pretty(&output).context("Failed to serialize check output")?;
    println!("{}", json);

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn print_report(report: &OrderReport) {
    println!(
        "{} {} record(s), {} window(s)",
        "Records:".dimmed(),
        report.record_count,
        report.window_count
    );

    for warning in report_warnings(report) {
        println!("  {} {}", "!".yellow(), warning.message);
    }

    for inversion in report.row_inversions.iter().take(MAX_LISTED) {
        println!(
            "  {} position {}: y {} follows y {}",
            "x".red(),
            inversion.position,
            inversion.y,
            inversion.previous_y
        );
    }
    print_remaining(report.row_inversions.len());

    for violation in report.violations.iter().take(MAX_LISTED) {
        println!(
            "  {} row {} position {}: x {} follows x {}",
            "x".red(),
            violation.window,
            violation.position,
            violation.x,
            violation.previous_x
        );
    }
    print_remaining(report.violations.len());
}

fn print_remaining(total: usize) {
    if total > MAX_LISTED {
        println!("  {} and {} more", "...".dimmed(), total - MAX_LISTED);
    }
}
