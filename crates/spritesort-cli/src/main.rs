//! SpriteSort CLI - Command-line interface for ordering sprite sheet records
//!
//! This binary re-orders a JSON array of sprite records into row-major scan
//! order for a fixed-size grid, and checks whether a file is already ordered.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use spritesort_cli::commands;
use spritesort_cli::config::SortSettings;

/// SpriteSort - Grid scan-order sorting for sprite sheets
#[derive(Parser)]
#[command(name = "spritesort")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command that reads a sprite collection.
#[derive(Args, Debug)]
struct GridArgs {
    /// Path to the input JSON array of sprite records (default: resources/characters2.json)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Grid width in columns (default: 12)
    #[arg(short = 'W', long)]
    width: Option<usize>,

    /// Grid height in rows (default: 8)
    #[arg(short = 'H', long)]
    height: Option<usize>,

    /// Config file (JSON or YAML) with inputPath, outputPath, width, height
    #[arg(short, long)]
    config: Option<String>,
}

impl GridArgs {
    fn into_settings(self, output: Option<PathBuf>) -> (Option<String>, SortSettings) {
        (
            self.config,
            SortSettings {
                input_path: self.input,
                output_path: output,
                width: self.width,
                height: self.height,
            },
        )
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Sort sprite records into grid scan order and emit JSON
    Sort {
        #[command(flatten)]
        grid: GridArgs,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the output JSON
        #[arg(long)]
        pretty: bool,

        /// Suppress status lines on stderr
        #[arg(short, long)]
        quiet: bool,
    },

    /// Check whether sprite records are already in grid scan order
    Check {
        #[command(flatten)]
        grid: GridArgs,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Sort {
            grid,
            output,
            pretty,
            quiet,
        } => {
            let (config, settings) = grid.into_settings(output);
            commands::sort::run(config.as_deref(), settings, pretty, quiet)
        }
        Commands::Check { grid, json } => {
            let (config, settings) = grid.into_settings(None);
            commands::check::run(config.as_deref(), settings, json)
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
