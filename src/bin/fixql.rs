//! fixql — rewrite pseudo-SQL fixture files into runnable SQL.
//!
//! # Usage
//!
//! ```bash
//! # Rewrite dataset 50 under ./fake_data
//! fixql fake_data
//!
//! # Several datasets, previewing without writing
//! fixql fake_data --datasets 50,100 --dry-run
//!
//! # Machine-readable report
//! fixql fake_data --format json
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use colored::*;
use fixql::prelude::*;

#[derive(Parser)]
#[command(name = "fixql")]
#[command(version)]
#[command(about = "Rewrite pseudo-SQL fixture files into runnable SQL", long_about = None)]
#[command(after_help = "EXAMPLES:
    fixql fake_data
    fixql fake_data --datasets 50,100 --dry-run
    fixql --config fixtures.toml --format json")]
struct Cli {
    /// Root directory holding the dataset folders
    #[arg(env = "FIXQL_ROOT")]
    root: Option<PathBuf>,

    /// Dataset folders to rewrite, in order
    #[arg(short, long, value_delimiter = ',')]
    datasets: Vec<String>,

    /// Configuration file
    #[arg(short, long, default_value = "fixql.toml")]
    config: PathBuf,

    /// Generate everything, write nothing back
    #[arg(long)]
    dry_run: bool,

    /// Print each generated statement
    #[arg(short, long)]
    verbose: bool,

    /// Output format for the final summary
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();

    match execute(&cli) {
        Ok(summary) => report(&summary, cli.format),
        Err(e) => {
            // Diagnostics go to stdout so batch logs capture them inline.
            println!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn execute(cli: &Cli) -> anyhow::Result<BatchSummary> {
    let file = FileConfig::load(&cli.config)?;

    let root = cli.root.clone().or(file.root).ok_or_else(|| {
        anyhow::anyhow!("no root directory given (pass one as an argument or set `root` in fixql.toml)")
    })?;

    let config = RewriteConfig::default().resolve_datasets(&cli.datasets, file.datasets);

    let options = RewriteOptions {
        dry_run: cli.dry_run,
        verbose: cli.verbose,
        quiet: matches!(cli.format, OutputFormat::Json),
    };

    let summary = fixql::run(&config, &root, &options)?;
    Ok(summary)
}

fn report(summary: &BatchSummary, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(summary).unwrap_or_default());
        }
        OutputFormat::Text => {
            println!();
            if summary.dry_run {
                println!(
                    "{} {} query files, {} lines would be updated",
                    "Dry run:".yellow().bold(),
                    summary.files(),
                    summary.total_lines()
                );
                println!("{}", "No changes made.".yellow());
            } else {
                println!(
                    "{} Successfully updated {} query files, {} lines updated",
                    "✓".green(),
                    summary.files(),
                    summary.total_lines()
                );
            }
        }
    }
}
