//! File rewriting and the sequential batch driver.
//!
//! A fixture file is rewritten line by line: the leading comment is
//! dropped, the schema marker on line 2 is replaced by a `CREATE TABLE`
//! statement, and every non-empty line after that becomes an `INSERT`.
//! The batch walks `<root>/<dataset>/<TABLE>.sql` in declaration order and
//! stops at the first failure, leaving later files untouched.

use std::fs;
use std::path::{Path, PathBuf};

use colored::*;
use serde::Serialize;

use crate::config::RewriteConfig;
use crate::error::{FixqlError, FixqlResult};
use crate::schema::{SchemaCatalog, TableSchema};
use crate::sqlgen::{build_create_table, build_insert};

/// Behavior switches for a rewrite pass.
#[derive(Debug, Clone, Default)]
pub struct RewriteOptions {
    /// Generate everything, write nothing back.
    pub dry_run: bool,
    /// Print each generated statement under the per-file line.
    pub verbose: bool,
    /// Suppress per-file console output (used by the JSON report mode).
    pub quiet: bool,
}

/// What happened to one fixture file.
#[derive(Debug, Clone, Serialize)]
pub struct RewriteOutcome {
    /// Path of the rewritten file.
    pub path: PathBuf,
    /// Number of statement lines in the rewritten content.
    pub lines_written: usize,
}

/// Accumulated result of a full batch.
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    pub dry_run: bool,
    pub outcomes: Vec<RewriteOutcome>,
}

impl BatchSummary {
    /// Number of files rewritten.
    pub fn files(&self) -> usize {
        self.outcomes.len()
    }

    /// Total statement lines across all rewritten files.
    pub fn total_lines(&self) -> usize {
        self.outcomes.iter().map(|o| o.lines_written).sum()
    }
}

/// Rewrite the lines of one fixture file, without touching the filesystem.
///
/// Line 1 is a comment and contributes nothing. Line 2 is the schema
/// marker and is replaced wholesale; its content is never inspected, so
/// even an empty marker line produces the `CREATE TABLE` statement. Later
/// lines become `INSERT` statements, except exactly-empty lines, which are
/// skipped. Whitespace-only lines are data rows and fail the `VALUES`
/// check like any other malformed row.
pub fn rewrite_lines(schema: &TableSchema, content: &str) -> FixqlResult<Vec<String>> {
    let mut rewritten = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        match idx {
            0 => {}
            1 => rewritten.push(build_create_table(schema)),
            _ if line.is_empty() => {}
            _ => rewritten.push(build_insert(line, schema)?),
        }
    }
    Ok(rewritten)
}

/// Rewrite one fixture file in place.
///
/// The file stem names the table. The file must already exist; its entire
/// content is replaced by the generated statements joined with `\n`, with
/// no trailing newline. Prints one confirmation line per file unless
/// `options.quiet` is set.
///
/// # Errors
///
/// [`FixqlError::MissingFile`] when the file is not on disk, checked
/// before anything is read; [`FixqlError::MalformedQuery`] when a data row
/// lacks `VALUES`. Read and write failures propagate as
/// [`FixqlError::Io`].
///
/// # Panics
///
/// Panics when the path has no UTF-8 file stem or the stem names a table
/// absent from the catalog. Those are contract violations by the caller,
/// not batch errors.
pub fn rewrite_file(
    catalog: &SchemaCatalog,
    path: &Path,
    options: &RewriteOptions,
) -> FixqlResult<RewriteOutcome> {
    if !path.exists() {
        return Err(FixqlError::missing_file(path));
    }
    let content = fs::read_to_string(path)?;

    let Some(table) = path.file_stem().and_then(|s| s.to_str()) else {
        panic!("fixture path has no file stem: {}", path.display());
    };
    let Some(schema) = catalog.get(table) else {
        panic!("no schema registered for table {table}");
    };

    let rewritten = rewrite_lines(schema, &content)?;
    if !options.dry_run {
        fs::write(path, rewritten.join("\n"))?;
    }

    if !options.quiet {
        if options.dry_run {
            println!(
                "{} {} ({} lines)",
                "→ Would rewrite".yellow(),
                path.display(),
                rewritten.len()
            );
        } else {
            println!(
                "{} {} ({} lines)",
                "✓ Rewrote".green(),
                path.display(),
                rewritten.len()
            );
        }
        if options.verbose {
            for statement in &rewritten {
                println!("    {}", statement.dimmed());
            }
        }
    }

    Ok(RewriteOutcome {
        path: path.to_path_buf(),
        lines_written: rewritten.len(),
    })
}

/// Rewrite every `<root>/<dataset>/<TABLE>.sql` named by the
/// configuration, datasets outermost, tables in catalog order.
///
/// Purely sequential: the first failure aborts the batch, leaving earlier
/// files in their rewritten state and later files untouched. There is no
/// rollback.
pub fn run(
    config: &RewriteConfig,
    root: &Path,
    options: &RewriteOptions,
) -> FixqlResult<BatchSummary> {
    let mut outcomes = Vec::with_capacity(config.datasets.len() * config.catalog.len());
    for dataset in &config.datasets {
        let folder = root.join(dataset);
        for table in config.catalog.tables() {
            let path = folder.join(format!("{}.sql", table.name));
            outcomes.push(rewrite_file(&config.catalog, &path, options)?);
        }
    }
    Ok(BatchSummary {
        dry_run: options.dry_run,
        outcomes,
    })
}
