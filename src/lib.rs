//! # fixql — fixture SQL rewriter
//!
//! > **Pseudo-SQL in, runnable SQL out.**
//!
//! fixql rewrites generated fixture files into executable `CREATE TABLE`
//! and `INSERT` statements, in place.
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use fixql::prelude::*;
//! use std::path::Path;
//!
//! // Rewrites <root>/50/{STUDENT,STAFF,COURSE,SECTION,ENROLL}.sql in place.
//! let summary = fixql::run(
//!     &RewriteConfig::default(),
//!     Path::new("fake_data"),
//!     &RewriteOptions::default(),
//! )?;
//! println!("{} files, {} lines", summary.files(), summary.total_lines());
//! ```
//!
//! ## Line disposition
//!
//! | Fixture line | Becomes                            |
//! |--------------|------------------------------------|
//! | 1            | dropped (generator comment)        |
//! | 2            | `CREATE TABLE …` (schema marker)   |
//! | 3 onward     | `INSERT INTO …` (one per data row) |
//! | empty        | skipped                            |

pub mod config;
pub mod error;
pub mod rewriter;
pub mod schema;
pub mod sqlgen;

pub mod prelude {
    pub use crate::config::{FileConfig, RewriteConfig};
    pub use crate::error::*;
    pub use crate::rewriter::{
        run, rewrite_file, rewrite_lines, BatchSummary, RewriteOptions, RewriteOutcome,
    };
    pub use crate::schema::{Column, ColumnType, SchemaCatalog, TableSchema};
    pub use crate::sqlgen::{build_create_table, build_insert, coerce_leading_id};
}

/// Rewrite every fixture file named by the configuration under `root`.
///
/// # Example
///
/// ```no_run
/// use fixql::prelude::*;
/// use std::path::Path;
///
/// let summary = fixql::run(
///     &RewriteConfig::default(),
///     Path::new("fake_data"),
///     &RewriteOptions::default(),
/// )?;
/// println!("rewrote {} files", summary.files());
/// # Ok::<(), fixql::error::FixqlError>(())
/// ```
pub fn run(
    config: &config::RewriteConfig,
    root: &std::path::Path,
    options: &rewriter::RewriteOptions,
) -> error::FixqlResult<rewriter::BatchSummary> {
    rewriter::run(config, root, options)
}
