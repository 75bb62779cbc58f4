//! # Inline SQL Lint
//!
//! Finds defects in SQL embedded in source files.
//!
//! `inline-sql-lint` scans source files for string literals that look like
//! SQL (by default Go raw-string literals), parses each candidate as a SQL
//! statement and reports problems as positioned diagnostics.
//!
//! # Checks
//!
//! | Kind | Severity | Description |
//! |------|----------|-------------|
//! | syntax | ERROR | The SQL parser rejected the fragment |
//! | insert-values-mismatch | WARN | INSERT column list and VALUES row disagree in length |
//! | missing-parameter | ERROR | Gap in the `$1..$N` positional-parameter ordering |
//!
//! Per fragment at most one diagnostic is reported: the checks run as a
//! fixed-order pipeline that stops at the first hit.
//!
//! # Quick Start
//!
//! ```bash
//! # Lint the inline SQL of one or more Go files
//! inline-sql-lint check queries.go storage.go
//!
//! # Stream a document from stdin
//! cat queries.go | inline-sql-lint check -
//!
//! # Custom extraction pattern and dialect
//! inline-sql-lint check --regex 'sql\("([^"]*)"\)' --dialect sqlite app.py
//!
//! # Machine-readable output
//! inline-sql-lint check -f json queries.go
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded from (in order of precedence):
//!
//! 1. Command-line arguments
//! 2. Environment variables (`INLINE_SQL_REGEX`, `INLINE_SQL_DIALECT`)
//! 3. `.inline-sql-lint.toml` in current directory
//! 4. `~/.config/inline-sql-lint/config.toml`
//!
//! ```toml
//! [scan]
//! sql_regex = "`([^`]*)`"
//! dialect = "postgresql"
//! ```
//!
//! # Exit Codes
//!
//! The process exit code reflects the highest severity diagnostic found:
//!
//! - `0` - No problems
//! - `1` - Warnings found
//! - `2` - Errors found
//!
//! # Modules
//!
//! - [`checks`] - Semantic check pipeline over parsed statements
//! - [`fragment`] - Embedded-SQL extraction and document positions
//! - [`diagnostics`] - Document scanning and diagnostic mapping
//! - [`query`] - SQL parsing boundary and dialect selection
//! - [`cache`] - Version-keyed diagnostic cache
//! - [`config`] - Configuration loading
//! - [`output`] - Result formatting for various output formats
//! - [`error`] - Error constructors

mod cache;
mod checks;
mod cli;
mod config;
mod diagnostics;
mod error;
mod fragment;
mod output;
mod query;

use std::{
    fs::read_to_string,
    io::{self, Read},
    process
};

use clap::Parser;
use rayon::prelude::*;

use crate::{
    cache::content_version,
    checks::Severity,
    cli::{Cli, Commands, Dialect, Format},
    config::Config,
    diagnostics::{ScanOptions, scan_document_cached},
    error::{AppResult, file_read_error},
    fragment::FragmentPattern,
    output::{FileReport, OutputFormat, OutputOptions, format_reports, highest_severity},
    query::SqlDialect
};

fn main() {
    match run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run() -> AppResult<i32> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Check {
            paths,
            regex,
            dialect,
            output_format,
            verbose,
            no_color
        } => {
            let pattern = match regex.or(config.scan.sql_regex.clone()) {
                Some(p) => FragmentPattern::new(&p)?,
                None => FragmentPattern::default()
            };

            // CLI flag wins over config file
            let sql_dialect = match dialect {
                Some(Dialect::Generic) => SqlDialect::Generic,
                Some(Dialect::Mysql) => SqlDialect::MySQL,
                Some(Dialect::Postgresql) => SqlDialect::PostgreSQL,
                Some(Dialect::Sqlite) => SqlDialect::SQLite,
                None => config
                    .scan
                    .dialect
                    .as_deref()
                    .and_then(SqlDialect::from_name)
                    .unwrap_or_default()
            };

            let opts = ScanOptions {
                pattern,
                dialect: sql_dialect
            };

            let output_opts = OutputOptions {
                format: match output_format {
                    Format::Text => OutputFormat::Text,
                    Format::Json => OutputFormat::Json,
                    Format::Yaml => OutputFormat::Yaml
                },
                colored: !no_color,
                verbose
            };

            // Read documents up front; stdin cannot be read from workers.
            let mut documents = Vec::with_capacity(paths.len());
            for path in &paths {
                if path.to_str() == Some("-") {
                    let mut buffer = String::new();
                    io::stdin()
                        .read_to_string(&mut buffer)
                        .map_err(|e| file_read_error("stdin", e))?;
                    documents.push((String::from("<stdin>"), buffer));
                } else {
                    let text = read_to_string(path)
                        .map_err(|e| file_read_error(&path.display().to_string(), e))?;
                    documents.push((path.display().to_string(), text));
                }
            }

            let reports: Vec<FileReport> = documents
                .par_iter()
                .map(|(name, text)| FileReport {
                    path:        name.clone(),
                    diagnostics: scan_document_cached(name, content_version(text), text, &opts)
                })
                .collect();

            println!("{}", format_reports(&reports, &output_opts));

            let exit_code = match highest_severity(&reports) {
                Some(Severity::Error) => 2,
                Some(Severity::Warning) => 1,
                _ => 0
            };
            Ok(exit_code)
        }
    }
}
