use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Inline SQL Lint - find defects in SQL embedded in source files
#[derive(Parser, Debug)]
#[command(name = "inline-sql-lint")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan source files for embedded SQL and report diagnostics
    Check {
        /// Source files to scan (use - for stdin)
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Regex locating embedded SQL literals (capture group 1 is the
        /// SQL)
        #[arg(short, long, env = "INLINE_SQL_REGEX")]
        regex: Option<String>,

        /// SQL dialect for parsing
        #[arg(short, long, value_enum)]
        dialect: Option<Dialect>,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        output_format: Format,

        /// Show check kinds alongside messages
        #[arg(short, long)]
        verbose: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Dialect {
    Generic,
    Mysql,
    Postgresql,
    Sqlite
}

#[derive(Debug, Clone, ValueEnum)]
pub enum Format {
    Text,
    Json,
    Yaml
}
