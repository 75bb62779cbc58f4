//! # Inline SQL Lint Library
//!
//! Static analysis for SQL embedded in source files.

pub mod cache;
pub mod checks;
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod fragment;
pub mod output;
pub mod query;
