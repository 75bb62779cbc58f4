//! Locating embedded SQL candidates inside a source document.
//!
//! A document is scanned with a configurable regex; every match is one
//! SQL candidate. The default pattern matches Go raw-string literals
//! (backtick-delimited). When the pattern has a capture group, group 1 is
//! the SQL text; otherwise the whole match is used.

use std::ops::Range;

use regex::Regex;
use serde::Serialize;

use crate::error::{AppResult, regex_error};

/// Default pattern: Go raw-string literals.
pub const DEFAULT_SQL_REGEX: &str = "`([^`]*)`";

/// Compiled pattern locating embedded SQL literals in a document.
#[derive(Debug, Clone)]
pub struct FragmentPattern {
    regex: Regex
}

impl Default for FragmentPattern {
    fn default() -> Self {
        // The default pattern is a literal; compilation cannot fail.
        match Self::new(DEFAULT_SQL_REGEX) {
            Ok(pattern) => pattern,
            Err(_) => unreachable!("default SQL regex compiles")
        }
    }
}

impl FragmentPattern {
    /// Compile a fragment pattern from a user-supplied regex
    pub fn new(pattern: &str) -> AppResult<Self> {
        let regex = Regex::new(pattern).map_err(|e| regex_error(pattern, e))?;
        Ok(Self {
            regex
        })
    }

    /// Find every embedded SQL candidate in `text`, in document order.
    ///
    /// The span of each fragment covers the whole match, delimiters
    /// included, so diagnostics underline the full literal.
    pub fn extract_fragments<'t>(&self, text: &'t str) -> Vec<SqlFragment<'t>> {
        self.regex
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let sql = caps.get(1).map_or(whole.as_str(), |m| m.as_str());
                Some(SqlFragment {
                    sql,
                    span: whole.range()
                })
            })
            .collect()
    }
}

/// One embedded SQL candidate found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlFragment<'t> {
    /// The SQL text (first capture group, or the whole match)
    pub sql:  &'t str,
    /// Byte range of the whole match in the document
    pub span: Range<usize>
}

/// Zero-based line/character position within a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line:      u32,
    pub character: u32
}

/// Convert a byte offset into a zero-based line/character position.
///
/// Characters are counted in chars, not bytes. Offsets past the end of
/// the document are clamped.
pub fn position_at(text: &str, offset: usize) -> Position {
    let clamped = offset.min(text.len());
    let mut line = 0u32;
    let mut line_start = 0usize;
    for (idx, byte) in text.as_bytes()[..clamped].iter().enumerate() {
        if *byte == b'\n' {
            line += 1;
            line_start = idx + 1;
        }
    }
    let character = text[line_start..clamped].chars().count() as u32;
    Position {
        line,
        character
    }
}
