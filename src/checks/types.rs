//! Type definitions for the semantic check pipeline.
//!
//! - [`CheckErrorKind`] - Closed set of defect kinds
//! - [`CheckError`] - A single failed check
//! - [`Severity`] - Diagnostic severity levels (Info, Warning, Error)
//! - [`severity_for`] - Fixed kind-to-severity table

use serde::Serialize;

/// Kind of a semantic check failure.
///
/// The set is closed: every diagnostic this crate produces carries one of
/// these kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CheckErrorKind {
    /// The parser rejected the fragment. The message is the parser's own
    /// text, passed through verbatim.
    Syntax,
    /// INSERT column list and first VALUES row disagree in length.
    InsertValuesMismatch,
    /// Gap in the positional-parameter ordering ($1..$N).
    MissingParameter
}

impl std::fmt::Display for CheckErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax => write!(f, "syntax"),
            Self::InsertValuesMismatch => write!(f, "insert-values-mismatch"),
            Self::MissingParameter => write!(f, "missing-parameter")
        }
    }
}

/// Result of a failed semantic check.
///
/// Each checker produces zero or one of these per statement. Immutable
/// once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckError {
    pub kind:    CheckErrorKind,
    pub message: String
}

impl CheckError {
    /// Wrap a parser rejection, keeping its message verbatim.
    pub fn syntax(message: impl Into<String>) -> Self {
        Self {
            kind:    CheckErrorKind::Syntax,
            message: message.into()
        }
    }
}

/// Severity level of a diagnostic.
///
/// Ordered from lowest to highest severity for sorting purposes.
/// Exit codes are determined by the highest severity diagnostic found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Severity {
    /// Informational, does not affect exit code
    Info,
    /// Issue that may indicate a problem (exit code 1)
    Warning,
    /// Issue that must be addressed (exit code 2)
    Error
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR")
        }
    }
}

/// Severity assigned to each check kind.
///
/// Fixed lookup data, not configuration.
pub const fn severity_for(kind: CheckErrorKind) -> Severity {
    match kind {
        CheckErrorKind::Syntax => Severity::Error,
        CheckErrorKind::InsertValuesMismatch => Severity::Warning,
        CheckErrorKind::MissingParameter => Severity::Error
    }
}
