//! Semantic checks for parsed SQL statements.
//!
//! Checkers are pure functions over an already-parsed statement tree. They
//! detect parameter-binding defects a generic SQL parser does not catch on
//! its own:
//!
//! - [`check_insert_values_mismatch`] - INSERT column list and VALUES row
//!   disagree in length
//! - [`check_missing_parameter`] - gap in the positional-parameter
//!   ordering ($1..$N)
//!
//! [`check_semantic_errors`] runs them as a pipeline in declaration order
//! and returns the first hit; later checkers are skipped, not
//! run-and-suppressed. Checkers never fail for a well-formed statement:
//! when a rule's precondition shape is absent they return `None`.
//!
//! A parser rejection is a separate [`CheckErrorKind::Syntax`] error
//! produced at the parse boundary (see [`crate::query::parse_first`]),
//! before these checks ever run.

mod insert;
mod params;
mod types;

use sqlparser::ast::Statement;

pub use insert::check_insert_values_mismatch;
pub use params::{ParamVec, check_missing_parameter, extract_parameters};
pub use types::{CheckError, CheckErrorKind, Severity, severity_for};

/// A semantic checker inspects one statement and reports at most one
/// error.
pub type Checker = fn(&Statement) -> Option<CheckError>;

/// Checkers in priority order. A statement triggering several conditions
/// reports only the first.
const CHECKERS: &[Checker] = &[check_insert_values_mismatch, check_missing_parameter];

/// Run the checker pipeline on one statement.
///
/// Returns the first error found, or `None` when every check passes.
/// Stateless: repeated calls on the same statement yield identical
/// results, and it is safe to call from any number of parallel workers.
pub fn check_semantic_errors(statement: &Statement) -> Option<CheckError> {
    CHECKERS.iter().find_map(|check| check(statement))
}
