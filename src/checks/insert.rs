use sqlparser::ast::{SetExpr, Statement};

use super::types::{CheckError, CheckErrorKind};

/// Compares an INSERT's column list against its first VALUES row.
///
/// Applies only to INSERT statements with an explicit VALUES source and a
/// non-empty column list. Rows past the first are not validated. When the
/// values clause, the column list or the first row is absent (e.g.
/// INSERT ... SELECT), the check does not apply.
pub fn check_insert_values_mismatch(statement: &Statement) -> Option<CheckError> {
    if let Statement::Insert(insert) = statement
        && !insert.columns.is_empty()
        && let Some(source) = &insert.source
        && let SetExpr::Values(values) = source.body.as_ref()
        && let Some(first_row) = values.rows.first()
        && first_row.len() != insert.columns.len()
    {
        return Some(CheckError {
            kind:    CheckErrorKind::InsertValuesMismatch,
            message: format!(
                "Number of parameters given to INSERT query does not match, got {}, want {}.",
                first_row.len(),
                insert.columns.len()
            )
        });
    }
    None
}
