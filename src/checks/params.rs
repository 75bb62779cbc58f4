use std::{collections::BTreeSet, ops::ControlFlow};

use compact_str::CompactString;
use smallvec::SmallVec;
use sqlparser::ast::{Expr, Statement, Value, Visit, visit_expressions};

use super::types::{CheckError, CheckErrorKind};

/// Placeholder names collected from one statement (typically < 8 elements)
pub type ParamVec = SmallVec<[CompactString; 8]>;

/// Collect every positional-parameter placeholder within `node`.
///
/// Works on any visitable node of the parsed tree (a whole [`Statement`],
/// a subquery, a single expression). The traversal is depth-first and
/// deterministic for a given tree; it descends into subqueries, VALUES
/// rows and every other nested expression. Duplicates are preserved: a
/// placeholder reused in two positions yields two entries.
pub fn extract_parameters<V: Visit>(node: &V) -> ParamVec {
    let mut params = ParamVec::new();
    let _ = visit_expressions(node, |expr| {
        if let Expr::Value(value) = expr
            && let Value::Placeholder(name) = &value.value
        {
            params.push(name.as_str().into());
        }
        ControlFlow::<()>::Continue(())
    });
    params
}

/// Validates that positional parameters form a contiguous run $1..$N.
///
/// Ordinals are deduplicated and sorted; the first gap is reported as the
/// smallest missing ordinal. An empty parameter set passes. Placeholders
/// without a numeric suffix (named parameters, bare `?`) carry no ordinal
/// and are skipped.
pub fn check_missing_parameter(statement: &Statement) -> Option<CheckError> {
    let ordinals: BTreeSet<usize> = extract_parameters(statement)
        .iter()
        .filter_map(|name| parse_ordinal(name))
        .collect();

    for (i, ordinal) in ordinals.iter().enumerate() {
        if *ordinal != i + 1 {
            return Some(CheckError {
                kind:    CheckErrorKind::MissingParameter,
                message: format!("Missing ${} in the parameter order.", i + 1)
            });
        }
    }
    None
}

/// Ordinal of a placeholder token: the name minus its leading sigil,
/// parsed as an integer (`$3` -> 3).
fn parse_ordinal(name: &str) -> Option<usize> {
    name.get(1..)?.parse().ok()
}
