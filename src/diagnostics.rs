//! Document scanning: fragments -> parse -> checks -> diagnostics.
//!
//! ```text
//! ┌──────────┐    ┌───────────┐    ┌────────┐    ┌─────────────┐
//! │ Document │───▶│ Fragments │───▶│ Checks │───▶│ Diagnostics │
//! └──────────┘    └───────────┘    └────────┘    └─────────────┘
//! ```
//!
//! Each fragment is parsed and run through the semantic check pipeline;
//! every failure becomes one positioned [`Diagnostic`] spanning the
//! fragment's full match. Scanning is pure computation over the document
//! text, safe to run from parallel workers; [`scan_document_cached`] adds
//! a version-keyed cache in front of it.

use serde::Serialize;

use crate::{
    cache::{cache_diagnostics, get_cached},
    checks::{CheckError, CheckErrorKind, Severity, check_semantic_errors, severity_for},
    fragment::{FragmentPattern, Position, SqlFragment, position_at},
    query::{SqlDialect, parse_first}
};

/// A positioned, severity-tagged finding in one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub message:  String,
    pub kind:     CheckErrorKind,
    pub severity: Severity,
    pub range:    SourceRange
}

/// Span of a diagnostic in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceRange {
    pub start: Position,
    pub end:   Position
}

/// Options controlling a document scan.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    pub pattern: FragmentPattern,
    pub dialect: SqlDialect
}

/// Scan a document for embedded SQL defects.
///
/// Extracts fragments, parses each one, runs the checker pipeline and
/// maps failures to diagnostics via the fixed kind-to-severity table. At
/// most one diagnostic is produced per fragment.
pub fn scan_document(text: &str, opts: &ScanOptions) -> Vec<Diagnostic> {
    opts.pattern
        .extract_fragments(text)
        .iter()
        .filter_map(|fragment| {
            let error = match parse_first(fragment.sql, opts.dialect) {
                Ok(statement) => check_semantic_errors(&statement),
                Err(syntax) => Some(syntax)
            };
            error.map(|e| to_diagnostic(text, fragment, e))
        })
        .collect()
}

/// Scan with a version-keyed cache in front.
///
/// `key` identifies the document (its path or URI); `version` changes
/// whenever the content does. A stored entry is reused only when both
/// match, so an edited document is always re-evaluated from scratch.
pub fn scan_document_cached(
    key: &str,
    version: u64,
    text: &str,
    opts: &ScanOptions
) -> Vec<Diagnostic> {
    if let Some(cached) = get_cached(key, version) {
        return cached;
    }
    let diagnostics = scan_document(text, opts);
    cache_diagnostics(key, version, diagnostics.clone());
    diagnostics
}

fn to_diagnostic(text: &str, fragment: &SqlFragment<'_>, error: CheckError) -> Diagnostic {
    Diagnostic {
        severity: severity_for(error.kind),
        kind:     error.kind,
        message:  error.message,
        range:    SourceRange {
            start: position_at(text, fragment.span.start),
            end:   position_at(text, fragment.span.end)
        }
    }
}
