use inline_sql_lint::{
    checks::{CheckErrorKind, Severity},
    diagnostics::{Diagnostic, SourceRange},
    fragment::Position,
    output::{FileReport, OutputFormat, OutputOptions, format_reports, highest_severity}
};

fn diagnostic(kind: CheckErrorKind, severity: Severity, message: &str) -> Diagnostic {
    Diagnostic {
        message: message.to_string(),
        kind,
        severity,
        range: SourceRange {
            start: Position {
                line:      2,
                character: 8
            },
            end:   Position {
                line:      2,
                character: 40
            }
        }
    }
}

fn report(diagnostics: Vec<Diagnostic>) -> FileReport {
    FileReport {
        path: "queries.go".to_string(),
        diagnostics
    }
}

fn plain_text() -> OutputOptions {
    OutputOptions {
        format:  OutputFormat::Text,
        colored: false,
        verbose: false
    }
}

#[test]
fn test_text_output_has_location_and_message() {
    let reports = vec![report(vec![diagnostic(
        CheckErrorKind::MissingParameter,
        Severity::Error,
        "Missing $1 in the parameter order."
    )])];
    let output = format_reports(&reports, &plain_text());

    // One-based line:column display
    assert!(output.contains("queries.go:3:9"));
    assert!(output.contains("ERROR"));
    assert!(output.contains("Missing $1 in the parameter order."));
}

#[test]
fn test_text_output_warning_label() {
    let reports = vec![report(vec![diagnostic(
        CheckErrorKind::InsertValuesMismatch,
        Severity::Warning,
        "Number of parameters given to INSERT query does not match, got 1, want 2."
    )])];
    let output = format_reports(&reports, &plain_text());

    assert!(output.contains("WARN"));
    assert!(output.contains("got 1, want 2"));
}

#[test]
fn test_text_output_clean() {
    let reports = vec![report(vec![])];
    let output = format_reports(&reports, &plain_text());

    assert!(output.contains("No problems found."));
}

#[test]
fn test_text_output_summary_count() {
    let reports = vec![report(vec![
        diagnostic(CheckErrorKind::Syntax, Severity::Error, "bad"),
        diagnostic(CheckErrorKind::MissingParameter, Severity::Error, "gap"),
    ])];
    let output = format_reports(&reports, &plain_text());

    assert!(output.contains("2 problem(s) found in 1 file(s)."));
}

#[test]
fn test_verbose_text_shows_kind() {
    let opts = OutputOptions {
        verbose: true,
        ..plain_text()
    };
    let reports = vec![report(vec![diagnostic(
        CheckErrorKind::MissingParameter,
        Severity::Error,
        "gap"
    )])];
    let output = format_reports(&reports, &opts);

    assert!(output.contains("[missing-parameter]"));
}

#[test]
fn test_non_verbose_text_hides_kind() {
    let reports = vec![report(vec![diagnostic(
        CheckErrorKind::MissingParameter,
        Severity::Error,
        "gap"
    )])];
    let output = format_reports(&reports, &plain_text());

    assert!(!output.contains("[missing-parameter]"));
}

#[test]
fn test_json_output() {
    let opts = OutputOptions {
        format: OutputFormat::Json,
        ..plain_text()
    };
    let reports = vec![report(vec![diagnostic(
        CheckErrorKind::Syntax,
        Severity::Error,
        "unexpected token"
    )])];
    let output = format_reports(&reports, &opts);

    assert!(output.contains("\"path\": \"queries.go\""));
    assert!(output.contains("\"kind\": \"Syntax\""));
    assert!(output.contains("\"severity\": \"Error\""));
    assert!(output.contains("\"message\": \"unexpected token\""));
}

#[test]
fn test_yaml_output() {
    let opts = OutputOptions {
        format: OutputFormat::Yaml,
        ..plain_text()
    };
    let reports = vec![report(vec![diagnostic(
        CheckErrorKind::Syntax,
        Severity::Error,
        "unexpected token"
    )])];
    let output = format_reports(&reports, &opts);

    assert!(output.contains("path: queries.go"));
    assert!(output.contains("message: unexpected token"));
}

#[test]
fn test_highest_severity_empty() {
    assert!(highest_severity(&[report(vec![])]).is_none());
}

#[test]
fn test_highest_severity_picks_error_over_warning() {
    let reports = vec![
        report(vec![diagnostic(
            CheckErrorKind::InsertValuesMismatch,
            Severity::Warning,
            "w"
        )]),
        report(vec![diagnostic(CheckErrorKind::Syntax, Severity::Error, "e")]),
    ];
    assert_eq!(highest_severity(&reports), Some(Severity::Error));
}

#[test]
fn test_highest_severity_warning_only() {
    let reports = vec![report(vec![diagnostic(
        CheckErrorKind::InsertValuesMismatch,
        Severity::Warning,
        "w"
    )])];
    assert_eq!(highest_severity(&reports), Some(Severity::Warning));
}

#[test]
fn test_default_output_options() {
    let opts = OutputOptions::default();
    assert!(opts.colored);
    assert!(!opts.verbose);
}
