use colored::Colorize;
use serde::Serialize;

use crate::{checks::Severity, diagnostics::Diagnostic};

/// Output format for results
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml
}

/// Output options
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format:  OutputFormat,
    pub colored: bool,
    pub verbose: bool
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format:  OutputFormat::Text,
            colored: true,
            verbose: false
        }
    }
}

/// Diagnostics gathered for one scanned file
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path:        String,
    pub diagnostics: Vec<Diagnostic>
}

/// Highest severity across all reports, None when everything is clean
pub fn highest_severity(reports: &[FileReport]) -> Option<Severity> {
    reports
        .iter()
        .flat_map(|r| r.diagnostics.iter())
        .map(|d| d.severity)
        .max()
}

/// Format scan reports based on output options
pub fn format_reports(reports: &[FileReport], opts: &OutputOptions) -> String {
    match opts.format {
        OutputFormat::Json => serde_json::to_string_pretty(reports).unwrap_or_default(),
        OutputFormat::Yaml => serde_yaml::to_string(reports).unwrap_or_default(),
        OutputFormat::Text => format_text(reports, opts)
    }
}

fn format_text(reports: &[FileReport], opts: &OutputOptions) -> String {
    let mut output = String::new();
    let mut total = 0usize;

    for report in reports {
        for diagnostic in &report.diagnostics {
            total += 1;

            // Positions are stored zero-based, displayed one-based.
            let location = format!(
                "{}:{}:{}",
                report.path,
                diagnostic.range.start.line + 1,
                diagnostic.range.start.character + 1
            );

            let severity = diagnostic.severity.to_string();
            let severity = if opts.colored {
                match diagnostic.severity {
                    Severity::Error => severity.red().bold().to_string(),
                    Severity::Warning => severity.yellow().bold().to_string(),
                    Severity::Info => severity.cyan().to_string()
                }
            } else {
                severity
            };

            output.push_str(&format!("{}: {} {}", location, severity, diagnostic.message));
            if opts.verbose {
                output.push_str(&format!(" [{}]", diagnostic.kind));
            }
            output.push('\n');
        }
    }

    if total == 0 {
        output.push_str("No problems found.\n");
    } else {
        output.push_str(&format!(
            "\n{} problem(s) found in {} file(s).\n",
            total,
            reports.len()
        ));
    }

    output
}
