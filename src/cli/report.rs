//! Report formatting and printing utilities.
//!
//! Displays issues in cargo-style format, or as JSON for tooling.
//! Separate from core logic to allow icg to be used as a library.

use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use super::{
    args::OutputFormat,
    commands::{CheckSummary, CommandResult, CommandSummary, InitSummary},
};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Report, ReportLocation, SUPPORTED_DIAGNOSTICS, Severity};
use crate::model::Location;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stdout.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    for issue in &sorted {
        print_issue(issue, writer);
    }

    print_summary(&sorted, writer);
}

/// One diagnostic in `--format json` output.
#[derive(Debug, Serialize)]
pub struct JsonDiagnostic<'a> {
    pub id: String,
    pub severity: Severity,
    pub message: String,
    pub file: &'a str,
    pub line: usize,
    pub col: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl<'a> JsonDiagnostic<'a> {
    pub fn from_issue(issue: &'a Issue) -> Self {
        let loc = issue.location();
        let (file, line, col, _) = extract_location_info(&loc);
        Self {
            id: issue.rule().to_string(),
            severity: issue.severity(),
            message: issue.message(),
            file,
            line,
            col,
            note: issue.details(),
        }
    }
}

/// Print issues as a pretty JSON array.
pub fn report_json_to<W: Write>(issues: &[Issue], writer: &mut W) -> io::Result<()> {
    let diagnostics: Vec<JsonDiagnostic<'_>> =
        issues.iter().map(JsonDiagnostic::from_issue).collect();
    serde_json::to_writer_pretty(&mut *writer, &diagnostics)?;
    writeln!(writer)
}

/// Print a success message when no issues are found.
pub fn print_success(models_checked: usize) {
    print_success_to(models_checked, &mut io::stdout().lock());
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(models_checked: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} model {} - no issues found",
            models_checked,
            if models_checked == 1 { "file" } else { "files" }
        )
        .green()
    );
}

/// Print a warning about model files that could not be parsed.
pub fn print_parse_warning(count: usize, verbose: bool) {
    print_parse_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print a parse warning to a custom writer.
pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} model file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

/// Print the table of supported diagnostics.
pub fn print_rules_to<W: Write>(writer: &mut W) {
    for descriptor in SUPPORTED_DIAGNOSTICS {
        let _ = writeln!(
            writer,
            "{}  {:<7} {:<15} {}",
            descriptor.id.bold(),
            descriptor.default_severity.to_string(),
            descriptor.category,
            descriptor.title
        );
        let _ = writeln!(writer, "        {}", descriptor.message_format.dimmed());
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let severity = issue.report_severity();
    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity_label(severity),
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    let gutter = match issue.location() {
        ReportLocation::Source(location) => {
            // Clickable location: --> path:line:col
            let _ = writeln!(writer, "  {} {}", "-->".blue(), location);
            let gutter = location.line.to_string().len();
            if let Some(source_line) = &location.source_line {
                print_snippet(location, source_line, severity, gutter, writer);
            }
            gutter
        }
        ReportLocation::File { path } => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
            1
        }
    };

    let annotations = [
        ("note:".bold(), issue.details()),
        ("hint:".bold().cyan(), issue.hint()),
    ];
    for (label, text) in annotations {
        if let Some(text) = text {
            let _ = writeln!(writer, "{:>gutter$} {} {} {}", "", "=".blue(), label, text);
        }
    }

    let _ = writeln!(writer);
}

/// Source line with a caret under `location.col` (1-based, display-width aware).
fn print_snippet<W: Write>(
    location: &Location,
    source_line: &str,
    severity: Severity,
    gutter: usize,
    writer: &mut W,
) {
    let prefix: String = source_line
        .chars()
        .take(location.col.saturating_sub(1))
        .collect();
    let padding = UnicodeWidthStr::width(prefix.as_str());

    let _ = writeln!(
        writer,
        "{} {} {}",
        location.line.to_string().blue(),
        "|".blue(),
        source_line
    );
    let _ = writeln!(
        writer,
        "{:>gutter$} {} {:>padding$}{}",
        "",
        "|".blue(),
        "",
        severity_paint(severity, "^")
    );
}

fn severity_label(severity: Severity) -> ColoredString {
    severity_paint(severity, &severity.to_string()).bold()
}

fn severity_paint(severity: Severity, text: &str) -> ColoredString {
    match severity {
        Severity::Error => text.red(),
        Severity::Warning => text.yellow(),
        Severity::Info => text.blue(),
    }
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Warning)
        .count();
    let total_problems = issues.len();

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            if total_problems == 1 {
                "problem"
            } else {
                "problems"
            },
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

fn extract_location_info<'a>(
    loc: &ReportLocation<'a>,
) -> (&'a str, usize, usize, Option<&'a str>) {
    match *loc {
        ReportLocation::Source(location) => (
            location.file_path(),
            location.line,
            location.col,
            location.source_line.as_deref(),
        ),
        ReportLocation::File { path } => (path, 0, 0, None),
    }
}

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Check(summary) => print_check(result, summary, verbose),
        CommandSummary::Rules => print_rules_to(&mut io::stdout().lock()),
        CommandSummary::Init(summary) => print_init(summary),
    }
}

fn print_check(result: &CommandResult, summary: &CheckSummary, verbose: bool) {
    match summary.format {
        OutputFormat::Json => {
            if let Err(e) = report_json_to(&result.issues, &mut io::stdout().lock()) {
                eprintln!("Error: {}", e);
            }
        }
        OutputFormat::Text => {
            report(&result.issues);
            if result.issues.is_empty() {
                print_success(summary.models_checked);
            }
        }
    }

    print_parse_warning(result.parse_error_count, verbose);
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

// ============================================================
// Tests
// ============================================================
