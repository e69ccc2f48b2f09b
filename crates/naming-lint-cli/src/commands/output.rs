//! Shared output formatting for lint results.

use anyhow::Result;
use miette::{NamedSource, Report};
use naming_lint_core::{LintResult, Severity, Violation, ViolationDiagnostic};
use std::path::Path;

use crate::OutputFormat;

/// Print lint results in the specified format.
///
/// `root` is used to re-read sources for `pretty` output, since violation
/// paths are relative to it.
pub fn print(result: &LintResult, format: OutputFormat, root: &Path) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", render_text(result)),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print!("{}", render_compact(result)),
        OutputFormat::Pretty => print_pretty(result, root),
    }
    Ok(())
}

fn severity_indicator(severity: Severity) -> &'static str {
    match severity {
        Severity::Fatal => "\x1b[1;31mfatal\x1b[0m",
        Severity::Error => "\x1b[31merror\x1b[0m",
        Severity::Warning => "\x1b[33mwarning\x1b[0m",
        Severity::Info => "\x1b[34minfo\x1b[0m",
        Severity::Ignore => "ignore",
    }
}

fn render_text(result: &LintResult) -> String {
    let (errors, warnings, infos) = result.count_by_severity();
    let mut out = String::new();

    for violation in &result.violations {
        out.push_str(&format!(
            "{} {} at {}:{}:{}\n",
            violation.code,
            violation.rule,
            violation.location.file.display(),
            violation.location.line,
            violation.location.column,
        ));
        out.push_str(&format!(
            "  {}: {}\n",
            severity_indicator(violation.severity),
            violation.message
        ));
        for label in &violation.labels {
            out.push_str(&format!(
                "  = note: {} ({}:{})\n",
                label.message, label.location.line, label.location.column
            ));
        }
        if let Some(suggestion) = &violation.suggestion {
            out.push_str(&format!("  = help: {}\n", suggestion.message));
        }
        out.push('\n');
    }

    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    out.push_str(&format!(
        "{}Found {} error(s), {} warning(s), {} info(s) in {} file(s)\x1b[0m\n",
        summary_color, errors, warnings, infos, result.files_checked
    ));
    out
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn render_compact(result: &LintResult) -> String {
    result
        .violations
        .iter()
        .map(|violation| format!("{violation}\n"))
        .collect()
}

fn print_pretty(result: &LintResult, root: &Path) {
    for violation in &result.violations {
        println!("{:?}", pretty_report(violation, root));
    }
    println!("Checked {} file(s)", result.files_checked);
}

fn pretty_report(violation: &Violation, root: &Path) -> Report {
    let report = Report::new(ViolationDiagnostic::from(violation));
    let file = &violation.location.file;
    match std::fs::read_to_string(root.join(file)) {
        Ok(content) => {
            report.with_source_code(NamedSource::new(file.display().to_string(), content))
        }
        Err(e) => {
            tracing::debug!("No source for {}: {}", file.display(), e);
            report
        }
    }
}
