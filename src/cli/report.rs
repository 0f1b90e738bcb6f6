//! Report formatting and printing utilities.
//!
//! The text layout follows the classic output of the tool: unused keys one
//! per line, a blank line, then the summary. Warnings go to stderr.

use std::{
    collections::BTreeMap,
    io::{self, Write},
};

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use super::run::RunResult;
use crate::{core::UsageRecord, issues::ScanWarning, rules::unused::UnusedKeysReport};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print the result of a run to stdout, warnings to stderr.
pub fn print(result: &RunResult, json: bool, verbose: bool) -> Result<()> {
    if json {
        let output = json_output(result)?;
        let _ = writeln!(io::stdout().lock(), "{}", output);
    } else {
        let mut stdout = io::stdout().lock();
        if !result.usages.is_empty() {
            print_usages_to(&result.usages, &mut stdout);
        }
        print_report_to(&result.report, &mut stdout);
    }

    print_warnings_to(&result.warnings, verbose, &mut io::stderr().lock());
    Ok(())
}

/// Print unused keys and the summary lines.
pub fn print_report_to<W: Write>(report: &UnusedKeysReport, writer: &mut W) {
    for key in &report.unused_keys {
        let _ = writeln!(writer, "{}", key);
    }

    let _ = writeln!(
        writer,
        "\nSearched through: {} {}",
        report.files_scanned,
        if report.files_scanned == 1 {
            "file"
        } else {
            "files"
        }
    );

    let found = format!(
        "Found {} unused {} in {}",
        report.unused_count,
        if report.unused_count == 1 {
            "key"
        } else {
            "keys"
        },
        report.keys_path
    );
    if report.unused_count == 0 {
        let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), found.green());
    } else {
        let _ = writeln!(writer, "{}", found.yellow().bold());
    }
}

/// Print every used key followed by the locations it appears at.
pub fn print_usages_to<W: Write>(usages: &[(String, UsageRecord)], writer: &mut W) {
    for (key, record) in usages {
        let _ = writeln!(
            writer,
            "{}  {}",
            key.bold(),
            format!(
                "{} {}",
                record.appearances,
                if record.appearances == 1 {
                    "appearance"
                } else {
                    "appearances"
                }
            )
            .dimmed()
        );
        for (file, line_number, _) in record.locations() {
            let _ = writeln!(writer, "  {} {}:{}", "-->".blue(), file, line_number);
        }
    }
    let _ = writeln!(writer);
}

/// Print scan warnings.
///
/// Verbose mode lists every warning; otherwise a single summary line points
/// at `-v`.
pub fn print_warnings_to<W: Write>(warnings: &[ScanWarning], verbose: bool, writer: &mut W) {
    if warnings.is_empty() {
        return;
    }

    if verbose {
        for warning in warnings {
            let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), warning);
        }
    } else {
        let _ = writeln!(
            writer,
            "{} {} path(s) skipped due to access or encoding errors (use {} for details)",
            "warning:".bold().yellow(),
            warnings.len(),
            "-v".cyan()
        );
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    #[serde(flatten)]
    report: &'a UnusedKeysReport,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    usages: BTreeMap<&'a str, &'a UsageRecord>,
    warnings: &'a [ScanWarning],
}

/// Render the run as pretty-printed JSON.
pub fn json_output(result: &RunResult) -> Result<String> {
    let output = JsonOutput {
        report: &result.report,
        usages: result
            .usages
            .iter()
            .map(|(key, record)| (key.as_str(), record))
            .collect(),
        warnings: &result.warnings,
    };
    serde_json::to_string_pretty(&output).context("Failed to serialize report")
}
