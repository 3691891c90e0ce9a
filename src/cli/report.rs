//! Report formatting and printing utilities.
//!
//! Prints a short summary of each command to stdout. Separate from the core
//! logic so that transtat can be used as a library.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::{ColoredString, Colorize};
use unicode_width::UnicodeWidthStr;

use super::commands::{CommandResult, CommandSummary, StatsSummary};
use crate::core::{StatRecord, data::percentage};
use crate::export::report::language_totals;
use crate::fetch::FetchSummary;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

const LANGUAGE_HEADER: &str = "Language";

/// Print the command summary to stdout.
pub fn print(result: &CommandResult) {
    print_to(result, &mut io::stdout().lock());
}

/// Print the command summary to a custom writer.
pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    match &result.summary {
        CommandSummary::Stats(summary) => print_stats(summary, writer),
        CommandSummary::Fetch(summary) => print_fetch(summary, writer),
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_stats<W: Write>(summary: &StatsSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Wrote {} {} from {} catalog {} to {}",
            summary.records.len(),
            plural(summary.records.len(), "record", "records"),
            summary.files_scanned,
            plural(summary.files_scanned, "file", "files"),
            summary.output_dir.display()
        )
        .green()
    );

    let files: Vec<String> = summary
        .export
        .written_files()
        .into_iter()
        .map(file_name)
        .collect();
    let _ = writeln!(writer, "  {}", files.join(", ").dimmed());

    if !summary.records.is_empty() {
        let _ = writeln!(writer);
        print_language_table(&summary.records, writer);
    }

    if !summary.skipped_sources.is_empty() {
        let _ = writeln!(
            writer,
            "\n{} skipped {} with a missing directory: {}",
            "warning:".bold().yellow(),
            plural(summary.skipped_sources.len(), "source", "sources"),
            summary.skipped_sources.join(", ")
        );
    }
}

fn print_language_table<W: Write>(records: &[StatRecord], writer: &mut W) {
    let totals = language_totals(records);
    let width = totals
        .keys()
        .map(|language| UnicodeWidthStr::width(*language))
        .chain(std::iter::once(LANGUAGE_HEADER.len()))
        .max()
        .unwrap_or(LANGUAGE_HEADER.len());

    let _ = writeln!(
        writer,
        "{}  {:>10}  {:>7}  {:>12}  {:>7}",
        pad(LANGUAGE_HEADER, width).bold(),
        "Translated".bold(),
        "Fuzzy".bold(),
        "Untranslated".bold(),
        "Total".bold()
    );

    for (language, bucket) in &totals {
        let total = bucket.total();
        let _ = writeln!(
            writer,
            "{}  {:>10}  {:>7}  {:>12}  {:>7}",
            pad(language, width),
            color_translated(percentage(bucket.translated, total)),
            format_pct(percentage(bucket.fuzzy, total)).yellow(),
            format_pct(percentage(bucket.untranslated, total)).red(),
            total
        );
    }
}

fn print_fetch<W: Write>(summary: &FetchSummary, writer: &mut W) {
    let file_count: usize = summary.fetched.iter().map(|s| s.files.len()).sum();
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Fetched {} catalog {} from {} {}",
            file_count,
            plural(file_count, "file", "files"),
            summary.fetched.len(),
            plural(summary.fetched.len(), "source", "sources")
        )
        .green()
    );

    for source in &summary.fetched {
        let _ = writeln!(
            writer,
            "  {} {} {} ({} {})",
            source.label,
            "->".blue(),
            source.local.display(),
            source.files.len(),
            plural(source.files.len(), "file", "files")
        );
    }

    if !summary.skipped.is_empty() {
        let _ = writeln!(
            writer,
            "  {} {}",
            "no remote:".dimmed(),
            summary.skipped.join(", ")
        );
    }
}

fn color_translated(pct: f64) -> ColoredString {
    let text = format_pct(pct);
    if pct >= 90.0 {
        text.green()
    } else if pct >= 50.0 {
        text.yellow()
    } else {
        text.red()
    }
}

fn format_pct(pct: f64) -> String {
    format!("{:.1}%", pct)
}

fn pad(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(UnicodeWidthStr::width(text));
    format!("{}{}", text, " ".repeat(padding))
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
