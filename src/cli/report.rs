//! Run summary printing.
//!
//! Kept out of the collector so copy-code can be used as a library without
//! printing side effects.

use std::io::{self, Write};

use colored::Colorize;

use crate::collector::CollectSummary;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

fn plural(count: usize, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 { singular } else { plural }
}

/// Print the run summary to stdout.
pub fn print_success(summary: &CollectSummary, output_name: &str) {
    print_success_to(summary, output_name, &mut io::stdout().lock());
}

/// Print the run summary to a custom writer.
pub fn print_success_to<W: Write>(summary: &CollectSummary, output_name: &str, writer: &mut W) {
    let msg = format!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Collected {} {} into {}",
            summary.files_collected,
            plural(summary.files_collected, "file", "files"),
            output_name
        )
        .green()
    );
    let _ = writeln!(writer, "{}", msg);
}

/// Print a warning about files recorded as read errors.
pub fn print_read_warning(count: usize, verbose: bool) {
    print_read_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print a read warning to a custom writer.
///
/// In verbose mode every failure has already been reported individually.
pub fn print_read_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} {} could not be read (use {} for details)",
            "warning:".bold().yellow(),
            count,
            plural(count, "file", "files"),
            "-v".cyan()
        );
    }
}
