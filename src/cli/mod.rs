use anyhow::Result;

use crate::collector;
use crate::config::OUTPUT_FILE_NAME;

mod args;
mod exit_status;
pub mod report;

pub use args::Arguments;
pub use exit_status::ExitStatus;

/// Run one collection in the current directory and print its summary.
///
/// Unreadable files do not change the exit status; only a failed run does.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let summary = collector::run(args.verbose)?;

    report::print_success(&summary, OUTPUT_FILE_NAME);
    report::print_read_warning(summary.read_error_count, args.verbose);

    Ok(ExitStatus::Success)
}
