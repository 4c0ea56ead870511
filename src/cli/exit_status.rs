use std::process::ExitCode;

/// Exit status of a collection run.
///
/// - `Success` (0): the bundle was written, even if some files were recorded as read errors
/// - `Error` (1): the run aborted (output file could not be created or written)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// The bundle was written.
    Success,
    /// The run aborted before the bundle was complete.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(1),
        }
    }
}
