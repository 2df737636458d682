use std::process::ExitCode;

/// Exit status for CLI commands, following common conventions for
/// source-scanning tools.
///
/// - `Success` (0): Run completed, every call site extracted cleanly
/// - `Failure` (1): Run completed and wrote the catalog, but some call
///   sites were skipped with recorded errors
/// - `Error` (2): Run aborted on a fatal error (bad pattern, I/O failure)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Run completed, every call site extracted cleanly.
    Success,
    /// Run completed with recorded extraction errors.
    Failure,
    /// Run aborted on a fatal error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
