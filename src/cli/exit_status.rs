use std::process::ExitCode;

/// Exit status of the CLI, following common conventions for linter tools.
///
/// - `Success` (0): Run completed; no unused keys, or `--strict` not given
/// - `Failure` (1): Run completed and found unused keys under `--strict`
/// - `Error` (2): Run aborted (missing or malformed key file, missing root, bad config)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    pub fn from_unused_count(unused_count: usize, strict: bool) -> Self {
        if strict && unused_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
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
