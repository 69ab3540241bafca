use std::process::ExitCode;

/// Process exit status of the CLI.
///
/// - `Success` (0): translations compiled, or config created
/// - `Failure` (1): the command refused to run (e.g. `init` over an existing config)
/// - `Error` (2): compilation failed (YAML syntax, bad hierarchy, I/O, invalid config)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::SUCCESS,
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
