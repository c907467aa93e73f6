//! Exit status codes for the CLI
//!
//! reqprobe follows standard Unix exit code conventions:
//! - 0: Success (a response was delivered, whatever its HTTP status)
//! - 1: Any error (bad arguments, unparseable input, network failure)
//! - 130: User interrupted (Ctrl+C, standard SIGINT exit code)

use std::process::{ExitCode, Termination};

/// Exit status codes following standard Unix conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    /// Successful execution
    Success = 0,
    /// Any error
    Error = 1,
    /// User interrupted (Ctrl+C) - standard SIGINT code
    Interrupted = 130,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}

impl Termination for ExitStatus {
    fn report(self) -> ExitCode {
        ExitCode::from(self as u8)
    }
}

impl ExitStatus {
    /// Map a delivered response to an exit status.
    ///
    /// The network-error sentinel (status 0) is the only response treated
    /// as a failure; HTTP error statuses still exit 0 since a response was
    /// delivered and rendered.
    pub fn from_response_status(status: u16) -> Self {
        if status == 0 {
            ExitStatus::Error
        } else {
            ExitStatus::Success
        }
    }
}
