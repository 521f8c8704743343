//! Exit status codes for the CLI
//!
//! gqldocs follows standard Unix exit code conventions:
//! - 0: Success
//! - 1: Any error (bad arguments, IO failures)
//! - 3: The endpoint answered but no usable schema could be loaded

use std::process::{ExitCode, Termination};

/// Exit status codes following standard Unix conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    /// Successful execution
    Success = 0,
    /// Any error (invalid arguments, IO failures)
    Error = 1,
    /// Schema could not be loaded from the endpoint
    SchemaError = 3,
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
    /// Create an exit status from a raw exit code
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => ExitStatus::Success,
            3 => ExitStatus::SchemaError,
            _ => ExitStatus::Error,
        }
    }
}
