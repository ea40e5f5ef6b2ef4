//! Fatal error taxonomy.
//!
//! Every variant here aborts the run. Per-platform diagnostics are not
//! errors; they travel through `verify::Outcome` and end up in the report.

use std::io;

use crate::platform::Platform;
use crate::process::invoke::describe_status;
use crate::rules::catalog::RuleId;

/// Exit status used for fatal failures with no usable underlying code.
pub const FATAL_EXIT_CODE: i32 = 2;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The executable could not be started at all.
    #[error("{command}: {error}")]
    Launch { command: String, error: io::Error },

    /// The authority printed a line that is not an `os/arch` pair.
    #[error("{command}: invalid output: {line:?}")]
    MalformedAuthorityOutput { command: String, line: String },

    /// The authority ran but did not exit successfully.
    #[error("{command}: {}{}", status_text(.status), stderr_suffix(.stderr))]
    CommandFailed {
        command: String,
        status: Option<i32>,
        stderr: String,
    },

    /// A verification run whose failure shape was classified as fatal.
    #[error("{platform}: {command}: {} [{rule}]{}", status_text(.status), stderr_suffix(.stderr))]
    ProcessFailure {
        command: String,
        platform: Platform,
        rule: RuleId,
        status: Option<i32>,
        stderr: String,
    },

    #[error("failed to write output")]
    Io(#[from] io::Error),
}

impl Error {
    /// Process exit status for this failure.
    ///
    /// 0 and 1 are reserved for report outcomes, so an underlying code is
    /// only passed through when it falls outside that range.
    pub fn exit_code(&self) -> i32 {
        let underlying = match self {
            Error::CommandFailed { status, .. } | Error::ProcessFailure { status, .. } => *status,
            _ => None,
        };
        match underlying {
            Some(code) if code > 1 => code,
            _ => FATAL_EXIT_CODE,
        }
    }
}

fn status_text(status: &Option<i32>) -> String {
    describe_status(*status)
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim_end();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {trimmed}")
    }
}
