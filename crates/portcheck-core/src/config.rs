//! Run configuration.
//!
//! The tool location is resolved once and passed explicitly to the
//! enumerator and verifier rather than living in a global.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::rules::policy::NoSourcePolicy;
use crate::verify::mode::Mode;

/// Environment variable overriding the tool to invoke.
pub const TOOL_ENV: &str = "GOCMD";

/// Tool invoked when `GOCMD` is unset.
pub const DEFAULT_TOOL: &str = "go";

/// Location and display name of the external toolchain command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    pub program: PathBuf,
    /// Base name of `program`, used in report headers and error messages.
    pub short_name: String,
}

impl ToolConfig {
    /// Use `program` exactly as given, without a search-path lookup.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        let program = program.into();
        let short_name = short_name(&program);
        Self {
            program,
            short_name,
        }
    }

    /// Resolve the tool from `GOCMD`, falling back to `go`.
    pub fn from_env() -> Self {
        Self::resolve(env::var_os(TOOL_ENV))
    }

    /// Resolve `value` (or the default tool) through the executable search path.
    ///
    /// A failed lookup is not reported here; the unresolved name is kept and
    /// the launch failure surfaces when the tool is first invoked.
    pub fn resolve(value: Option<OsString>) -> Self {
        let requested = value
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| OsString::from(DEFAULT_TOOL));

        match which::which(&requested) {
            Ok(path) => Self::new(path),
            Err(err) => {
                tracing::debug!(tool = ?requested, error = %err, "tool lookup deferred");
                Self::new(requested)
            }
        }
    }
}

fn short_name(program: &Path) -> String {
    program
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| program.display().to_string())
}

/// Parameters of one verification run.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub mode: Mode,
    /// Package patterns forwarded verbatim to the tool.
    pub patterns: Vec<String>,
    /// Restrict the matrix to first-class ports.
    pub first_class: bool,
    /// Concurrent verifications. 1 keeps the strictly sequential behaviour.
    pub jobs: usize,
    pub no_source: NoSourcePolicy,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            mode: Mode::Analyze,
            patterns: Vec::new(),
            first_class: false,
            jobs: 1,
            no_source: NoSourcePolicy::Report,
        }
    }
}
