use serde::{Serialize, Serializer};

use crate::SCHEMA_VERSION;
use crate::platform::Platform;
use crate::rules::catalog::RuleId;
use crate::verify::mode::Mode;

/// Outcome of a completed run.
///
/// Only produced when every platform was verified without a fatal error.
/// Diagnostics are in target-matrix order.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub schema_version: String,
    pub tool: ToolInfo,
    pub mode: Mode,
    pub first_class: bool,
    /// Number of platforms verified.
    pub platform_count: usize,
    pub diagnostics: Vec<Diagnostic>,
    pub exit_code: i32,
}

impl Report {
    pub fn new(
        tool: ToolInfo,
        mode: Mode,
        first_class: bool,
        platform_count: usize,
        diagnostics: Vec<Diagnostic>,
    ) -> Self {
        let exit_code = if diagnostics.is_empty() { 0 } else { 1 };
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            tool,
            mode,
            first_class,
            platform_count,
            diagnostics,
            exit_code,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
    /// Short name of the verification tool, e.g. `go`.
    pub verifier: String,
}

/// One platform's diagnostic as reported by the tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub platform: Platform,
    pub rule: RuleId,
    #[serde(serialize_with = "lossy_text")]
    pub message: Vec<u8>,
}

fn lossy_text<S: Serializer>(bytes: &[u8], s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&String::from_utf8_lossy(bytes))
}
