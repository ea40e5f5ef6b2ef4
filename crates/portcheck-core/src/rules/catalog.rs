use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a row of the outcome classification table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    ExitSuccess,
    SilentFailure,
    PackageDiagnostic,
    NoBuildableSource,
    Unclassified,
}

impl RuleId {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleId::ExitSuccess => "exit-success",
            RuleId::SilentFailure => "silent-failure",
            RuleId::PackageDiagnostic => "package-diagnostic",
            RuleId::NoBuildableSource => "no-buildable-source",
            RuleId::Unclassified => "unclassified",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
