use std::fmt;

use serde::{Deserialize, Serialize};

/// Where `compile` mode sends build output.
#[cfg(windows)]
pub const DEV_NULL: &str = "NUL";
#[cfg(not(windows))]
pub const DEV_NULL: &str = "/dev/null";

/// Verification performed for each platform.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Static analysis only (`go vet`).
    #[default]
    Analyze,
    /// Full build, output discarded (`go build -o /dev/null`).
    Compile,
}

impl Mode {
    /// Subcommand and mode-specific flags, before the package patterns.
    pub fn args(self) -> &'static [&'static str] {
        match self {
            Mode::Analyze => &["vet"],
            Mode::Compile => &["build", "-o", DEV_NULL],
        }
    }

    /// Extra environment beyond the target OS and architecture.
    ///
    /// Builds run with cgo disabled so only pure Go portability is checked.
    pub fn extra_env(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Mode::Analyze => &[],
            Mode::Compile => &[("CGO_ENABLED", "0")],
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Analyze => "analyze",
            Mode::Compile => "compile",
        })
    }
}
