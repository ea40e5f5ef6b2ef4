use serde::{Deserialize, Serialize};

/// How to treat a tool run that found no buildable source files for a
/// platform.
///
/// That message is ambiguous: the package may exclude the platform on
/// purpose through build constraints, or it may genuinely fail to port.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NoSourcePolicy {
    /// Report it as a diagnostic for the platform.
    #[default]
    Report,
    /// Treat the platform as clean.
    Ignore,
    /// Abort the run.
    Fatal,
}
