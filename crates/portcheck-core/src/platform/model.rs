use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A verification target: an operating system and architecture pair.
///
/// The canonical text form is `os/arch`; equality, display and
/// serialization all go through it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Platform {
    os: String,
    arch: String,
}

/// Rejected `os/arch` text. Carries the offending input verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid platform {0:?}: expected os/arch")]
pub struct InvalidPlatform(pub String);

impl Platform {
    pub fn new(os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            arch: arch.into(),
        }
    }

    pub fn os(&self) -> &str {
        &self.os
    }

    pub fn arch(&self) -> &str {
        &self.arch
    }
}

impl FromStr for Platform {
    type Err = InvalidPlatform;

    /// Exactly two non-empty fields separated by `/`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split('/');
        match (fields.next(), fields.next(), fields.next()) {
            (Some(os), Some(arch), None) if !os.is_empty() && !arch.is_empty() => {
                Ok(Self::new(os, arch))
            }
            _ => Err(InvalidPlatform(s.to_string())),
        }
    }
}

impl TryFrom<String> for Platform {
    type Error = InvalidPlatform;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Platform> for String {
    fn from(p: Platform) -> Self {
        p.to_string()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)
    }
}
