//! Target matrix enumeration.
//!
//! The toolchain is the authority on which ports exist; we ask it through
//! `go tool dist list` and keep its order.

use crate::config::ToolConfig;
use crate::error::{Error, Result};
use crate::platform::Platform;
use crate::platform::catalog::is_first_class;
use crate::process::Invocation;

/// Subcommand asking the toolchain for its supported ports.
pub const DIST_LIST_ARGS: &[&str] = &["tool", "dist", "list"];

/// Query the toolchain for supported platforms, optionally keeping only
/// first-class ports.
///
/// Any failure here is fatal: without a trustworthy matrix there is nothing
/// to verify.
pub fn list_platforms(tool: &ToolConfig, first_class: bool) -> Result<Vec<Platform>> {
    let inv = Invocation::new(tool).args(DIST_LIST_ARGS);
    let command = inv.describe();
    let stdout = inv.output()?;

    let mut platforms = parse_dist_list(&command, &stdout)?;
    if first_class {
        platforms = filter_first_class(platforms);
    }

    tracing::debug!(count = platforms.len(), first_class, "target matrix enumerated");
    Ok(platforms)
}

/// Parse newline-delimited `os/arch` tokens. Blank lines are skipped.
pub fn parse_dist_list(command: &str, stdout: &[u8]) -> Result<Vec<Platform>> {
    let text = String::from_utf8_lossy(stdout);

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.parse::<Platform>()
                .map_err(|_| Error::MalformedAuthorityOutput {
                    command: command.to_string(),
                    line: line.to_string(),
                })
        })
        .collect()
}

/// Keep first-class ports, preserving relative order.
pub fn filter_first_class(mut platforms: Vec<Platform>) -> Vec<Platform> {
    platforms.retain(is_first_class);
    platforms
}
