//! Per-platform verification.

use crate::config::ToolConfig;
use crate::error::Error;
use crate::platform::Platform;
use crate::process::{Exit, Invocation};
use crate::rules::catalog::RuleId;
use crate::rules::classify::{Verdict, classify};
use crate::rules::policy::NoSourcePolicy;
use crate::verify::mode::Mode;

/// Result of verifying one platform.
#[derive(Debug)]
pub enum Outcome {
    Clean,
    /// The tool reported a problem specific to this platform. `message` is
    /// the tool's stderr, unmodified.
    Diagnostic { rule: RuleId, message: Vec<u8> },
    /// The verification apparatus itself failed.
    Fatal(Error),
}

/// Runs the verification tool for one platform at a time.
///
/// Holds no per-run state, so one verifier can be shared across threads.
#[derive(Debug, Clone)]
pub struct Verifier {
    tool: ToolConfig,
    mode: Mode,
    patterns: Vec<String>,
    no_source: NoSourcePolicy,
}

impl Verifier {
    pub fn new(
        tool: ToolConfig,
        mode: Mode,
        patterns: Vec<String>,
        no_source: NoSourcePolicy,
    ) -> Self {
        Self {
            tool,
            mode,
            patterns,
            no_source,
        }
    }

    pub fn tool(&self) -> &ToolConfig {
        &self.tool
    }

    /// Build the invocation for `platform` without running it.
    pub fn invocation(&self, platform: &Platform) -> Invocation {
        let mut inv = Invocation::new(&self.tool)
            .args(self.mode.args().iter().copied())
            .args(self.patterns.iter().cloned())
            .env("GOOS", platform.os())
            .env("GOARCH", platform.arch());
        for (key, value) in self.mode.extra_env() {
            inv = inv.env(*key, *value);
        }
        inv
    }

    pub fn verify(&self, platform: &Platform) -> Outcome {
        let inv = self.invocation(platform);
        match inv.run() {
            Ok(exit) => self.outcome(platform, &inv, exit),
            Err(err) => Outcome::Fatal(err),
        }
    }

    fn outcome(&self, platform: &Platform, inv: &Invocation, exit: Exit) -> Outcome {
        let c = classify(&exit, self.no_source);
        tracing::debug!(%platform, status = ?exit.status, rule = %c.rule, "classified");

        match c.verdict {
            Verdict::Clean => Outcome::Clean,
            Verdict::Diagnostic => Outcome::Diagnostic {
                rule: c.rule,
                message: exit.stderr,
            },
            Verdict::Fatal => Outcome::Fatal(Error::ProcessFailure {
                command: inv.describe(),
                platform: platform.clone(),
                rule: c.rule,
                status: exit.status,
                stderr: exit.stderr_lossy(),
            }),
        }
    }
}
