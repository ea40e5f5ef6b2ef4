//! Outcome classification for verification runs.
//!
//! The external tool has no structured error contract, so a finished run
//! is mapped to a verdict with an ordered rule table over its exit status
//! and the leading bytes of its stderr. The first rule that applies wins:
//!
//!   1. exit-success        status 0                 → Clean
//!   2. silent-failure      non-zero, empty stderr   → Fatal
//!   3. package-diagnostic  stderr starts with `#`   → Diagnostic
//!   4. no-buildable-source stderr starts with `package` → per `NoSourcePolicy`
//!   5. unclassified        anything else            → Fatal
//!
//! Launch failures never get here; they are fatal before classification.
//! Adding a rule means adding a row to `RULES` and an arm to `verdict_for`.

use crate::process::Exit;
use crate::rules::catalog::RuleId;
use crate::rules::policy::NoSourcePolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Clean,
    Diagnostic,
    Fatal,
}

/// The rule that matched and what it decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub rule: RuleId,
    pub verdict: Verdict,
}

struct Rule {
    id: RuleId,
    applies: fn(&Exit) -> bool,
}

const RULES: &[Rule] = &[
    Rule {
        id: RuleId::ExitSuccess,
        applies: exited_zero,
    },
    Rule {
        id: RuleId::SilentFailure,
        applies: stderr_empty,
    },
    Rule {
        id: RuleId::PackageDiagnostic,
        applies: package_header,
    },
    Rule {
        id: RuleId::NoBuildableSource,
        applies: no_buildable_source,
    },
    Rule {
        id: RuleId::Unclassified,
        applies: always,
    },
];

fn exited_zero(exit: &Exit) -> bool {
    exit.success()
}

fn stderr_empty(exit: &Exit) -> bool {
    exit.stderr.is_empty()
}

fn package_header(exit: &Exit) -> bool {
    exit.stderr.starts_with(b"#")
}

fn no_buildable_source(exit: &Exit) -> bool {
    exit.stderr.starts_with(b"package")
}

fn always(_: &Exit) -> bool {
    true
}

/// Return the first rule in table order that applies to `exit`.
pub fn matched_rule(exit: &Exit) -> RuleId {
    RULES
        .iter()
        .find(|rule| (rule.applies)(exit))
        .map(|rule| rule.id)
        .unwrap_or(RuleId::Unclassified)
}

fn verdict_for(rule: RuleId, policy: NoSourcePolicy) -> Verdict {
    match rule {
        RuleId::ExitSuccess => Verdict::Clean,
        RuleId::SilentFailure => Verdict::Fatal,
        RuleId::PackageDiagnostic => Verdict::Diagnostic,
        RuleId::NoBuildableSource => match policy {
            NoSourcePolicy::Report => Verdict::Diagnostic,
            NoSourcePolicy::Ignore => Verdict::Clean,
            NoSourcePolicy::Fatal => Verdict::Fatal,
        },
        RuleId::Unclassified => Verdict::Fatal,
    }
}

/// Classify a finished verification run.
///
/// Pure function of `(status, stderr, policy)`.
pub fn classify(exit: &Exit, policy: NoSourcePolicy) -> Classification {
    let rule = matched_rule(exit);
    Classification {
        rule,
        verdict: verdict_for(rule, policy),
    }
}
