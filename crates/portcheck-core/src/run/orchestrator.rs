//! Run orchestration.
//!
//! Enumerates the target matrix once, verifies each platform, and folds the
//! outcomes into a `Report` in matrix order. The first fatal outcome ends
//! the run; diagnostics already emitted for earlier platforms stay emitted.
//!
//! With `jobs > 1` verifications run on a scoped worker pool. Each platform
//! owns one result slot; aggregation still walks the slots in matrix order
//! on the calling thread, so output is identical to a sequential run.

use std::io;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread;

use crate::TOOL_NAME;
use crate::config::{CheckOptions, ToolConfig};
use crate::error::Result;
use crate::platform::Platform;
use crate::platform::enumerate::list_platforms;
use crate::report::model::{Diagnostic, Report, ToolInfo};
use crate::verify::{Outcome, Verifier};

/// Verify every platform the toolchain supports.
///
/// `emit` is called once per diagnostic, in matrix order, as soon as the
/// diagnostic's position is settled. Its index is the diagnostic's position
/// in the final report.
pub fn check<F>(tool: &ToolConfig, opts: &CheckOptions, emit: F) -> Result<Report>
where
    F: FnMut(usize, &Diagnostic) -> io::Result<()>,
{
    let matrix = list_platforms(tool, opts.first_class)?;
    let verifier = Verifier::new(
        tool.clone(),
        opts.mode,
        opts.patterns.clone(),
        opts.no_source,
    );

    let diagnostics = run_matrix(&verifier, &matrix, opts.jobs, emit)?;

    tracing::info!(
        platforms = matrix.len(),
        diagnostics = diagnostics.len(),
        mode = %opts.mode,
        "run complete"
    );

    Ok(Report::new(
        ToolInfo {
            name: TOOL_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            verifier: tool.short_name.clone(),
        },
        opts.mode,
        opts.first_class,
        matrix.len(),
        diagnostics,
    ))
}

/// Verify `matrix` with up to `jobs` concurrent invocations.
pub fn run_matrix<F>(
    verifier: &Verifier,
    matrix: &[Platform],
    jobs: usize,
    emit: F,
) -> Result<Vec<Diagnostic>>
where
    F: FnMut(usize, &Diagnostic) -> io::Result<()>,
{
    if jobs <= 1 || matrix.len() <= 1 {
        // Lazy: nothing after a fatal outcome is ever invoked.
        let outcomes = matrix.iter().map(|platform| {
            tracing::debug!(%platform, "verifying");
            (platform, verifier.verify(platform))
        });
        return aggregate(outcomes, emit);
    }

    let slots = verify_parallel(verifier, matrix, jobs);
    // Unfilled slots only ever follow a fatal outcome.
    let outcomes = matrix
        .iter()
        .zip(slots)
        .map_while(|(platform, slot)| slot.map(|outcome| (platform, outcome)));
    aggregate(outcomes, emit)
}

fn aggregate<'p, I, F>(outcomes: I, mut emit: F) -> Result<Vec<Diagnostic>>
where
    I: Iterator<Item = (&'p Platform, Outcome)>,
    F: FnMut(usize, &Diagnostic) -> io::Result<()>,
{
    let mut diagnostics = Vec::new();

    for (platform, outcome) in outcomes {
        match outcome {
            Outcome::Clean => {}
            Outcome::Diagnostic { rule, message } => {
                let diagnostic = Diagnostic {
                    platform: platform.clone(),
                    rule,
                    message,
                };
                emit(diagnostics.len(), &diagnostic)?;
                diagnostics.push(diagnostic);
            }
            Outcome::Fatal(err) => {
                tracing::debug!(%platform, error = %err, "aborting run");
                return Err(err);
            }
        }
    }

    Ok(diagnostics)
}

fn verify_parallel(verifier: &Verifier, matrix: &[Platform], jobs: usize) -> Vec<Option<Outcome>> {
    let next = AtomicUsize::new(0);
    let stop = AtomicBool::new(false);
    let slots: Vec<Mutex<Option<Outcome>>> = matrix.iter().map(|_| Mutex::new(None)).collect();

    thread::scope(|scope| {
        for _ in 0..jobs.min(matrix.len()) {
            scope.spawn(|| {
                loop {
                    // A claimed index is always run, so unfilled slots are
                    // exactly the indices past the last claim.
                    if stop.load(Ordering::Acquire) {
                        return;
                    }
                    let idx = next.fetch_add(1, Ordering::Relaxed);
                    let Some(platform) = matrix.get(idx) else {
                        return;
                    };

                    tracing::debug!(%platform, "verifying");
                    let outcome = verifier.verify(platform);
                    if matches!(outcome, Outcome::Fatal(_)) {
                        stop.store(true, Ordering::Release);
                    }
                    if let Ok(mut slot) = slots[idx].lock() {
                        *slot = Some(outcome);
                    }
                }
            });
        }
    });

    slots
        .into_iter()
        .map(|slot| slot.into_inner().unwrap_or_else(|e| e.into_inner()))
        .collect()
}
