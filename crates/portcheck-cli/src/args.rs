use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use portcheck_core::rules::policy::NoSourcePolicy;
use portcheck_core::verify::Mode;

#[derive(Debug, Parser)]
#[command(
    name = "portcheck",
    version,
    about = "Check that Go packages vet or build cleanly on every supported platform",
    after_help = "The go command can be overridden with the GOCMD environment variable."
)]
pub struct Args {
    /// Use only first class ports
    #[arg(long)]
    pub first_class: bool,

    /// Verification mode
    #[arg(long, value_enum, default_value = "analyze")]
    pub mode: ModeArg,

    /// How to treat "no buildable Go source files" failures
    #[arg(long, value_enum, default_value = "report")]
    pub no_source: NoSourceArg,

    /// Number of platforms to verify concurrently
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    pub jobs: u16,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Write the report to a file instead of stderr/stdout
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Log each invocation (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,

    /// Package patterns, passed to the go command verbatim
    pub patterns: Vec<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    /// Static analysis with `go vet`
    #[value(alias = "vet")]
    Analyze,
    /// Build with `go build -o /dev/null` and cgo disabled
    #[value(alias = "build")]
    Compile,
}

impl From<ModeArg> for Mode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Analyze => Mode::Analyze,
            ModeArg::Compile => Mode::Compile,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum NoSourceArg {
    Report,
    Ignore,
    Fatal,
}

impl From<NoSourceArg> for NoSourcePolicy {
    fn from(p: NoSourceArg) -> Self {
        match p {
            NoSourceArg::Report => NoSourcePolicy::Report,
            NoSourceArg::Ignore => NoSourcePolicy::Ignore,
            NoSourceArg::Fatal => NoSourcePolicy::Fatal,
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
