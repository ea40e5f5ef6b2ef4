use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use portcheck_core::error::FATAL_EXIT_CODE;
use portcheck_core::report::render;
use portcheck_core::{CheckOptions, TOOL_NAME, ToolConfig, check};

mod args;

use args::{Args, OutputFormat};

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let code = match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{TOOL_NAME}: {err:#}");
            err.downcast_ref::<portcheck_core::Error>()
                .map(portcheck_core::Error::exit_code)
                .unwrap_or(FATAL_EXIT_CODE)
        }
    };

    std::process::exit(code);
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> Result<i32> {
    let tool = ToolConfig::from_env();
    let opts = CheckOptions {
        mode: args.mode.into(),
        patterns: args.patterns.clone(),
        first_class: args.first_class,
        jobs: usize::from(args.jobs),
        no_source: args.no_source.into(),
    };
    tracing::debug!(tool = %tool.program.display(), ?opts, "starting");

    // Text to the terminal streams as results settle; everything else is
    // written once the run is complete.
    let stream = matches!(args.format, OutputFormat::Text) && args.out.is_none();

    let report = check(&tool, &opts, |i, d| {
        if stream {
            render::write_diagnostic(&mut io::stderr().lock(), i, d, &tool.short_name)
        } else {
            Ok(())
        }
    })?;

    if !stream {
        let output = match args.format {
            OutputFormat::Json => {
                let mut json = serde_json::to_vec_pretty(&report)?;
                json.push(b'\n');
                json
            }
            OutputFormat::Text => render::render_text(&report),
        };

        match &args.out {
            Some(path) => std::fs::write(path, &output)
                .with_context(|| format!("failed to write report: {}", path.display()))?,
            None => io::stdout().lock().write_all(&output)?,
        }
    }

    Ok(report.exit_code)
}
