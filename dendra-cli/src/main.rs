//! CLI entry point for the dendra BPT builder.
//!
//! Parses arguments with clap, runs the canonical BPT construction, renders
//! the summary to stdout, and maps failures to exit codes. Logging comes up
//! before any work so every later step can emit structured diagnostics.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

use dendra_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging,
};

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        // tracing is not up yet; this is the one place stderr is written
        // directly.
        #[expect(clippy::print_stderr, reason = "diagnostic before tracing exists")]
        {
            eprintln!("failed to initialize logging: {err}");
        }
        return ExitCode::FAILURE;
    }

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<CliError>().and_then(CliError::code) {
                Some(code) => error!(error = %err, code, "command execution failed"),
                None => error!(error = %err, "command execution failed"),
            }
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let summary = run_cli(cli).context("failed to execute command")?;

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_summary(&summary, &mut writer).context("failed to render summary")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}
