//! NES Trace Diff CLI
//!
//! A debugging aid for emulator development: compares the CPU trace of
//! the emulator under test against a trusted reference log and reports
//! the first divergence in processor state.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use nes_trace_diff::commands::{execute_compare, CompareArgs};
use nes_trace_diff::utils::config::{DEFAULT_CANDIDATE_LOG, DEFAULT_REFERENCE_LOG};

/// Compare two NES CPU execution traces and report the first divergence
#[derive(Parser, Debug)]
#[command(name = "nes-trace-diff")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path of the candidate emulator's trace log
    #[arg(default_value = DEFAULT_CANDIDATE_LOG)]
    candidate: PathBuf,

    /// Path of the trusted reference log
    #[arg(default_value = DEFAULT_REFERENCE_LOG)]
    reference: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute comparison
    let args = CompareArgs {
        candidate: cli.candidate,
        reference: cli.reference,
    };

    let divergence = execute_compare(args)?;

    // Exit code signaling: silent success is 0, any reported divergence is 1
    if divergence.is_some() {
        std::process::exit(1);
    }

    Ok(())
}
