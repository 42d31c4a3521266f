//! Compare command implementation.
//! Orchestrates reading both traces and reporting the first divergence.

use anyhow::{Context, Result};
use log::debug;
use std::fs;

use super::models::CompareArgs;
use crate::diff::{compare_traces, render_divergence, Divergence};

/// Execute the compare command
///
/// Reads both traces in one forward pass, walks them in lockstep and
/// prints the diagnostic for the first divergence, if any. A run with no
/// divergence produces no output.
pub fn execute_compare(args: CompareArgs) -> Result<Option<Divergence>> {
    // Step 1: Load both traces
    let candidate = fs::read_to_string(&args.candidate).with_context(|| {
        format!("Failed to read candidate trace {}", args.candidate.display())
    })?;
    let reference = fs::read_to_string(&args.reference).with_context(|| {
        format!("Failed to read reference trace {}", args.reference.display())
    })?;

    debug!(
        "Comparing {} against {}",
        args.candidate.display(),
        args.reference.display()
    );

    // Step 2: Walk both traces in lockstep
    let divergence = compare_traces(candidate.lines(), reference.lines())?;

    // Step 3: Report the first divergence found
    if let Some(divergence) = &divergence {
        print!("{}", render_divergence(divergence));
    }

    Ok(divergence)
}
