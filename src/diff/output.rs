//! Terminal output rendering for divergence reports.
//!
//! Human-readable diagnostics only; no machine-parseable output is
//! produced.

use super::schema::Divergence;

/// Render a divergence as the short diagnostic printed to stdout.
///
/// A field mismatch names the field and both observed values, then
/// closes with the reference program counter at the failure point.
pub fn render_divergence(divergence: &Divergence) -> String {
    match divergence {
        Divergence::Field(mismatch) => format!(
            "{} mismatch at line {}: candidate {}, reference {}\nError at {}\n",
            mismatch.field, mismatch.line, mismatch.candidate, mismatch.reference,
            mismatch.reference_pc
        ),
        Divergence::Length {
            candidate_lines,
            reference_lines,
        } => format!(
            "trace lengths differ: candidate has {} lines, reference has {} lines\n",
            candidate_lines, reference_lines
        ),
    }
}
