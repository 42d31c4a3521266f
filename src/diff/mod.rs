//! Trace comparison and divergence reporting.
//!
//! This module walks two traces in lockstep (line *i* of each paired
//! together) and produces the first [`Divergence`] found, if any.
//!
//! # Example
//! ```ignore
//! use nes_trace_diff::diff::{compare_traces, render_divergence};
//!
//! let candidate = std::fs::read_to_string("out")?;
//! let reference = std::fs::read_to_string("tests/nestest.log")?;
//!
//! if let Some(divergence) = compare_traces(candidate.lines(), reference.lines())? {
//!     print!("{}", render_divergence(&divergence));
//! }
//! ```

mod engine;
mod output;
mod schema;

// Public API exports
pub use engine::compare_traces;
pub use output::render_divergence;
pub use schema::{Divergence, FieldMismatch};
