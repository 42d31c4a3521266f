//! NES Trace Diff
//!
//! First-divergence comparison of NES CPU execution traces.
//!
//! Compares the per-instruction trace of an emulator under test against
//! a trusted reference log, field by field, and reports the first point
//! where the simulated processor state diverges.
//!
//! This crate provides the core implementation for the
//! `nes-trace-diff` CLI tool.
//!
//! ## Getting Started
//!
//! Most users should use the CLI:
//!
//! ```bash
//! nes-trace-diff out tests/nestest.log
//! ```

pub mod commands;
pub mod diff;
pub mod parser;
pub mod utils;
