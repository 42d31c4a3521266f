//! Schema definitions for divergence reports.
//!
//! Defines the structures that represent the first disagreement found
//! between the two traces.

use crate::parser::schema::Field;

/// First field-level disagreement between two paired snapshots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMismatch {
    /// Which state field disagreed
    pub field: Field,

    /// 1-based line number of the offending pair
    pub line: usize,

    /// Value logged by the candidate emulator
    pub candidate: String,

    /// Value logged by the reference emulator
    pub reference: String,

    /// Reference program counter at the failure point
    pub reference_pc: String,
}

/// First point at which the two traces stop agreeing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Divergence {
    /// A compared field disagreed at some line pair
    Field(FieldMismatch),

    /// One trace ended before the other, with every common pair agreeing
    Length {
        candidate_lines: usize,
        reference_lines: usize,
    },
}
