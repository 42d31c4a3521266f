//! Trace parsing and snapshot schema.
//!
//! This module handles:
//! - Extracting a [`Snapshot`] from a candidate trace line
//! - Extracting a [`Snapshot`] from a reference log line
//! - Defining the snapshot schema and field order
//!
//! Each format gets its own dedicated parsing function returning a
//! structured snapshot or a descriptive [`ParseError`].

pub mod candidate;
pub mod reference;
pub mod schema;

// Re-export main types
pub use candidate::parse_candidate_line;
pub use reference::parse_reference_line;
pub use schema::{Field, Snapshot};

use crate::utils::error::ParseError;

/// Value between the first and second `:` of a `label:value` token
fn labeled_value(token: &str) -> Result<String, ParseError> {
    token
        .split(':')
        .nth(1)
        .map(str::to_string)
        .ok_or_else(|| ParseError::MissingValue {
            token: token.to_string(),
        })
}
