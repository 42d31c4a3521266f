//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while extracting a snapshot from one trace line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected at least {expected} tokens, found {found}")]
    TooFewTokens { expected: usize, found: usize },

    #[error("token `{token}` has no `:`-delimited value")]
    MissingValue { token: String },
}

/// Errors that can occur while comparing two traces
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompareError {
    #[error("malformed candidate line {line}: {source}")]
    CandidateLine { line: usize, source: ParseError },

    #[error("malformed reference line {line}: {source}")]
    ReferenceLine { line: usize, source: ParseError },
}
