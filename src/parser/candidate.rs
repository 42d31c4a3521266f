//! Parser for the candidate emulator's trace format.
//!
//! One whitespace-delimited line per instruction:
//!
//! ```text
//! A9(LDA) PC:C000 A:00 X:00 Y:00 Flags:24 SP:FD CYC:7
//! ```
//!
//! Token 0 carries the opcode with the mnemonic in parentheses; tokens
//! 1-7 are `label:value` pairs at fixed positions.

use super::labeled_value;
use super::schema::Snapshot;
use crate::utils::config::{
    CANDIDATE_ACC_TOKEN, CANDIDATE_CYC_TOKEN, CANDIDATE_MNEMONIC_TOKEN, CANDIDATE_PC_TOKEN,
    CANDIDATE_SP_TOKEN, CANDIDATE_STATUS_TOKEN, CANDIDATE_X_TOKEN, CANDIDATE_Y_TOKEN,
};
use crate::utils::error::ParseError;

/// Extract a snapshot from one candidate trace line
///
/// # Errors
/// * `ParseError::TooFewTokens` - Line has fewer tokens than the format requires
/// * `ParseError::MissingValue` - A field token has no `:`-delimited value
pub fn parse_candidate_line(line: &str) -> Result<Snapshot, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    if tokens.len() <= CANDIDATE_CYC_TOKEN {
        return Err(ParseError::TooFewTokens {
            expected: CANDIDATE_CYC_TOKEN + 1,
            found: tokens.len(),
        });
    }

    Ok(Snapshot {
        mnemonic: extract_mnemonic(tokens[CANDIDATE_MNEMONIC_TOKEN]),
        pc: labeled_value(tokens[CANDIDATE_PC_TOKEN])?,
        a: labeled_value(tokens[CANDIDATE_ACC_TOKEN])?,
        x: labeled_value(tokens[CANDIDATE_X_TOKEN])?,
        y: labeled_value(tokens[CANDIDATE_Y_TOKEN])?,
        p: labeled_value(tokens[CANDIDATE_STATUS_TOKEN])?,
        sp: labeled_value(tokens[CANDIDATE_SP_TOKEN])?,
        cyc: labeled_value(tokens[CANDIDATE_CYC_TOKEN])?,
    })
}

/// Text between the first `(` and the next `)`, e.g. `A9(LDA)` -> `LDA`.
///
/// The mnemonic is informational and never compared, so a token without
/// parentheses yields `None` rather than an error.
fn extract_mnemonic(token: &str) -> Option<String> {
    let (_, rest) = token.split_once('(')?;
    let (mnemonic, _) = rest.split_once(')')?;
    Some(mnemonic.to_string())
}
