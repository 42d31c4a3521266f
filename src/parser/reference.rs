//! Parser for the trusted reference log (nestest-style).
//!
//! One whitespace-delimited line per instruction:
//!
//! ```text
//! C000  4C F5 C5  JMP $C5F5  A:00 X:00 Y:00 P:24 SP:FD PPU:0, 21 CYC:7
//! ```
//!
//! The program counter is the bare first token. The register column sits
//! at fixed offsets from the end of the line; the PPU timing tokens in
//! between are ignored.

use super::labeled_value;
use super::schema::Snapshot;
use crate::utils::config::{
    REFERENCE_ACC_FROM_END, REFERENCE_CYC_FROM_END, REFERENCE_SP_FROM_END,
    REFERENCE_STATUS_FROM_END, REFERENCE_X_FROM_END, REFERENCE_Y_FROM_END,
};
use crate::utils::error::ParseError;

/// Extract a snapshot from one reference log line
///
/// # Errors
/// * `ParseError::TooFewTokens` - Line is too short to hold the program
///   counter plus the trailing register column
/// * `ParseError::MissingValue` - A register token has no `:`-delimited value
pub fn parse_reference_line(line: &str) -> Result<Snapshot, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    // Program counter plus the eight trailing tokens
    if tokens.len() < REFERENCE_ACC_FROM_END + 1 {
        return Err(ParseError::TooFewTokens {
            expected: REFERENCE_ACC_FROM_END + 1,
            found: tokens.len(),
        });
    }

    Ok(Snapshot {
        mnemonic: None,
        pc: tokens[0].to_string(),
        a: labeled_value(from_end(&tokens, REFERENCE_ACC_FROM_END))?,
        x: labeled_value(from_end(&tokens, REFERENCE_X_FROM_END))?,
        y: labeled_value(from_end(&tokens, REFERENCE_Y_FROM_END))?,
        p: labeled_value(from_end(&tokens, REFERENCE_STATUS_FROM_END))?,
        sp: labeled_value(from_end(&tokens, REFERENCE_SP_FROM_END))?,
        cyc: labeled_value(from_end(&tokens, REFERENCE_CYC_FROM_END))?,
    })
}

/// Token at offset `n` from the end of the line
fn from_end<'a>(tokens: &[&'a str], n: usize) -> &'a str {
    tokens[tokens.len() - n]
}
