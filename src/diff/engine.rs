//! Core comparison engine.
//! Walks both traces in lockstep and stops at the first divergence.

use log::debug;

use crate::parser::schema::{Field, Snapshot};
use crate::parser::{parse_candidate_line, parse_reference_line};
use crate::utils::error::CompareError;

use super::schema::{Divergence, FieldMismatch};

/// Compare two traces line by line, pairing them positionally.
///
/// Both sides are consumed in a single forward pass; nothing is buffered
/// beyond the current line pair.
///
/// # Arguments
/// * `candidate` - Lines from the emulator under test
/// * `reference` - Lines from the trusted reference log
///
/// # Returns
/// `Ok(None)` when both traces exhaust together with every pair agreeing,
/// `Ok(Some(_))` at the first divergence. Later pairs are never examined.
///
/// # Errors
/// * `CompareError::CandidateLine` / `CompareError::ReferenceLine` - A
///   line could not be parsed; the comparison aborts without recovery
///
/// # Example
/// ```ignore
/// use nes_trace_diff::diff::compare_traces;
///
/// let candidate = std::fs::read_to_string("out")?;
/// let reference = std::fs::read_to_string("tests/nestest.log")?;
/// let divergence = compare_traces(candidate.lines(), reference.lines())?;
/// ```
pub fn compare_traces<'a, C, R>(candidate: C, reference: R) -> Result<Option<Divergence>, CompareError>
where
    C: IntoIterator<Item = &'a str>,
    R: IntoIterator<Item = &'a str>,
{
    let mut candidate = candidate.into_iter();
    let mut reference = reference.into_iter();
    let mut line = 0usize;

    loop {
        line += 1;
        match (candidate.next(), reference.next()) {
            (None, None) => {
                debug!("traces agree across {} line pairs", line - 1);
                return Ok(None);
            }

            (Some(cand), Some(refr)) => {
                let candidate_snap = parse_candidate_line(cand)
                    .map_err(|source| CompareError::CandidateLine { line, source })?;
                let reference_snap = parse_reference_line(refr)
                    .map_err(|source| CompareError::ReferenceLine { line, source })?;

                if let Some(mismatch) = compare_snapshots(&candidate_snap, &reference_snap, line) {
                    return Ok(Some(Divergence::Field(mismatch)));
                }
            }

            // One side ended first. Count what the longer side still
            // holds and report both totals instead of attempting field
            // extraction on an absent line.
            (Some(_), None) => {
                return Ok(Some(Divergence::Length {
                    candidate_lines: line + candidate.count(),
                    reference_lines: line - 1,
                }));
            }
            (None, Some(_)) => {
                return Ok(Some(Divergence::Length {
                    candidate_lines: line - 1,
                    reference_lines: line + reference.count(),
                }));
            }
        }
    }
}

/// Compare one snapshot pair field by field in priority order.
///
/// Strict string equality per field; the first unequal field wins and
/// the rest are not examined.
pub(super) fn compare_snapshots(
    candidate: &Snapshot,
    reference: &Snapshot,
    line: usize,
) -> Option<FieldMismatch> {
    for field in Field::COMPARE_ORDER {
        let cand = candidate.field(field);
        let refr = reference.field(field);
        if cand != refr {
            return Some(FieldMismatch {
                field,
                line,
                candidate: cand.to_string(),
                reference: refr.to_string(),
                reference_pc: reference.pc.clone(),
            });
        }
    }
    None
}
