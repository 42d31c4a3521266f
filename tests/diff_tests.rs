//! Integration tests for the diff module.
//!
//! Drives the public comparison API end to end with in-memory traces,
//! covering the first-mismatch contract, field priority, exact string
//! comparison and length divergence.

use pretty_assertions::assert_eq;

use nes_trace_diff::diff::{compare_traces, render_divergence, Divergence};
use nes_trace_diff::parser::Field;

// ============================================================================
// SHARED TEST HELPERS
// ============================================================================

/// Candidate trace line with the given register values
fn candidate_line(pc: &str, a: &str, x: &str, y: &str, p: &str, sp: &str, cyc: &str) -> String {
    format!("A9(LDA) PC:{pc} A:{a} X:{x} Y:{y} Flags:{p} SP:{sp} CYC:{cyc}")
}

/// Reference log line with the given register values
fn reference_line(pc: &str, a: &str, x: &str, y: &str, p: &str, sp: &str, cyc: &str) -> String {
    format!("{pc}  A9 00  LDA #$00  A:{a} X:{x} Y:{y} P:{p} SP:{sp} PPU:0, 21 CYC:{cyc}")
}

/// A trace pair agreeing on every field
fn agreeing_pair(pc: &str, cyc: &str) -> (String, String) {
    (
        candidate_line(pc, "00", "00", "00", "24", "FD", cyc),
        reference_line(pc, "00", "00", "00", "24", "FD", cyc),
    )
}

fn run(candidate: &[String], reference: &[String]) -> Option<Divergence> {
    compare_traces(
        candidate.iter().map(String::as_str),
        reference.iter().map(String::as_str),
    )
    .unwrap()
}

// ============================================================================
// FIRST-MISMATCH CONTRACT
// ============================================================================

#[test]
fn test_identical_traces_complete_silently() {
    let pairs: Vec<(String, String)> = vec![
        agreeing_pair("C000", "7"),
        agreeing_pair("C5F5", "10"),
        agreeing_pair("C5F6", "12"),
    ];
    let candidate: Vec<String> = pairs.iter().map(|(c, _)| c.clone()).collect();
    let reference: Vec<String> = pairs.iter().map(|(_, r)| r.clone()).collect();

    assert_eq!(run(&candidate, &reference), None);
}

#[test]
fn test_first_mismatch_is_reported_and_later_pairs_are_skipped() {
    let (c1, r1) = agreeing_pair("C000", "7");
    let c2 = candidate_line("C010", "00", "00", "00", "24", "FD", "10");
    let r2 = reference_line("C011", "00", "00", "00", "24", "FD", "10");
    // Later pairs also disagree, but must never be looked at
    let c3 = candidate_line("C012", "FF", "00", "00", "24", "FD", "13");
    let r3 = reference_line("C013", "EE", "00", "00", "24", "FD", "13");

    let divergence = run(&[c1, c2, c3], &[r1, r2, r3]);

    match divergence {
        Some(Divergence::Field(mismatch)) => {
            assert_eq!(mismatch.field, Field::Pc);
            assert_eq!(mismatch.line, 2);
            assert_eq!(mismatch.candidate, "C010");
            assert_eq!(mismatch.reference, "C011");
            assert_eq!(mismatch.reference_pc, "C011");
        }
        other => panic!("expected PC mismatch at line 2, got {:?}", other),
    }
}

#[test]
fn test_field_priority_within_a_pair() {
    // PC and A both disagree; PC has priority
    let cand = vec![candidate_line("C010", "5A", "00", "00", "24", "FD", "7")];
    let refr = vec![reference_line("C011", "3B", "00", "00", "24", "FD", "7")];

    match run(&cand, &refr) {
        Some(Divergence::Field(mismatch)) => assert_eq!(mismatch.field, Field::Pc),
        other => panic!("expected PC mismatch, got {:?}", other),
    }
}

#[test]
fn test_cycle_count_is_compared_last() {
    // Only the cycle count disagrees
    let cand = vec![candidate_line("C000", "00", "00", "00", "24", "FD", "7")];
    let refr = vec![reference_line("C000", "00", "00", "00", "24", "FD", "9")];

    match run(&cand, &refr) {
        Some(Divergence::Field(mismatch)) => {
            assert_eq!(mismatch.field, Field::Cyc);
            assert_eq!(mismatch.candidate, "7");
            assert_eq!(mismatch.reference, "9");
        }
        other => panic!("expected CYC mismatch, got {:?}", other),
    }
}

#[test]
fn test_textual_comparison_without_numeric_coercion() {
    // Numerically equal, textually different
    let cand = vec![candidate_line("C000", "08", "00", "00", "24", "FD", "7")];
    let refr = vec![reference_line("C000", "8", "00", "00", "24", "FD", "7")];

    match run(&cand, &refr) {
        Some(Divergence::Field(mismatch)) => {
            assert_eq!(mismatch.field, Field::A);
            assert_eq!(mismatch.candidate, "08");
            assert_eq!(mismatch.reference, "8");
        }
        other => panic!("expected A mismatch, got {:?}", other),
    }
}

#[test]
fn test_case_difference_is_a_real_mismatch() {
    let cand = vec![candidate_line("c000", "00", "00", "00", "24", "FD", "7")];
    let refr = vec![reference_line("C000", "00", "00", "00", "24", "FD", "7")];

    match run(&cand, &refr) {
        Some(Divergence::Field(mismatch)) => assert_eq!(mismatch.field, Field::Pc),
        other => panic!("expected PC mismatch, got {:?}", other),
    }
}

// ============================================================================
// LENGTH DIVERGENCE
// ============================================================================

#[test]
fn test_short_reference_reports_length_divergence() {
    let (c1, r1) = agreeing_pair("C000", "7");
    let (c2, _) = agreeing_pair("C002", "10");

    let divergence = run(&[c1, c2], &[r1]);

    assert_eq!(
        divergence,
        Some(Divergence::Length {
            candidate_lines: 2,
            reference_lines: 1,
        })
    );
}

#[test]
fn test_mismatch_before_trace_end_wins_over_length() {
    let c1 = candidate_line("C000", "00", "01", "00", "24", "FD", "7");
    let r1 = reference_line("C000", "00", "02", "00", "24", "FD", "7");
    let (_, r2) = agreeing_pair("C002", "10");

    match run(&[c1], &[r1, r2]) {
        Some(Divergence::Field(mismatch)) => {
            assert_eq!(mismatch.field, Field::X);
            assert_eq!(mismatch.line, 1);
        }
        other => panic!("expected X mismatch, got {:?}", other),
    }
}

// ============================================================================
// DIAGNOSTIC RENDERING
// ============================================================================

#[test]
fn test_rendered_diagnostic_names_field_values_and_reference_pc() {
    let cand = vec![candidate_line("C62E", "00", "00", "00", "65", "FB", "3")];
    let refr = vec![reference_line("C62E", "00", "00", "00", "E5", "FB", "3")];

    let divergence = run(&cand, &refr).expect("status flags disagree");
    let rendered = render_divergence(&divergence);

    assert_eq!(
        rendered,
        "P mismatch at line 1: candidate 65, reference E5\nError at C62E\n"
    );
}
