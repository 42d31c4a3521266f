//! Configuration and constants for the CLI.

/// Conventional path of the candidate emulator's trace log
pub const DEFAULT_CANDIDATE_LOG: &str = "out";

/// Conventional path of the trusted reference log
pub const DEFAULT_REFERENCE_LOG: &str = "tests/nestest.log";

// Token positions for the candidate trace format.
// One line per instruction:
//   A9(LDA) PC:C000 A:00 X:00 Y:00 Flags:24 SP:FD CYC:7
pub const CANDIDATE_MNEMONIC_TOKEN: usize = 0;
pub const CANDIDATE_PC_TOKEN: usize = 1;
pub const CANDIDATE_ACC_TOKEN: usize = 2;
pub const CANDIDATE_X_TOKEN: usize = 3;
pub const CANDIDATE_Y_TOKEN: usize = 4;
pub const CANDIDATE_STATUS_TOKEN: usize = 5;
pub const CANDIDATE_SP_TOKEN: usize = 6;
pub const CANDIDATE_CYC_TOKEN: usize = 7;

// Token positions for the reference trace format, counted from the end of
// the line. The disassembly column between the program counter and the
// trailing register column has a variable token count, the register
// column itself does not.
pub const REFERENCE_ACC_FROM_END: usize = 8;
pub const REFERENCE_X_FROM_END: usize = 7;
pub const REFERENCE_Y_FROM_END: usize = 6;
pub const REFERENCE_STATUS_FROM_END: usize = 5;
pub const REFERENCE_SP_FROM_END: usize = 4;
pub const REFERENCE_CYC_FROM_END: usize = 1;
