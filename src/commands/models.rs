use std::path::PathBuf;

use crate::utils::config::{DEFAULT_CANDIDATE_LOG, DEFAULT_REFERENCE_LOG};

/// Arguments for the compare command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct CompareArgs {
    /// Path of the candidate emulator's trace log
    pub candidate: PathBuf,

    /// Path of the trusted reference log
    pub reference: PathBuf,
}

impl Default for CompareArgs {
    fn default() -> Self {
        Self {
            candidate: PathBuf::from(DEFAULT_CANDIDATE_LOG),
            reference: PathBuf::from(DEFAULT_REFERENCE_LOG),
        }
    }
}
