//! Command implementations for the CLI.

mod compare;
mod models;

pub use compare::execute_compare;
pub use models::CompareArgs;
