//! Validation Engine
//!
//! Structural and content checks for command definition documents.

pub mod checks;
pub mod classify;
pub mod engine;

pub use classify::Classification;
pub use engine::{evaluate, validate_file, Evaluation, Finding, Mode, Rule, Severity};
