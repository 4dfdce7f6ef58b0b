//! Command Definition Validator
//!
//! Checks that a short markdown command definition follows the expected
//! template: a title, the usual section headings, and a few content-quality
//! heuristics.
//!
//! This library provides:
//! - Document loading
//! - The rule engine and its pass/fail policy
//! - Text and JSON reports
//! - Configuration management

pub mod config;
pub mod core;
pub mod parser;
pub mod validation;

// Re-exports for clean public API
pub use config::Config;
pub use crate::core::{Document, LoadError, ReportFormat};
pub use validation::{evaluate, validate_file, Evaluation, Finding, Mode, Severity};
