//! Core Types
//!
//! Document loading and report rendering around the validation engine.

pub mod document;
pub mod report;

pub use document::{Document, LoadError};
pub use report::{render_json, render_text, ReportFormat};
