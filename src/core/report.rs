//! Report Rendering
//!
//! Human-readable and JSON views of an evaluation.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::validation::{Classification, Evaluation, Finding};

/// Output format of the report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Findings grouped by severity, followed by a summary line
pub fn render_text(path: &Path, evaluation: &Evaluation) -> String {
    let mode = if evaluation.mode.strict {
        "strict"
    } else {
        "lenient"
    };
    let mut out = format!("Validating {} ({} mode)\n", path.display(), mode);

    let blocking: Vec<&Finding> = evaluation.blocking().collect();
    let advisory: Vec<&Finding> = evaluation.advisory().collect();

    if !blocking.is_empty() {
        out.push_str("\nErrors:\n");
        for finding in &blocking {
            out.push_str(&format!("  x [{}] {}\n", finding.rule, finding.message));
        }
    }

    if !advisory.is_empty() {
        let heading = if evaluation.mode.strict {
            "Errors (strict)"
        } else {
            "Warnings"
        };
        out.push_str(&format!("\n{}:\n", heading));
        for finding in &advisory {
            out.push_str(&format!("  ! [{}] {}\n", finding.rule, finding.message));
        }
    }

    let verdict = if evaluation.is_valid() { "PASS" } else { "FAIL" };
    out.push_str(&format!(
        "\n{}: {} blocking, {} advisory\n",
        verdict,
        blocking.len(),
        advisory.len()
    ));
    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    path: String,
    strict: bool,
    valid: bool,
    classification: Option<Classification>,
    findings: &'a [Finding],
}

pub fn render_json(path: &Path, evaluation: &Evaluation) -> Result<String> {
    let report = JsonReport {
        path: path.display().to_string(),
        strict: evaluation.mode.strict,
        valid: evaluation.is_valid(),
        classification: evaluation.classification,
        findings: &evaluation.findings,
    };
    serde_json::to_string_pretty(&report).context("Failed to serialize report")
}
