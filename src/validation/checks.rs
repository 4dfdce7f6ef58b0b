//! Document Checks
//!
//! Each check inspects a document and returns the findings it produces,
//! usually none or one.

use crate::core::document::Document;
use crate::parser;
use crate::validation::classify::Classification;
use crate::validation::engine::{Finding, Mode, Rule};

pub const MIN_CONTENT_CHARS: usize = 100;
pub const MIN_TITLE_CHARS: usize = 5;
/// Bullet usage is only checked on documents longer than this
pub const BULLET_CHECK_MIN_LINES: usize = 10;

const OVERVIEW_MARKERS: &[&str] = &["## overview", "## purpose"];
const INSTRUCTION_MARKERS: &[&str] = &["## instructions", "## steps", "## step 1"];

fn contains_any(lower: &str, markers: &[&str]) -> bool {
    markers.iter().any(|m| lower.contains(m))
}

/// The document needs a `#` title heading somewhere
pub fn title(doc: &Document, _mode: Mode) -> Vec<Finding> {
    if parser::has_heading(doc.text()) {
        return Vec::new();
    }
    vec![Finding::blocking(
        Rule::MissingTitle,
        "Missing title heading (expected a line such as '# Command Name')",
    )]
}

pub fn minimum_length(doc: &Document, _mode: Mode) -> Vec<Finding> {
    let len = doc.text().trim().chars().count();
    if len >= MIN_CONTENT_CHARS {
        return Vec::new();
    }
    vec![Finding::advisory(
        Rule::TooShort,
        format!(
            "Content is too short ({} characters, at least {} expected)",
            len, MIN_CONTENT_CHARS
        ),
    )]
}

pub fn overview_section(doc: &Document, _mode: Mode) -> Vec<Finding> {
    if contains_any(doc.lowercase(), OVERVIEW_MARKERS) {
        return Vec::new();
    }
    vec![Finding::advisory(
        Rule::MissingOverview,
        "Missing '## Overview' or '## Purpose' section",
    )]
}

/// Blocking in strict mode, advisory otherwise
pub fn instructions_section(doc: &Document, mode: Mode) -> Vec<Finding> {
    if contains_any(doc.lowercase(), INSTRUCTION_MARKERS) {
        return Vec::new();
    }
    let message = "Missing '## Instructions' or '## Steps' section";
    let finding = if mode.strict {
        Finding::blocking(Rule::MissingInstructions, message)
    } else {
        Finding::advisory(Rule::MissingInstructions, message)
    };
    vec![finding]
}

pub fn workflow_completeness(doc: &Document, kind: &Classification) -> Vec<Finding> {
    if !kind.workflow || doc.lowercase().contains("success criteria") {
        return Vec::new();
    }
    vec![Finding::advisory(
        Rule::MissingSuccessCriteria,
        "Workflow command should define 'Success Criteria'",
    )]
}

pub fn integration_completeness(doc: &Document, kind: &Classification) -> Vec<Finding> {
    if !kind.integration || doc.lowercase().contains("error handling") {
        return Vec::new();
    }
    vec![Finding::advisory(
        Rule::MissingErrorHandling,
        "Integration command with prerequisites should describe 'Error Handling'",
    )]
}

/// Only the first heading is judged
pub fn title_descriptiveness(doc: &Document, _mode: Mode) -> Vec<Finding> {
    match parser::heading_texts(doc.text()).first() {
        Some(title) if title.chars().count() < MIN_TITLE_CHARS => {
            vec![Finding::advisory(
                Rule::ShortTitle,
                format!(
                    "Title '{}' is not descriptive (at least {} characters expected)",
                    title, MIN_TITLE_CHARS
                ),
            )]
        }
        _ => Vec::new(),
    }
}

/// A `##` section with nothing but blank lines before the next `#` line or
/// end of document. Deeper headings are not judged.
pub fn empty_sections(doc: &Document, _mode: Mode) -> Vec<Finding> {
    let empty: Vec<String> = parser::outline(doc.lines())
        .into_iter()
        .filter(|s| s.level == 2 && !s.has_body)
        .map(|s| format!("'{}' (line {})", s.title, s.line))
        .collect();

    if empty.is_empty() {
        return Vec::new();
    }
    vec![Finding::blocking(
        Rule::EmptySection,
        format!("Empty section: {}", empty.join(", ")),
    )]
}

pub fn placeholder(doc: &Document, _mode: Mode) -> Vec<Finding> {
    if !doc.lowercase().contains("todo") {
        return Vec::new();
    }
    vec![Finding::advisory(
        Rule::Placeholder,
        "Contains TODO placeholder text",
    )]
}

/// Strict mode only
pub fn bullet_usage(doc: &Document, mode: Mode) -> Vec<Finding> {
    if !mode.strict
        || doc.lines().len() <= BULLET_CHECK_MIN_LINES
        || parser::has_bullet(doc.text())
    {
        return Vec::new();
    }
    vec![Finding::advisory(
        Rule::NoBullets,
        "Consider using bullet points to structure longer content",
    )]
}

/// Strict mode only
pub fn code_example(doc: &Document, mode: Mode) -> Vec<Finding> {
    if !mode.strict || parser::has_code_fence(doc.text()) {
        return Vec::new();
    }
    vec![Finding::advisory(
        Rule::NoCodeExample,
        "Consider adding a fenced code example",
    )]
}
