//! Validation Engine
//!
//! Runs every check against one document and decides the verdict. Checks
//! are independent: each sees only the document and the mode, so their
//! order affects report presentation and nothing else.

use std::fmt;
use std::path::Path;

use serde::{Serialize, Serializer};

use crate::core::document::{Document, LoadError};
use crate::validation::checks;
use crate::validation::classify::Classification;

/// Severity of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Always fails validation
    Blocking,
    /// Fails validation only in strict mode
    Advisory,
}

/// Stable identifier of the check that produced a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    NotFound,
    ReadError,
    MissingTitle,
    TooShort,
    MissingOverview,
    MissingInstructions,
    MissingSuccessCriteria,
    MissingErrorHandling,
    ShortTitle,
    EmptySection,
    Placeholder,
    NoBullets,
    NoCodeExample,
}

impl Rule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::NotFound => "load/not-found",
            Rule::ReadError => "load/read-error",
            Rule::MissingTitle => "structure/missing-title",
            Rule::TooShort => "content/too-short",
            Rule::MissingOverview => "section/missing-overview",
            Rule::MissingInstructions => "section/missing-instructions",
            Rule::MissingSuccessCriteria => "workflow/missing-success-criteria",
            Rule::MissingErrorHandling => "integration/missing-error-handling",
            Rule::ShortTitle => "structure/short-title",
            Rule::EmptySection => "structure/empty-section",
            Rule::Placeholder => "content/placeholder",
            Rule::NoBullets => "style/no-bullets",
            Rule::NoCodeExample => "style/no-code-example",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Rule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One reported issue
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub rule: Rule,
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    pub fn blocking(rule: Rule, message: impl Into<String>) -> Self {
        Self {
            rule,
            severity: Severity::Blocking,
            message: message.into(),
        }
    }

    pub fn advisory(rule: Rule, message: impl Into<String>) -> Self {
        Self {
            rule,
            severity: Severity::Advisory,
            message: message.into(),
        }
    }
}

/// Evaluation mode, fixed for a whole run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Mode {
    pub strict: bool,
}

impl Mode {
    pub fn strict() -> Self {
        Self { strict: true }
    }

    pub fn lenient() -> Self {
        Self { strict: false }
    }
}

/// Outcome of validating one document
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub mode: Mode,
    /// Absent when the document could not be loaded
    pub classification: Option<Classification>,
    pub findings: Vec<Finding>,
}

impl Evaluation {
    fn new(mode: Mode, classification: Option<Classification>) -> Self {
        Self {
            mode,
            classification,
            findings: Vec::new(),
        }
    }

    /// Blocking findings always fail; advisory findings fail in strict mode
    pub fn is_valid(&self) -> bool {
        self.findings.iter().all(|f| match f.severity {
            Severity::Blocking => false,
            Severity::Advisory => !self.mode.strict,
        })
    }

    pub fn blocking(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Blocking)
    }

    pub fn advisory(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Advisory)
    }

    /// Whether the document was loaded and the checks actually ran
    pub fn checks_ran(&self) -> bool {
        self.classification.is_some()
    }
}

/// Run every check against a loaded document
pub fn evaluate(doc: &Document, mode: Mode) -> Evaluation {
    let classification = Classification::from_lowercase(doc.lowercase());
    log::debug!(
        "{}: workflow={} integration={} utility={}",
        doc.path().display(),
        classification.workflow,
        classification.integration,
        classification.utility
    );

    let mut result = Evaluation::new(mode, Some(classification));

    // Structure
    result.findings.extend(checks::title(doc, mode));
    result.findings.extend(checks::minimum_length(doc, mode));

    // Sections
    result.findings.extend(checks::overview_section(doc, mode));
    result.findings.extend(checks::instructions_section(doc, mode));

    // Content quality
    result
        .findings
        .extend(checks::workflow_completeness(doc, &classification));
    result
        .findings
        .extend(checks::integration_completeness(doc, &classification));
    result.findings.extend(checks::title_descriptiveness(doc, mode));
    result.findings.extend(checks::empty_sections(doc, mode));
    result.findings.extend(checks::placeholder(doc, mode));
    result.findings.extend(checks::bullet_usage(doc, mode));
    result.findings.extend(checks::code_example(doc, mode));

    log::info!(
        "{}: {} ({} blocking, {} advisory, strict={})",
        doc.path().display(),
        if result.is_valid() { "valid" } else { "invalid" },
        result.blocking().count(),
        result.advisory().count(),
        mode.strict
    );

    result
}

/// Load a document and evaluate it.
///
/// A load failure becomes the only finding; no check runs.
pub fn validate_file(path: impl AsRef<Path>, mode: Mode) -> Evaluation {
    match Document::load(path) {
        Ok(doc) => evaluate(&doc, mode),
        Err(err) => {
            log::warn!("{}", err);
            let mut result = Evaluation::new(mode, None);
            result.findings.push(load_failure(&err));
            result
        }
    }
}

fn load_failure(err: &LoadError) -> Finding {
    let rule = match err {
        LoadError::NotFound { .. } => Rule::NotFound,
        LoadError::ReadError { .. } => Rule::ReadError,
    };
    Finding::blocking(rule, err.to_string())
}
