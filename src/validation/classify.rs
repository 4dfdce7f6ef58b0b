//! Command Classification
//!
//! Keyword predicates over the lowercased document text. A document may be
//! several kinds at once; the kinds only gate optional checks.

use serde::Serialize;

const WORKFLOW_KEYWORDS: &[&str] = &["steps", "workflow", "step 1", "step 2"];
const INTEGRATION_KEYWORDS: &[&str] = &["prerequisites"];
const UTILITY_KEYWORDS: &[&str] = &["purpose", "instructions", "output format"];

/// Which kinds of command a document looks like
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub workflow: bool,
    pub integration: bool,
    pub utility: bool,
}

impl Classification {
    /// Classify from already-lowercased text
    pub fn from_lowercase(lower: &str) -> Self {
        Self {
            workflow: is_workflow_like(lower),
            integration: is_integration_like(lower),
            utility: is_utility_like(lower),
        }
    }
}

fn contains_any(lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| lower.contains(k))
}

pub fn is_workflow_like(lower: &str) -> bool {
    contains_any(lower, WORKFLOW_KEYWORDS)
}

pub fn is_integration_like(lower: &str) -> bool {
    contains_any(lower, INTEGRATION_KEYWORDS)
}

pub fn is_utility_like(lower: &str) -> bool {
    contains_any(lower, UTILITY_KEYWORDS)
}
