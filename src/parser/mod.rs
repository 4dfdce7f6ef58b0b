//! Markdown Scanning
//!
//! Just enough markdown awareness for the structural checks: heading
//! extraction, bullet and fence detection, and a flat section outline.
//! Text-level helpers run multi-line regexes over the whole document;
//! the outline works line by line.

pub mod ast;
pub mod lexer;

pub use ast::{outline, Section};
pub use lexer::{classify_line, LineKind};

use regex::Regex;
use std::sync::LazyLock;

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#+\s+(.+)$").expect("valid heading regex"));

static BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[-*] ").expect("valid bullet regex"));

const CODE_FENCE: &str = "```";

/// Whether any line starts a `#` heading
pub fn has_heading(text: &str) -> bool {
    HEADING_RE.is_match(text)
}

/// Heading texts in document order
pub fn heading_texts(text: &str) -> Vec<&str> {
    HEADING_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Whether any line starts with a `-` or `*` bullet marker
pub fn has_bullet(text: &str) -> bool {
    BULLET_RE.is_match(text)
}

/// Whether the text contains a triple-backtick fence anywhere
pub fn has_code_fence(text: &str) -> bool {
    text.contains(CODE_FENCE)
}
