//! Document Outline
//!
//! Flat list of sections built from classified lines. A section's body runs
//! from its heading to the next line starting with `#`.

use crate::parser::lexer::{classify_line, LineKind};

/// A heading together with a summary of its body
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Number of `#` markers
    pub level: usize,
    /// Heading text after the markers
    pub title: String,
    /// 1-based line of the heading
    pub line: usize,
    /// Whether any non-blank line precedes the next `#` line or end of document
    pub has_body: bool,
}

/// Build the outline of a document from its lines
pub fn outline<S: AsRef<str>>(lines: &[S]) -> Vec<Section> {
    let kinds: Vec<LineKind> = lines.iter().map(|l| classify_line(l.as_ref())).collect();
    let mut sections = Vec::new();

    for (idx, kind) in kinds.iter().enumerate() {
        if let LineKind::Heading { level, text } = kind {
            let has_body = kinds[idx + 1..]
                .iter()
                .find(|k| **k != LineKind::Blank)
                .is_some_and(|next| !next.starts_with_marker());

            sections.push(Section {
                level: *level,
                title: text.clone(),
                line: idx + 1,
                has_body,
            });
        }
    }

    sections
}
