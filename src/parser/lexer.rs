//! Markdown Line Lexer
//!
//! Classifies each line on its own. There is no block nesting: a `#` inside
//! a fenced code block is still a heading marker.

/// What a single line looks like
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind {
    /// Empty or whitespace-only
    Blank,
    /// `#` run, whitespace, then text
    Heading { level: usize, text: String },
    /// Starts with `#` but is not heading-shaped (e.g. `#tag`, `##`)
    Marker,
    /// Anything else
    Text,
}

impl LineKind {
    /// Whether the line begins with `#` and therefore closes the previous section
    pub fn starts_with_marker(&self) -> bool {
        matches!(self, LineKind::Heading { .. } | LineKind::Marker)
    }
}

/// Classify one line (without its trailing newline)
pub fn classify_line(line: &str) -> LineKind {
    if line.trim().is_empty() {
        return LineKind::Blank;
    }

    if !line.starts_with('#') {
        return LineKind::Text;
    }

    let level = line.chars().take_while(|&c| c == '#').count();
    let rest = &line[level..];

    // At least one whitespace character followed by at least one more character
    let mut chars = rest.chars();
    match (chars.next(), chars.next()) {
        (Some(ws), Some(_)) if ws.is_whitespace() => LineKind::Heading {
            level,
            text: rest.trim_start().to_string(),
        },
        _ => LineKind::Marker,
    }
}
