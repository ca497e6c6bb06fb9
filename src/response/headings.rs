//! Line-oriented scan for section headings in raw model output.

use super::Section;

/// What a heading line announces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum HeadingKind {
    Section(Section),
    /// The `ExpressionView` marker. `json_tagged` is true when the line
    /// carries the `(JSON)` suffix, which is the form that introduces the
    /// JSON block.
    ExpressionView { json_tagged: bool },
}

/// One heading occurrence. `line_start` is the byte offset of the heading
/// line itself (where the previous section's content ends), `content_start`
/// the offset just past the heading line (where this one's content begins).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct HeadingHit {
    pub kind: HeadingKind,
    pub line_start: usize,
    pub content_start: usize,
}

/// Scan `raw` line by line and return every heading occurrence in order.
///
/// A line is a heading only when its trimmed content equals a canonical
/// heading, compared ASCII case-insensitively. Mentions of a heading inside a
/// sentence therefore never split a section.
pub(super) fn scan(raw: &str) -> Vec<HeadingHit> {
    let mut hits = Vec::new();
    let mut offset = 0;
    for line in raw.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();
        if let Some(kind) = classify(line.trim()) {
            hits.push(HeadingHit {
                kind,
                line_start,
                content_start: offset,
            });
        }
    }
    hits
}

fn classify(trimmed: &str) -> Option<HeadingKind> {
    if trimmed.is_empty() {
        return None;
    }
    for section in Section::ALL {
        if trimmed.eq_ignore_ascii_case(section.heading()) {
            return Some(HeadingKind::Section(section));
        }
    }
    const MARKER: &str = "ExpressionView";
    if let Some(head) = trimmed.get(..MARKER.len()) {
        if head.eq_ignore_ascii_case(MARKER) {
            let rest = trimmed[MARKER.len()..].trim();
            if rest.is_empty() {
                return Some(HeadingKind::ExpressionView { json_tagged: false });
            }
            if rest.eq_ignore_ascii_case("(JSON)") {
                return Some(HeadingKind::ExpressionView { json_tagged: true });
            }
        }
    }
    None
}
