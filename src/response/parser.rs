//! Total parser from raw model output to [`StructuredSections`].

use tracing::debug;

use super::headings::{scan, HeadingHit, HeadingKind};
use super::{recovery, Section, StructuredSections};

/// Parse a raw model response.
///
/// Never fails: sections whose heading cannot be located come back empty,
/// and a missing or broken tree comes back as `None`. Parse problems are
/// logged, not raised.
pub fn parse(raw: &str) -> StructuredSections {
    let hits = scan(raw);
    let mut sections = StructuredSections::default();

    for section in Section::ALL {
        if let Some(text) = slice_section(raw, &hits, section) {
            sections.set(section, text);
        }
    }

    sections.expression_view = recovery::recover(raw, &hits);
    if sections.expression_view.is_none() {
        debug!("no expression view recovered from response");
    }
    sections
}

/// Content of one section: from just past its heading line to the start of
/// the next heading line, trimmed. Uses the first occurrence when a heading
/// repeats.
fn slice_section(raw: &str, hits: &[HeadingHit], section: Section) -> Option<String> {
    let own = hits
        .iter()
        .position(|hit| hit.kind == HeadingKind::Section(section))?;
    let start = hits[own].content_start;
    let end = hits
        .get(own + 1)
        .map(|next| next.line_start)
        .unwrap_or(raw.len());
    Some(raw[start..end].trim().to_string())
}
