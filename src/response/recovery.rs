//! Best-effort recovery of the expression tree from a response.

use serde_json::Value;
use tracing::{debug, warn};

use super::headings::{HeadingHit, HeadingKind};
use crate::tree::{ExpressionDocument, ExpressionNode};

/// Recovery chain for the tree JSON: the strict heading-bounded block first,
/// then a whole-text brace scan. First success wins; every failure is logged
/// and swallowed so the caller still gets the text sections.
pub(super) fn recover(raw: &str, hits: &[HeadingHit]) -> Option<ExpressionDocument> {
    heading_block(raw, hits).or_else(|| brace_scan(raw))
}

/// Candidate between the `ExpressionView (JSON)` marker line and the first
/// blank line after it (or end of input).
fn heading_block(raw: &str, hits: &[HeadingHit]) -> Option<ExpressionDocument> {
    let hit = hits.iter().find(|hit| {
        matches!(
            hit.kind,
            HeadingKind::ExpressionView { json_tagged: true }
        )
    })?;
    let tail = &raw[hit.content_start..];
    let block = match tail.find("\n\n") {
        Some(end) => &tail[..end],
        None => tail,
    };
    parse_candidate(block.trim(), "heading block")
}

/// Fallback: the span from the first `{` to the last `}` of the whole text,
/// kept only when it mentions `"expressionView"` (exact case, as the schema
/// demands it).
fn brace_scan(raw: &str) -> Option<ExpressionDocument> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end <= start {
        return None;
    }
    let block = &raw[start..=end];
    if !block.contains("\"expressionView\"") {
        return None;
    }
    parse_candidate(block, "brace scan")
}

/// Parse one candidate block. A bare tree node is wrapped under the
/// `expressionView` key the UI expects.
fn parse_candidate(block: &str, origin: &str) -> Option<ExpressionDocument> {
    let value: Value = match serde_json::from_str(block) {
        Ok(value) => value,
        Err(error) => {
            debug!(origin, %error, "candidate block is not valid JSON");
            return None;
        }
    };

    let result = if value.get("expressionView").is_some() {
        serde_json::from_value::<ExpressionDocument>(value)
    } else {
        serde_json::from_value::<ExpressionNode>(value).map(ExpressionDocument::from)
    };

    match result {
        Ok(document) => Some(document),
        Err(error) => {
            warn!(origin, %error, "candidate JSON does not match the tree schema");
            None
        }
    }
}
