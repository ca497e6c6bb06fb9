//! Pre-order flattening of the expression tree into display rows.

use serde::Serialize;

use super::icons::glyph_for;
use super::schema::ExpressionNode;

/// One display row of the flattened tree. `depth` drives indentation; the
/// remaining fields are already formatted the way the row is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRow {
    pub depth: usize,
    pub glyph: &'static str,
    pub label: String,
    /// `": <value>"` when the node carries a value, empty otherwise.
    pub value: String,
    /// Parenthesized type tag, e.g. `(operation)`.
    pub type_tag: String,
}

/// Flatten a tree into rows, parent before children, siblings in order.
pub fn render(root: &ExpressionNode) -> Vec<RenderedRow> {
    let mut rows = Vec::new();
    push_rows(root, 0, &mut rows);
    rows
}

fn push_rows(node: &ExpressionNode, depth: usize, rows: &mut Vec<RenderedRow>) {
    // The icon key falls back to the type when no icon is set, and the
    // lookup happens once on the resolved key.
    let icon_key = if node.icon.is_empty() {
        node.node_type.as_str()
    } else {
        node.icon.as_str()
    };
    let value = match node.value.as_deref() {
        Some(value) if !value.is_empty() => format!(": {}", value),
        _ => String::new(),
    };
    rows.push(RenderedRow {
        depth,
        glyph: glyph_for(icon_key),
        label: node.label.clone(),
        value,
        type_tag: format!("({})", node.node_type),
    });
    for child in &node.children {
        push_rows(child, depth + 1, rows);
    }
}

/// Render the tree as indented text, one row per line, two spaces per level.
pub fn format_tree(root: &ExpressionNode) -> String {
    let mut out = String::new();
    for row in render(root) {
        out.push_str(&"  ".repeat(row.depth));
        out.push_str(&format!(
            "{} {}{} {}\n",
            row.glyph, row.label, row.value, row.type_tag
        ));
    }
    out
}
