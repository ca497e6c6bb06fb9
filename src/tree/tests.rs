use super::*;
use serde_json::json;

fn node(
    label: &str,
    node_type: &str,
    icon: &str,
    value: Option<&str>,
    children: Vec<ExpressionNode>,
) -> ExpressionNode {
    ExpressionNode {
        label: label.to_string(),
        node_type: node_type.to_string(),
        icon: icon.to_string(),
        value: value.map(String::from),
        children,
    }
}

fn satisfy_example() -> ExpressionNode {
    node(
        "select",
        "operation",
        "expression.operation",
        None,
        vec![
            node("Filter", "Filter", "Filter", Some("arg1"), vec![]),
            node(
                "arg1",
                "metachain",
                "metachain",
                Some("r |"),
                vec![node(
                    "System block to dependencies",
                    "metachain",
                    "metachain",
                    Some("self.satisfy"),
                    vec![],
                )],
            ),
        ],
    )
}

#[test]
fn renders_parent_before_children_with_depths() {
    let rows = render(&satisfy_example());

    let summary: Vec<(usize, &str)> = rows
        .iter()
        .map(|row| (row.depth, row.label.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (0, "select"),
            (1, "Filter"),
            (1, "arg1"),
            (2, "System block to dependencies"),
        ]
    );
}

#[test]
fn rows_resolve_glyphs_and_values() {
    let rows = render(&satisfy_example());

    assert_eq!(rows[0].glyph, "⚙️");
    assert_eq!(rows[0].value, "");
    assert_eq!(rows[0].type_tag, "(operation)");

    assert_eq!(rows[1].glyph, "🔍");
    assert_eq!(rows[1].value, ": arg1");

    assert_eq!(rows[3].glyph, "🔗");
    assert_eq!(rows[3].value, ": self.satisfy");
    assert_eq!(rows[3].type_tag, "(metachain)");
}

#[test]
fn icon_key_falls_back_to_type() {
    let root = node("check", "typeTest", "", None, vec![]);
    let rows = render(&root);
    assert_eq!(rows[0].glyph, "✓");
}

#[test]
fn unknown_icon_key_gets_default_glyph() {
    let root = node("odd", "mystery", "no-such-icon", None, vec![]);
    let rows = render(&root);
    assert_eq!(rows[0].glyph, icons::DEFAULT_GLYPH);
}

#[test]
fn empty_value_renders_without_separator() {
    let root = node("select", "operation", "", Some(""), vec![]);
    let rows = render(&root);
    assert_eq!(rows[0].value, "");
}

#[test]
fn format_tree_indents_two_spaces_per_level() {
    let text = format_tree(&satisfy_example());
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "⚙️ select (operation)");
    assert_eq!(lines[1], "  🔍 Filter: arg1 (Filter)");
    assert_eq!(lines[2], "  🔗 arg1: r | (metachain)");
    assert_eq!(
        lines[3],
        "    🔗 System block to dependencies: self.satisfy (metachain)"
    );
}

#[test]
fn sparse_node_deserializes_with_defaults() {
    let parsed: ExpressionNode = serde_json::from_str(r#"{"label": "select"}"#).unwrap();

    assert_eq!(parsed.label, "select");
    assert_eq!(parsed.node_type, "");
    assert_eq!(parsed.icon, "");
    assert_eq!(parsed.value, None);
    assert!(parsed.children.is_empty());
}

#[test]
fn node_serializes_with_wire_field_names() {
    let root = node("Filter", "Filter", "Filter", Some("arg1"), vec![]);
    let value = serde_json::to_value(&root).unwrap();

    assert_eq!(
        value,
        json!({
            "label": "Filter",
            "type": "Filter",
            "icon": "Filter",
            "value": "arg1",
            "children": []
        })
    );
}

#[test]
fn missing_value_is_omitted_from_json() {
    let root = node("select", "operation", "expression.operation", None, vec![]);
    let value = serde_json::to_value(&root).unwrap();
    assert!(value.get("value").is_none());
}

#[test]
fn document_round_trips_under_expression_view_key() {
    let document = ExpressionDocument::from(satisfy_example());
    let text = serde_json::to_string(&document).unwrap();
    assert!(text.starts_with(r#"{"expressionView":"#));

    let back: ExpressionDocument = serde_json::from_str(&text).unwrap();
    assert_eq!(back, document);
}
