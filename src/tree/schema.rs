//! Wire types for the expression tree.

use serde::{Deserialize, Serialize};

/// One node of the expression tree, mirroring the JSON the model is asked to
/// emit: `label`, `type`, `icon`, optional `value`, `children`.
///
/// Every field is defaulted so a sparse node like `{"label": "select"}` still
/// deserializes; the renderer treats missing pieces as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpressionNode {
    pub label: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub icon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub children: Vec<ExpressionNode>,
}

/// The wrapper document stored and shipped to the UI: always
/// `{"expressionView": <node>}`, even when the model emitted a bare node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpressionDocument {
    #[serde(rename = "expressionView")]
    pub expression_view: ExpressionNode,
}

impl From<ExpressionNode> for ExpressionDocument {
    fn from(expression_view: ExpressionNode) -> Self {
        Self { expression_view }
    }
}
