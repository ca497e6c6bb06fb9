//! Instruction skeleton sent to the model as the system prompt.

use crate::response::Section;

use super::SectionLayout;

/// Task bullet asking for one text section.
fn task_line(section: Section) -> &'static str {
    match section {
        Section::Intent => "Explain the intent of the expression.",
        Section::StartingContext => "Describe the starting context.",
        Section::Metachain => "Summarize the metachain navigation, if any.",
        Section::Filters => "Describe any filters applied along the way.",
        Section::FinalExpressionTemplate => {
            "Give a final expression template with placeholders."
        }
        Section::Notes => "Add any notes worth keeping in mind.",
    }
}

/// Schema rules and the worked satisfy example. Kept word-for-word stable;
/// the parser and the web UI both depend on the shapes promised here.
const SCHEMA_RULES: &str = r#"In the Final Expression Template, use placeholders in square brackets (e.g. [STEREOTYPE NAME], [METACHAIN HERE], [TARGET ELEMENT]). Do not invent real model element names.

For the JSON, you MUST use this structure and naming:

Top-level key: "expressionView"

It must be an object

It must have: label, type, icon, children

The top node is the operation (e.g. "label": "select")

The top node’s children must be in this order:

A node

An input "arg1"

The Filter node must look like this:

{
  "label": "Filter",
  "type": "Filter",
  "icon": "Filter",
  "value": "arg1",
  "children": []
}

If the expression is about satisfy → requirement, the final JSON should look like this shape:

{
  "expressionView": {
    "label": "select",
    "type": "operation",
    "icon": "expression.operation",
    "children": [
      {
        "label": "Filter",
        "type": "Filter",
        "icon": "Filter",
        "value": "arg1",
        "children": []
      },
      {
        "label": "arg1",
        "type": "metachain",
        "icon": "metachain",
        "value": "r |",
        "children": [
          {
            "label": "System block to dependencies",
            "type": "metachain",
            "icon": "metachain",
            "value": "self.satisfy",
            "children": []
          }
        ]
      }
    ]
  }
}"#;

/// Build the base instruction for a layout: task list, section order, then
/// the fixed schema rules.
pub fn base_instruction(layout: SectionLayout) -> String {
    let mut text = String::from("Your task is to:\n\n");
    for section in layout.sections() {
        text.push_str(task_line(*section));
        text.push_str("\n\n");
    }
    text.push_str(
        "And most importantly: output an expressionView JSON object in a fixed schema so a UI can render it like the Cameo Structured Expression dialog.\n\nFollow these rules exactly.\n\nOutput sections in this order:\n\n",
    );
    for section in layout.sections() {
        text.push_str(section.heading());
        text.push_str("\n\n");
    }
    text.push_str("expressionView (JSON)\n\n");
    text.push_str(SCHEMA_RULES);
    text
}
