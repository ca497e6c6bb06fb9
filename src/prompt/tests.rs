use super::*;
use crate::analysis::{analyze, PromptAnalysis};
use serde_json::json;

#[test]
fn core_layout_orders_three_sections_before_the_json_block() {
    let prompt = compose(&PromptAnalysis::default(), SectionLayout::Core, None);

    assert!(prompt.starts_with("Your task is to:"));
    assert!(prompt.contains(
        "Intent\n\nStarting Context\n\nFinal Expression Template\n\nexpressionView (JSON)"
    ));
    assert!(prompt.contains("Explain the intent of the expression."));
    assert!(!prompt.contains("Summarize the metachain navigation"));
    assert!(!prompt.contains("Notes"));
}

#[test]
fn extended_layout_orders_all_six_sections() {
    let prompt = compose(&PromptAnalysis::default(), SectionLayout::Extended, None);

    assert!(prompt.contains(
        "Intent\n\nStarting Context\n\nMetachain\n\nFilters\n\nFinal Expression Template\n\nNotes\n\nexpressionView (JSON)"
    ));
    assert!(prompt.contains("Describe any filters applied along the way."));
}

#[test]
fn schema_rules_are_always_present() {
    let prompt = compose(&PromptAnalysis::default(), SectionLayout::Core, None);

    assert!(prompt.contains("Top-level key: \"expressionView\""));
    assert!(prompt.contains("\"value\": \"arg1\""));
    assert!(prompt.contains("\"self.satisfy\""));
    assert!(prompt.contains("placeholders in square brackets"));
}

#[test]
fn guidance_is_appended_under_detected_patterns_header() {
    let analysis = analyze("blocks that satisfy requirements");
    let prompt = compose(&analysis, SectionLayout::Core, None);

    let marker = "\n\n## IMPORTANT DETECTED PATTERNS:\n";
    assert!(prompt.contains(marker));
    let after = &prompt[prompt.find(marker).unwrap() + marker.len()..];
    assert!(after.starts_with("Based on the user's prompt"));
    assert!(prompt.ends_with('\n'));
}

#[test]
fn empty_guidance_adds_no_patterns_header() {
    let prompt = compose(&PromptAnalysis::default(), SectionLayout::Core, None);
    assert!(!prompt.contains("IMPORTANT DETECTED PATTERNS"));
}

#[test]
fn context_paragraph_sits_between_base_and_guidance() {
    let analysis = analyze("blocks that satisfy requirements");
    let context = UsageContext::new(ContextOption::Legend);
    let prompt = compose(&analysis, SectionLayout::Core, Some(&context));

    let context_at = prompt.find("## USAGE CONTEXT:").unwrap();
    let guidance_at = prompt.find("## IMPORTANT DETECTED PATTERNS:").unwrap();
    assert!(context_at < guidance_at);
    assert!(prompt.contains("legend condition"));
}

#[test]
fn scope_criteria_details_mention_the_input_type() {
    let context = UsageContext {
        option: ContextOption::ScopeCriteria,
        details: ContextDetails {
            input_type: Some("Package".to_string()),
            row_type: Some("ignored".to_string()),
            element_type: None,
        },
    };

    let text = context.describe();
    assert!(text.contains("scope criteria"));
    assert!(text.contains("The scope input is a Package."));
    assert!(!text.contains("ignored"));
}

#[test]
fn blank_detail_fields_add_no_sentence() {
    let context = UsageContext {
        option: ContextOption::CustomColumn,
        details: ContextDetails {
            row_type: Some("   ".to_string()),
            ..ContextDetails::default()
        },
    };
    assert!(!context.describe().contains("Each row element"));
}

#[test]
fn derived_property_details_mention_the_element_type() {
    let context = UsageContext {
        option: ContextOption::DerivedProperty,
        details: ContextDetails {
            element_type: Some("Block".to_string()),
            ..ContextDetails::default()
        },
    };
    assert!(context.describe().contains("The owning element type is Block."));
}

#[test]
fn context_option_keys_round_trip() {
    for option in [
        ContextOption::ScopeCriteria,
        ContextOption::DerivedProperty,
        ContextOption::CustomColumn,
        ContextOption::Legend,
    ] {
        assert_eq!(ContextOption::from_key(option.key()), Some(option));
    }
    assert_eq!(ContextOption::from_key("mystery"), None);
}

#[test]
fn layout_keys_round_trip_and_default_to_core() {
    assert_eq!(SectionLayout::default(), SectionLayout::Core);
    assert_eq!(SectionLayout::from_key("core"), Some(SectionLayout::Core));
    assert_eq!(
        SectionLayout::from_key("extended"),
        Some(SectionLayout::Extended)
    );
    assert_eq!(SectionLayout::from_key("full"), None);
}

#[test]
fn usage_context_uses_the_submitted_wire_shape() {
    let context: UsageContext = serde_json::from_value(json!({
        "context": "custom-column",
        "contextSpecific": {"rowType": "Requirement"}
    }))
    .unwrap();

    assert_eq!(context.option, ContextOption::CustomColumn);
    assert_eq!(context.details.row_type.as_deref(), Some("Requirement"));

    let back = serde_json::to_value(&context).unwrap();
    assert_eq!(back["context"], "custom-column");
    assert_eq!(back["contextSpecific"]["rowType"], "Requirement");
}
