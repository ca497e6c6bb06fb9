//! Keyword analysis of natural-language prompts.
//!
//! Detects Cameo expression patterns (metachains, filters, type tests and so
//! on) before anything is sent to the model, and turns the hits into guidance
//! text the composer appends to the system prompt.

mod rules;


use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use rules::RelationRule;

/// A detected expression pattern.
///
/// Order matters: tags appear in [`PromptAnalysis::patterns`] in the order
/// the categories are checked, one tag per category at most.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PatternTag {
    ImpliedRelation,
    Metachain,
    StereotypeFilter,
    PropertyFilter,
    Collection,
    TypeTest,
    Filter,
}

impl PatternTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternTag::ImpliedRelation => "impliedRelation",
            PatternTag::Metachain => "metachain",
            PatternTag::StereotypeFilter => "stereotypeFilter",
            PatternTag::PropertyFilter => "propertyFilter",
            PatternTag::Collection => "collection",
            PatternTag::TypeTest => "typeTest",
            PatternTag::Filter => "filter",
        }
    }
}

impl fmt::Display for PatternTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A SysML relationship keyword found in the prompt, with the metachain
/// navigation path it maps to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedRelation {
    pub keyword: String,
    /// Navigation path, e.g. `self.satisfy`. Serialized as `metachain`, the
    /// key the web UI reads.
    #[serde(rename = "metachain")]
    pub path: String,
    pub description: String,
}

impl DetectedRelation {
    fn from_rule(rule: &RelationRule) -> Self {
        Self {
            keyword: rule.keyword.to_string(),
            path: rule.path.to_string(),
            description: rule.description.to_string(),
        }
    }
}

/// Result of analyzing one prompt. Built once per request and read-only
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptAnalysis {
    /// Detected pattern tags, in category-check order, no duplicates.
    pub patterns: Vec<PatternTag>,
    /// Assembled guidance block for the system prompt. Empty when nothing
    /// matched.
    pub guidance: String,
    /// Every relationship table row whose keyword occurs in the prompt, in
    /// table order.
    pub detected_relations: Vec<DetectedRelation>,
}

/// Analyze a prompt for Cameo expression patterns.
///
/// Matching is case-insensitive substring matching, so "stereotyped" hits the
/// "stereotype" keyword and, because it contains "type", the type-relation
/// row as well. That is intentional: over-detection only adds guidance.
pub fn analyze(prompt: &str) -> PromptAnalysis {
    let lowered = prompt.to_lowercase();
    let mut patterns = Vec::new();
    let mut advisories = Vec::new();

    if contains_any(&lowered, rules::NESTED_KEYWORDS) {
        patterns.push(PatternTag::ImpliedRelation);
        advisories.push(rules::NESTED_ADVISORY.to_string());
    }

    let detected_relations: Vec<DetectedRelation> = rules::RELATION_RULES
        .iter()
        .filter(|rule| lowered.contains(rule.keyword))
        .map(DetectedRelation::from_rule)
        .collect();
    if !detected_relations.is_empty() {
        patterns.push(PatternTag::Metachain);
        advisories.push(relation_advisory(&detected_relations));
    }

    if contains_any(&lowered, rules::STEREOTYPE_KEYWORDS) {
        patterns.push(PatternTag::StereotypeFilter);
        advisories.push(rules::STEREOTYPE_ADVISORY.to_string());
    }

    if contains_any(&lowered, rules::PROPERTY_KEYWORDS) {
        patterns.push(PatternTag::PropertyFilter);
        advisories.push(rules::PROPERTY_ADVISORY.to_string());
    }

    if contains_any(&lowered, rules::COLLECTION_KEYWORDS) {
        patterns.push(PatternTag::Collection);
        advisories.push(rules::COLLECTION_ADVISORY.to_string());
    }

    // "type relationship" means the metachain kind of type, not a type test.
    if contains_any(&lowered, rules::TYPE_TEST_KEYWORDS)
        && !lowered.contains(rules::TYPE_TEST_EXCLUSION)
    {
        patterns.push(PatternTag::TypeTest);
        advisories.push(rules::TYPE_TEST_ADVISORY.to_string());
    }

    if contains_any(&lowered, rules::FILTER_KEYWORDS) {
        patterns.push(PatternTag::Filter);
        advisories.push(rules::FILTER_ADVISORY.to_string());
    }

    let guidance = if advisories.is_empty() {
        String::new()
    } else {
        format!(
            "{}{}{}",
            rules::GUIDANCE_INTRO,
            advisories.join("\n\n"),
            rules::GUIDANCE_CLOSING
        )
    };

    debug!(
        patterns = patterns.len(),
        relations = detected_relations.len(),
        "prompt analyzed"
    );

    PromptAnalysis {
        patterns,
        guidance,
        detected_relations,
    }
}

fn contains_any(lowered: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| lowered.contains(keyword))
}

/// Guidance bullet for the relationship category, listing every matched row.
fn relation_advisory(relations: &[DetectedRelation]) -> String {
    let examples = relations
        .iter()
        .map(|relation| {
            format!(
                "  - \"{}\" → metachain: \"{}\" ({})",
                relation.keyword, relation.path, relation.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "{}\n{}\n{}",
        rules::RELATION_ADVISORY_HEAD,
        examples,
        rules::RELATION_ADVISORY_TAIL
    )
}
