//! Assembles the full system prompt.

use crate::analysis::PromptAnalysis;

use super::context::UsageContext;
use super::templates;
use super::SectionLayout;

/// Compose the system prompt: base instruction for the layout, then the
/// usage-context paragraph and the analyzer guidance, each only when
/// present.
pub fn compose(
    analysis: &PromptAnalysis,
    layout: SectionLayout,
    context: Option<&UsageContext>,
) -> String {
    let mut prompt = templates::base_instruction(layout);
    if let Some(context) = context {
        prompt.push_str("\n\n## USAGE CONTEXT:\n");
        prompt.push_str(&context.describe());
        prompt.push('\n');
    }
    if !analysis.guidance.is_empty() {
        prompt.push_str("\n\n## IMPORTANT DETECTED PATTERNS:\n");
        prompt.push_str(&analysis.guidance);
        prompt.push('\n');
    }
    prompt
}
