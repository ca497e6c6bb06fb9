//! End-to-end pipeline: prompt in, structured reply out.
//!
//! Order of operations per request: analyze the prompt, compose the system
//! prompt, call the backend, parse whatever came back. Analysis and parsing
//! never fail; only an empty prompt or the backend can.

use serde::Serialize;
use thiserror::Error;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::analysis::{analyze, PromptAnalysis};
use crate::llm::{ChatBackend, LlmError};
use crate::prompt::{compose, SectionLayout, UsageContext};
use crate::response::{self, StructuredSections};
use crate::tree::ExpressionDocument;

/// Fixed frame around the raw prompt in the user message.
const USER_PROMPT_PREFIX: &str = "Create an opaque expression template for Cameo that: ";

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Prompt is required")]
    EmptyPrompt,
    #[error(transparent)]
    Backend(#[from] LlmError),
}

/// Reply envelope, shaped like the web service body the UI already reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReply {
    pub raw_response: String,
    pub structured: StructuredSections,
    /// Copy of `structured.expression_view`, kept at the top level because
    /// the UI reads it from both places.
    pub expression_view: Option<ExpressionDocument>,
    pub model: String,
    pub prompt_analysis: PromptAnalysis,
}

/// Drives prompts through the full pipeline against one backend.
pub struct Generator<B> {
    backend: B,
    layout: SectionLayout,
}

impl<B: ChatBackend> Generator<B> {
    pub fn new(backend: B, layout: SectionLayout) -> Self {
        Self { backend, layout }
    }

    #[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
    pub async fn generate(
        &self,
        prompt: &str,
        context: Option<&UsageContext>,
    ) -> Result<GenerateReply, GenerateError> {
        if prompt.trim().is_empty() {
            return Err(GenerateError::EmptyPrompt);
        }

        // Keyword matching is whitespace-sensitive ("all ", "every "), so
        // analysis reads the prompt as typed; only the framed user message
        // is trimmed.
        let analysis = analyze(prompt);
        info!(
            patterns = analysis.patterns.len(),
            relations = analysis.detected_relations.len(),
            "prompt analyzed"
        );

        let system_prompt = compose(&analysis, self.layout, context);
        let user_prompt = format!("{}{}", USER_PROMPT_PREFIX, prompt.trim());

        let outcome = self.backend.complete(&system_prompt, &user_prompt).await?;
        info!(model = %outcome.model, bytes = outcome.content.len(), "completion received");

        let structured = response::parse(&outcome.content);
        let expression_view = structured.expression_view.clone();

        Ok(GenerateReply {
            raw_response: outcome.content,
            structured,
            expression_view,
            model: outcome.model,
            prompt_analysis: analysis,
        })
    }
}
