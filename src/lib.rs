//! Turns natural-language prompts into Cameo structured expression
//! templates.
//!
//! ## Architecture
//!
//! ```text
//! prompt → analysis (keyword patterns)
//!        → prompt (system-prompt composition)
//!        → llm (chat completion)
//!        → response (section + tree extraction)
//!        → tree (render for display)
//! ```
//!
//! `analysis`, `prompt`, `response` and `tree` are pure and synchronous and
//! usable on their own; `llm` and the `service` pipeline on top of it are
//! async.

pub mod analysis;
pub mod config;
pub mod llm;
pub mod prompt;
pub mod response;
pub mod service;
pub mod tree;

pub use analysis::{analyze, DetectedRelation, PatternTag, PromptAnalysis};
pub use prompt::{compose, ContextDetails, ContextOption, SectionLayout, UsageContext};
pub use response::{parse, Section, StructuredSections};
pub use service::{GenerateError, GenerateReply, Generator};
pub use tree::{format_tree, ExpressionDocument, ExpressionNode};
