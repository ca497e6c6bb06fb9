//! Parsing of raw model output into structured sections.
//!
//! The model is asked for plain-text sections under fixed headings plus one
//! JSON block. Real replies drift from that: headings change case, sections
//! go missing, the JSON arrives bare or mangled. Everything here is written
//! to degrade instead of fail; [`parse`] always returns a result.

mod headings;
mod parser;
mod recovery;


pub use parser::parse;

use serde::{Deserialize, Serialize};

use crate::tree::ExpressionDocument;

/// The canonical text sections, in their output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Section {
    Intent,
    StartingContext,
    Metachain,
    Filters,
    FinalExpressionTemplate,
    Notes,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Intent,
        Section::StartingContext,
        Section::Metachain,
        Section::Filters,
        Section::FinalExpressionTemplate,
        Section::Notes,
    ];

    /// Canonical heading as it appears in model output.
    pub fn heading(&self) -> &'static str {
        match self {
            Section::Intent => "Intent",
            Section::StartingContext => "Starting Context",
            Section::Metachain => "Metachain",
            Section::Filters => "Filters",
            Section::FinalExpressionTemplate => "Final Expression Template",
            Section::Notes => "Notes",
        }
    }
}

/// Parsed response body. Sections that were not found stay empty; a missing
/// or unparseable tree is `None` (serialized as `null` for the UI).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StructuredSections {
    pub intent: String,
    pub starting_context: String,
    pub metachain: String,
    pub filters: String,
    pub final_expression_template: String,
    pub notes: String,
    pub expression_view: Option<ExpressionDocument>,
}

impl StructuredSections {
    pub(crate) fn set(&mut self, section: Section, text: String) {
        match section {
            Section::Intent => self.intent = text,
            Section::StartingContext => self.starting_context = text,
            Section::Metachain => self.metachain = text,
            Section::Filters => self.filters = text,
            Section::FinalExpressionTemplate => self.final_expression_template = text,
            Section::Notes => self.notes = text,
        }
    }

    pub fn get(&self, section: Section) -> &str {
        match section {
            Section::Intent => &self.intent,
            Section::StartingContext => &self.starting_context,
            Section::Metachain => &self.metachain,
            Section::Filters => &self.filters,
            Section::FinalExpressionTemplate => &self.final_expression_template,
            Section::Notes => &self.notes,
        }
    }
}
