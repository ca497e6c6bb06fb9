//! System-prompt composition for the expression generator.

pub mod composer;
pub mod context;
pub mod templates;

#[cfg(test)]
mod tests;

pub use composer::compose;
pub use context::{ContextDetails, ContextOption, UsageContext};

use serde::{Deserialize, Serialize};

use crate::response::Section;

const CORE_SECTIONS: [Section; 3] = [
    Section::Intent,
    Section::StartingContext,
    Section::FinalExpressionTemplate,
];

/// Which text sections the model is asked to produce ahead of the JSON
/// block. `Core` is the lean default; `Extended` requests all six.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionLayout {
    #[default]
    Core,
    Extended,
}

impl SectionLayout {
    /// The requested sections, in output order.
    pub fn sections(&self) -> &'static [Section] {
        match self {
            SectionLayout::Core => &CORE_SECTIONS,
            SectionLayout::Extended => &Section::ALL,
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "core" => Some(SectionLayout::Core),
            "extended" => Some(SectionLayout::Extended),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            SectionLayout::Core => "core",
            SectionLayout::Extended => "extended",
        }
    }
}
