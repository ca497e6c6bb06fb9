//! Usage-context descriptions appended to the system prompt.

use serde::{Deserialize, Serialize};

/// Where the generated expression will run inside Cameo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContextOption {
    ScopeCriteria,
    DerivedProperty,
    CustomColumn,
    Legend,
}

impl ContextOption {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "scope-criteria" => Some(ContextOption::ScopeCriteria),
            "derived-property" => Some(ContextOption::DerivedProperty),
            "custom-column" => Some(ContextOption::CustomColumn),
            "legend" => Some(ContextOption::Legend),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ContextOption::ScopeCriteria => "scope-criteria",
            ContextOption::DerivedProperty => "derived-property",
            ContextOption::CustomColumn => "custom-column",
            ContextOption::Legend => "legend",
        }
    }

    fn blurb(&self) -> &'static str {
        match self {
            ContextOption::ScopeCriteria => {
                "This expression will be used as the scope criteria of a table or view. It receives the scope input and must decide which elements belong in scope."
            }
            ContextOption::DerivedProperty => {
                "This expression will be used to compute a derived property. It is evaluated against the owning element and must produce the property value."
            }
            ContextOption::CustomColumn => {
                "This expression will be used to compute a custom column in a table. It is evaluated once per row and must produce the cell value for that row."
            }
            ContextOption::Legend => {
                "This expression will be used as a legend condition. It must decide whether the legend item applies to a given element."
            }
        }
    }
}

/// Concrete model types named alongside a context option. Which field is
/// read depends on the option; the others are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContextDetails {
    pub input_type: Option<String>,
    pub row_type: Option<String>,
    pub element_type: Option<String>,
}

/// A selected usage context plus its detail fields, as submitted by the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageContext {
    #[serde(rename = "context")]
    pub option: ContextOption,
    #[serde(rename = "contextSpecific", default)]
    pub details: ContextDetails,
}

impl UsageContext {
    pub fn new(option: ContextOption) -> Self {
        Self {
            option,
            details: ContextDetails::default(),
        }
    }

    /// Render the context paragraph for the system prompt. Detail sentences
    /// are appended only when the relevant field is non-blank.
    pub fn describe(&self) -> String {
        let mut text = self.option.blurb().to_string();
        match self.option {
            ContextOption::ScopeCriteria => {
                if let Some(input) = non_blank(&self.details.input_type) {
                    text.push_str(&format!(" The scope input is a {}.", input));
                }
            }
            ContextOption::DerivedProperty => {
                if let Some(element) = non_blank(&self.details.element_type) {
                    text.push_str(&format!(" The owning element type is {}.", element));
                }
            }
            ContextOption::CustomColumn => {
                if let Some(row) = non_blank(&self.details.row_type) {
                    text.push_str(&format!(" Each row element is a {}.", row));
                }
            }
            ContextOption::Legend => {}
        }
        text
    }
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
