//! Static rule tables for prompt analysis.
//!
//! Keyword lists are matched as case-insensitive substrings against the
//! lower-cased prompt, so entries like `"all "` keep their trailing space on
//! purpose.

/// One row of the relationship lookup table: a trigger keyword, the metachain
/// navigation path it maps to, and a short description used in guidance text.
pub(crate) struct RelationRule {
    pub keyword: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

/// SysML relationship keywords in match order. Rows are matched
/// independently, so a prompt containing "derives" hits both the "derive"
/// and "derives" rows, and "clientdependency" also hits the "dependency"
/// row. Both rows are reported. Pairs like "satisfy"/"satisfies" do not
/// overlap as substrings; such prompts report one row.
pub(crate) const RELATION_RULES: &[RelationRule] = &[
    RelationRule {
        keyword: "satisfy",
        path: "self.satisfy",
        description: "satisfy relationship (Block to Requirements)",
    },
    RelationRule {
        keyword: "satisfies",
        path: "self.satisfy",
        description: "satisfy relationship",
    },
    RelationRule {
        keyword: "derive",
        path: "self.derive",
        description: "derive relationship",
    },
    RelationRule {
        keyword: "derives",
        path: "self.derive",
        description: "derive relationship",
    },
    RelationRule {
        keyword: "allocate",
        path: "self.allocate",
        description: "allocate relationship",
    },
    RelationRule {
        keyword: "allocates",
        path: "self.allocate",
        description: "allocate relationship",
    },
    RelationRule {
        keyword: "trace",
        path: "self.trace",
        description: "trace relationship",
    },
    RelationRule {
        keyword: "traces",
        path: "self.trace",
        description: "trace relationship",
    },
    RelationRule {
        keyword: "verify",
        path: "self.verify",
        description: "verify relationship",
    },
    RelationRule {
        keyword: "verifies",
        path: "self.verify",
        description: "verify relationship",
    },
    RelationRule {
        keyword: "refine",
        path: "self.refine",
        description: "refine relationship",
    },
    RelationRule {
        keyword: "refines",
        path: "self.refine",
        description: "refine relationship",
    },
    RelationRule {
        keyword: "clientdependency",
        path: "self.clientDependency",
        description: "client dependency relationship",
    },
    RelationRule {
        keyword: "dependency",
        path: "self.clientDependency",
        description: "dependency relationship",
    },
    RelationRule {
        keyword: "owned element",
        path: "self.ownedElement",
        description: "owned elements",
    },
    RelationRule {
        keyword: "owned elements",
        path: "self.ownedElement",
        description: "owned elements",
    },
    RelationRule {
        keyword: "type",
        path: "self.type",
        description: "type relationship",
    },
    RelationRule {
        keyword: "input",
        path: "self.input",
        description: "input pins",
    },
    RelationRule {
        keyword: "output",
        path: "self.output",
        description: "output pins",
    },
];

pub(crate) const NESTED_KEYWORDS: &[&str] = &[
    "nested",
    "recursive",
    "recursively",
    "nested within",
    "contained in",
    "hierarchical",
    "parent",
    "child",
];

pub(crate) const STEREOTYPE_KEYWORDS: &[&str] = &[
    "stereotype",
    "stereotyped",
    "«",
    "guillemet",
    "applied stereotype",
];

pub(crate) const PROPERTY_KEYWORDS: &[&str] = &[
    "property",
    "attribute",
    "has property",
    "has attribute",
    "named",
    "name is",
    "name equals",
];

pub(crate) const COLLECTION_KEYWORDS: &[&str] = &["all ", "every ", "collection"];

pub(crate) const TYPE_TEST_KEYWORDS: &[&str] =
    &["type", "instance of", "is a", "kind of", "classifier"];

/// Prompts mentioning the type *relationship* are metachain territory, not a
/// type test, even though they contain "type".
pub(crate) const TYPE_TEST_EXCLUSION: &str = "type relationship";

pub(crate) const FILTER_KEYWORDS: &[&str] = &["filter", "where", "that", "which"];

pub(crate) const NESTED_ADVISORY: &str = r#"- DETECTED: Nested/recursive logic detected. Use ImpliedRelation icon/operation for navigating through implied relationships.
  - Icon: "ImpliedRelation" or "impliedRelation"
  - Type: "impliedRelation" or "operation"
  - This is for navigating through implicit model relationships (e.g., containment, ownership)"#;

pub(crate) const RELATION_ADVISORY_HEAD: &str =
    "- DETECTED: SysML relationship patterns found. Use metachain navigation for these relationships:";

pub(crate) const RELATION_ADVISORY_TAIL: &str = r#"  - Icon: "metachain"
  - Type: "metachain"
  - Use metachain navigation for explicit SysML/UML relationships"#;

pub(crate) const STEREOTYPE_ADVISORY: &str = r#"- DETECTED: Stereotype filtering needed. Use filter operation with stereotype check:
  - Filter condition: appliedStereotype->exists(s | s.name = '[STEREOTYPE NAME]')
  - Icon: "Filter"
  - Type: "Filter"
  - Use this to filter elements by their applied stereotypes"#;

pub(crate) const PROPERTY_ADVISORY: &str = r#"- DETECTED: Property/attribute filtering needed. Use filter operation with property check:
  - Filter condition: ->select(e | e.name = '[PROPERTY NAME]') or ->select(e | e.[PROPERTY_NAME] = '[VALUE]')
  - Icon: "Filter"
  - Type: "Filter"
  - Use this to filter elements by their properties or attributes"#;

pub(crate) const COLLECTION_ADVISORY: &str = r#"- DETECTED: Collection operation needed. Use collect, select, or exists operations:
  - collect: Transform each element in a collection
  - select: Filter elements from a collection
  - exists: Check if any element in collection matches condition"#;

pub(crate) const TYPE_TEST_ADVISORY: &str = r#"- DETECTED: Type checking needed. Use type test operation:
  - Icon: "TypeTest" or "typeTest"
  - Type: "typeTest" or "operation"
  - Use this to check if an element is an instance of a specific type or classifier"#;

pub(crate) const FILTER_ADVISORY: &str = r#"- DETECTED: Filtering/conditioning needed. Use filter operation:
  - Icon: "Filter"
  - Type: "Filter"
  - Use this to narrow down collections based on conditions"#;

pub(crate) const GUIDANCE_INTRO: &str =
    "Based on the user's prompt, the following Cameo operations should be used:\n\n";

pub(crate) const GUIDANCE_CLOSING: &str = "\n\nIMPORTANT: When generating the expressionView JSON, use the icons and types specified above based on the detected patterns.";
