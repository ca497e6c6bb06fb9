//! Glyph lookup for tree rendering.

/// Glyph shown for icon keys with no dedicated entry.
pub const DEFAULT_GLYPH: &str = "📄";

/// Map an icon key to its display glyph.
///
/// Keys are matched exactly, including case, because the model emits both
/// spellings for some kinds ("Filter"/"filter", "TypeTest"/"typeTest").
pub fn glyph_for(key: &str) -> &'static str {
    match key {
        "expression.operation" => "⚙️",
        "param.input" => "📥",
        "metachain" => "🔗",
        "uml.class" => "📦",
        "note" => "📝",
        "filter" | "Filter" => "🔍",
        "operation" => "⚙️",
        "parameter" => "📥",
        "ImpliedRelation" => "🔀",
        "typeTest" | "TypeTest" => "✓",
        _ => DEFAULT_GLYPH,
    }
}
