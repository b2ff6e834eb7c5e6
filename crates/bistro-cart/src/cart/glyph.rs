//! Display glyphs for line items.

use std::collections::BTreeMap;

use crate::ids::ItemId;

/// Glyph shown for ids missing from the table.
pub const DEFAULT_GLYPH: &str = "🍽️";

/// Built-in glyphs keyed by menu item id.
const BUILTIN_GLYPHS: &[(&str, &str)] = &[
    ("1", "🍔"),
    ("2", "🍕"),
    ("3", "🌮"),
    ("4", "🍣"),
    ("5", "🥗"),
    ("6", "🍝"),
    ("7", "🍜"),
    ("8", "🍰"),
    ("9", "🥤"),
];

/// Static glyph lookup with optional per-site overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphTable {
    overrides: BTreeMap<String, String>,
}

impl GlyphTable {
    /// Create a table from configured overrides. Overrides win over built-ins.
    pub fn with_overrides(overrides: BTreeMap<String, String>) -> Self {
        Self { overrides }
    }

    /// Look up the glyph for an item, falling back to [`DEFAULT_GLYPH`].
    pub fn lookup(&self, id: &ItemId) -> &str {
        if let Some(glyph) = self.overrides.get(id.as_str()) {
            return glyph;
        }
        BUILTIN_GLYPHS
            .iter()
            .find(|(key, _)| *key == id.as_str())
            .map(|(_, glyph)| *glyph)
            .unwrap_or(DEFAULT_GLYPH)
    }
}
