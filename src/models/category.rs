//! Transaction categories
//!
//! A category is a free-form label. The presets below are the ones offered
//! when recording a transaction.

/// Category applied when none is given
pub const DEFAULT_CATEGORY: &str = "General";

pub const PRESET_CATEGORIES: [&str; 8] = [
    "General",
    "Food",
    "Transport",
    "Bills",
    "Entertainment",
    "Shopping",
    "Healthcare",
    "Education",
];

/// Resolve user input to a category label
///
/// Blank input falls back to `default`. Input matching a preset
/// case-insensitively is normalized to the preset's spelling; anything else
/// is kept as typed (trimmed).
pub fn resolve_category(input: Option<&str>, default: &str) -> String {
    let input = input.map(str::trim).unwrap_or_default();
    if input.is_empty() {
        return default.to_string();
    }

    PRESET_CATEGORIES
        .iter()
        .find(|preset| preset.eq_ignore_ascii_case(input))
        .map(|preset| preset.to_string())
        .unwrap_or_else(|| input.to_string())
}
