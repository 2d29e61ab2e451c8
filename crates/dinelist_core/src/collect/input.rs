//! Raw operator input coercion.
//!
//! Pure helpers shared by the collector: default substitution, list parsing
//! and yes/no coercion.

/// Trims `raw`; returns `default` when nothing is left.
pub fn or_default(raw: &str, default: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Trimmed value, or `None` when blank.
pub fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Splits comma-delimited input into trimmed, non-empty items.
///
/// Keeps input order and repeated items as typed.
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Coerces a yes/no answer.
///
/// `y|yes|true|1` is true, `n|no|false|0` is false (case-insensitive);
/// blank and unrecognized input fall back to `default`.
pub fn parse_bool(raw: &str, default: bool) -> bool {
    match raw.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "true" | "1" => true,
        "n" | "no" | "false" | "0" => false,
        _ => default,
    }
}
