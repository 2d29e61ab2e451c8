//! Slug normalization for restaurant identifiers.
//!
//! # Responsibility
//! - Turn free text (names, operator-supplied slugs) into URL-safe ids.
//!
//! # Invariants
//! - Output only contains `[a-z0-9-]`, never starts/ends with `-` and never
//!   contains `--`.
//! - `normalize(normalize(x)) == normalize(x)`.
//! - Empty output is possible; callers decide whether that is an error.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

static NON_SLUG_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("valid slug separator regex"));
static REPEATED_HYPHEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-{2,}").expect("valid hyphen regex"));

const APOSTROPHES: &[char] = &['\'', '\u{2019}', '\u{2018}', '`'];

/// Normalizes arbitrary text into a slug.
///
/// Steps: trim, lowercase, decompose accents (NFD) and drop combining marks,
/// strip apostrophes, `&` becomes `and`, every run of non `[a-z0-9]`
/// characters becomes one hyphen, then edge hyphens are trimmed.
///
/// ```
/// assert_eq!(dinelist_core::slug::normalize("O'Brien's & Sons"), "obriens-and-sons");
/// assert_eq!(dinelist_core::slug::normalize("Café Déjà Vu"), "cafe-deja-vu");
/// ```
pub fn normalize(text: &str) -> String {
    let decomposed: String = text
        .trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| !APOSTROPHES.contains(c))
        .collect();
    let worded = decomposed.replace('&', " and ");
    let hyphenated = NON_SLUG_RUN_RE.replace_all(&worded, "-");
    let collapsed = REPEATED_HYPHEN_RE.replace_all(&hyphenated, "-");
    collapsed.trim_matches('-').to_string()
}
