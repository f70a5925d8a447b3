// crates/countrypicker-core/src/text.rs

/// Unicode-aware lowercasing used by the plain filter.
///
/// Only case is normalized; accents are kept, so `"côte"` does not match
/// `"cote"`. Use [`fold_key`] for accent-insensitive comparisons.
#[inline]
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

/// Convert a string into a folded key suitable for ranking and comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Curaçao` -> `Curacao`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use countrypicker_core::text::fold_key;
///
/// assert_eq!(fold_key("Côte d'Ivoire"), "cote d'ivoire");
/// assert_eq!(fold_key("ÅLAND"), "aland");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after [`fold_key`] normalization.
///
/// ```rust
/// use countrypicker_core::text::equals_folded;
///
/// assert!(equals_folded("Réunion", "reunion"));
/// assert!(!equals_folded("Niger", "Nigeria"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// Empty or whitespace-only.
#[inline]
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
