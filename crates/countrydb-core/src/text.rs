// crates/countrydb-core/src/text.rs

/// Convert a string into a folded key suitable for indexing and comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Åland` -> `Aland`)
/// 2\) Normalize to lowercase
/// 3\) Trim surrounding whitespace
///
/// The implementation uses the `deunicode` crate to perform a best-effort
/// transliteration from Unicode to ASCII.
///
/// # Examples
///
/// ```rust
/// use countrydb_core::text::fold_key;
///
/// assert_eq!(fold_key("Åland Islands"), "aland islands");
/// assert_eq!(fold_key("Côte d'Ivoire"), "cote d'ivoire");
/// assert_eq!(fold_key("  Québec "), "quebec");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s.trim()).to_lowercase()
}

/// Compares two strings for equality after Unicode folding and normalization.
///
/// # Examples
///
/// ```rust
/// use countrydb_core::text::equals_folded;
///
/// assert!(equals_folded("Réunion", "reunion"));
/// assert!(equals_folded("CURAÇAO", "curacao"));
/// assert!(!equals_folded("Niger", "Nigeria"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_case_and_diacritics() {
        assert_eq!(fold_key("Åland islands"), fold_key("Åland Islands"));
        assert_eq!(fold_key("São Tomé and Príncipe"), "sao tome and principe");
        assert_eq!(fold_key("UNITED KINGDOM"), "united kingdom");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(fold_key(""), "");
        assert_eq!(fold_key("   "), "");
    }

    #[test]
    fn equals_folded_distinguishes_different_names() {
        assert!(equals_folded("Saint Barthélemy", "saint barthelemy"));
        assert!(!equals_folded("Dominica", "Dominican Republic"));
    }
}
