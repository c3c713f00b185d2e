// crates/countrydb-core/src/phone.rs
use crate::model::Country;
use std::sync::Arc;

/// Lookup of countries by international dialing prefix.
///
/// Several countries share a prefix (`1` covers the whole North American
/// Numbering Plan, `44` the UK and the Crown Dependencies), so the result is
/// always a list.
pub trait PhoneCodeSearch {
    /// Find countries whose long-distance prefix equals `prefix`.
    ///
    /// Accepts `"+44"`, `"44"` or `" 44 "`. Anything that does not parse as
    /// a number yields an empty list.
    fn find_countries_by_long_distance_prefix(&self, prefix: &str) -> Vec<&Arc<Country>>;
}

/// Parses user input such as `"+1"` into a numeric prefix.
pub(crate) fn parse_prefix(prefix: &str) -> Option<u32> {
    let digits = prefix.trim().trim_start_matches('+');
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
