// crates/countrydb-core/src/traits.rs
use crate::model::{AdministrativeArea, Country};
use crate::text::fold_key;

/// Name-based matching helpers for types that expose a canonical display name.
///
/// This trait centralizes Unicode‑aware, accent-insensitive and case-insensitive
/// comparisons based on [`fold_key`]. Implementors provide a `&str` view of
/// their canonical name via [`NameMatch::name_str`], and get convenient helpers:
/// - [`NameMatch::is_named`]: equality on folded form
/// - [`NameMatch::name_contains`]: substring match on folded form
///
/// # Examples
/// ```rust
/// use countrydb_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Curaçao").is_named("curacao"));
/// assert!(Place("Réunion").name_contains("REUN"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Accent-insensitive and case-insensitive name comparison.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }

    /// Accent-insensitive + case-insensitive substring match.
    ///
    /// An empty (or whitespace-only) query never matches.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        let q = fold_key(q);
        !q.is_empty() && fold_key(self.name_str()).contains(&q)
    }
}

/// Countries match on their common name.
impl NameMatch for Country {
    fn name_str(&self) -> &str {
        self.common_name()
    }
}

impl NameMatch for AdministrativeArea {
    fn name_str(&self) -> &str {
        self.name()
    }
}
