// crates/countrydb-core/src/model/area.rs
use super::Country;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A state, province, region or similar subdivision of a [`Country`].
///
/// The country is shared with the repository it came from; identity is
/// `(country, code)`, so the display name plays no part in equality.
#[derive(Clone, Debug)]
pub struct AdministrativeArea {
    code: String,
    name: String,
    country: Arc<Country>,
}

impl AdministrativeArea {
    pub fn new(code: impl Into<String>, name: impl Into<String>, country: Arc<Country>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            country,
        }
    }

    /// Subdivision code local to the country, e.g. `CA` or `NSW`.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country(&self) -> &Arc<Country> {
        &self.country
    }

    /// ISO 3166-2 style code, e.g. `US-CA`.
    pub fn full_code(&self) -> String {
        format!("{}-{}", self.country.iso_alpha2(), self.code)
    }
}

impl PartialEq for AdministrativeArea {
    fn eq(&self, other: &Self) -> bool {
        self.country == other.country && self.code == other.code
    }
}

impl Eq for AdministrativeArea {}

impl Hash for AdministrativeArea {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.country.hash(state);
        self.code.hash(state);
    }
}

impl fmt::Display for AdministrativeArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usa() -> Arc<Country> {
        Arc::new(
            Country::new(
                "US",
                "USA",
                840,
                "United States",
                "United States of America",
                "North America",
                1,
                "us",
                "USD",
            )
            .unwrap(),
        )
    }

    #[test]
    fn construction() {
        let usa = usa();
        let area = AdministrativeArea::new("XX", "Some name", Arc::clone(&usa));
        assert_eq!(area.code(), "XX");
        assert_eq!(area.name(), "Some name");
        assert!(Arc::ptr_eq(area.country(), &usa));
        assert_eq!(area.full_code(), "US-XX");
        assert_eq!(area.to_string(), "Some name");
    }

    #[test]
    fn equality_uses_country_and_code() {
        let usa = usa();
        let a = AdministrativeArea::new("XX", "Some name", Arc::clone(&usa));
        let b = AdministrativeArea::new("XX", "Some name", Arc::clone(&usa));
        let renamed = AdministrativeArea::new("XX", "Another name", Arc::clone(&usa));
        let other_code = AdministrativeArea::new("XY", "Some name", usa);
        assert_eq!(a, b);
        assert_eq!(a, renamed);
        assert_ne!(a, other_code);
    }

    #[test]
    fn same_code_in_different_countries_differs() {
        let australia = Arc::new(
            Country::new(
                "AU",
                "AUS",
                36,
                "Australia",
                "Commonwealth of Australia",
                "Oceania",
                61,
                "au",
                "AUD",
            )
            .unwrap(),
        );
        let washington = AdministrativeArea::new("WA", "Washington", usa());
        let western_australia = AdministrativeArea::new("WA", "Western Australia", australia);
        assert_ne!(washington, western_australia);
    }

    #[test]
    fn hash_agrees_with_equality() {
        use std::collections::HashSet;

        let us = usa();
        let mut set = HashSet::new();
        assert!(set.insert(AdministrativeArea::new("CA", "California", Arc::clone(&us))));
        // Equal country and code, different name and a separately allocated country.
        assert!(!set.insert(AdministrativeArea::new("CA", "Calif.", usa())));
        assert!(set.contains(&AdministrativeArea::new("CA", "", Arc::clone(&us))));
        assert!(set.insert(AdministrativeArea::new("NV", "Nevada", us)));
        assert_eq!(set.len(), 2);
    }
}
