// crates/countrydb-core/src/model/country.rs
use crate::error::{CountryDbError, Result};
use std::fmt;
use std::hash::{Hash, Hasher};

/// An ISO 3166-1 country entry.
///
/// Immutable once constructed. Identity is the alpha-2 code: two `Country`
/// values with the same `iso_alpha2` compare equal (and hash equal) even if
/// any other field differs.
#[derive(Clone, Debug)]
pub struct Country {
    iso_alpha2: String,
    iso_alpha3: String,
    iso_numeric: u16,
    common_name: String,
    official_name: String,
    continent: String,
    long_distance_prefix: u32,
    top_level_domain: String,
    currency_iso_alpha_code: String,
}

impl Country {
    /// Builds a country, validating the ISO code lengths.
    ///
    /// Lengths are counted in `char`s, not bytes.
    ///
    /// # Errors
    ///
    /// [`CountryDbError::InvalidArgument`] if `iso_alpha2` is not exactly 2
    /// characters or `iso_alpha3` is not exactly 3 characters.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        iso_alpha2: impl Into<String>,
        iso_alpha3: impl Into<String>,
        iso_numeric: u16,
        common_name: impl Into<String>,
        official_name: impl Into<String>,
        continent: impl Into<String>,
        long_distance_prefix: u32,
        top_level_domain: impl Into<String>,
        currency_iso_alpha_code: impl Into<String>,
    ) -> Result<Self> {
        let iso_alpha2 = iso_alpha2.into();
        let iso_alpha3 = iso_alpha3.into();

        if iso_alpha2.chars().count() != 2 {
            return Err(CountryDbError::invalid(
                "IsoAlpha2 must be a 2 character string",
            ));
        }
        if iso_alpha3.chars().count() != 3 {
            return Err(CountryDbError::invalid(
                "IsoAlpha3 must be a 3 character string",
            ));
        }

        Ok(Self {
            iso_alpha2,
            iso_alpha3,
            iso_numeric,
            common_name: common_name.into(),
            official_name: official_name.into(),
            continent: continent.into(),
            long_distance_prefix,
            top_level_domain: top_level_domain.into(),
            currency_iso_alpha_code: currency_iso_alpha_code.into(),
        })
    }

    pub fn iso_alpha2(&self) -> &str {
        &self.iso_alpha2
    }

    pub fn iso_alpha3(&self) -> &str {
        &self.iso_alpha3
    }

    pub fn iso_numeric(&self) -> u16 {
        self.iso_numeric
    }

    /// Short everyday name, e.g. `United States`.
    pub fn common_name(&self) -> &str {
        &self.common_name
    }

    /// Formal name, e.g. `United States of America`.
    pub fn official_name(&self) -> &str {
        &self.official_name
    }

    pub fn continent(&self) -> &str {
        &self.continent
    }

    /// International dialing code without the leading `+`.
    pub fn long_distance_prefix(&self) -> u32 {
        self.long_distance_prefix
    }

    /// Country-code TLD without the leading dot.
    pub fn top_level_domain(&self) -> &str {
        &self.top_level_domain
    }

    /// ISO 4217 code; empty for territories without a currency of their own.
    pub fn currency_iso_alpha_code(&self) -> &str {
        &self.currency_iso_alpha_code
    }
}

impl PartialEq for Country {
    fn eq(&self, other: &Self) -> bool {
        self.iso_alpha2 == other.iso_alpha2
    }
}

impl Eq for Country {}

impl Hash for Country {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.iso_alpha2.hash(state);
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iso_alpha2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(iso_alpha2: &str, iso_alpha3: &str) -> Result<Country> {
        Country::new(
            iso_alpha2,
            iso_alpha3,
            9999,
            "Common Name",
            "Official Name",
            "Asia",
            99,
            "tld",
            "XYD",
        )
    }

    #[test]
    fn construction_keeps_every_field() {
        let country = build("XY", "XYZ").unwrap();
        assert_eq!(country.iso_alpha2(), "XY");
        assert_eq!(country.iso_alpha3(), "XYZ");
        assert_eq!(country.iso_numeric(), 9999);
        assert_eq!(country.common_name(), "Common Name");
        assert_eq!(country.official_name(), "Official Name");
        assert_eq!(country.continent(), "Asia");
        assert_eq!(country.long_distance_prefix(), 99);
        assert_eq!(country.top_level_domain(), "tld");
        assert_eq!(country.currency_iso_alpha_code(), "XYD");
        assert_eq!(country.to_string(), "XY");
    }

    #[test]
    fn rejects_three_letter_alpha2() {
        let err = build("USA", "USA").unwrap_err();
        assert!(matches!(err, CountryDbError::InvalidArgument(_)));
        assert_eq!(err.to_string(), "IsoAlpha2 must be a 2 character string");
    }

    #[test]
    fn rejects_two_letter_alpha3() {
        let err = build("US", "US").unwrap_err();
        assert!(matches!(err, CountryDbError::InvalidArgument(_)));
        assert_eq!(err.to_string(), "IsoAlpha3 must be a 3 character string");
    }

    #[test]
    fn lengths_count_chars_not_bytes() {
        assert!(build("ÅL", "ÅLA").is_ok());
        assert!(build("Å", "ALA").is_err());
    }

    #[test]
    fn equality_is_by_alpha2_only() {
        let canada = Country::new(
            "CA", "CAN", 124, "Canada", "Canada", "North America", 1, "ca", "CAD",
        )
        .unwrap();
        let other = Country::new(
            "CA", "XXX", 0, "Other", "Other", "Europe", 99, "xx", "EUR",
        )
        .unwrap();
        assert_eq!(canada, other);

        let mexico = Country::new(
            "MX", "CAN", 124, "Canada", "Canada", "North America", 1, "ca", "CAD",
        )
        .unwrap();
        assert_ne!(canada, mexico);
    }

    #[test]
    fn hash_agrees_with_equality() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        assert!(set.insert(build("XY", "XYZ").unwrap()));
        // Same alpha-2, every other field different.
        let twin = Country::new("XY", "QQQ", 1, "Twin", "Twin", "Europe", 1, "qq", "EUR").unwrap();
        assert!(!set.insert(twin.clone()));
        assert!(set.contains(&twin));
        assert!(set.insert(build("XZ", "XYZ").unwrap()));
        assert_eq!(set.len(), 2);
    }
}
