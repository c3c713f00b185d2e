// crates/countrydb-core/src/data/mod.rs

//! # Compiled Data Set
//!
//! Raw, untyped tables. The repositories turn these rows into validated
//! [`Country`](crate::Country) and [`AdministrativeArea`](crate::AdministrativeArea)
//! values once, at construction time.
mod areas;
mod countries;

pub use areas::{AreaTable, ADMINISTRATIVE_AREAS};
pub use countries::{CountryRow, COUNTRIES};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn country_table_has_every_iso_entry() {
        assert_eq!(COUNTRIES.len(), 249);
    }

    #[test]
    fn country_table_is_sorted_by_alpha2() {
        for window in COUNTRIES.windows(2) {
            assert!(
                window[0].0 < window[1].0,
                "country rows not sorted: {} >= {}",
                window[0].0,
                window[1].0
            );
        }
    }

    #[test]
    fn alpha3_and_numeric_codes_are_unique() {
        let alpha3: HashSet<_> = COUNTRIES.iter().map(|row| row.1).collect();
        let numeric: HashSet<_> = COUNTRIES.iter().map(|row| row.2).collect();
        assert_eq!(alpha3.len(), COUNTRIES.len());
        assert_eq!(numeric.len(), COUNTRIES.len());
    }

    #[test]
    fn area_tables_reference_known_countries() {
        for (iso2, _) in ADMINISTRATIVE_AREAS {
            assert!(COUNTRIES.iter().any(|row| row.0 == *iso2), "{iso2} missing");
        }
    }

    #[test]
    fn area_codes_are_unique_per_country() {
        for (iso2, areas) in ADMINISTRATIVE_AREAS {
            let codes: HashSet<_> = areas.iter().map(|(code, _)| code).collect();
            assert_eq!(codes.len(), areas.len(), "duplicate code in {iso2}");
        }
    }
}
