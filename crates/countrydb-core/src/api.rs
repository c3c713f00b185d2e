// crates/countrydb-core/src/api.rs

//! Flat, serializable views of the model types.
//!
//! The value objects keep their fields private and share their country
//! through an `Arc`; these views copy out plain fields so they can be handed
//! to `serde` (and, with the `json` feature, rendered via [`to_json`]).
use crate::model::{AdministrativeArea, Country};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryView {
    pub iso_alpha2: String,
    pub iso_alpha3: String,
    pub iso_numeric: u16,
    pub common_name: String,
    pub official_name: String,
    pub continent: String,
    pub long_distance_prefix: u32,
    pub top_level_domain: String,
    pub currency_iso_alpha_code: String,
}

impl From<&Country> for CountryView {
    fn from(c: &Country) -> Self {
        Self {
            iso_alpha2: c.iso_alpha2().to_owned(),
            iso_alpha3: c.iso_alpha3().to_owned(),
            iso_numeric: c.iso_numeric(),
            common_name: c.common_name().to_owned(),
            official_name: c.official_name().to_owned(),
            continent: c.continent().to_owned(),
            long_distance_prefix: c.long_distance_prefix(),
            top_level_domain: c.top_level_domain().to_owned(),
            currency_iso_alpha_code: c.currency_iso_alpha_code().to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdministrativeAreaView {
    pub code: String,
    /// ISO 3166-2 style, e.g. `US-CA`.
    pub full_code: String,
    pub name: String,
    pub country: String,
}

impl From<&AdministrativeArea> for AdministrativeAreaView {
    fn from(a: &AdministrativeArea) -> Self {
        Self {
            code: a.code().to_owned(),
            full_code: a.full_code(),
            name: a.name().to_owned(),
            country: a.country().iso_alpha2().to_owned(),
        }
    }
}

/// Pretty-printed JSON for any view (or collection of views).
#[cfg(feature = "json")]
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> crate::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn canada() -> Arc<Country> {
        Arc::new(
            Country::new(
                "CA",
                "CAN",
                124,
                "Canada",
                "Canada",
                "North America",
                1,
                "ca",
                "CAD",
            )
            .unwrap(),
        )
    }

    #[test]
    fn country_view_copies_fields() {
        let view = CountryView::from(&*canada());
        assert_eq!(view.iso_alpha2, "CA");
        assert_eq!(view.iso_alpha3, "CAN");
        assert_eq!(view.iso_numeric, 124);
        assert_eq!(view.currency_iso_alpha_code, "CAD");
    }

    #[test]
    fn area_view_carries_country_code() {
        let area = AdministrativeArea::new("QC", "Québec", canada());
        let view = AdministrativeAreaView::from(&area);
        assert_eq!(view.full_code, "CA-QC");
        assert_eq!(view.country, "CA");
        assert_eq!(view.name, "Québec");
    }

    #[cfg(feature = "json")]
    #[test]
    fn renders_json() {
        let json = to_json(&CountryView::from(&*canada())).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["iso_alpha2"], "CA");
        assert_eq!(value["long_distance_prefix"], 1);
    }
}
