//! Turning free-form command-line input into repository lookups.
use anyhow::Context;
use countrydb_core::{AdministrativeArea, AdministrativeAreaRepository, Country, CountryRepository};
use std::sync::Arc;

/// Numeric code first, then ISO2/ISO3, then any (folded) name or alias.
pub fn resolve_country<'a>(
    countries: &'a CountryRepository,
    query: &str,
) -> anyhow::Result<&'a Arc<Country>> {
    let query = query.trim();
    if let Ok(numeric) = query.parse::<u16>() {
        return Ok(countries.find_by_iso_numeric(numeric)?);
    }
    if let Ok(country) = countries.find_by_code(query) {
        return Ok(country);
    }
    tracing::debug!(query, "not an ISO code, trying names");
    countries
        .find_by_name(query)
        .with_context(|| format!("no country matches '{query}'"))
}

/// Area name (or alias) first, then area code.
///
/// If neither matches, the error reports the name lookup.
pub fn resolve_area<'a>(
    areas: &'a AdministrativeAreaRepository,
    name: &str,
    country: &Country,
) -> anyhow::Result<&'a AdministrativeArea> {
    match areas.find_by_name_and_country(name, country) {
        Ok(area) => Ok(area),
        Err(by_name) if by_name.is_not_found() => {
            tracing::debug!(name, "no area with that name, trying codes");
            areas
                .find_by_code_and_country(name, country)
                .map_err(|_| anyhow::Error::from(by_name))
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn countries() -> &'static CountryRepository {
        CountryRepository::shared()
    }

    fn areas() -> &'static AdministrativeAreaRepository {
        AdministrativeAreaRepository::shared().unwrap()
    }

    fn alpha2(query: &str) -> &'static str {
        resolve_country(countries(), query).unwrap().iso_alpha2()
    }

    #[test]
    fn country_by_numeric_code() {
        assert_eq!(alpha2("840"), "US");
        assert_eq!(alpha2(" 276 "), "DE");
    }

    #[test]
    fn country_by_iso_code_any_case() {
        assert_eq!(alpha2("deu"), "DE");
        assert_eq!(alpha2("gb"), "GB");
    }

    #[test]
    fn country_by_folded_name_or_alias() {
        assert_eq!(alpha2("aland islands"), "AX");
        assert_eq!(alpha2("Macedonia"), "MK");
    }

    #[test]
    fn unknown_numeric_code_is_not_retried_as_a_name() {
        let err = resolve_country(countries(), "9999").unwrap_err();
        assert_eq!(err.to_string(), "Cannot find country with isoNumeric 9999");
    }

    #[test]
    fn unknown_country_names_the_query() {
        let err = resolve_country(countries(), "Atlantis").unwrap_err();
        assert_eq!(err.to_string(), "no country matches 'Atlantis'");
        assert!(format!("{err:#}").contains("Cannot find country with name Atlantis"));
    }

    #[test]
    fn area_by_name_or_alias() {
        let us = alpha2_country("US");
        assert_eq!(resolve_area(areas(), "California", us).unwrap().code(), "CA");

        let ca = alpha2_country("CA");
        assert_eq!(resolve_area(areas(), "Quebec", ca).unwrap().code(), "QC");
    }

    #[test]
    fn area_falls_back_to_code() {
        let ca = alpha2_country("CA");
        assert_eq!(resolve_area(areas(), "QC", ca).unwrap().name(), "Québec");
    }

    #[test]
    fn area_miss_reports_the_name_lookup() {
        let us = alpha2_country("US");
        let err = resolve_area(areas(), "Invalid", us).unwrap_err();
        assert_eq!(err.to_string(), "Invalid was not found in Country US");
    }

    fn alpha2_country(code: &str) -> &'static Country {
        countries().find_by_iso_alpha2(code).unwrap()
    }
}
