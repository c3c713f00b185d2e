use countrydb_core::prelude::*;

fn repo() -> &'static CountryRepository {
    CountryRepository::shared()
}

#[test]
fn holds_every_iso_country() {
    assert_eq!(repo().find_all().len(), 249);
    assert_eq!(repo().countries().len(), 249);
}

#[test]
fn find_all_is_ordered_by_alpha2() {
    let all = repo().find_all();
    let keys: Vec<&str> = all.keys().copied().collect();
    assert_eq!(keys.first(), Some(&"AD"));
    assert_eq!(keys.last(), Some(&"ZW"));

    let in_table_order: Vec<&str> = repo().countries().iter().map(|c| c.iso_alpha2()).collect();
    assert_eq!(keys, in_table_order);
}

#[test]
fn finds_by_alpha2() {
    let us = repo().find_by_iso_alpha2("US").unwrap();
    assert_eq!(us.iso_alpha3(), "USA");
    assert_eq!(us.common_name(), "United States");
    assert_eq!(us.official_name(), "United States of America");
    assert_eq!(us.long_distance_prefix(), 1);
    assert_eq!(us.currency_iso_alpha_code(), "USD");
}

#[test]
fn unknown_alpha2_names_the_query() {
    let err = repo().find_by_iso_alpha2("XY").unwrap_err();
    assert!(matches!(err, CountryDbError::RecordNotFound(_)));
    assert_eq!(err.to_string(), "Cannot find country with isoAlpha2 XY");
    assert!(!repo().has_with_iso_alpha2("XY"));
}

#[test]
fn iso_lookups_are_case_sensitive() {
    assert!(repo().find_by_iso_alpha2("us").is_err());
    assert!(!repo().has_with_iso_alpha3("usa"));
}

#[test]
fn finds_by_alpha3() {
    assert_eq!(repo().find_by_iso_alpha3("DEU").unwrap().iso_alpha2(), "DE");
    assert!(repo().has_with_iso_alpha3("USA"));
    assert!(!repo().has_with_iso_alpha3("USE"));

    let err = repo().find_by_iso_alpha3("XYZ").unwrap_err();
    assert_eq!(err.to_string(), "Cannot find country with isoAlpha3 XYZ");
}

#[test]
fn finds_by_numeric() {
    assert_eq!(repo().find_by_iso_numeric(840).unwrap().iso_alpha2(), "US");
    assert!(repo().has_with_iso_numeric(826));

    let err = repo().find_by_iso_numeric(9999).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Cannot find country with isoNumeric 9999");
}

#[test]
fn every_alpha2_resolves_to_itself() {
    for country in repo().countries() {
        let found = repo().find_by_iso_alpha2(country.iso_alpha2()).unwrap();
        assert_eq!(found, country);
        assert_eq!(repo().find_by_iso_alpha3(country.iso_alpha3()).unwrap(), country);
        assert_eq!(repo().find_by_iso_numeric(country.iso_numeric()).unwrap(), country);
    }
}

#[test]
fn name_lookup_ignores_case_and_diacritics() {
    assert_eq!(repo().find_by_name("united kingdom").unwrap().iso_alpha2(), "GB");
    assert_eq!(repo().find_by_name("Åland islands").unwrap().iso_alpha2(), "AX");
    assert_eq!(repo().find_by_name("aland islands").unwrap().iso_alpha2(), "AX");
    assert_eq!(repo().find_by_name("  TÜRKIYE ").unwrap().iso_alpha2(), "TR");
}

#[test]
fn name_lookup_covers_official_names() {
    let gb = repo()
        .find_by_name("United Kingdom of Great Britain and Northern Ireland")
        .unwrap();
    assert_eq!(gb.iso_alpha2(), "GB");
}

#[test]
fn invalid_name_is_not_found() {
    let err = repo().find_by_name("Invalid Country").unwrap_err();
    assert_eq!(err.to_string(), "Cannot find country with name Invalid Country");
    assert!(!repo().has_with_name("Invalid Country"));
}

#[test]
fn aliases_resolve_to_the_canonical_country() {
    assert_eq!(
        repo().find_by_name("Macedonia").unwrap(),
        repo().find_by_name("North Macedonia").unwrap()
    );
    assert_eq!(repo().find_by_name("Turkey").unwrap().iso_alpha2(), "TR");
    assert_eq!(repo().find_by_name("cote d'ivoire").unwrap().iso_alpha2(), "CI");
    assert_eq!(repo().find_by_name("Burma").unwrap().iso_alpha2(), "MM");
}

#[test]
fn common_and_official_name_lookups_are_exact() {
    assert!(repo().has_with_common_name("Czechia"));
    assert!(!repo().has_with_common_name("Czech Republic"));
    assert!(repo().has_with_official_name("Czech Republic"));
    assert!(!repo().has_with_official_name("Czechia"));
    assert!(!repo().has_with_common_name("czechia"));

    assert_eq!(
        repo().find_by_official_name("Czech Republic").unwrap().iso_alpha2(),
        "CZ"
    );
    let err = repo().find_by_common_name("Czech Republic").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Cannot find country with common name Czech Republic"
    );
    let err = repo().find_by_official_name("Czechia").unwrap_err();
    assert_eq!(err.to_string(), "Cannot find country with official name Czechia");
}

#[test]
fn find_by_code_is_lenient() {
    assert_eq!(repo().find_by_code("de").unwrap().iso_alpha2(), "DE");
    assert_eq!(repo().find_by_code(" deu ").unwrap().iso_alpha2(), "DE");
    assert!(repo().has_with_code("GBR"));
    assert!(!repo().has_with_code("ZZZ"));

    let err = repo().find_by_code("ZZZ").unwrap_err();
    assert_eq!(err.to_string(), "Cannot find country with code ZZZ");
}

#[test]
fn phone_prefix_is_shared_by_several_countries() {
    let codes: Vec<&str> = repo()
        .find_countries_by_long_distance_prefix("+44")
        .into_iter()
        .map(|c| c.iso_alpha2())
        .collect();
    assert_eq!(codes, ["GB", "GG", "IM", "JE"]);

    let nanp = repo().find_countries_by_long_distance_prefix("1");
    assert!(nanp.iter().any(|c| c.iso_alpha2() == "US"));
    assert!(nanp.iter().any(|c| c.iso_alpha2() == "CA"));

    assert!(repo().find_countries_by_long_distance_prefix("abc").is_empty());
    assert!(repo().find_countries_by_long_distance_prefix("99999").is_empty());
}

#[test]
fn continent_listing() {
    let continents = repo().continents();
    assert_eq!(continents.first(), Some(&"Europe"));
    assert!(continents.contains(&"Antarctica"));

    let europe = repo().find_all_by_continent("europe");
    assert!(europe.iter().any(|c| c.iso_alpha2() == "DE"));
    assert!(europe.iter().all(|c| c.continent() == "Europe"));
    assert!(repo().find_all_by_continent("Atlantis").is_empty());
}

#[test]
fn name_fragment_search() {
    let hits: Vec<&str> = repo()
        .find_all_by_name_fragment("guinea")
        .into_iter()
        .map(|c| c.iso_alpha2())
        .collect();
    assert!(hits.contains(&"GN"));
    assert!(hits.contains(&"GW"));
    assert!(hits.contains(&"PG"));
    assert!(repo().find_all_by_name_fragment("").is_empty());
}

#[test]
fn name_match_trait_on_countries() {
    let ax = repo().find_by_iso_alpha2("AX").unwrap();
    assert!(ax.is_named("aland islands"));
    assert!(ax.name_contains("ALAND"));
    assert!(!ax.is_named("Finland"));
}

#[test]
fn stats_count_countries_and_aliases() {
    let stats = repo().stats();
    assert_eq!(stats.countries, 249);
    assert_eq!(stats.administrative_areas, 0);
    assert_eq!(stats.aliases, 17);
}

#[test]
fn shared_instance_is_stable() {
    assert!(std::ptr::eq(CountryRepository::shared(), CountryRepository::shared()));
    let owned = CountryRepository::default();
    assert_eq!(owned.stats(), repo().stats());
}
