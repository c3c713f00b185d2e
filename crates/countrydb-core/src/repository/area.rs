// crates/countrydb-core/src/repository/area.rs
use super::{register, CountryRepository};
use crate::alias::{AreaAlias, AREA_NAME_ALIASES};
use crate::common::DbStats;
use crate::data::{AreaTable, ADMINISTRATIVE_AREAS};
use crate::error::{CountryDbError, Result};
use crate::model::{AdministrativeArea, Country};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::sync::Arc;

static AREA_REPOSITORY: OnceCell<AdministrativeAreaRepository> = OnceCell::new();

/// Subdivisions of a single country plus their lookup indices.
#[derive(Debug, Default)]
struct CountryAreas {
    areas: Vec<AdministrativeArea>,
    by_code: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

/// States, provinces and regions of the countries that have a subdivision
/// table, keyed by `(country, code)` and `(country, name)`.
///
/// Area names match exactly; alternate spellings are registered through
/// [`AREA_NAME_ALIASES`] instead (e.g. `Quebec` for `Québec`).
///
/// # Example
///
/// ```rust
/// use countrydb_core::{AdministrativeAreaRepository, CountryRepository};
///
/// let countries = CountryRepository::new();
/// let areas = AdministrativeAreaRepository::new(&countries)?;
///
/// let us = countries.find_by_iso_alpha2("US")?;
/// assert_eq!(areas.find_by_country(us).len(), 57);
/// assert_eq!(areas.find_by_name_and_country("California", us)?.code(), "CA");
/// # Ok::<(), countrydb_core::CountryDbError>(())
/// ```
#[derive(Debug)]
pub struct AdministrativeAreaRepository {
    by_country: HashMap<String, CountryAreas>,
    alias_count: usize,
}

impl AdministrativeAreaRepository {
    /// Builds the repository from the compiled subdivision and alias tables.
    ///
    /// # Errors
    ///
    /// [`CountryDbError::RecordNotFound`] if a table references a country
    /// `countries` does not know, or an alias targets an unknown area.
    pub fn new(countries: &CountryRepository) -> Result<Self> {
        Self::from_tables(countries, ADMINISTRATIVE_AREAS, AREA_NAME_ALIASES)
    }

    /// Builds the repository from caller-supplied tables.
    ///
    /// `areas` pairs a country alpha-2 code with its `(code, name)` rows;
    /// rows keep their order in [`find_by_country`](Self::find_by_country).
    pub fn from_tables(
        countries: &CountryRepository,
        areas: &[(&str, AreaTable)],
        aliases: &[AreaAlias],
    ) -> Result<Self> {
        let mut repo = Self {
            by_country: HashMap::with_capacity(areas.len()),
            alias_count: 0,
        };

        for (country_code, table) in areas {
            let country = countries.find_by_iso_alpha2(country_code)?;
            repo.populate_areas(Arc::clone(country), table);
        }
        repo.populate_aliases(aliases)?;

        tracing::debug!(
            countries = repo.by_country.len(),
            areas = repo.area_count(),
            aliases = repo.alias_count,
            "administrative area repository built"
        );
        Ok(repo)
    }

    /// Process-wide instance over [`CountryRepository::shared`], built on
    /// first use.
    pub fn shared() -> Result<&'static AdministrativeAreaRepository> {
        AREA_REPOSITORY.get_or_try_init(|| Self::new(CountryRepository::shared()))
    }

    fn populate_areas(&mut self, country: Arc<Country>, table: &[(&str, &str)]) {
        let entry = self
            .by_country
            .entry(country.iso_alpha2().to_owned())
            .or_default();

        for &(code, name) in table {
            let idx = entry.areas.len();
            if !register(&mut entry.by_code, code.to_owned(), idx, "area code") {
                continue;
            }
            register(&mut entry.by_name, name.to_owned(), idx, "area name");
            entry
                .areas
                .push(AdministrativeArea::new(code, name, Arc::clone(&country)));
        }
    }

    fn populate_aliases(&mut self, aliases: &[AreaAlias]) -> Result<()> {
        for alias in aliases {
            let entry = self.by_country.get_mut(alias.country_code).ok_or_else(|| {
                CountryDbError::not_found(format!(
                    "Country {} has no administrative areas",
                    alias.country_code
                ))
            })?;
            let idx = *entry.by_code.get(alias.code).ok_or_else(|| {
                CountryDbError::not_found(format!(
                    "{} is not a known code in Country {}",
                    alias.code, alias.country_code
                ))
            })?;
            if register(&mut entry.by_name, alias.alias.to_owned(), idx, "area alias") {
                self.alias_count += 1;
            }
        }
        Ok(())
    }

    fn found<'a>(
        area: Option<&'a AdministrativeArea>,
        msg: impl FnOnce() -> String,
    ) -> Result<&'a AdministrativeArea> {
        area.ok_or_else(|| {
            let msg = msg();
            tracing::trace!("{msg}");
            CountryDbError::not_found(msg)
        })
    }

    fn area_count(&self) -> usize {
        self.by_country.values().map(|e| e.areas.len()).sum()
    }

    /// All subdivisions of `country` in table order; empty if none are
    /// registered.
    pub fn find_by_country(&self, country: &Country) -> &[AdministrativeArea] {
        self.by_country
            .get(country.iso_alpha2())
            .map(|e| e.areas.as_slice())
            .unwrap_or(&[])
    }

    /// Exact name (or alias) lookup within `country`.
    pub fn find_by_name_and_country(
        &self,
        name: &str,
        country: &Country,
    ) -> Result<&AdministrativeArea> {
        let area = self
            .by_country
            .get(country.iso_alpha2())
            .and_then(|e| e.by_name.get(name).map(|&idx| &e.areas[idx]));
        Self::found(area, || {
            format!("{name} was not found in Country {}", country.iso_alpha2())
        })
    }

    pub fn has_with_name_and_country(&self, name: &str, country: &Country) -> bool {
        self.by_country
            .get(country.iso_alpha2())
            .is_some_and(|e| e.by_name.contains_key(name))
    }

    /// Exact code lookup within `country`, e.g. `("QC", Canada)`.
    pub fn find_by_code_and_country(
        &self,
        code: &str,
        country: &Country,
    ) -> Result<&AdministrativeArea> {
        let area = self
            .by_country
            .get(country.iso_alpha2())
            .and_then(|e| e.by_code.get(code).map(|&idx| &e.areas[idx]));
        Self::found(area, || {
            format!("{code} is not a known code in Country {}", country.iso_alpha2())
        })
    }

    pub fn has_with_code_and_country(&self, code: &str, country: &Country) -> bool {
        self.by_country
            .get(country.iso_alpha2())
            .is_some_and(|e| e.by_code.contains_key(code))
    }

    /// Counts of subdivisions and registered aliases.
    ///
    /// `countries` is always 0 so the result can be merged with
    /// [`CountryRepository::stats`] without double counting.
    pub fn stats(&self) -> DbStats {
        DbStats {
            countries: 0,
            administrative_areas: self.area_count(),
            aliases: self.alias_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test_support::capture_logs;
    use tracing::Level;

    fn fixture() -> (CountryRepository, AdministrativeAreaRepository) {
        let countries = CountryRepository::new();
        let areas = AdministrativeAreaRepository::new(&countries).unwrap();
        (countries, areas)
    }

    #[test]
    fn name_miss_logs_at_trace() {
        let (countries, areas) = fixture();
        let us = countries.find_by_iso_alpha2("US").unwrap();
        let logs = capture_logs(Level::TRACE, || {
            assert!(areas.find_by_name_and_country("Invalid", us).is_err());
        });
        assert!(logs.contains("TRACE"), "{logs}");
        assert!(logs.contains("Invalid was not found in Country US"), "{logs}");
    }

    #[test]
    fn code_miss_logs_at_trace() {
        let (countries, areas) = fixture();
        let ca = countries.find_by_iso_alpha2("CA").unwrap();
        let logs = capture_logs(Level::TRACE, || {
            assert!(areas.find_by_code_and_country("ZZ", ca).is_err());
        });
        assert!(logs.contains("ZZ is not a known code in Country CA"), "{logs}");
    }

    #[test]
    fn hits_and_predicates_stay_quiet() {
        let (countries, areas) = fixture();
        let ca = countries.find_by_iso_alpha2("CA").unwrap();
        let logs = capture_logs(Level::TRACE, || {
            assert!(areas.find_by_code_and_country("QC", ca).is_ok());
            assert!(!areas.has_with_name_and_country("Invalid", ca));
        });
        assert!(logs.is_empty(), "{logs}");
    }
}
