// crates/countrydb-core/src/repository/country.rs
use super::register;
use crate::alias::COUNTRY_NAME_ALIASES;
use crate::common::DbStats;
use crate::data::{CountryRow, COUNTRIES};
use crate::error::{CountryDbError, Result};
use crate::model::Country;
use crate::phone::{parse_prefix, PhoneCodeSearch};
use crate::text::fold_key;
use once_cell::sync::OnceCell;
use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;
use std::sync::Arc;

// Single in-process instance for callers that do not want to own one.
static COUNTRY_REPOSITORY: OnceCell<CountryRepository> = OnceCell::new();

/// The canonical list of ISO 3166-1 countries, indexed for lookup.
///
/// All indices are built once in [`CountryRepository::new`]; afterwards the
/// repository is read-only and can be shared across threads freely.
///
/// Every `find_*` returns [`CountryDbError::RecordNotFound`] when the key does
/// not resolve; every `has_*` is the non-failing counterpart.
///
/// # Example
///
/// ```rust
/// use countrydb_core::CountryRepository;
///
/// let repo = CountryRepository::new();
/// let us = repo.find_by_iso_alpha2("US")?;
/// assert_eq!(us.common_name(), "United States");
///
/// // Name lookups ignore case and diacritics, and know a few aliases.
/// assert_eq!(repo.find_by_name("åland islands")?.iso_alpha2(), "AX");
/// assert_eq!(repo.find_by_name("Macedonia")?, repo.find_by_name("North Macedonia")?);
/// # Ok::<(), countrydb_core::CountryDbError>(())
/// ```
#[derive(Debug)]
pub struct CountryRepository {
    countries: Vec<Arc<Country>>,
    by_alpha2: HashMap<String, usize>,
    by_alpha3: HashMap<String, usize>,
    by_numeric: HashMap<u16, usize>,
    by_common_name: HashMap<String, usize>,
    by_official_name: HashMap<String, usize>,
    /// Folded common names, official names and aliases.
    by_folded_name: HashMap<String, usize>,
    alias_count: usize,
}

impl CountryRepository {
    /// Builds the repository from the compiled country table.
    pub fn new() -> Self {
        let mut repo = Self {
            countries: Vec::with_capacity(COUNTRIES.len()),
            by_alpha2: HashMap::with_capacity(COUNTRIES.len()),
            by_alpha3: HashMap::with_capacity(COUNTRIES.len()),
            by_numeric: HashMap::with_capacity(COUNTRIES.len()),
            by_common_name: HashMap::with_capacity(COUNTRIES.len()),
            by_official_name: HashMap::with_capacity(COUNTRIES.len()),
            by_folded_name: HashMap::with_capacity(COUNTRIES.len() * 2),
            alias_count: 0,
        };

        for row in COUNTRIES {
            match country_from_row(row) {
                Ok(country) => repo.insert(country),
                Err(e) => tracing::warn!(iso_alpha2 = row.0, error = %e, "skipping country row"),
            }
        }
        repo.populate_aliases();

        tracing::debug!(
            countries = repo.countries.len(),
            names = repo.by_folded_name.len(),
            aliases = repo.alias_count,
            "country repository built"
        );
        repo
    }

    /// Process-wide instance, built on first use.
    pub fn shared() -> &'static CountryRepository {
        COUNTRY_REPOSITORY.get_or_init(CountryRepository::new)
    }

    fn insert(&mut self, country: Country) {
        let idx = self.countries.len();
        let names = [
            fold_key(country.common_name()),
            fold_key(country.official_name()),
        ];

        // The alpha-2 index is the identity; a duplicate row is dropped entirely.
        if !register(&mut self.by_alpha2, country.iso_alpha2().to_owned(), idx, "isoAlpha2") {
            return;
        }
        register(&mut self.by_alpha3, country.iso_alpha3().to_owned(), idx, "isoAlpha3");
        register(&mut self.by_numeric, country.iso_numeric(), idx, "isoNumeric");
        register(&mut self.by_common_name, country.common_name().to_owned(), idx, "common name");
        register(&mut self.by_official_name, country.official_name().to_owned(), idx, "official name");
        for name in names {
            register(&mut self.by_folded_name, name, idx, "name");
        }

        self.countries.push(Arc::new(country));
    }

    fn populate_aliases(&mut self) {
        for alias in COUNTRY_NAME_ALIASES {
            let Some(&idx) = self.by_alpha2.get(alias.iso_alpha2) else {
                tracing::warn!(
                    iso_alpha2 = alias.iso_alpha2,
                    alias = alias.alias,
                    "alias targets unknown country"
                );
                continue;
            };
            if register(&mut self.by_folded_name, fold_key(alias.alias), idx, "alias") {
                self.alias_count += 1;
            }
        }
    }

    fn lookup<K, Q>(&self, index: &HashMap<K, usize>, key: &Q) -> Option<&Arc<Country>>
    where
        K: Borrow<Q> + Hash + Eq,
        Q: Hash + Eq + ?Sized,
    {
        index.get(key).map(|&idx| &self.countries[idx])
    }

    fn found<'a>(
        country: Option<&'a Arc<Country>>,
        msg: impl FnOnce() -> String,
    ) -> Result<&'a Arc<Country>> {
        country.ok_or_else(|| {
            let msg = msg();
            tracing::trace!("{msg}");
            CountryDbError::not_found(msg)
        })
    }

    // -----------------------------------------------------------------------
    // ISO codes (exact match)
    // -----------------------------------------------------------------------

    pub fn find_by_iso_alpha2(&self, code: &str) -> Result<&Arc<Country>> {
        Self::found(self.lookup(&self.by_alpha2, code), || {
            format!("Cannot find country with isoAlpha2 {code}")
        })
    }

    pub fn has_with_iso_alpha2(&self, code: &str) -> bool {
        self.by_alpha2.contains_key(code)
    }

    pub fn find_by_iso_alpha3(&self, code: &str) -> Result<&Arc<Country>> {
        Self::found(self.lookup(&self.by_alpha3, code), || {
            format!("Cannot find country with isoAlpha3 {code}")
        })
    }

    pub fn has_with_iso_alpha3(&self, code: &str) -> bool {
        self.by_alpha3.contains_key(code)
    }

    pub fn find_by_iso_numeric(&self, numeric: u16) -> Result<&Arc<Country>> {
        Self::found(self.lookup(&self.by_numeric, &numeric), || {
            format!("Cannot find country with isoNumeric {numeric}")
        })
    }

    pub fn has_with_iso_numeric(&self, numeric: u16) -> bool {
        self.by_numeric.contains_key(&numeric)
    }

    /// Find a country by code, trying alpha-2 first and then alpha-3.
    ///
    /// Unlike the dedicated ISO lookups this one trims the input and ignores
    /// ASCII case, so it suits user input:
    /// - `"DE"`, `"de"` → alpha-2
    /// - `"DEU"`, `" deu "` → alpha-3
    pub fn find_by_code(&self, code: &str) -> Result<&Arc<Country>> {
        let normalized = code.trim().to_ascii_uppercase();
        let country = self
            .lookup(&self.by_alpha2, normalized.as_str())
            .or_else(|| self.lookup(&self.by_alpha3, normalized.as_str()));
        Self::found(country, || format!("Cannot find country with code {code}"))
    }

    pub fn has_with_code(&self, code: &str) -> bool {
        let normalized = code.trim().to_ascii_uppercase();
        self.by_alpha2.contains_key(normalized.as_str())
            || self.by_alpha3.contains_key(normalized.as_str())
    }

    // -----------------------------------------------------------------------
    // Names
    // -----------------------------------------------------------------------

    /// Resolve a common name, official name or alias.
    ///
    /// The match is case- and accent-insensitive: `"united kingdom"`,
    /// `"UNITED KINGDOM"` and `"Åland islands"` all resolve.
    pub fn find_by_name(&self, name: &str) -> Result<&Arc<Country>> {
        let key = fold_key(name);
        Self::found(self.lookup(&self.by_folded_name, key.as_str()), || {
            format!("Cannot find country with name {name}")
        })
    }

    pub fn has_with_name(&self, name: &str) -> bool {
        self.by_folded_name.contains_key(fold_key(name).as_str())
    }

    /// Exact (case-sensitive) match on the common name only.
    pub fn find_by_common_name(&self, name: &str) -> Result<&Arc<Country>> {
        Self::found(self.lookup(&self.by_common_name, name), || {
            format!("Cannot find country with common name {name}")
        })
    }

    pub fn has_with_common_name(&self, name: &str) -> bool {
        self.by_common_name.contains_key(name)
    }

    /// Exact (case-sensitive) match on the official name only.
    pub fn find_by_official_name(&self, name: &str) -> Result<&Arc<Country>> {
        Self::found(self.lookup(&self.by_official_name, name), || {
            format!("Cannot find country with official name {name}")
        })
    }

    pub fn has_with_official_name(&self, name: &str) -> bool {
        self.by_official_name.contains_key(name)
    }

    /// Countries whose common or official name contains `fragment`
    /// (folded), in table order.
    pub fn find_all_by_name_fragment(&self, fragment: &str) -> Vec<&Arc<Country>> {
        let q = fold_key(fragment);
        if q.is_empty() {
            return Vec::new();
        }
        self.countries
            .iter()
            .filter(|c| {
                fold_key(c.common_name()).contains(&q) || fold_key(c.official_name()).contains(&q)
            })
            .collect()
    }

    // -----------------------------------------------------------------------
    // Listings
    // -----------------------------------------------------------------------

    /// Every country keyed by alpha-2.
    ///
    /// The compiled table is sorted by alpha-2, so iteration order equals
    /// insertion order.
    pub fn find_all(&self) -> BTreeMap<&str, &Arc<Country>> {
        self.countries
            .iter()
            .map(|c| (c.iso_alpha2(), c))
            .collect()
    }

    /// All countries in insertion order.
    pub fn countries(&self) -> &[Arc<Country>] {
        &self.countries
    }

    /// Countries on `continent` (ASCII case-insensitive), in table order.
    pub fn find_all_by_continent(&self, continent: &str) -> Vec<&Arc<Country>> {
        let continent = continent.trim();
        self.countries
            .iter()
            .filter(|c| c.continent().eq_ignore_ascii_case(continent))
            .collect()
    }

    /// Distinct continents in order of first appearance.
    pub fn continents(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for c in &self.countries {
            if !out.contains(&c.continent()) {
                out.push(c.continent());
            }
        }
        out
    }

    /// Counts of indexed countries and registered aliases.
    ///
    /// `administrative_areas` is always 0 here; see
    /// [`AdministrativeAreaRepository::stats`](crate::AdministrativeAreaRepository::stats).
    pub fn stats(&self) -> DbStats {
        DbStats {
            countries: self.countries.len(),
            administrative_areas: 0,
            aliases: self.alias_count,
        }
    }
}

impl Default for CountryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl PhoneCodeSearch for CountryRepository {
    fn find_countries_by_long_distance_prefix(&self, prefix: &str) -> Vec<&Arc<Country>> {
        let Some(prefix) = parse_prefix(prefix) else {
            return Vec::new();
        };
        self.countries
            .iter()
            .filter(|c| c.long_distance_prefix() == prefix)
            .collect()
    }
}

fn country_from_row(row: &CountryRow) -> Result<Country> {
    let &(alpha2, alpha3, numeric, common, official, continent, prefix, tld, currency) = row;
    Country::new(
        alpha2, alpha3, numeric, common, official, continent, prefix, tld, currency,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test_support::capture_logs;
    use tracing::Level;

    #[test]
    fn has_with_code_matches_find_by_code() {
        let repo = CountryRepository::new();
        for code in ["DE", "deu", " gbr ", "ZZZ", "", "D"] {
            assert_eq!(repo.has_with_code(code), repo.find_by_code(code).is_ok(), "{code:?}");
        }
    }

    #[test]
    fn predicates_do_not_log_misses() {
        let repo = CountryRepository::new();
        let logs = capture_logs(Level::TRACE, || {
            assert!(!repo.has_with_code("ZZZ"));
            assert!(!repo.has_with_name("Atlantis"));
        });
        assert!(logs.is_empty(), "{logs}");
    }

    #[test]
    fn finder_misses_log_at_trace() {
        let repo = CountryRepository::new();
        let logs = capture_logs(Level::TRACE, || {
            assert!(repo.find_by_code("ZZZ").is_err());
        });
        assert!(logs.contains("TRACE"), "{logs}");
        assert!(logs.contains("Cannot find country with code ZZZ"), "{logs}");
    }
}
