// crates/countrydb-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the repositories.
///
/// Returned by [`CountryRepository::stats`](crate::CountryRepository::stats)
/// and [`AdministrativeAreaRepository::stats`](crate::AdministrativeAreaRepository::stats);
/// the counts reflect the indices materialized at construction time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub countries: usize,
    pub administrative_areas: usize,
    /// Extra name keys registered through alias tables.
    pub aliases: usize,
}

impl DbStats {
    /// Field-wise sum, used to combine the country and area repository stats.
    pub fn merge(self, other: DbStats) -> DbStats {
        DbStats {
            countries: self.countries + other.countries,
            administrative_areas: self.administrative_areas + other.administrative_areas,
            aliases: self.aliases + other.aliases,
        }
    }
}
