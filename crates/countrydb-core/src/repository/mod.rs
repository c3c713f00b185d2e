// crates/countrydb-core/src/repository/mod.rs

//! # Repositories
//!
//! Build-once, read-many indices over the compiled data set.
mod area;
mod country;

pub use area::AdministrativeAreaRepository;
pub use country::CountryRepository;

use std::collections::hash_map::{Entry, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

/// Inserts `key -> idx` unless the key is already taken.
///
/// First registration wins. Returns `true` if the key was newly inserted; a
/// clash with a *different* entity is logged.
pub(crate) fn register<K>(
    index: &mut HashMap<K, usize>,
    key: K,
    idx: usize,
    dimension: &'static str,
) -> bool
where
    K: Hash + Eq + Debug,
{
    match index.entry(key) {
        Entry::Vacant(slot) => {
            slot.insert(idx);
            true
        }
        Entry::Occupied(slot) => {
            if *slot.get() != idx {
                tracing::warn!(
                    key = ?slot.key(),
                    dimension,
                    kept = *slot.get(),
                    ignored = idx,
                    "duplicate lookup key ignored"
                );
            }
            false
        }
    }
}
