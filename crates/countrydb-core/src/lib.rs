// crates/countrydb-core/src/lib.rs

//! # countrydb-core
//!
//! In-memory ISO 3166 reference data: the 249 ISO 3166-1 countries and the
//! first-level subdivisions of a handful of them, compiled into the crate and
//! indexed once at construction.
//!
//! ```rust
//! use countrydb_core::{AdministrativeAreaRepository, CountryRepository};
//!
//! let countries = CountryRepository::shared();
//! let canada = countries.find_by_iso_alpha3("CAN")?;
//!
//! let areas = AdministrativeAreaRepository::shared()?;
//! let quebec = areas.find_by_name_and_country("Quebec", canada)?;
//! assert_eq!(quebec.full_code(), "CA-QC");
//! # Ok::<(), countrydb_core::CountryDbError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod alias;
pub mod api; // JSON views
pub mod common;
pub mod data;
pub mod error;
pub mod model;
pub mod phone;
pub mod repository;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::DbStats;
pub use crate::error::{CountryDbError, Result};
pub use crate::model::{AdministrativeArea, Country};
pub use crate::phone::PhoneCodeSearch;
pub use crate::repository::{AdministrativeAreaRepository, CountryRepository};
pub use crate::text::{equals_folded, fold_key};
pub use crate::traits::NameMatch;

/// Bring the common types and traits into scope.
pub mod prelude {
    pub use crate::api::{AdministrativeAreaView, CountryView};
    pub use crate::{
        AdministrativeArea, AdministrativeAreaRepository, Country, CountryDbError,
        CountryRepository, DbStats, NameMatch, PhoneCodeSearch, Result,
    };
}
