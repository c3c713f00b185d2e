// crates/countrydb-core/src/model/mod.rs

//! # Value Objects
//!
//! [`Country`] and [`AdministrativeArea`] are plain immutable values; the
//! repositories own them and hand out shared references.
mod area;
mod country;

pub use area::AdministrativeArea;
pub use country::Country;
