//! Workspace crate for `countrydb-core` and `countrydb-cli`.
//!
//! Re-exports the core library so the demos under `demos/` can use a single
//! `countrydb_rs` path.
pub use countrydb_core::*;
