//! countrydb-cli
//! =============
//!
//! Command-line interface for the `countrydb-core` reference data.
//!
//! This crate primarily provides a binary (`countrydb`). The library target
//! renders this overview on docs.rs and holds the query resolution in
//! [`resolve`].
//!
//! Basic usage
//! -----------
//!
//! ```text
//! countrydb --help
//! countrydb stats
//! countrydb country "united kingdom"
//! countrydb --json area US California
//! countrydb phone +44
//! ```
//!
//! For programmatic access use the `countrydb-core` crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod resolve;
