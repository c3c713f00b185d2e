// crates/countrydb-core/src/error.rs
use thiserror::Error;

/// Errors raised by the repositories and value constructors.
///
/// Lookups distinguish one failure only: the key did not resolve. The message
/// carries both the lookup dimension and the queried value, e.g.
/// `Cannot find country with isoAlpha2 XY`.
#[derive(Debug, Error)]
pub enum CountryDbError {
    /// A `find_*` lookup did not match any record.
    #[error("{0}")]
    RecordNotFound(String),

    /// A value object was constructed from malformed input.
    #[error("{0}")]
    InvalidArgument(String),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CountryDbError {
    pub(crate) fn not_found(msg: impl Into<String>) -> Self {
        CountryDbError::RecordNotFound(msg.into())
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        CountryDbError::InvalidArgument(msg.into())
    }

    /// `true` for [`CountryDbError::RecordNotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, CountryDbError::RecordNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, CountryDbError>;
