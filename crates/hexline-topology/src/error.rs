//! Error types for coordinate parsing.

use thiserror::Error;

/// Result type for fallible topology operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced when reading coordinates from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input did not contain exactly two comma separated components
    #[error("expected two components \"x,y\", found {found} in {input:?}")]
    ComponentCount { input: String, found: usize },

    /// A component was not a valid signed integer
    #[error("invalid integer {value:?}: {source}")]
    InvalidInteger {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}
