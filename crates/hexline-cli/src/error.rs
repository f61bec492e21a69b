//! Error types for the hexline binary.

use thiserror::Error;

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading arguments or writing output.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing, extra or unknown arguments
    #[error("Usage error: {0}")]
    Usage(String),

    /// Coordinate argument could not be parsed
    #[error("Invalid coordinate: {0}")]
    Coordinate(#[from] hexline_topology::Error),

    /// Unknown line method
    #[error("Unknown method {0:?} (expected \"axial\" or \"cube\")")]
    UnknownMethod(String),

    /// Unknown output format
    #[error("Unknown format {0:?} (expected \"text\" or \"json\")")]
    UnknownFormat(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
