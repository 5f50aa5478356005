//! Defines [`GeoRingError`], representing all errors returned by this crate.

use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeoRingError {
    /// Coordinate array text could not be parsed, or an entry is missing a
    /// required `lat`/`lng` key.
    #[error("Malformed coordinate input: {0}")]
    MalformedInput(String),

    /// Ring normalization was invoked with zero points.
    #[error("Cannot build a ring from an empty point sequence")]
    EmptyRing,

    /// WKT text was rejected while constructing a geometry.
    #[error("Invalid WKT: {0}")]
    InvalidWkt(String),

    /// A binary blob could not be parsed back into a geometry.
    #[error("Corrupt binary geometry: {0}")]
    CorruptBinary(String),

    /// [std::io::Error]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// [serde_json::Error]
    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeoRingError>;
