//! Error Types for Register Validation Failures
//!
//! ## Design
//!
//! A single `ValidationError` enum covers every way a write can be rejected:
//!
//! ### Geometric violations
//! - `OutsideBufferZone`: a water point falls outside the buffer polygon of
//!   the water course it claims to belong to
//! - `InvalidGeometry`: coordinates are NaN or infinite
//!
//! ### Monthly-series violations
//! - `NotAnObject`: the series is not a JSON object at all
//! - `WrongEntryCount`: the object does not hold exactly twelve entries
//! - `MissingMonth`: one of the keys "1".."12" is absent
//! - `InvalidMonthValue`: a value is not a non-negative number
//!
//! Month-scoped variants carry the offending month number so callers can key
//! the error to the field that caused it ([`ValidationError::field_key`]).
//! A failing validator blocks the entire write; there is no partial
//! application and no retry.

use thiserror::Error;

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validation errors raised before a write is committed
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Point lies outside the buffer zone of its water course
    #[error("point ({x}, {y}) is outside the buffer zone of the associated water course")]
    OutsideBufferZone {
        /// Longitude of the rejected point
        x: f64,
        /// Latitude of the rejected point
        y: f64,
    },

    /// Geometry contains coordinates that are not finite numbers
    #[error("geometry has non-finite coordinates")]
    InvalidGeometry,

    /// Monthly series is not a JSON object
    #[error("monthly series must be a JSON object")]
    NotAnObject,

    /// Monthly series does not hold exactly twelve entries
    #[error("monthly series must contain {expected} months, found {actual}")]
    WrongEntryCount {
        /// Required number of entries (always twelve)
        expected: usize,
        /// Number of entries actually present
        actual: usize,
    },

    /// A month key between "1" and "12" is missing
    #[error("missing value for month {month}")]
    MissingMonth {
        /// Month number whose key is absent
        month: u8,
    },

    /// A month value is not a non-negative number
    #[error("invalid value for month {month}")]
    InvalidMonthValue {
        /// Month number carrying the bad value
        month: u8,
    },
}

impl ValidationError {
    /// Month key for month-scoped errors, `None` otherwise.
    ///
    /// Lets the caller attach the message to the offending field when
    /// shaping a structured rejection response.
    pub fn field_key(&self) -> Option<u8> {
        match self {
            Self::MissingMonth { month } | Self::InvalidMonthValue { month } => Some(*month),
            _ => None,
        }
    }
}
