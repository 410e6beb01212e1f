//! Core traits for validators
//!
//! One trait, one method. The validators here are stateless predicates over
//! in-memory values; they carry no history and need no context argument.

use crate::errors::ValidationResult;

/// Core validator trait - implement this for each validated value shape
///
/// The value type carries a lifetime so validators can take borrowed views
/// (a candidate point borrowing its water course's buffer) without cloning
/// shared geometry per call.
pub trait Validator {
    /// The type of value this validator handles
    type Value<'a>;

    /// Validate a single value, returning the first violation found
    fn validate(&self, value: &Self::Value<'_>) -> ValidationResult<()>;
}

/// Trait for values that can be checked for basic well-formedness
pub trait Validatable {
    /// Check if the value is numerically valid (not NaN, infinite, etc)
    fn is_valid(&self) -> bool;
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validatable for geo::Point<f64> {
    fn is_valid(&self) -> bool {
        self.x().is_finite() && self.y().is_finite()
    }
}
