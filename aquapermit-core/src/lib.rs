//! Validation core for aquapermit
//!
//! Models the entities of a water-permit register (basins, water courses,
//! abstraction/discharge points, permits) and enforces the invariants the
//! register depends on before any write is committed:
//!
//! - a water point tied to a water course must sit inside that course's
//!   buffer zone,
//! - a monthly series must carry exactly the twelve month keys with
//!   non-negative numeric values.
//!
//! Validators are pure and synchronous; the persistence layer calls them
//! explicitly rather than through save-time hooks.
//!
//! ```
//! use aquapermit_core::{Validator, WaterPointValidator, WaterPointCandidate};
//! use geo::{point, polygon, MultiPolygon};
//!
//! let buffer = MultiPolygon::new(vec![polygon![
//!     (x: 0.0, y: 0.0), (x: 4.0, y: 0.0), (x: 4.0, y: 4.0), (x: 0.0, y: 4.0),
//! ]]);
//!
//! let validator = WaterPointValidator::default();
//! let candidate = WaterPointCandidate::new(point!(x: 2.0, y: 2.0), Some(&buffer));
//!
//! assert!(validator.validate(&candidate).is_ok());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod errors;
pub mod geometry;
pub mod models;
pub mod network;
pub mod traits;
pub mod validators;

// Public API
pub use errors::{ValidationError, ValidationResult};
pub use network::{closest_node, NodeRef};
pub use traits::Validator;
pub use validators::{MonthlySeriesValidator, WaterPointCandidate, WaterPointValidator};

/// Crate version, for callers that surface it in reports.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
