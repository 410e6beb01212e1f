//! Register Validators
//!
//! ## Overview
//!
//! Two invariants guard every write to the register:
//!
//! ### 1. Spatial consistency
//! A water point that claims to belong to a water course must actually sit
//! in that course's buffer zone. Operators routinely submit coordinates
//! digitised from imprecise maps; a point 300 m from the river it
//! supposedly draws from is a data error, not a new fact about the river.
//!
//! ### 2. Monthly-series completeness
//! Abstraction and discharge volumes are reported per calendar month. A
//! series with eleven months, a negative volume, or a stringly-typed value
//! would silently corrupt every downstream balance computation, so the
//! shape is enforced strictly at the door: exactly the keys `"1"`..`"12"`,
//! every value a non-negative number, no coercion.
//!
//! Both validators are pure predicates. They are called explicitly by the
//! persistence layer before commit - there are no save-time hooks - and a
//! single violation blocks the whole write.
//!
//! ## Usage
//!
//! ```
//! use aquapermit_core::{Validator, MonthlySeriesValidator};
//! use serde_json::json;
//!
//! let validator = MonthlySeriesValidator::default();
//! let series = json!({
//!     "1": 120.0, "2": 110.5, "3": 98.0, "4": 0, "5": 0, "6": 0,
//!     "7": 45.0, "8": 50.0, "9": 60.0, "10": 80.0, "11": 95.0, "12": 115.0,
//! });
//! assert!(validator.validate(&series).is_ok());
//! ```

mod monthly;
mod water_point;

pub use monthly::{MonthlySeries, MonthlySeriesValidator, MONTHS_PER_YEAR};
pub use water_point::{WaterPointCandidate, WaterPointValidator};
