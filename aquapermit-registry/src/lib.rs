//! In-memory register over the aquapermit domain model
//!
//! Every write goes through an explicit validate-then-commit operation: the
//! relevant validator from `aquapermit-core` runs first, and a violation
//! returns the error without touching any table. There are no save-time
//! hooks and no partial writes.
//!
//! ```
//! use aquapermit_registry::Registry;
//! use aquapermit_core::models::{WaterPoint, WaterPointKind};
//! use geo::point;
//!
//! let mut registry = Registry::new();
//! let point = WaterPoint::new(WaterPointKind::Abstraction, point!(x: 20.5, y: 44.5));
//!
//! // No water course attached, so the spatial check is skipped.
//! let id = registry.add_water_point(point).unwrap();
//! assert!(registry.water_point(id).unwrap().identifier.is_some());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod errors;
pub mod ident;
pub mod store;

pub use errors::{RegistryError, RegistryResult};
pub use store::Registry;
