//! Domain model of the water-permit register
//!
//! Plain in-memory structs; persistence and cross-entity references are the
//! registry's concern, so entities refer to each other by [`EntityId`] only.
//! Nothing here validates itself - the validators in
//! [`crate::validators`] run explicitly before a write is committed.

mod hydrology;
mod measurements;
mod permit;
mod points;

pub use hydrology::{
    Basin, NaceCode, SubBasin, SurfaceWaterBody, WaterBodyNode, WaterCourseNetwork,
    WaterUseSector, Wetland,
};
pub use measurements::{GaugingStation, NodeFlowMeasurement, WaterHeight, WaterPointUse};
pub use permit::{Permit, PermitStatus, PointsType, WaterType, MONTHLY_SERIES_FIELDS};
pub use points::{AssessmentPoint, WaterPoint, WaterPointKind};

/// Identifier assigned by the registry when an entity is committed.
pub type EntityId = u64;
