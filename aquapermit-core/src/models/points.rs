//! Water points: where water is abstracted from or discharged into a course

use geo::Point;
use serde::{Deserialize, Serialize};

use super::EntityId;

/// Whether a point takes water out of a course or returns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterPointKind {
    /// Water is abstracted at this point
    Abstraction,
    /// Water is discharged at this point
    Discharge,
}

impl WaterPointKind {
    /// Prefix used when generating the point's public identifier.
    pub fn identifier_prefix(&self) -> &'static str {
        match self {
            Self::Abstraction => "AP",
            Self::Discharge => "DP",
        }
    }
}

/// An abstraction or discharge point submitted with a permit application.
///
/// Invariant (enforced by the registry, not here): when `water_body` is
/// set, `geom` must lie inside that water course's buffer zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterPoint {
    /// Register id, assigned on commit
    pub id: EntityId,
    /// Abstraction or discharge
    pub kind: WaterPointKind,
    /// Public identifier, e.g. `AP-kXbqw-51382`; assigned on first commit
    pub identifier: Option<String>,
    /// Point geometry
    pub geom: Point<f64>,
    /// Sub-basin the point falls in, when known
    pub subbasin: Option<EntityId>,
    /// Water course the point belongs to
    pub water_body: Option<EntityId>,
    /// Set once the reviewing authority has approved the point
    pub approved: bool,
}

impl WaterPoint {
    /// New unapproved point with no identifier yet.
    pub fn new(kind: WaterPointKind, geom: Point<f64>) -> Self {
        Self {
            id: 0,
            kind,
            identifier: None,
            geom,
            subbasin: None,
            water_body: None,
            approved: false,
        }
    }

    /// Same point attached to a water course.
    pub fn with_water_body(mut self, water_body: EntityId) -> Self {
        self.water_body = Some(water_body);
        self
    }
}

/// Fixed monitoring point with no permit linkage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentPoint {
    /// Register id, assigned on commit
    pub id: EntityId,
    /// Public identifier
    pub identifier: Option<String>,
    /// Point geometry
    pub geom: Point<f64>,
    /// Sub-basin the point falls in, when known
    pub subbasin: Option<EntityId>,
}
