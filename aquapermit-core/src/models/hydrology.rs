//! Hydrological reference entities
//!
//! Basins, sub-basins, wetlands and the water-course network are imported in
//! bulk and rarely change; water points and permits reference them.

use geo::{Centroid, MultiLineString, MultiPolygon, Point, Polygon};
use serde::{Deserialize, Serialize};

use super::EntityId;

/// Economic activity code attached to permits (NACE classification).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NaceCode {
    /// Register id, assigned on commit
    pub id: EntityId,
    /// NACE code, e.g. `A01.11`
    pub code: String,
    /// Human-readable activity description
    pub description: String,
}

/// Sector polygon grouping permits by water-use purpose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterUseSector {
    /// Register id, assigned on commit
    pub id: EntityId,
    /// Sector name
    pub name: String,
    /// Sector polygon
    pub geom: Polygon<f64>,
}

/// Top-level drainage basin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Basin {
    /// Register id, assigned on commit
    pub id: EntityId,
    /// Basin name
    pub name: String,
    /// Basin polygon
    pub geom: Polygon<f64>,
}

/// Sub-basin nested inside a [`Basin`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubBasin {
    /// Register id, assigned on commit
    pub id: EntityId,
    /// Sub-basin name
    pub name: String,
    /// Sub-basin polygon
    pub geom: Polygon<f64>,
    /// Parent basin, when known
    pub basin: Option<EntityId>,
}

impl SubBasin {
    /// Centroid of the sub-basin polygon, used as its map anchor.
    pub fn centroid(&self) -> Option<Point<f64>> {
        self.geom.centroid()
    }
}

/// Protected wetland area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wetland {
    /// Register id, assigned on commit
    pub id: EntityId,
    /// Wetland name
    pub name: String,
    /// Wetland area
    pub geom: MultiPolygon<f64>,
}

/// Flow node marking where a water course begins or ends.
///
/// Nodes can be shared between water courses. Imported node data is not
/// always complete, so the geometry is optional; a node without geometry
/// cannot take part in distance comparisons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterBodyNode {
    /// Register id, assigned on commit
    pub id: EntityId,
    /// External node identifier from the source hydrology dataset
    pub node_id: u64,
    /// Node position, when the dataset provides one
    pub geom: Option<Point<f64>>,
}

/// A river or stream: line geometry plus its precomputed 200 m buffer zone.
///
/// `buffer200` is authoritative for the point-in-buffer validation; it is
/// computed upstream by the spatial toolchain, never derived here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceWaterBody {
    /// Register id, assigned on commit
    pub id: EntityId,
    /// Water course name
    pub name: String,
    /// Water-body code from the reporting framework, may be empty
    pub wb_code: String,
    /// Course line geometry
    pub geom: MultiLineString<f64>,
    /// Precomputed 200 m buffer around the course
    pub buffer200: MultiPolygon<f64>,
    /// First endpoint node
    pub node1: Option<EntityId>,
    /// Second endpoint node
    pub node2: Option<EntityId>,
}

/// Connected drainage network the water courses belong to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterCourseNetwork {
    /// Register id, assigned on commit
    pub id: EntityId,
    /// Network name
    pub name: String,
    /// Network line geometry
    pub geom: MultiLineString<f64>,
}
