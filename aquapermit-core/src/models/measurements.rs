//! Hydrometric measurement entities
//!
//! Time series attached to gauging stations, flow nodes and water points.
//! These are append-only observations; nothing validates them beyond type
//! shape, matching how the register ingests them.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::EntityId;
use geo::Point;

/// Station measuring water height along a water course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugingStation {
    /// Register id, assigned on commit
    pub id: EntityId,
    /// Station name
    pub name: String,
    /// Station position
    pub geom: Point<f64>,
    /// Water course the station monitors
    pub water_body: Option<EntityId>,
    /// Station altitude in metres, when surveyed
    pub altitude: Option<f64>,
}

/// Single water-height observation at a gauging station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterHeight {
    /// Register id, assigned on commit
    pub id: EntityId,
    /// Station that took the measurement
    pub gauging_station: EntityId,
    /// Measured height in metres
    pub value: f64,
    /// Measurement timestamp
    pub measured_on: NaiveDateTime,
}

/// Monthly flow statistics at a water-body node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeFlowMeasurement {
    /// Register id, assigned on commit
    pub id: EntityId,
    /// Flow node the statistics belong to
    pub node: EntityId,
    /// First day of the month the statistics cover
    pub month: NaiveDate,
    /// Median flow (Q50) in m³/s
    pub q50_value: f64,
    /// Ecological flow threshold in m³/s
    pub ef_value: f64,
    /// Water available for use in m³/s
    pub wafu_value: f64,
}

/// Reported monthly water use at an abstraction or discharge point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterPointUse {
    /// Register id, assigned on commit
    pub id: EntityId,
    /// Point the report belongs to
    pub water_point: EntityId,
    /// First day of the month the report covers
    pub month: NaiveDate,
    /// Total volume over the month, m³
    pub total_m3: f64,
    /// Average rate over the month, m³/s
    pub avg_m3s: f64,
}
