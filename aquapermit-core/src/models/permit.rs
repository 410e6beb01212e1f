//! Permit applications and their monthly-series fields

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::EntityId;

/// Review state of a permit application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermitStatus {
    /// Submitted, awaiting review
    Pending,
    /// Rejected by the reviewing authority
    Denied,
    /// Granted
    Approved,
    /// No longer active, kept for the record
    Archived,
}

/// Source of the water covered by the permit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterType {
    /// Ground water
    Ground,
    /// Surface water
    Surface,
}

/// Which point kinds the permit covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointsType {
    /// Abstraction points only
    Abstraction,
    /// Discharge points only
    Discharge,
    /// Both abstraction and discharge points
    Combined,
}

/// Names of the monthly-series fields a permit may carry, in declaration
/// order. Every present field must pass the monthly-series validator before
/// the permit is committed.
pub const MONTHLY_SERIES_FIELDS: [&str; 8] = [
    "abstraction_m3_per_month",
    "abstraction_m3s_per_month",
    "discharge_m3_per_month",
    "discharge_m3s_per_month",
    "ev1_per_month",
    "ev2_per_month",
    "ev3_per_month",
    "ev123_per_month",
];

/// A water-permit application.
///
/// The eight monthly-series fields stay in their JSON wire shape; they are
/// validated, not coerced. `time_per_month` is free-form and deliberately
/// unvalidated (operating hours, not a measurement).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Permit {
    /// Register id, assigned on commit
    pub id: EntityId,
    /// Review state
    pub status: PermitStatus,
    /// Ground or surface water
    pub water_type: WaterType,
    /// Point kinds the permit covers
    pub points_type: PointsType,
    /// Name of the operating company
    pub operator_name: String,
    /// Free-text remark from the reviewer
    pub remark: String,
    /// When the application was submitted
    pub submitted_on: Option<NaiveDateTime>,
    /// Linked abstraction points
    pub abstraction_points: Vec<EntityId>,
    /// Linked discharge points
    pub discharge_points: Vec<EntityId>,
    /// Water-use sector the operation falls under
    pub water_use_sector: Option<EntityId>,
    /// Economic activity code
    pub nace_code: Option<EntityId>,
    /// Operating hours per month, free-form
    pub time_per_month: Option<Value>,
    /// Abstracted volume per month, m³
    pub abstraction_m3_per_month: Option<Value>,
    /// Abstraction rate per month, m³/s
    pub abstraction_m3s_per_month: Option<Value>,
    /// Discharged volume per month, m³
    pub discharge_m3_per_month: Option<Value>,
    /// Discharge rate per month, m³/s
    pub discharge_m3s_per_month: Option<Value>,
    /// Ecological value series 1
    pub ev1_per_month: Option<Value>,
    /// Ecological value series 2
    pub ev2_per_month: Option<Value>,
    /// Ecological value series 3
    pub ev3_per_month: Option<Value>,
    /// Combined ecological value series
    pub ev123_per_month: Option<Value>,
}

impl Permit {
    /// New pending surface-water abstraction permit for `operator_name`.
    pub fn new(operator_name: impl Into<String>) -> Self {
        Self {
            id: 0,
            status: PermitStatus::Pending,
            water_type: WaterType::Surface,
            points_type: PointsType::Abstraction,
            operator_name: operator_name.into(),
            remark: String::new(),
            submitted_on: None,
            abstraction_points: Vec::new(),
            discharge_points: Vec::new(),
            water_use_sector: None,
            nace_code: None,
            time_per_month: None,
            abstraction_m3_per_month: None,
            abstraction_m3s_per_month: None,
            discharge_m3_per_month: None,
            discharge_m3s_per_month: None,
            ev1_per_month: None,
            ev2_per_month: None,
            ev3_per_month: None,
            ev123_per_month: None,
        }
    }

    /// The monthly-series fields that are present, as `(field name, value)`
    /// pairs in [`MONTHLY_SERIES_FIELDS`] order.
    pub fn monthly_series(&self) -> impl Iterator<Item = (&'static str, &Value)> + '_ {
        let slots = [
            self.abstraction_m3_per_month.as_ref(),
            self.abstraction_m3s_per_month.as_ref(),
            self.discharge_m3_per_month.as_ref(),
            self.discharge_m3s_per_month.as_ref(),
            self.ev1_per_month.as_ref(),
            self.ev2_per_month.as_ref(),
            self.ev3_per_month.as_ref(),
            self.ev123_per_month.as_ref(),
        ];
        MONTHLY_SERIES_FIELDS
            .into_iter()
            .zip(slots)
            .filter_map(|(name, value)| value.map(|v| (name, v)))
    }
}
