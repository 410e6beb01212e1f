//! Point-in-buffer validator
//!
//! Checks that a water point lies within the buffer zone of the water
//! course it is associated with. A point with no associated course passes
//! trivially - being off-river is only an error when the point claims to be
//! on one.

use geo::{MultiPolygon, Point};

use crate::{
    errors::{ValidationError, ValidationResult},
    geometry,
    traits::{Validatable, Validator},
};

/// A candidate point paired with the buffer zone it must fall inside.
///
/// Borrowed view, built per validation call; the buffer belongs to the
/// water course and is shared by every point on it.
#[derive(Debug, Clone, Copy)]
pub struct WaterPointCandidate<'a> {
    /// Point geometry being validated
    pub geom: Point<f64>,
    /// Buffer zone of the associated water course, if any
    pub buffer: Option<&'a MultiPolygon<f64>>,
}

impl<'a> WaterPointCandidate<'a> {
    /// Pair a point with the buffer of its water course.
    pub fn new(geom: Point<f64>, buffer: Option<&'a MultiPolygon<f64>>) -> Self {
        Self { geom, buffer }
    }
}

/// Validator enforcing the buffer-zone invariant.
#[derive(Debug, Clone, Copy, Default)]
pub struct WaterPointValidator;

impl Validator for WaterPointValidator {
    type Value<'a> = WaterPointCandidate<'a>;

    fn validate(&self, value: &Self::Value<'_>) -> ValidationResult<()> {
        self.check(value.geom, value.buffer)
    }
}

impl WaterPointValidator {
    /// Validate `point` against an optional water-course buffer.
    ///
    /// Containment is delegated to the geometry engine; a point exactly on
    /// the buffer boundary follows the engine's convention (not contained).
    pub fn check(
        &self,
        point: Point<f64>,
        buffer: Option<&MultiPolygon<f64>>,
    ) -> ValidationResult<()> {
        if !point.is_valid() {
            return Err(ValidationError::InvalidGeometry);
        }

        let Some(buffer) = buffer else {
            // No associated water course - nothing to check against.
            return Ok(());
        };

        if !geometry::buffer_contains(buffer, &point) {
            return Err(ValidationError::OutsideBufferZone {
                x: point.x(),
                y: point.y(),
            });
        }

        Ok(())
    }
}
