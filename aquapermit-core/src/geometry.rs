//! Shared geometry helpers
//!
//! Thin wrappers over the `geo` crate so the rest of the code states intent
//! (`buffer_contains`, `distance`) instead of trait imports. All operations
//! are planar over EPSG:4326 coordinates, matching how the register's
//! spatial data is stored: containment and distance are delegated to the
//! geometry engine, never reimplemented.
//!
//! Boundary semantics follow `geo::Contains`: a point exactly on the buffer
//! boundary is not contained. Distances are Euclidean in coordinate units
//! (degrees), which is only ever used for comparison, not measurement.

use geo::{Centroid, Contains, EuclideanDistance, MultiPoint, MultiPolygon, Point};

/// True if `point` lies inside the buffer polygon.
pub fn buffer_contains(buffer: &MultiPolygon<f64>, point: &Point<f64>) -> bool {
    buffer.contains(point)
}

/// Planar distance between two points, in coordinate units.
pub fn distance(a: &Point<f64>, b: &Point<f64>) -> f64 {
    a.euclidean_distance(b)
}

/// Centroid of a set of points, or `None` for an empty set.
///
/// Used for a permit's map location: the mean position of all its
/// abstraction and discharge points.
pub fn points_centroid(points: &[Point<f64>]) -> Option<Point<f64>> {
    MultiPoint::new(points.to_vec()).centroid()
}
