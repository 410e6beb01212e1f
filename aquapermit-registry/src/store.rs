//! The register itself: id-keyed tables with validate-then-commit writes

use std::collections::HashMap;

use geo::Point;
use log::{debug, warn};

use aquapermit_core::{
    closest_node,
    models::{
        Basin, EntityId, Permit, SubBasin, SurfaceWaterBody, WaterBodyNode, WaterPoint,
    },
    MonthlySeriesValidator, NodeRef, WaterPointValidator,
};

use crate::{
    errors::{RegistryError, RegistryResult},
    ident,
};

/// In-memory register of hydrology entities, water points and permits.
///
/// Single-threaded and synchronous; callers needing sharing wrap it in
/// their own lock. Ids are assigned sequentially on commit and never
/// reused.
#[derive(Debug, Default)]
pub struct Registry {
    next_id: EntityId,
    basins: HashMap<EntityId, Basin>,
    subbasins: HashMap<EntityId, SubBasin>,
    nodes: HashMap<EntityId, WaterBodyNode>,
    water_bodies: HashMap<EntityId, SurfaceWaterBody>,
    water_points: HashMap<EntityId, WaterPoint>,
    permits: HashMap<EntityId, Permit>,

    point_validator: WaterPointValidator,
    series_validator: MonthlySeriesValidator,
}

impl Registry {
    /// Create an empty register.
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&mut self) -> EntityId {
        self.next_id += 1;
        self.next_id
    }

    // --- reference data ---------------------------------------------------

    /// Insert a basin.
    pub fn add_basin(&mut self, mut basin: Basin) -> EntityId {
        let id = self.allocate_id();
        basin.id = id;
        self.basins.insert(id, basin);
        id
    }

    /// Insert a sub-basin; its parent basin, when set, must exist.
    pub fn add_subbasin(&mut self, mut subbasin: SubBasin) -> RegistryResult<EntityId> {
        if let Some(basin) = subbasin.basin {
            require(&self.basins, basin, "basin")?;
        }
        let id = self.allocate_id();
        subbasin.id = id;
        self.subbasins.insert(id, subbasin);
        Ok(id)
    }

    /// Insert a flow node.
    pub fn add_node(&mut self, mut node: WaterBodyNode) -> EntityId {
        let id = self.allocate_id();
        node.id = id;
        self.nodes.insert(id, node);
        id
    }

    /// Insert a surface water body; its endpoint nodes must exist.
    pub fn add_water_body(&mut self, mut body: SurfaceWaterBody) -> RegistryResult<EntityId> {
        for node in [body.node1, body.node2].into_iter().flatten() {
            require(&self.nodes, node, "node")?;
        }
        let id = self.allocate_id();
        body.id = id;
        self.water_bodies.insert(id, body);
        Ok(id)
    }

    // --- water points -----------------------------------------------------

    /// Insert an abstraction or discharge point.
    ///
    /// Runs the point-in-buffer validation against the referenced water
    /// course; assigns a generated identifier when the point has none. On
    /// any failure nothing is committed.
    pub fn add_water_point(&mut self, mut point: WaterPoint) -> RegistryResult<EntityId> {
        self.validate_point_within_water_body(&point)?;

        if let Some(identifier) = &point.identifier {
            if self.identifier_in_use(identifier) {
                return Err(RegistryError::DuplicateIdentifier {
                    identifier: identifier.clone(),
                });
            }
        } else {
            point.identifier = Some(self.unique_identifier(point.kind.identifier_prefix()));
        }

        let id = self.allocate_id();
        point.id = id;
        debug!(
            "committed {:?} point {} as {:?}",
            point.kind, id, point.identifier
        );
        self.water_points.insert(id, point);
        Ok(id)
    }

    /// Move a water point; the buffer-zone invariant is re-checked against
    /// the new position before the update is committed.
    pub fn update_water_point_geom(
        &mut self,
        id: EntityId,
        geom: Point<f64>,
    ) -> RegistryResult<()> {
        let current = require(&self.water_points, id, "water point")?;

        let mut updated = current.clone();
        updated.geom = geom;
        self.validate_point_within_water_body(&updated)?;

        debug!("moved water point {id} to ({}, {})", geom.x(), geom.y());
        self.water_points.insert(id, updated);
        Ok(())
    }

    /// Resolve the flow node nearest to a water point, through the point's
    /// water course. `Ok(None)` when the point has no course or the course
    /// has no usable nodes.
    pub fn closest_node(&self, water_point: EntityId) -> RegistryResult<Option<NodeRef>> {
        let point = require(&self.water_points, water_point, "water point")?;

        let Some(body_id) = point.water_body else {
            return Ok(None);
        };
        let body = require(&self.water_bodies, body_id, "water body")?;

        let node1 = body.node1.and_then(|id| self.nodes.get(&id));
        let node2 = body.node2.and_then(|id| self.nodes.get(&id));

        Ok(closest_node(&point.geom, node1, node2))
    }

    // --- permits ----------------------------------------------------------

    /// Submit a permit application.
    ///
    /// Every present monthly-series field must validate and every linked
    /// water point must exist; the first violation is returned and the
    /// permit is not stored.
    pub fn submit_permit(&mut self, mut permit: Permit) -> RegistryResult<EntityId> {
        for (field, series) in permit.monthly_series() {
            if let Err(err) = self.series_validator.check(series) {
                warn!("rejected permit for {}: {field}: {err}", permit.operator_name);
                return Err(err.into());
            }
        }

        for point in permit
            .abstraction_points
            .iter()
            .chain(&permit.discharge_points)
        {
            require(&self.water_points, *point, "water point")?;
        }

        let id = self.allocate_id();
        permit.id = id;
        debug!("committed permit {id} for {}", permit.operator_name);
        self.permits.insert(id, permit);
        Ok(id)
    }

    /// Map anchor for a permit: centroid of all its points' geometries.
    pub fn permit_map_location(&self, permit: EntityId) -> RegistryResult<Option<Point<f64>>> {
        let permit = require(&self.permits, permit, "permit")?;

        let geoms: Vec<Point<f64>> = permit
            .abstraction_points
            .iter()
            .chain(&permit.discharge_points)
            .filter_map(|id| self.water_points.get(id))
            .map(|p| p.geom)
            .collect();

        Ok(aquapermit_core::geometry::points_centroid(&geoms))
    }

    // --- reads ------------------------------------------------------------

    /// Look up a water point by id.
    pub fn water_point(&self, id: EntityId) -> RegistryResult<&WaterPoint> {
        require(&self.water_points, id, "water point")
    }

    /// Look up a surface water body by id.
    pub fn water_body(&self, id: EntityId) -> RegistryResult<&SurfaceWaterBody> {
        require(&self.water_bodies, id, "water body")
    }

    /// Look up a flow node by id.
    pub fn node(&self, id: EntityId) -> RegistryResult<&WaterBodyNode> {
        require(&self.nodes, id, "node")
    }

    /// Look up a permit by id.
    pub fn permit(&self, id: EntityId) -> RegistryResult<&Permit> {
        require(&self.permits, id, "permit")
    }

    /// Number of committed water points.
    pub fn water_point_count(&self) -> usize {
        self.water_points.len()
    }

    // --- internals --------------------------------------------------------

    fn validate_point_within_water_body(&self, point: &WaterPoint) -> RegistryResult<()> {
        let buffer = match point.water_body {
            Some(id) => Some(&require(&self.water_bodies, id, "water body")?.buffer200),
            None => None,
        };

        self.point_validator.check(point.geom, buffer).map_err(|err| {
            warn!("rejected water point at ({}, {}): {err}", point.geom.x(), point.geom.y());
            err.into()
        })
    }

    fn identifier_in_use(&self, identifier: &str) -> bool {
        self.water_points
            .values()
            .any(|p| p.identifier.as_deref() == Some(identifier))
    }

    fn unique_identifier(&self, prefix: &str) -> String {
        // Regenerate on the off chance of a collision.
        loop {
            let candidate = ident::generate(prefix);
            if !self.identifier_in_use(&candidate) {
                return candidate;
            }
        }
    }
}

fn require<'a, T>(
    table: &'a HashMap<EntityId, T>,
    id: EntityId,
    entity: &'static str,
) -> RegistryResult<&'a T> {
    table.get(&id).ok_or(RegistryError::NotFound { entity, id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use aquapermit_core::models::WaterPointKind;
    use aquapermit_core::ValidationError;
    use geo::{line_string, point, polygon, MultiLineString, MultiPolygon};
    use serde_json::json;

    fn registry_with_river() -> (Registry, EntityId) {
        let mut registry = Registry::new();

        let node1 = registry.add_node(WaterBodyNode {
            id: 0,
            node_id: 9001,
            geom: Some(point!(x: 20.0, y: 44.5)),
        });
        let node2 = registry.add_node(WaterBodyNode {
            id: 0,
            node_id: 9002,
            geom: Some(point!(x: 21.0, y: 44.5)),
        });

        let body = registry
            .add_water_body(SurfaceWaterBody {
                id: 0,
                name: "Studena".into(),
                wb_code: "RS-SW-042".into(),
                geom: MultiLineString::new(vec![line_string![
                    (x: 20.0, y: 44.5),
                    (x: 21.0, y: 44.5),
                ]]),
                buffer200: MultiPolygon::new(vec![polygon![
                    (x: 20.0, y: 44.4),
                    (x: 21.0, y: 44.4),
                    (x: 21.0, y: 44.6),
                    (x: 20.0, y: 44.6),
                ]]),
                node1: Some(node1),
                node2: Some(node2),
            })
            .unwrap();

        (registry, body)
    }

    #[test]
    fn water_point_inside_buffer_commits_with_identifier() {
        let (mut registry, body) = registry_with_river();

        let id = registry
            .add_water_point(
                WaterPoint::new(WaterPointKind::Abstraction, point!(x: 20.3, y: 44.5))
                    .with_water_body(body),
            )
            .unwrap();

        let stored = registry.water_point(id).unwrap();
        let identifier = stored.identifier.as_deref().unwrap();
        assert!(identifier.starts_with("AP-"), "{identifier}");
    }

    #[test]
    fn water_point_outside_buffer_is_not_committed() {
        let (mut registry, body) = registry_with_river();

        let result = registry.add_water_point(
            WaterPoint::new(WaterPointKind::Discharge, point!(x: 25.0, y: 44.5))
                .with_water_body(body),
        );

        assert!(matches!(
            result,
            Err(RegistryError::Validation(
                ValidationError::OutsideBufferZone { .. }
            ))
        ));
        assert_eq!(registry.water_point_count(), 0);
    }

    #[test]
    fn update_outside_buffer_leaves_point_unchanged() {
        let (mut registry, body) = registry_with_river();
        let id = registry
            .add_water_point(
                WaterPoint::new(WaterPointKind::Abstraction, point!(x: 20.3, y: 44.5))
                    .with_water_body(body),
            )
            .unwrap();

        let result = registry.update_water_point_geom(id, point!(x: 30.0, y: 44.5));
        assert!(result.is_err());
        assert_eq!(registry.water_point(id).unwrap().geom, point!(x: 20.3, y: 44.5));
    }

    #[test]
    fn closest_node_goes_through_the_water_course() {
        let (mut registry, body) = registry_with_river();
        let id = registry
            .add_water_point(
                WaterPoint::new(WaterPointKind::Abstraction, point!(x: 20.9, y: 44.5))
                    .with_water_body(body),
            )
            .unwrap();

        let node = registry.closest_node(id).unwrap().unwrap();
        assert_eq!(node.node_id, 9002);
    }

    #[test]
    fn closest_node_without_water_body_is_none() {
        let mut registry = Registry::new();
        let id = registry
            .add_water_point(WaterPoint::new(
                WaterPointKind::Abstraction,
                point!(x: 20.9, y: 44.5),
            ))
            .unwrap();

        assert_eq!(registry.closest_node(id).unwrap(), None);
    }

    #[test]
    fn duplicate_identifier_rejected() {
        let mut registry = Registry::new();
        let mut first = WaterPoint::new(WaterPointKind::Abstraction, point!(x: 1.0, y: 1.0));
        first.identifier = Some("AP-fixed-12345".into());
        registry.add_water_point(first.clone()).unwrap();

        let result = registry.add_water_point(first);
        assert!(matches!(result, Err(RegistryError::DuplicateIdentifier { .. })));
    }

    #[test]
    fn permit_with_bad_series_is_rejected_whole() {
        let mut registry = Registry::new();

        let mut permit = Permit::new("Test Operator");
        permit.abstraction_m3_per_month = Some(json!({"1": 10, "2": 20}));

        let result = registry.submit_permit(permit);
        assert!(matches!(
            result,
            Err(RegistryError::Validation(
                ValidationError::WrongEntryCount { .. }
            ))
        ));
    }

    #[test]
    fn permit_map_location_is_point_centroid() {
        let (mut registry, body) = registry_with_river();
        let a = registry
            .add_water_point(
                WaterPoint::new(WaterPointKind::Abstraction, point!(x: 20.2, y: 44.5))
                    .with_water_body(body),
            )
            .unwrap();
        let b = registry
            .add_water_point(
                WaterPoint::new(WaterPointKind::Discharge, point!(x: 20.6, y: 44.5))
                    .with_water_body(body),
            )
            .unwrap();

        let mut permit = Permit::new("Test Operator");
        permit.abstraction_points.push(a);
        permit.discharge_points.push(b);
        let id = registry.submit_permit(permit).unwrap();

        let location = registry.permit_map_location(id).unwrap().unwrap();
        assert!((location.x() - 20.4).abs() < 1e-12);
        assert!((location.y() - 44.5).abs() < 1e-12);
    }

    #[test]
    fn lookups_borrow_from_the_backing_tables() {
        let (registry, body) = registry_with_river();

        // Borrows from different tables coexist and read through cleanly.
        let stored = registry.water_body(body).unwrap();
        let node = registry.node(stored.node1.unwrap()).unwrap();
        assert_eq!(stored.name, "Studena");
        assert_eq!(node.node_id, 9001);
    }

    #[test]
    fn missing_references_are_reported() {
        let mut registry = Registry::new();
        assert!(matches!(
            registry.closest_node(99),
            Err(RegistryError::NotFound { entity: "water point", .. })
        ));

        let point = WaterPoint::new(WaterPointKind::Abstraction, point!(x: 1.0, y: 1.0))
            .with_water_body(42);
        assert!(matches!(
            registry.add_water_point(point),
            Err(RegistryError::NotFound { entity: "water body", .. })
        ));
    }
}
