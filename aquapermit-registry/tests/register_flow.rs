//! Full register walkthrough: reference data, water points, a permit
//!
//! Mirrors how the importing and submission layers drive the register:
//! hydrology reference data first, then operator-submitted points and a
//! permit application over them.

use aquapermit_core::models::{
    Basin, Permit, SubBasin, SurfaceWaterBody, WaterBodyNode, WaterPoint, WaterPointKind,
};
use aquapermit_registry::{Registry, RegistryError};
use geo::{line_string, point, polygon, MultiLineString, MultiPolygon};
use serde_json::{json, Map, Value};

fn monthly(value: f64) -> Value {
    let mut map = Map::new();
    for month in 1..=12 {
        map.insert(month.to_string(), json!(value));
    }
    Value::Object(map)
}

fn seed(registry: &mut Registry) -> (u64, u64) {
    let basin = registry.add_basin(Basin {
        id: 0,
        name: "Morava".into(),
        geom: polygon![
            (x: 19.0, y: 43.0),
            (x: 23.0, y: 43.0),
            (x: 23.0, y: 46.0),
            (x: 19.0, y: 46.0),
        ],
    });
    let subbasin = registry
        .add_subbasin(SubBasin {
            id: 0,
            name: "Upper Morava".into(),
            geom: polygon![
                (x: 19.5, y: 44.0),
                (x: 22.0, y: 44.0),
                (x: 22.0, y: 45.0),
                (x: 19.5, y: 45.0),
            ],
            basin: Some(basin),
        })
        .unwrap();

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

    (body, subbasin)
}

#[test]
fn submission_flow_commits_valid_data_and_blocks_invalid() {
    let mut registry = Registry::new();
    let (body, subbasin) = seed(&mut registry);

    // Operator's abstraction point, on the river.
    let mut abstraction =
        WaterPoint::new(WaterPointKind::Abstraction, point!(x: 20.2, y: 44.52))
            .with_water_body(body);
    abstraction.subbasin = Some(subbasin);
    let abstraction = registry.add_water_point(abstraction).unwrap();

    // Discharge point near the downstream end.
    let discharge = registry
        .add_water_point(
            WaterPoint::new(WaterPointKind::Discharge, point!(x: 20.9, y: 44.48))
                .with_water_body(body),
        )
        .unwrap();

    // Point far off the river never makes it in.
    let off_river = registry.add_water_point(
        WaterPoint::new(WaterPointKind::Abstraction, point!(x: 22.5, y: 44.5))
            .with_water_body(body),
    );
    assert!(off_river.is_err());
    assert_eq!(registry.water_point_count(), 2);

    // Nearest flow nodes, one per end of the course.
    assert_eq!(registry.closest_node(abstraction).unwrap().unwrap().node_id, 9001);
    assert_eq!(registry.closest_node(discharge).unwrap().unwrap().node_id, 9002);

    // A permit over both points, with a complete abstraction series.
    let mut permit = Permit::new("Voda d.o.o.");
    permit.abstraction_points.push(abstraction);
    permit.discharge_points.push(discharge);
    permit.abstraction_m3_per_month = Some(monthly(120.0));
    let permit_id = registry.submit_permit(permit.clone()).unwrap();

    let location = registry.permit_map_location(permit_id).unwrap().unwrap();
    assert!((location.x() - 20.55).abs() < 1e-9);
    assert!((location.y() - 44.5).abs() < 1e-9);

    // The same permit with one month dropped is rejected outright.
    let mut series = monthly(120.0);
    series.as_object_mut().unwrap().remove("6");
    permit.abstraction_m3_per_month = Some(series);
    let rejected = registry.submit_permit(permit);
    assert!(matches!(rejected, Err(RegistryError::Validation(_))));
}
