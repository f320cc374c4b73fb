//! Unit tests for scenario loading and validation.

use std::io::Cursor;

use agv_core::{Cell, OrderId, Tick, VehicleId};

use crate::{load_scenario_reader, ConfigError, Scenario, ScenarioDoc};

const SCENARIO: &str = r#"{
    "map": {
        "dimensions": [5, 5],
        "pickupStation": [[0, 0], [0, 4]],
        "deliveryStation": [[4, 4]],
        "obstacles": [[2, 2]]
    },
    "agents": [
        { "name": "agv0", "start": [0, 0] },
        { "name": "agv1", "start": [4, 0] }
    ],
    "order": {
        "orders_": [
            {
                "id_code": 1,
                "requested_quantities": 2,
                "timestep": 0,
                "pickupStation": [0, 0],
                "deliveryStation": [4, 4]
            },
            {
                "id_code": 2,
                "requested_quantities": 1,
                "timestep": 3,
                "pickupStation": [0, 4],
                "deliveryStation": [4, 4]
            }
        ]
    }
}"#;

fn parse(json: &str) -> Result<Scenario, ConfigError> {
    load_scenario_reader(Cursor::new(json))
}

#[test]
fn valid_scenario_loads() {
    let scenario = parse(SCENARIO).unwrap();

    assert_eq!(scenario.grid.rows(), 5);
    assert!(scenario.grid.is_obstacle(Cell::new(2, 2)));
    assert!(scenario.grid.is_pickup_station(Cell::new(0, 4)));

    assert_eq!(scenario.vehicles.len(), 2);
    assert_eq!(scenario.vehicles[0].id(), VehicleId(0));
    assert_eq!(scenario.vehicles[0].name(), "agv0");
    assert_eq!(scenario.vehicles[1].cell(), Cell::new(4, 0));

    assert_eq!(scenario.orders.len(), 2);
    let order = &scenario.orders[1];
    assert_eq!(order.id(), OrderId(2));
    assert_eq!(order.quantity(), 1);
    assert_eq!(order.release(), Tick(3));
    assert_eq!(order.pickup(), Cell::new(0, 4));
    assert_eq!(order.delivery(), Cell::new(4, 4));
}

#[test]
fn document_round_trips_through_serde() {
    let doc: ScenarioDoc = serde_json::from_str(SCENARIO).unwrap();
    let json = serde_json::to_string(&doc).unwrap();
    // The renamed keys must survive a write/read cycle unchanged.
    assert!(json.contains("\"pickupStation\""));
    assert!(json.contains("\"orders_\""));
    assert!(json.contains("\"id_code\""));
    let reparsed: ScenarioDoc = serde_json::from_str(&json).unwrap();
    assert_eq!(reparsed.map.dimensions, [5, 5]);
    assert_eq!(reparsed.agents.len(), 2);
    assert_eq!(reparsed.order.orders.len(), 2);
    // And the re-serialization is stable.
    assert_eq!(json, serde_json::to_string(&reparsed).unwrap());
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(parse("{ not json"), Err(ConfigError::Parse(_))));
}

#[test]
fn out_of_bounds_station_is_a_grid_error() {
    let json = SCENARIO.replace("[[0, 0], [0, 4]]", "[[0, 0], [9, 9]]");
    assert!(matches!(parse(&json), Err(ConfigError::Grid(_))));
}

#[test]
fn overlapping_station_categories_are_a_grid_error() {
    let json = SCENARIO.replace("\"deliveryStation\": [[4, 4]]", "\"deliveryStation\": [[0, 0]]");
    assert!(matches!(parse(&json), Err(ConfigError::Grid(_))));
}

#[test]
fn agent_start_on_obstacle_rejected() {
    let json = SCENARIO.replace("{ \"name\": \"agv1\", \"start\": [4, 0] }",
                                "{ \"name\": \"agv1\", \"start\": [2, 2] }");
    assert!(matches!(
        parse(&json),
        Err(ConfigError::StartOnObstacle { name, .. }) if name == "agv1"
    ));
}

#[test]
fn agent_start_out_of_bounds_rejected() {
    let json = SCENARIO.replace("\"start\": [4, 0]", "\"start\": [5, 0]");
    assert!(matches!(parse(&json), Err(ConfigError::StartOutOfBounds { .. })));
}

#[test]
fn shared_start_cell_rejected() {
    let json = SCENARIO.replace("\"start\": [4, 0]", "\"start\": [0, 0]");
    assert!(matches!(
        parse(&json),
        Err(ConfigError::DuplicateStart { first, second, .. }) if first == "agv0" && second == "agv1"
    ));
}

#[test]
fn duplicate_agent_name_rejected() {
    let json = SCENARIO.replace("\"name\": \"agv1\"", "\"name\": \"agv0\"");
    assert!(matches!(parse(&json), Err(ConfigError::DuplicateAgentName(name)) if name == "agv0"));
}

#[test]
fn duplicate_order_id_rejected() {
    let json = SCENARIO.replace("\"id_code\": 2", "\"id_code\": 1");
    assert!(matches!(parse(&json), Err(ConfigError::DuplicateOrderId(OrderId(1)))));
}

#[test]
fn order_referencing_unknown_pickup_rejected() {
    let json = SCENARIO.replace("\"pickupStation\": [0, 4]", "\"pickupStation\": [1, 1]");
    assert!(matches!(
        parse(&json),
        Err(ConfigError::UnknownPickupStation { order: OrderId(2), cell }) if cell == Cell::new(1, 1)
    ));
}

#[test]
fn order_referencing_unknown_delivery_rejected() {
    // The map's delivery list is `[[4, 4]]`, so the flat `[4, 4]` pattern
    // only matches inside order entries; the first hit is order 1.
    let json = SCENARIO.replacen("\"deliveryStation\": [4, 4]", "\"deliveryStation\": [3, 3]", 1);
    assert!(matches!(
        parse(&json),
        Err(ConfigError::UnknownDeliveryStation { order: OrderId(1), cell }) if cell == Cell::new(3, 3)
    ));
}
