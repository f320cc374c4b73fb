//! Scenario loading and validation.

use std::io::Read;
use std::path::Path;

use agv_core::{Cell, OrderId, Tick, VehicleId};
use agv_fleet::{Order, Vehicle};
use agv_grid::Grid;

use crate::doc::ScenarioDoc;
use crate::{ConfigError, ConfigResult};

// ── Scenario ─────────────────────────────────────────────────────────────────

/// A fully validated scenario: everything `agv-sim`'s builder needs.
pub struct Scenario {
    pub grid:     Grid,
    pub vehicles: Vec<Vehicle>,
    pub orders:   Vec<Order>,
}

impl Scenario {
    /// Validate a parsed document and build the scenario.
    ///
    /// Validation order: grid first (dimensions, bounds, category overlap),
    /// then agents against the grid, then orders against the station sets.
    pub fn from_doc(doc: &ScenarioDoc) -> ConfigResult<Self> {
        let [rows, cols] = doc.map.dimensions;
        let grid = Grid::builder(rows, cols)
            .obstacles(doc.map.obstacles.iter().copied().map(cell))
            .pickup_stations(doc.map.pickup_stations.iter().copied().map(cell))
            .delivery_stations(doc.map.delivery_stations.iter().copied().map(cell))
            .build()?;

        // ── Agents ────────────────────────────────────────────────────────
        let mut vehicles: Vec<Vehicle> = Vec::with_capacity(doc.agents.len());
        for (i, agent) in doc.agents.iter().enumerate() {
            let start = cell(agent.start);
            if !grid.in_bounds(start) {
                return Err(ConfigError::StartOutOfBounds { name: agent.name.clone(), cell: start });
            }
            if grid.is_obstacle(start) {
                return Err(ConfigError::StartOnObstacle { name: agent.name.clone(), cell: start });
            }
            if vehicles.iter().any(|v| v.name() == agent.name) {
                return Err(ConfigError::DuplicateAgentName(agent.name.clone()));
            }
            if let Some(other) = vehicles.iter().find(|v| v.cell() == start) {
                return Err(ConfigError::DuplicateStart {
                    first:  other.name().to_owned(),
                    second: agent.name.clone(),
                    cell:   start,
                });
            }
            vehicles.push(Vehicle::new(VehicleId(i as u32), agent.name.clone(), start));
        }

        // ── Orders ────────────────────────────────────────────────────────
        let mut orders: Vec<Order> = Vec::with_capacity(doc.order.orders.len());
        for entry in &doc.order.orders {
            let id = OrderId(entry.id_code);
            if orders.iter().any(|o| o.id() == id) {
                return Err(ConfigError::DuplicateOrderId(id));
            }
            let pickup = cell(entry.pickup_station);
            if !grid.is_pickup_station(pickup) {
                return Err(ConfigError::UnknownPickupStation { order: id, cell: pickup });
            }
            let delivery = cell(entry.delivery_station);
            if !grid.is_delivery_station(delivery) {
                return Err(ConfigError::UnknownDeliveryStation { order: id, cell: delivery });
            }
            orders.push(Order::new(
                id,
                pickup,
                delivery,
                entry.requested_quantities,
                Tick(entry.timestep),
            ));
        }

        Ok(Scenario { grid, vehicles, orders })
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and validate a scenario from a JSON file.
pub fn load_scenario(path: &Path) -> ConfigResult<Scenario> {
    let file = std::fs::File::open(path)?;
    load_scenario_reader(file)
}

/// Like [`load_scenario`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded scenario
/// strings.
pub fn load_scenario_reader<R: Read>(reader: R) -> ConfigResult<Scenario> {
    let doc: ScenarioDoc = serde_json::from_reader(reader)?;
    Scenario::from_doc(&doc)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

#[inline]
fn cell([row, col]: [u32; 2]) -> Cell {
    Cell::new(row, col)
}
