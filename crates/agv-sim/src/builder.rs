//! Fluent builder for constructing a [`Sim`].

use std::collections::HashSet;

use agv_core::{Cell, OrderId, SimConfig, Tick, VehicleId};
use agv_fleet::{Order, Vehicle};
use agv_grid::{Grid, Planner};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<P>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — tick budget, reservation mode
/// - [`Grid`] — the validated warehouse map
/// - `P: Planner` — the motion planner (e.g. [`agv_grid::AStarPlanner`])
///
/// # Optional inputs (have defaults)
///
/// | Method         | Default        |
/// |----------------|----------------|
/// | `.vehicles(v)` | empty fleet    |
/// | `.orders(o)`   | no orders      |
///
/// A run with no orders terminates immediately as complete; a run with no
/// vehicles leaves every order pending until the tick budget expires.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::default(), grid, AStarPlanner)
///     .vehicles(scenario.vehicles)
///     .orders(scenario.orders)
///     .build()?;
/// let report = sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<P: Planner> {
    config:   SimConfig,
    grid:     Grid,
    planner:  P,
    vehicles: Vec<Vehicle>,
    orders:   Vec<Order>,
}

impl<P: Planner> SimBuilder<P> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, grid: Grid, planner: P) -> Self {
        Self {
            config,
            grid,
            planner,
            vehicles: Vec::new(),
            orders:   Vec::new(),
        }
    }

    /// Supply the fleet, in load order.  Ids must equal their position.
    pub fn vehicles(mut self, vehicles: Vec<Vehicle>) -> Self {
        self.vehicles = vehicles;
        self
    }

    /// Supply the order book, in load order.
    pub fn orders(mut self, orders: Vec<Order>) -> Self {
        self.orders = orders;
        self
    }

    /// Validate the fleet and order book against the grid and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<P>> {
        // ── Fleet: dense ids, legal and distinct start cells ──────────────
        let mut starts: Vec<(Cell, VehicleId)> = Vec::with_capacity(self.vehicles.len());
        for (i, vehicle) in self.vehicles.iter().enumerate() {
            if vehicle.id().index() != i {
                return Err(SimError::NonSequentialVehicleIds { index: i, id: vehicle.id() });
            }
            let cell = vehicle.cell();
            if !self.grid.in_bounds(cell) {
                return Err(SimError::StartOutOfBounds { vehicle: vehicle.id(), cell });
            }
            if self.grid.is_obstacle(cell) {
                return Err(SimError::StartOnObstacle { vehicle: vehicle.id(), cell });
            }
            if let Some(&(_, first)) = starts.iter().find(|(c, _)| *c == cell) {
                return Err(SimError::StartCollision { first, second: vehicle.id(), cell });
            }
            starts.push((cell, vehicle.id()));
        }

        // ── Orders: unique ids, endpoints on walkable cells ───────────────
        let mut seen: HashSet<OrderId> = HashSet::with_capacity(self.orders.len());
        for order in &self.orders {
            if !seen.insert(order.id()) {
                return Err(SimError::DuplicateOrderId(order.id()));
            }
            for cell in [order.pickup(), order.delivery()] {
                if !self.grid.in_bounds(cell) {
                    return Err(SimError::OrderEndpointOutOfBounds { order: order.id(), cell });
                }
                if self.grid.is_obstacle(cell) {
                    return Err(SimError::OrderEndpointOnObstacle { order: order.id(), cell });
                }
            }
        }

        Ok(Sim {
            config:       self.config,
            current_tick: Tick::ZERO,
            grid:         self.grid,
            planner:      self.planner,
            vehicles:     self.vehicles,
            orders:       self.orders,
        })
    }
}
