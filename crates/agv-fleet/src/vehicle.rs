//! Vehicle lifecycle: `Idle ⇄ Picking → Delivering → Idle`.

use std::fmt;

use agv_core::{Cell, OrderId, Tick, VehicleId};

use crate::Order;

// ── VehicleState ─────────────────────────────────────────────────────────────

/// Closed set of vehicle lifecycle states.
///
/// The state fully determines the goal cell: `Idle` heads home, `Picking`
/// heads for the held order's pickup station, `Delivering` for its delivery
/// station.  That coupling is enforced by [`Vehicle::apply_state`] being the
/// only place the state changes.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum VehicleState {
    /// No active job.  The vehicle drifts back to its home cell and is the
    /// only state in which the allocator may hand it an order.
    Idle,
    /// En route to the held order's pickup station.
    Picking,
    /// Carrying the held order to its delivery station.
    Delivering,
}

impl fmt::Display for VehicleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VehicleState::Idle       => "Idle",
            VehicleState::Picking    => "Picking",
            VehicleState::Delivering => "Delivering",
        };
        f.write_str(name)
    }
}

// ── Vehicle ──────────────────────────────────────────────────────────────────

/// One automated guided vehicle.
///
/// The vehicle owns its lifecycle bookkeeping (state, goal, history, order
/// log); it holds no references to the grid, the planner, or other fleet
/// members — only the `OrderId` of its current job.  The scheduler wires it
/// to the rest of the world each tick.
#[derive(Debug, Clone)]
pub struct Vehicle {
    id:   VehicleId,
    name: String,
    cell: Cell,
    goal: Cell,
    /// Start cell; the return target whenever the vehicle goes `Idle`.
    home: Cell,

    state: VehicleState,
    held:  Option<OrderId>,

    /// One `(cell, tick)` entry per tick the vehicle was simulated.
    history: Vec<(Cell, Tick)>,
    /// How many times this vehicle switched onto a new order.
    order_switches: u32,
    /// Ids of all orders handled, in acceptance order.
    order_log: Vec<OrderId>,
}

impl Vehicle {
    /// Create an idle vehicle parked at `start` (which becomes its home).
    pub fn new(id: VehicleId, name: impl Into<String>, start: Cell) -> Self {
        Self {
            id,
            name: name.into(),
            cell: start,
            goal: start,
            home: start,
            state:          VehicleState::Idle,
            held:           None,
            history:        Vec::new(),
            order_switches: 0,
            order_log:      Vec::new(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> VehicleId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn cell(&self) -> Cell {
        self.cell
    }

    #[inline]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    #[inline]
    pub fn home(&self) -> Cell {
        self.home
    }

    #[inline]
    pub fn state(&self) -> VehicleState {
        self.state
    }

    #[inline]
    pub fn held_order(&self) -> Option<OrderId> {
        self.held
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.state == VehicleState::Idle
    }

    #[inline]
    pub fn at_goal(&self) -> bool {
        self.cell == self.goal
    }

    #[inline]
    pub fn history(&self) -> &[(Cell, Tick)] {
        &self.history
    }

    #[inline]
    pub fn order_switches(&self) -> u32 {
        self.order_switches
    }

    #[inline]
    pub fn order_log(&self) -> &[OrderId] {
        &self.order_log
    }

    // ── Lifecycle transitions ─────────────────────────────────────────────

    /// Re-derive state and goal.  A no-op if the vehicle holds no order —
    /// a vehicle that has never been given a job has nothing to switch to.
    ///
    /// `Picking` is the acceptance edge: it bumps the switch counter and
    /// appends to the order log.
    pub fn apply_state(&mut self, new_state: VehicleState, order: &Order) {
        if self.held.is_none() {
            return;
        }
        match new_state {
            VehicleState::Idle => {
                self.goal = self.home;
            }
            VehicleState::Picking => {
                self.order_switches += 1;
                self.order_log.push(order.id());
                self.goal = order.pickup();
            }
            VehicleState::Delivering => {
                self.goal = order.delivery();
            }
        }
        self.state = new_state;
    }

    /// Win `order` in an auction: record the assignment on the order and
    /// start heading for its pickup station.
    ///
    /// # Panics
    /// Panics if the vehicle is not `Idle` — only idle vehicles bid.
    pub fn accept_order(&mut self, order: &mut Order, now: Tick) {
        if self.state != VehicleState::Idle {
            panic!("vehicle {}: cannot accept order {} while {}", self.id, order.id(), self.state);
        }
        order.assign(self.id, now);
        self.held = Some(order.id());
        self.apply_state(VehicleState::Picking, order);
    }

    /// Standing on the pickup station: load the order and turn toward its
    /// delivery station.
    ///
    /// # Panics
    /// Panics if the vehicle is not `Picking` or holds a different order.
    pub fn pick_up(&mut self, order: &mut Order, now: Tick) {
        if self.state != VehicleState::Picking || self.held != Some(order.id()) {
            panic!("vehicle {}: cannot pick up order {} while {}", self.id, order.id(), self.state);
        }
        order.mark_picked_up(now);
        self.apply_state(VehicleState::Delivering, order);
    }

    /// Standing on the delivery station: drop the order off and head home.
    ///
    /// # Panics
    /// Panics if the vehicle is not `Delivering` or holds a different order.
    pub fn deliver(&mut self, order: &mut Order, now: Tick) {
        if self.state != VehicleState::Delivering || self.held != Some(order.id()) {
            panic!("vehicle {}: cannot deliver order {} while {}", self.id, order.id(), self.state);
        }
        order.mark_delivered(now);
        self.apply_state(VehicleState::Idle, order);
        // Job done: the order keeps its assigned-vehicle stamp forever, the
        // vehicle no longer holds it.
        self.held = None;
    }

    // ── Per-tick position bookkeeping ─────────────────────────────────────

    /// Adopt the planner's chosen next cell.
    #[inline]
    pub fn move_to(&mut self, cell: Cell) {
        self.cell = cell;
    }

    /// Append the current position to the step history.
    #[inline]
    pub fn record_step(&mut self, now: Tick) {
        self.history.push((self.cell, now));
    }
}
