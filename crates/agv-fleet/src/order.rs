//! Order lifecycle: `Pending → Assigned → PickedUp → Delivered`.

use std::fmt;

use agv_core::{Cell, OrderId, Tick, VehicleId};

// ── OrderState ───────────────────────────────────────────────────────────────

/// Closed set of order lifecycle states, in transition order.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum OrderState {
    /// Created, not yet won by any vehicle.  Orders with no bidder stay
    /// pending indefinitely; there is no timeout.
    Pending,
    /// Won by a vehicle in an auction pass; the vehicle is en route to the
    /// pickup station.
    Assigned,
    /// On board the assigned vehicle, en route to the delivery station.
    PickedUp,
    /// Dropped off.  Terminal.
    Delivered,
}

impl fmt::Display for OrderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OrderState::Pending   => "Pending",
            OrderState::Assigned  => "Assigned",
            OrderState::PickedUp  => "PickedUp",
            OrderState::Delivered => "Delivered",
        };
        f.write_str(name)
    }
}

// ── Order ────────────────────────────────────────────────────────────────────

/// A discrete transport job: take `quantity` goods from the pickup station to
/// the delivery station.
///
/// Orders are created at load time and never destroyed during a run — they
/// are retained (with their recorded ticks) for post-run metrics.  Only the
/// allocator and the owning vehicle's lifecycle transitions mutate them.
#[derive(Debug, Clone)]
pub struct Order {
    id:       OrderId,
    pickup:   Cell,
    delivery: Cell,
    quantity: u32,
    /// Earliest tick at which this order may enter an auction.
    release:  Tick,

    state: OrderState,

    /// Set exactly once by [`assign`][Self::assign]; never cleared.
    assigned_vehicle: Option<VehicleId>,
    assigned_tick:    Option<Tick>,
    pickup_tick:      Option<Tick>,
    delivery_tick:    Option<Tick>,
}

impl Order {
    pub fn new(id: OrderId, pickup: Cell, delivery: Cell, quantity: u32, release: Tick) -> Self {
        Self {
            id,
            pickup,
            delivery,
            quantity,
            release,
            state:            OrderState::Pending,
            assigned_vehicle: None,
            assigned_tick:    None,
            pickup_tick:      None,
            delivery_tick:    None,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> OrderId {
        self.id
    }

    #[inline]
    pub fn pickup(&self) -> Cell {
        self.pickup
    }

    #[inline]
    pub fn delivery(&self) -> Cell {
        self.delivery
    }

    #[inline]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    #[inline]
    pub fn release(&self) -> Tick {
        self.release
    }

    #[inline]
    pub fn state(&self) -> OrderState {
        self.state
    }

    #[inline]
    pub fn assigned_vehicle(&self) -> Option<VehicleId> {
        self.assigned_vehicle
    }

    #[inline]
    pub fn assigned_tick(&self) -> Option<Tick> {
        self.assigned_tick
    }

    #[inline]
    pub fn pickup_tick(&self) -> Option<Tick> {
        self.pickup_tick
    }

    #[inline]
    pub fn delivery_tick(&self) -> Option<Tick> {
        self.delivery_tick
    }

    /// `true` once the release tick has arrived.
    #[inline]
    pub fn is_released(&self, now: Tick) -> bool {
        self.release <= now
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.state == OrderState::Pending
    }

    #[inline]
    pub fn is_delivered(&self) -> bool {
        self.state == OrderState::Delivered
    }

    /// Straight-line pickup→delivery distance — the "required distance" that
    /// post-run metrics compare the performed travel time against.
    pub fn required_distance(&self) -> f64 {
        self.pickup.euclidean(self.delivery)
    }

    /// The cell the carrying vehicle should currently head for: the pickup
    /// station while `Assigned`, the delivery station while `PickedUp`,
    /// `None` in the terminal/unassigned states.
    pub fn objective(&self) -> Option<Cell> {
        match self.state {
            OrderState::Assigned => Some(self.pickup),
            OrderState::PickedUp => Some(self.delivery),
            OrderState::Pending | OrderState::Delivered => None,
        }
    }

    // ── Transitions ───────────────────────────────────────────────────────
    //
    // Each transition is legal from exactly one state and records its tick.
    // Calling one from any other state is an invariant breach in the caller
    // and panics.

    /// `Pending → Assigned`.  Called only by the allocator, via
    /// [`Vehicle::accept_order`][crate::Vehicle::accept_order].
    pub fn assign(&mut self, vehicle: VehicleId, now: Tick) {
        if self.state != OrderState::Pending {
            panic!("order {}: cannot assign while {}", self.id, self.state);
        }
        self.state = OrderState::Assigned;
        self.assigned_vehicle = Some(vehicle);
        self.assigned_tick = Some(now);
    }

    /// `Assigned → PickedUp`.  Called when the assigned vehicle stands on the
    /// pickup station.
    pub fn mark_picked_up(&mut self, now: Tick) {
        if self.state != OrderState::Assigned {
            panic!("order {}: cannot pick up while {}", self.id, self.state);
        }
        self.state = OrderState::PickedUp;
        self.pickup_tick = Some(now);
    }

    /// `PickedUp → Delivered`.  Called when the carrying vehicle stands on
    /// the delivery station.
    pub fn mark_delivered(&mut self, now: Tick) {
        if self.state != OrderState::PickedUp {
            panic!("order {}: cannot deliver while {}", self.id, self.state);
        }
        self.state = OrderState::Delivered;
        self.delivery_tick = Some(now);
    }
}
