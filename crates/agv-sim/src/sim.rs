//! The `Sim` struct and its tick loop.

use agv_alloc::run_auction;
use agv_core::{SimConfig, Tick};
use agv_fleet::{Order, Vehicle, VehicleState};
use agv_grid::{Grid, OccupancySnapshot, Planner};

use crate::SimObserver;

// ── Tick summary ─────────────────────────────────────────────────────────────

/// Counters for one completed tick, handed to
/// [`SimObserver::on_tick_end`][crate::SimObserver::on_tick_end].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummary {
    pub tick: Tick,
    /// Orders won in this tick's auction pass.
    pub assigned: usize,
    /// Vehicles that stepped into a new cell.
    pub moved: usize,
    /// Vehicles away from their goal that found no path and waited in place.
    pub waiting: usize,
}

// ── Run report ───────────────────────────────────────────────────────────────

/// Why the run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every order reached `Delivered`.
    AllDelivered,
    /// The tick budget ran out with orders still undelivered.  Fail-soft:
    /// the run is reported as incomplete, not raised as an error.
    TickBudgetExhausted,
}

/// Terminal state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    /// The first tick that was *not* simulated (the run processed ticks
    /// `0..final_tick`).
    pub final_tick: Tick,
    pub outcome:    RunOutcome,
    pub delivered:   usize,
    pub undelivered: usize,
}

impl RunReport {
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.outcome == RunOutcome::AllDelivered
    }
}

// ── Per-vehicle step outcome ─────────────────────────────────────────────────

/// What one vehicle did during the move pass.
enum StepOutcome {
    /// At its goal: parked, or performed a lifecycle transition.
    AtGoal,
    /// Stepped into the contained cell.
    Moved(agv_core::Cell),
    /// Away from its goal but no path existed this tick.
    Waited,
}

// ── Sim ──────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<P>` owns all mutable simulation state — the fleet and the order book
/// — as one aggregate; vehicles refer to orders only by `OrderId`, so the
/// ownership story stays unambiguous.  Each tick runs the four phases
/// described in the [crate docs](crate): auction, snapshot, move pass,
/// summary.
///
/// Within the move pass every planning call sees the *same* snapshot
/// captured at phase ②: a vehicle's move this tick is not visible to the
/// vehicles after it.  Two vehicles may therefore cross through each other's
/// vacated cells, or converge on the same free cell, in a single tick — a
/// deliberate decentralized approximation.  Setting
/// [`SimConfig::reserve_next_cells`] tightens this: each chosen next cell is
/// blocked in the snapshot before later vehicles plan.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: Planner> {
    /// Global configuration (tick budget, reservation mode).
    pub config: SimConfig,

    /// The next tick to simulate.
    pub current_tick: Tick,

    /// Static warehouse map.
    pub grid: Grid,

    /// The motion planner, consulted once per moving vehicle per tick.
    pub planner: P,

    /// The fleet, in load order (= ascending `VehicleId`).
    pub vehicles: Vec<Vehicle>,

    /// The order book, in load order.  Orders are never removed — delivered
    /// orders stay for post-run metrics.
    pub orders: Vec<Order>,
}

impl<P: Planner> Sim<P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until every order is delivered or the tick budget is exhausted.
    ///
    /// Calls observer hooks at every phase boundary; use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> RunReport {
        let outcome = loop {
            if self.all_delivered() {
                break RunOutcome::AllDelivered;
            }
            if self.current_tick >= self.config.end_tick() {
                break RunOutcome::TickBudgetExhausted;
            }
            self.process_tick(observer);
        };

        let delivered = self.orders.iter().filter(|o| o.is_delivered()).count();
        let report = RunReport {
            final_tick: self.current_tick,
            outcome,
            delivered,
            undelivered: self.orders.len() - delivered,
        };
        observer.on_run_end(&report, &self.vehicles, &self.orders);
        report
    }

    /// Process exactly `n` ticks from the current position, ignoring both end
    /// conditions.  Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.process_tick(observer);
        }
    }

    /// `true` once every order has reached its terminal state.  Vacuously
    /// true for a run with no orders.
    pub fn all_delivered(&self) -> bool {
        self.orders.iter().all(Order::is_delivered)
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.current_tick;
        observer.on_tick_start(now);

        // ── Phase 1: auction pass ─────────────────────────────────────────
        let assignments = run_auction(now, &mut self.orders, &mut self.vehicles);
        for a in &assignments {
            observer.on_order_assigned(now, a.order, a.vehicle, a.bid);
        }

        // ── Phase 2: capture the occupancy snapshot ───────────────────────
        //
        // Grid obstacles plus every vehicle's current cell.  This is the
        // only world view the move pass gets: positions mutated below are
        // invisible until next tick's capture.
        let mut snapshot =
            OccupancySnapshot::capture(&self.grid, self.vehicles.iter().map(Vehicle::cell));

        // ── Phase 3: per-vehicle move pass, ascending VehicleId ───────────
        let mut moved = 0;
        let mut waiting = 0;
        for i in 0..self.vehicles.len() {
            let outcome = step_vehicle(
                &mut self.vehicles[i],
                &mut self.orders,
                &self.planner,
                &snapshot,
                now,
                observer,
            );
            match outcome {
                StepOutcome::AtGoal => {}
                StepOutcome::Moved(next) => {
                    moved += 1;
                    if self.config.reserve_next_cells {
                        snapshot.block(next);
                    }
                }
                StepOutcome::Waited => waiting += 1,
            }
        }

        // ── Phase 4: tick summary ─────────────────────────────────────────
        let summary = TickSummary {
            tick: now,
            assigned: assignments.len(),
            moved,
            waiting,
        };
        observer.on_tick_end(now, &summary);

        self.current_tick = now + 1;
    }
}

// ── Move-pass helpers ────────────────────────────────────────────────────────

/// Advance one vehicle by one tick: lifecycle transition if it stands on its
/// goal, otherwise one planner step.  Every branch records a history entry,
/// so each vehicle logs exactly one `(cell, tick)` pair per tick.
fn step_vehicle<P: Planner, O: SimObserver>(
    vehicle:  &mut Vehicle,
    orders:   &mut [Order],
    planner:  &P,
    snapshot: &OccupancySnapshot,
    now:      Tick,
    observer: &mut O,
) -> StepOutcome {
    if vehicle.at_goal() {
        match vehicle.state() {
            // Parked at home with nothing to do.
            VehicleState::Idle => {
                vehicle.record_step(now);
            }
            // Standing on the pickup station: load, turn toward delivery.
            VehicleState::Picking => {
                vehicle.record_step(now);
                let order = held_order_mut(orders, vehicle);
                let id = order.id();
                vehicle.pick_up(order, now);
                observer.on_order_picked_up(now, id, vehicle.id());
            }
            // Standing on the delivery station: drop off, head home.
            VehicleState::Delivering => {
                vehicle.record_step(now);
                let order = held_order_mut(orders, vehicle);
                let id = order.id();
                vehicle.deliver(order, now);
                observer.on_order_delivered(now, id, vehicle.id());
            }
        }
        return StepOutcome::AtGoal;
    }

    let next = planner.next_step(snapshot, vehicle.cell(), vehicle.goal());
    if next == vehicle.cell() {
        // No path this tick — wait in place and retry against next tick's
        // snapshot.
        observer.on_goal_blocked(now, vehicle.id(), vehicle.goal());
        vehicle.record_step(now);
        return StepOutcome::Waited;
    }

    vehicle.move_to(next);
    vehicle.record_step(now);
    StepOutcome::Moved(next)
}

/// Resolve the order a busy vehicle is carrying.
///
/// A `Picking`/`Delivering` vehicle without a resolvable order is a breach of
/// the lifecycle protocol, so this fails loudly rather than limping on.
fn held_order_mut<'a>(orders: &'a mut [Order], vehicle: &Vehicle) -> &'a mut Order {
    let id = match vehicle.held_order() {
        Some(id) => id,
        None => panic!("vehicle {} is {} but holds no order", vehicle.id(), vehicle.state()),
    };
    match orders.iter_mut().find(|o| o.id() == id) {
        Some(order) => order,
        None => panic!("vehicle {} holds unknown order {id}", vehicle.id()),
    }
}
