//! Simulation observer trait for progress reporting and data collection.

use agv_core::{Cell, OrderId, Tick, VehicleId};
use agv_fleet::{Order, Vehicle};

use crate::sim::{RunReport, TickSummary};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  This is also where expected-but-notable
/// conditions surface: an unreachable goal is reported through
/// [`on_goal_blocked`][Self::on_goal_blocked] and then simply retried next
/// tick — it never aborts the run.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: {} moved, {} waiting", summary.moved, summary.waiting);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before the auction pass.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called for each auction win, in assignment order.
    fn on_order_assigned(&mut self, _tick: Tick, _order: OrderId, _vehicle: VehicleId, _bid: f64) {}

    /// Called when a vehicle loads an order at its pickup station.
    fn on_order_picked_up(&mut self, _tick: Tick, _order: OrderId, _vehicle: VehicleId) {}

    /// Called when a vehicle drops an order at its delivery station.
    fn on_order_delivered(&mut self, _tick: Tick, _order: OrderId, _vehicle: VehicleId) {}

    /// Called when the planner found no path for a vehicle this tick and it
    /// waits in place.  Expected under congestion; retried next tick.
    fn on_goal_blocked(&mut self, _tick: Tick, _vehicle: VehicleId, _goal: Cell) {}

    /// Called at the end of each tick with the tick's counters.
    fn on_tick_end(&mut self, _tick: Tick, _summary: &TickSummary) {}

    /// Called once after the final tick, with read-only access to the full
    /// fleet and order book so output writers can record histories and
    /// metrics without the sim knowing about any specific format.
    fn on_run_end(&mut self, _report: &RunReport, _vehicles: &[Vehicle], _orders: &[Order]) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
