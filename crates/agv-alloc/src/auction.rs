//! The auction pass.

use agv_core::{OrderId, Tick, VehicleId};
use agv_fleet::{Order, Vehicle};

/// One auction outcome: `order` was won by `vehicle` at bid distance `bid`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assignment {
    pub order:   OrderId,
    pub vehicle: VehicleId,
    /// The winning straight-line distance from the vehicle to the pickup
    /// station at assignment time.
    pub bid: f64,
}

/// Run one allocation pass over the whole fleet.
///
/// Orders are visited in stored (load-time) order; vehicles bid in stored
/// order.  Both orderings matter: the first minimal bidder wins a distance
/// tie, and an order earlier in the list claims a contested vehicle before a
/// later order gets to bid it.
///
/// A won order transitions `Pending → Assigned` and its vehicle
/// `Idle → Picking` before the next order is considered, so a vehicle can
/// win at most one order per pass.  Returns the assignments made this tick,
/// in order, for observer logging.
pub fn run_auction(now: Tick, orders: &mut [Order], vehicles: &mut [Vehicle]) -> Vec<Assignment> {
    let mut assignments = Vec::new();

    for order_idx in 0..orders.len() {
        let order = &orders[order_idx];
        if !order.is_pending() || !order.is_released(now) {
            continue;
        }

        // Collect bids: straight-line distance from each idle vehicle to the
        // pickup station.  Strict `<` keeps the first minimal bidder.
        let pickup = order.pickup();
        let mut winner: Option<(usize, f64)> = None;
        for (vehicle_idx, vehicle) in vehicles.iter().enumerate() {
            if !vehicle.is_idle() {
                continue;
            }
            let bid = vehicle.cell().euclidean(pickup);
            if winner.is_none_or(|(_, best)| bid < best) {
                winner = Some((vehicle_idx, bid));
            }
        }

        // No idle vehicle this tick: the order stays pending and is
        // reconsidered next tick.
        let Some((vehicle_idx, bid)) = winner else {
            continue;
        };

        let order = &mut orders[order_idx];
        let vehicle = &mut vehicles[vehicle_idx];
        vehicle.accept_order(order, now);
        assignments.push(Assignment {
            order:   order.id(),
            vehicle: vehicle.id(),
            bid,
        });
    }

    assignments
}
