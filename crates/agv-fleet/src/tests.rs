//! Unit tests for the order and vehicle lifecycles.

use agv_core::{Cell, OrderId, Tick, VehicleId};

use crate::{Order, OrderState, Vehicle, VehicleState};

fn c(row: u32, col: u32) -> Cell {
    Cell::new(row, col)
}

fn sample_order() -> Order {
    Order::new(OrderId(7), c(0, 0), c(4, 4), 3, Tick(2))
}

#[cfg(test)]
mod order_tests {
    use super::*;

    #[test]
    fn full_lifecycle_records_ticks() {
        let mut order = sample_order();
        assert_eq!(order.state(), OrderState::Pending);
        assert!(order.is_pending());
        assert_eq!(order.objective(), None);

        order.assign(VehicleId(1), Tick(2));
        assert_eq!(order.state(), OrderState::Assigned);
        assert_eq!(order.assigned_vehicle(), Some(VehicleId(1)));
        assert_eq!(order.assigned_tick(), Some(Tick(2)));
        assert_eq!(order.objective(), Some(c(0, 0)));

        order.mark_picked_up(Tick(5));
        assert_eq!(order.state(), OrderState::PickedUp);
        assert_eq!(order.pickup_tick(), Some(Tick(5)));
        assert_eq!(order.objective(), Some(c(4, 4)));

        order.mark_delivered(Tick(14));
        assert!(order.is_delivered());
        assert_eq!(order.delivery_tick(), Some(Tick(14)));
        assert_eq!(order.objective(), None);
    }

    #[test]
    fn release_gating() {
        let order = sample_order();
        assert!(!order.is_released(Tick(0)));
        assert!(!order.is_released(Tick(1)));
        assert!(order.is_released(Tick(2)));
        assert!(order.is_released(Tick(100)));
    }

    #[test]
    fn required_distance_is_straight_line() {
        let order = Order::new(OrderId(0), c(0, 0), c(3, 4), 1, Tick::ZERO);
        assert!((order.required_distance() - 5.0).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "cannot assign")]
    fn double_assign_panics() {
        let mut order = sample_order();
        order.assign(VehicleId(0), Tick(2));
        order.assign(VehicleId(1), Tick(3));
    }

    #[test]
    #[should_panic(expected = "cannot pick up")]
    fn pickup_before_assign_panics() {
        let mut order = sample_order();
        order.mark_picked_up(Tick(0));
    }

    #[test]
    #[should_panic(expected = "cannot deliver")]
    fn deliver_before_pickup_panics() {
        let mut order = sample_order();
        order.assign(VehicleId(0), Tick(2));
        order.mark_delivered(Tick(3));
    }
}

#[cfg(test)]
mod vehicle_tests {
    use super::*;

    #[test]
    fn new_vehicle_is_idle_at_home() {
        let v = Vehicle::new(VehicleId(0), "agv0", c(2, 3));
        assert_eq!(v.state(), VehicleState::Idle);
        assert_eq!(v.cell(), c(2, 3));
        assert_eq!(v.goal(), c(2, 3));
        assert_eq!(v.home(), c(2, 3));
        assert!(v.at_goal());
        assert_eq!(v.held_order(), None);
        assert!(v.history().is_empty());
    }

    #[test]
    fn apply_state_without_order_is_noop() {
        let order = sample_order();
        let mut v = Vehicle::new(VehicleId(0), "agv0", c(1, 1));
        v.apply_state(VehicleState::Picking, &order);
        assert_eq!(v.state(), VehicleState::Idle);
        assert_eq!(v.goal(), c(1, 1));
        assert_eq!(v.order_switches(), 0);
        assert!(v.order_log().is_empty());
    }

    #[test]
    fn accept_order_targets_pickup_and_logs() {
        let mut order = sample_order();
        let mut v = Vehicle::new(VehicleId(2), "agv2", c(3, 3));
        v.accept_order(&mut order, Tick(2));

        assert_eq!(v.state(), VehicleState::Picking);
        assert_eq!(v.goal(), order.pickup());
        assert_eq!(v.held_order(), Some(order.id()));
        assert_eq!(v.order_switches(), 1);
        assert_eq!(v.order_log(), [order.id()]);
        assert_eq!(order.assigned_vehicle(), Some(VehicleId(2)));
    }

    #[test]
    fn pick_up_turns_toward_delivery() {
        let mut order = sample_order();
        let mut v = Vehicle::new(VehicleId(0), "agv0", c(0, 0));
        v.accept_order(&mut order, Tick(2));
        v.pick_up(&mut order, Tick(2));

        assert_eq!(v.state(), VehicleState::Delivering);
        assert_eq!(v.goal(), order.delivery());
        assert_eq!(order.state(), OrderState::PickedUp);
    }

    #[test]
    fn deliver_heads_home_and_releases_order() {
        let mut order = sample_order();
        let mut v = Vehicle::new(VehicleId(0), "agv0", c(1, 0));
        v.accept_order(&mut order, Tick(2));
        v.pick_up(&mut order, Tick(4));
        v.deliver(&mut order, Tick(12));

        assert_eq!(v.state(), VehicleState::Idle);
        assert_eq!(v.goal(), v.home());
        assert_eq!(v.held_order(), None);
        assert!(order.is_delivered());
        // The order remembers who carried it even after release.
        assert_eq!(order.assigned_vehicle(), Some(VehicleId(0)));
    }

    #[test]
    fn second_order_increments_switch_count() {
        let mut first = Order::new(OrderId(1), c(0, 1), c(2, 2), 1, Tick::ZERO);
        let mut second = Order::new(OrderId(2), c(1, 0), c(2, 0), 1, Tick::ZERO);
        let mut v = Vehicle::new(VehicleId(0), "agv0", c(0, 0));

        v.accept_order(&mut first, Tick(0));
        v.pick_up(&mut first, Tick(1));
        v.deliver(&mut first, Tick(4));
        v.accept_order(&mut second, Tick(5));

        assert_eq!(v.order_switches(), 2);
        assert_eq!(v.order_log(), [OrderId(1), OrderId(2)]);
    }

    #[test]
    #[should_panic(expected = "cannot accept")]
    fn accept_while_busy_panics() {
        let mut first = sample_order();
        let mut second = Order::new(OrderId(8), c(1, 1), c(2, 2), 1, Tick::ZERO);
        let mut v = Vehicle::new(VehicleId(0), "agv0", c(0, 0));
        v.accept_order(&mut first, Tick(2));
        v.accept_order(&mut second, Tick(2));
    }

    #[test]
    #[should_panic(expected = "cannot deliver")]
    fn deliver_while_picking_panics() {
        let mut order = sample_order();
        let mut v = Vehicle::new(VehicleId(0), "agv0", c(0, 0));
        v.accept_order(&mut order, Tick(2));
        v.deliver(&mut order, Tick(3));
    }

    #[test]
    fn history_accumulates_in_tick_order() {
        let mut v = Vehicle::new(VehicleId(0), "agv0", c(0, 0));
        v.record_step(Tick(0));
        v.move_to(c(0, 1));
        v.record_step(Tick(1));
        v.move_to(c(1, 1));
        v.record_step(Tick(2));

        assert_eq!(
            v.history(),
            [(c(0, 0), Tick(0)), (c(0, 1), Tick(1)), (c(1, 1), Tick(2))]
        );
    }
}
