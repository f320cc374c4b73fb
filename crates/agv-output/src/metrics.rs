//! Per-order metrics and their run-level aggregates.

use agv_fleet::{Order, Vehicle};

use crate::row::OrderMetricsRow;

/// Build one metrics row per order, in order-book order.
///
/// Undelivered orders are included with `None` in the tick-derived fields —
/// orders are never dropped from a run, and an incomplete run should show
/// its gaps rather than hide them.
pub fn order_metrics(orders: &[Order], vehicles: &[Vehicle]) -> Vec<OrderMetricsRow> {
    orders
        .iter()
        .map(|order| {
            let assigned_vehicle = order.assigned_vehicle().and_then(|id| {
                vehicles
                    .iter()
                    .find(|v| v.id() == id)
                    .map(|v| v.name().to_owned())
            });

            let required = order.required_distance();
            let performed = match (order.pickup_tick(), order.delivery_tick()) {
                (Some(picked), Some(delivered)) => Some(delivered.since(picked)),
                _ => None,
            };
            let loss = performed.map(|p| p as f64 - required);

            OrderMetricsRow {
                id_code:  order.id().0,
                quantity: order.quantity(),

                pickup_row:   order.pickup().row,
                pickup_col:   order.pickup().col,
                delivery_row: order.delivery().row,
                delivery_col: order.delivery().col,

                assigned_vehicle,

                release_tick:  order.release().0,
                assigned_tick: order.assigned_tick().map(|t| t.0),
                pickup_tick:   order.pickup_tick().map(|t| t.0),
                delivery_tick: order.delivery_tick().map(|t| t.0),

                required_distance:  required,
                performed_distance: performed,
                loss,
            }
        })
        .collect()
}

// ── MetricsSummary ───────────────────────────────────────────────────────────

/// Run-level aggregates over the *delivered* orders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsSummary {
    /// Orders the averages below are taken over.
    pub delivered: usize,

    /// Mean ticks from release to pickup.
    pub avg_waiting_ticks: f64,
    /// Mean ticks from pickup to delivery.
    pub avg_delivery_ticks: f64,
    /// Mean ticks from release to delivery.
    pub avg_total_ticks: f64,

    pub avg_loss: f64,
    pub max_loss: f64,

    /// Latest delivery tick — when the last order landed.
    pub max_delivery_tick: u64,
}

impl MetricsSummary {
    /// Aggregate the delivered rows; `None` if nothing was delivered.
    pub fn from_rows(rows: &[OrderMetricsRow]) -> Option<Self> {
        let delivered: Vec<&OrderMetricsRow> = rows
            .iter()
            .filter(|row| row.delivery_tick.is_some())
            .collect();
        if delivered.is_empty() {
            return None;
        }
        let n = delivered.len() as f64;

        let mut waiting = 0.0;
        let mut carrying = 0.0;
        let mut total = 0.0;
        let mut loss_sum = 0.0;
        let mut max_loss = f64::MIN;
        let mut max_delivery = 0;

        for row in &delivered {
            // delivery_tick (and its prerequisites) are present for every
            // row in this list by the filter above.
            let pickup = row.pickup_tick.unwrap_or(row.release_tick);
            let delivery = row.delivery_tick.unwrap_or(pickup);
            let loss = row.loss.unwrap_or(0.0);

            waiting += (pickup - row.release_tick) as f64;
            carrying += (delivery - pickup) as f64;
            total += (delivery - row.release_tick) as f64;
            loss_sum += loss;
            max_loss = max_loss.max(loss);
            max_delivery = max_delivery.max(delivery);
        }

        Some(Self {
            delivered:          delivered.len(),
            avg_waiting_ticks:  waiting / n,
            avg_delivery_ticks: carrying / n,
            avg_total_ticks:    total / n,
            avg_loss:           loss_sum / n,
            max_loss,
            max_delivery_tick:  max_delivery,
        })
    }
}
