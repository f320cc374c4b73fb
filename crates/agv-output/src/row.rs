//! Plain data row types written by output backends.

use serde::{Deserialize, Serialize};

/// One step of a vehicle's position history.
///
/// Field names follow the established schedule-document schema: `x` is the
/// row, `y` the column, `t` the tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    pub x: u32,
    pub y: u32,
    pub t: u64,
}

/// Post-run metrics for one order, delivered or not.
///
/// Tick-derived fields are `None` until the corresponding lifecycle
/// transition happened; an undelivered order keeps its row (with the gaps)
/// so incomplete runs stay visible in the output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderMetricsRow {
    pub id_code:  u32,
    pub quantity: u32,

    pub pickup_row:   u32,
    pub pickup_col:   u32,
    pub delivery_row: u32,
    pub delivery_col: u32,

    /// Name of the vehicle that won the order, if any was ever assigned.
    pub assigned_vehicle: Option<String>,

    pub release_tick:  u64,
    pub assigned_tick: Option<u64>,
    pub pickup_tick:   Option<u64>,
    pub delivery_tick: Option<u64>,

    /// Straight-line pickup→delivery distance.
    pub required_distance: f64,
    /// Ticks spent carrying: `delivery_tick - pickup_tick`.
    pub performed_distance: Option<u64>,
    /// `performed_distance - required_distance`.
    pub loss: Option<f64>,
}

/// Summary counters for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickSummaryRow {
    pub tick:     u64,
    pub assigned: u64,
    pub moved:    u64,
    pub waiting:  u64,
}
