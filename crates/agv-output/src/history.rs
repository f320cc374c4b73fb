//! The schedule document: per-vehicle position history.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use agv_fleet::Vehicle;

use crate::row::StepRecord;

/// The history output document: a map from vehicle name to its ordered
/// `{x, y, t}` step records, wrapped in a `schedule` key.
///
/// A `BTreeMap` keyed by name makes serialization order — and therefore the
/// serialized bytes — a pure function of the run, which is what the
/// determinism guarantee ("same input, byte-identical history") rests on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDoc {
    pub schedule: BTreeMap<String, Vec<StepRecord>>,
}

impl ScheduleDoc {
    /// Render the fleet's accumulated step histories into the document.
    pub fn from_vehicles(vehicles: &[Vehicle]) -> Self {
        let schedule = vehicles
            .iter()
            .map(|vehicle| {
                let steps = vehicle
                    .history()
                    .iter()
                    .map(|&(cell, tick)| StepRecord { x: cell.row, y: cell.col, t: tick.0 })
                    .collect();
                (vehicle.name().to_owned(), steps)
            })
            .collect();
        Self { schedule }
    }

    /// Serialize to a pretty-printed JSON string.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
