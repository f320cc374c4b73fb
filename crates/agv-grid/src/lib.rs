//! `agv-grid` — static warehouse map, occupancy snapshots, and motion planning.
//!
//! # Crate layout
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`map`]      | `Grid` (immutable map), `GridBuilder`               |
//! | [`snapshot`] | `OccupancySnapshot` (per-tick blocked-cell view)    |
//! | [`planner`]  | `Planner` trait, `AStarPlanner`                     |
//! | [`error`]    | `GridError`, `GridResult<T>`                        |

pub mod error;
pub mod map;
pub mod planner;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use error::{GridError, GridResult};
pub use map::{Grid, GridBuilder};
pub use planner::{AStarPlanner, Planner};
pub use snapshot::OccupancySnapshot;
