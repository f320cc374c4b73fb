//! `agv-core` — foundational types for the `agv_sim` warehouse simulator.
//!
//! This crate is a dependency of every other `agv-*` crate.  It intentionally
//! has no `agv-*` dependencies and no mandatory external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                  |
//! |-----------|-------------------------------------------|
//! | [`ids`]   | `VehicleId`, `OrderId`                    |
//! | [`cell`]  | `Cell`, Manhattan and Euclidean distance  |
//! | [`tick`]  | `Tick`, `SimConfig`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod cell;
pub mod ids;
pub mod tick;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use ids::{OrderId, VehicleId};
pub use tick::{SimConfig, Tick};
