//! `agv-fleet` — order and vehicle lifecycle state machines.
//!
//! # Crate layout
//!
//! | Module      | Contents                                        |
//! |-------------|-------------------------------------------------|
//! | [`order`]   | `Order`, `OrderState` (Pending → … → Delivered) |
//! | [`vehicle`] | `Vehicle`, `VehicleState` (Idle/Picking/Delivering) |
//!
//! # Invariants
//!
//! Lifecycle transitions are the contract the rest of the simulator depends
//! on: no state may be skipped or reversed, and timestamps are recorded
//! exactly once by the transition that owns them.  A transition called from
//! the wrong state is a bug in the caller, not a recoverable condition —
//! every transition method panics on misuse instead of papering over it.

pub mod order;
pub mod vehicle;

#[cfg(test)]
mod tests;

pub use order::{Order, OrderState};
pub use vehicle::{Vehicle, VehicleState};
