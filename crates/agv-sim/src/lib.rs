//! `agv-sim` — tick loop orchestrator for the agv_sim warehouse simulator.
//!
//! # Four-phase tick loop
//!
//! ```text
//! for tick in 0..config.max_ticks:
//!   ① Auction   — released pending orders solicit bids from idle vehicles;
//!                 winners flip to Picking (agv-alloc).
//!   ② Snapshot  — capture grid obstacles + every vehicle's current cell.
//!   ③ Move pass — for each vehicle in ascending VehicleId order:
//!                   at goal → lifecycle transition (pick up / deliver / park)
//!                   else    → one planner step against the shared snapshot
//!                 (reservation mode additionally blocks each chosen cell
//!                 before later vehicles plan)
//!   ④ Summary   — observer tick-end with assigned/moved/waiting counts.
//! ```
//!
//! The run ends when every order is `Delivered`, or at the tick budget —
//! reported as an incomplete run, never as an error.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use agv_core::SimConfig;
//! use agv_grid::AStarPlanner;
//! use agv_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default(), grid, AStarPlanner)
//!     .vehicles(vehicles)
//!     .orders(orders)
//!     .build()?;
//! let report = sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{RunOutcome, RunReport, Sim, TickSummary};
