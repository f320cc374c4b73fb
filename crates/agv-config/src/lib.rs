//! `agv-config` — scenario documents and loading.
//!
//! The simulator core never touches files or parsers; this crate turns a
//! structured scenario document into a validated `(Grid, Vec<Vehicle>,
//! Vec<Order>)` triple ready for `agv-sim`'s builder.
//!
//! # Crate layout
//!
//! | Module     | Contents                                         |
//! |------------|--------------------------------------------------|
//! | [`doc`]    | serde document model (`ScenarioDoc` and friends) |
//! | [`loader`] | `load_scenario`, `load_scenario_reader`, `Scenario` |
//! | [`error`]  | `ConfigError`, `ConfigResult<T>`                 |

pub mod doc;
pub mod error;
pub mod loader;

#[cfg(test)]
mod tests;

pub use doc::{AgentDoc, MapDoc, OrderDoc, OrderSection, ScenarioDoc};
pub use error::{ConfigError, ConfigResult};
pub use loader::{load_scenario, load_scenario_reader, Scenario};
