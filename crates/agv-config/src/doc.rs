//! Serde model of the scenario document.
//!
//! Field names follow the established configuration schema
//! (`pickupStation`, `deliveryStation`, `orders_`, `id_code`, …) so existing
//! scenario files keep loading unchanged; the odd spellings are mapped to
//! idiomatic Rust names via `#[serde(rename)]`.  Cells are `[row, col]`
//! pairs throughout.
//!
//! ```json
//! {
//!   "map": {
//!     "dimensions": [5, 5],
//!     "pickupStation": [[0, 0]],
//!     "deliveryStation": [[4, 4]],
//!     "obstacles": [[2, 2]]
//!   },
//!   "agents": [{ "name": "agv0", "start": [0, 0] }],
//!   "order": {
//!     "orders_": [{
//!       "id_code": 1,
//!       "requested_quantities": 2,
//!       "timestep": 0,
//!       "pickupStation": [0, 0],
//!       "deliveryStation": [4, 4]
//!     }]
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};

/// The whole scenario file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioDoc {
    pub map:    MapDoc,
    pub agents: Vec<AgentDoc>,
    pub order:  OrderSection,
}

/// Static map section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapDoc {
    /// `[rows, cols]`.
    pub dimensions: [u32; 2],

    #[serde(rename = "pickupStation")]
    pub pickup_stations: Vec<[u32; 2]>,

    #[serde(rename = "deliveryStation")]
    pub delivery_stations: Vec<[u32; 2]>,

    pub obstacles: Vec<[u32; 2]>,
}

/// One vehicle entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentDoc {
    pub name:  String,
    pub start: [u32; 2],
}

/// Wrapper around the order list — the schema nests it one level down.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSection {
    #[serde(rename = "orders_")]
    pub orders: Vec<OrderDoc>,
}

/// One order entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDoc {
    pub id_code: u32,

    pub requested_quantities: u32,

    /// Release timestep: the earliest tick this order may be auctioned.
    pub timestep: u64,

    #[serde(rename = "pickupStation")]
    pub pickup_station: [u32; 2],

    #[serde(rename = "deliveryStation")]
    pub delivery_station: [u32; 2],
}
