//! Configuration-loading error type.

use thiserror::Error;

use agv_core::{Cell, OrderId};
use agv_grid::GridError;

/// Errors raised while loading and validating a scenario document.
///
/// All of these are fatal at load time; the run never starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("scenario parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("agent {name:?} start cell {cell} is outside the grid")]
    StartOutOfBounds { name: String, cell: Cell },

    #[error("agent {name:?} starts on obstacle cell {cell}")]
    StartOnObstacle { name: String, cell: Cell },

    #[error("agents {first:?} and {second:?} share start cell {cell}")]
    DuplicateStart {
        first:  String,
        second: String,
        cell:   Cell,
    },

    #[error("duplicate agent name {0:?}")]
    DuplicateAgentName(String),

    #[error("duplicate order id {0}")]
    DuplicateOrderId(OrderId),

    #[error("order {order}: cell {cell} is not a pickup station")]
    UnknownPickupStation { order: OrderId, cell: Cell },

    #[error("order {order}: cell {cell} is not a delivery station")]
    UnknownDeliveryStation { order: OrderId, cell: Cell },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
