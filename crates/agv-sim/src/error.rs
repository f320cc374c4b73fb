use agv_core::{Cell, OrderId, VehicleId};
use thiserror::Error;

/// Validation errors raised by [`SimBuilder::build`][crate::SimBuilder::build].
///
/// These are all load-time mistakes; a `Sim` that builds successfully cannot
/// fail at runtime (unreachable goals and exhausted tick budgets are reported
/// outcomes, not errors).
#[derive(Debug, Error)]
pub enum SimError {
    #[error("vehicle {vehicle} start cell {cell} is outside the grid")]
    StartOutOfBounds { vehicle: VehicleId, cell: Cell },

    #[error("vehicle {vehicle} starts on obstacle cell {cell}")]
    StartOnObstacle { vehicle: VehicleId, cell: Cell },

    #[error("vehicles {first} and {second} share start cell {cell}")]
    StartCollision {
        first:  VehicleId,
        second: VehicleId,
        cell:   Cell,
    },

    #[error("vehicle at position {index} has id {id}; fleet ids must equal their load order")]
    NonSequentialVehicleIds { index: usize, id: VehicleId },

    #[error("duplicate order id {0}")]
    DuplicateOrderId(OrderId),

    #[error("order {order} endpoint {cell} is outside the grid")]
    OrderEndpointOutOfBounds { order: OrderId, cell: Cell },

    #[error("order {order} endpoint {cell} is an obstacle")]
    OrderEndpointOnObstacle { order: OrderId, cell: Cell },
}

pub type SimResult<T> = Result<T, SimError>;
