//! Grid-construction error type.

use thiserror::Error;

use agv_core::Cell;

/// Errors produced while building a [`Grid`][crate::Grid].
///
/// All of these are configuration mistakes: they can only occur at load
/// time, and a run never starts from an invalid grid.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid dimensions must be non-zero, got {rows}x{cols}")]
    EmptyGrid { rows: u32, cols: u32 },

    #[error("cell {cell} lies outside the {rows}x{cols} grid")]
    OutOfBounds { cell: Cell, rows: u32, cols: u32 },

    #[error("cell {0} is assigned to more than one of obstacle/pickup/delivery")]
    CellConflict(Cell),
}

pub type GridResult<T> = Result<T, GridError>;
