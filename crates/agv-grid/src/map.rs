//! Static warehouse map and its builder.
//!
//! The map never changes after construction: obstacles, pickup stations, and
//! delivery stations are fixed for the whole run.  Everything that *does*
//! change tick to tick (vehicle positions) lives in
//! [`OccupancySnapshot`][crate::OccupancySnapshot] instead.

use rustc_hash::FxHashSet;

use agv_core::Cell;

use crate::{GridError, GridResult};

// ── Grid ─────────────────────────────────────────────────────────────────────

/// The immutable warehouse map: dimensions plus obstacle / pickup-station /
/// delivery-station cell sets.
///
/// The three sets are pairwise disjoint and entirely in bounds — enforced by
/// [`GridBuilder::build`], the only way to construct a `Grid`.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: u32,
    cols: u32,
    obstacles:  FxHashSet<Cell>,
    pickups:    FxHashSet<Cell>,
    deliveries: FxHashSet<Cell>,
}

impl Grid {
    /// Start building a grid of the given dimensions.
    pub fn builder(rows: u32, cols: u32) -> GridBuilder {
        GridBuilder::new(rows, cols)
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells (`rows * cols`).
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    // ── Pure queries ──────────────────────────────────────────────────────

    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    #[inline]
    pub fn is_obstacle(&self, cell: Cell) -> bool {
        self.obstacles.contains(&cell)
    }

    #[inline]
    pub fn is_pickup_station(&self, cell: Cell) -> bool {
        self.pickups.contains(&cell)
    }

    #[inline]
    pub fn is_delivery_station(&self, cell: Cell) -> bool {
        self.deliveries.contains(&cell)
    }

    /// Iterator over all obstacle cells (arbitrary order).
    pub fn obstacles(&self) -> impl Iterator<Item = Cell> + '_ {
        self.obstacles.iter().copied()
    }
}

// ── GridBuilder ──────────────────────────────────────────────────────────────

/// Accumulates map cells and validates them on [`build`][Self::build].
///
/// Duplicate insertions within the *same* category are tolerated (the sets
/// deduplicate); a cell appearing in two different categories is a
/// [`GridError::CellConflict`].
pub struct GridBuilder {
    rows: u32,
    cols: u32,
    obstacles:  Vec<Cell>,
    pickups:    Vec<Cell>,
    deliveries: Vec<Cell>,
}

impl GridBuilder {
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            obstacles:  Vec::new(),
            pickups:    Vec::new(),
            deliveries: Vec::new(),
        }
    }

    pub fn obstacle(mut self, cell: Cell) -> Self {
        self.obstacles.push(cell);
        self
    }

    pub fn obstacles(mut self, cells: impl IntoIterator<Item = Cell>) -> Self {
        self.obstacles.extend(cells);
        self
    }

    pub fn pickup_station(mut self, cell: Cell) -> Self {
        self.pickups.push(cell);
        self
    }

    pub fn pickup_stations(mut self, cells: impl IntoIterator<Item = Cell>) -> Self {
        self.pickups.extend(cells);
        self
    }

    pub fn delivery_station(mut self, cell: Cell) -> Self {
        self.deliveries.push(cell);
        self
    }

    pub fn delivery_stations(mut self, cells: impl IntoIterator<Item = Cell>) -> Self {
        self.deliveries.extend(cells);
        self
    }

    /// Validate all accumulated cells and produce the immutable [`Grid`].
    pub fn build(self) -> GridResult<Grid> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GridError::EmptyGrid { rows: self.rows, cols: self.cols });
        }

        let in_bounds = |cell: Cell| cell.row < self.rows && cell.col < self.cols;
        for &cell in self.obstacles.iter().chain(&self.pickups).chain(&self.deliveries) {
            if !in_bounds(cell) {
                return Err(GridError::OutOfBounds { cell, rows: self.rows, cols: self.cols });
            }
        }

        let obstacles:  FxHashSet<Cell> = self.obstacles.into_iter().collect();
        let pickups:    FxHashSet<Cell> = self.pickups.into_iter().collect();
        let deliveries: FxHashSet<Cell> = self.deliveries.into_iter().collect();

        // Pairwise disjointness across the three categories.
        for &cell in &pickups {
            if obstacles.contains(&cell) || deliveries.contains(&cell) {
                return Err(GridError::CellConflict(cell));
            }
        }
        for &cell in &deliveries {
            if obstacles.contains(&cell) {
                return Err(GridError::CellConflict(cell));
            }
        }

        Ok(Grid {
            rows: self.rows,
            cols: self.cols,
            obstacles,
            pickups,
            deliveries,
        })
    }
}
