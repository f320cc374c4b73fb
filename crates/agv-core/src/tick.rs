//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  There is no wall-clock
//! mapping: the warehouse advances in whole ticks and every duration in the
//! system (release times, pickup/delivery stamps, the run budget) is measured
//! in ticks, so all schedule arithmetic is exact and comparisons are O(1).

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
///
/// Stored as `u64` to avoid overflow; at one tick per simulated second a u64
/// lasts far longer than any conceivable run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically constructed by the application crate and passed to
/// `SimBuilder`; everything scenario-shaped (map, fleet, orders) lives in
/// the configuration document instead.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Tick budget: the run stops after this many ticks even if orders are
    /// still undelivered (reported as an incomplete run, not an error).
    pub max_ticks: u64,

    /// Stricter collision mode: when set, each vehicle's intended next cell
    /// is reserved in the occupancy snapshot before later vehicles plan
    /// within the same tick.  Off by default — the plain snapshot-per-tick
    /// behavior permits two vehicles to cross or converge in the same tick,
    /// and that approximation is part of the simulated protocol.
    pub reserve_next_cells: bool,
}

impl SimConfig {
    /// The tick at which the simulation gives up (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.max_ticks)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_ticks:          500,
            reserve_next_cells: false,
        }
    }
}
