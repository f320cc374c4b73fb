//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OrderMetricsRow, OutputResult, ScheduleDoc, TickSummaryRow};

/// Trait implemented by the CSV and JSON writers.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write the full per-vehicle step history (once, at end of run).
    fn write_history(&mut self, doc: &ScheduleDoc) -> OutputResult<()>;

    /// Write the per-order metrics table (once, at end of run).
    fn write_order_metrics(&mut self, rows: &[OrderMetricsRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
