//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use agv_core::Tick;
use agv_fleet::{Order, Vehicle};
use agv_sim::{RunReport, SimObserver, TickSummary};

use crate::history::ScheduleDoc;
use crate::metrics::order_metrics;
use crate::row::TickSummaryRow;
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that streams tick summaries into any [`OutputWriter`]
/// backend and, at end of run, renders the fleet histories and order metrics.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, _tick: Tick, summary: &TickSummary) {
        let row = TickSummaryRow {
            tick:     summary.tick.0,
            assigned: summary.assigned as u64,
            moved:    summary.moved as u64,
            waiting:  summary.waiting as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_run_end(&mut self, _report: &RunReport, vehicles: &[Vehicle], orders: &[Order]) {
        let doc = ScheduleDoc::from_vehicles(vehicles);
        let result = self.writer.write_history(&doc);
        self.store_err(result);

        let rows = order_metrics(orders, vehicles);
        let result = self.writer.write_order_metrics(&rows);
        self.store_err(result);

        let result = self.writer.finish();
        self.store_err(result);
    }
}
