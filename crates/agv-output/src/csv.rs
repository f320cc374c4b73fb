//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `steps.csv`
//! - `order_metrics.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OrderMetricsRow, OutputResult, ScheduleDoc, TickSummaryRow};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    steps:     Writer<File>,
    metrics:   Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut steps = Writer::from_path(dir.join("steps.csv"))?;
        steps.write_record(["vehicle", "x", "y", "t"])?;

        let mut metrics = Writer::from_path(dir.join("order_metrics.csv"))?;
        metrics.write_record([
            "id_code", "quantity",
            "pickup_row", "pickup_col", "delivery_row", "delivery_col",
            "assigned_vehicle",
            "release_tick", "assigned_tick", "pickup_tick", "delivery_tick",
            "required_distance", "performed_distance", "loss",
        ])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "assigned", "moved", "waiting"])?;

        Ok(Self {
            steps,
            metrics,
            summaries,
            finished: false,
        })
    }
}

/// Render an optional numeric field as an empty cell when absent.
fn opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_history(&mut self, doc: &ScheduleDoc) -> OutputResult<()> {
        for (vehicle, steps) in &doc.schedule {
            for step in steps {
                self.steps.write_record(&[
                    vehicle.clone(),
                    step.x.to_string(),
                    step.y.to_string(),
                    step.t.to_string(),
                ])?;
            }
        }
        Ok(())
    }

    fn write_order_metrics(&mut self, rows: &[OrderMetricsRow]) -> OutputResult<()> {
        for row in rows {
            self.metrics.write_record(&[
                row.id_code.to_string(),
                row.quantity.to_string(),
                row.pickup_row.to_string(),
                row.pickup_col.to_string(),
                row.delivery_row.to_string(),
                row.delivery_col.to_string(),
                row.assigned_vehicle.clone().unwrap_or_default(),
                row.release_tick.to_string(),
                opt(row.assigned_tick),
                opt(row.pickup_tick),
                opt(row.delivery_tick),
                row.required_distance.to_string(),
                opt(row.performed_distance),
                opt(row.loss),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.assigned.to_string(),
            row.moved.to_string(),
            row.waiting.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.steps.flush()?;
        self.metrics.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
