//! JSON output backend.
//!
//! Creates up to three files in the configured output directory:
//! - `schedule.json` — the history document (the shape external renderers
//!   consume)
//! - `order_metrics.json`
//! - `tick_summaries.json` — buffered per tick, written at `finish`

use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::{Path, PathBuf};

use crate::writer::OutputWriter;
use crate::{OrderMetricsRow, OutputResult, ScheduleDoc, TickSummaryRow};

/// Writes simulation output as pretty-printed JSON documents.
pub struct JsonWriter {
    dir:       PathBuf,
    summaries: Vec<TickSummaryRow>,
    finished:  bool,
}

impl JsonWriter {
    /// Target the given (existing) output directory.
    pub fn new(dir: &Path) -> Self {
        Self {
            dir:       dir.to_path_buf(),
            summaries: Vec::new(),
            finished:  false,
        }
    }

    fn write_doc<T: serde::Serialize>(&self, name: &str, value: &T) -> OutputResult<()> {
        let file = File::create(self.dir.join(name))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.flush()?;
        Ok(())
    }
}

impl OutputWriter for JsonWriter {
    fn write_history(&mut self, doc: &ScheduleDoc) -> OutputResult<()> {
        self.write_doc("schedule.json", doc)
    }

    fn write_order_metrics(&mut self, rows: &[OrderMetricsRow]) -> OutputResult<()> {
        self.write_doc("order_metrics.json", &rows)
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        // Buffered: one JSON array beats one file (or one line) per tick.
        self.summaries.push(*row);
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        if self.summaries.is_empty() {
            return Ok(());
        }
        let summaries = std::mem::take(&mut self.summaries);
        self.write_doc("tick_summaries.json", &summaries)
    }
}
