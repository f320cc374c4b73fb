//! `agv-output` — simulation output writers for the agv_sim simulator.
//!
//! Two backends are provided:
//!
//! | Backend       | Files created                                          |
//! |---------------|--------------------------------------------------------|
//! | [`CsvWriter`] | `steps.csv`, `order_metrics.csv`, `tick_summaries.csv` |
//! | [`JsonWriter`]| `schedule.json`, `order_metrics.json`, `tick_summaries.json` |
//!
//! Both implement [`OutputWriter`] and are driven by [`SimOutputObserver`],
//! which implements `agv_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use agv_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod history;
pub mod json;
pub mod metrics;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use history::ScheduleDoc;
pub use json::JsonWriter;
pub use metrics::{order_metrics, MetricsSummary};
pub use observer::SimOutputObserver;
pub use row::{OrderMetricsRow, StepRecord, TickSummaryRow};
pub use writer::OutputWriter;
