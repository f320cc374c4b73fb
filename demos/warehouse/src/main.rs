//! warehouse — reference scenario for the agv_sim simulator.
//!
//! Three AGVs serve six orders on an 8x8 floor with two shelf rows.  The run
//! prints lifecycle events as they happen, then writes the schedule history
//! and per-order metrics to `./output` in both CSV and JSON form.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};

use agv_config::load_scenario_reader;
use agv_core::{Cell, OrderId, SimConfig, Tick, VehicleId};
use agv_grid::AStarPlanner;
use agv_output::{
    order_metrics, CsvWriter, JsonWriter, MetricsSummary, OutputWriter, ScheduleDoc,
    SimOutputObserver,
};
use agv_sim::{SimBuilder, SimObserver, TickSummary};

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR: &str = "output";
const MAX_TICKS:  u64  = 500;

// ── Scenario document ─────────────────────────────────────────────────────────

// 8x8 floor.  Rows 3 and 5 are shelving (passable only at the outer
// columns); pickups sit on the top edge, deliveries on the bottom edge.
const SCENARIO_JSON: &str = r#"{
    "map": {
        "dimensions": [8, 8],
        "pickupStation": [[0, 1], [0, 6]],
        "deliveryStation": [[7, 1], [7, 6]],
        "obstacles": [
            [3, 2], [3, 3], [3, 4], [3, 5],
            [5, 2], [5, 3], [5, 4], [5, 5]
        ]
    },
    "agents": [
        { "name": "agv0", "start": [4, 0] },
        { "name": "agv1", "start": [4, 7] },
        { "name": "agv2", "start": [0, 4] }
    ],
    "order": {
        "orders_": [
            { "id_code": 1, "requested_quantities": 2, "timestep": 0,
              "pickupStation": [0, 1], "deliveryStation": [7, 6] },
            { "id_code": 2, "requested_quantities": 1, "timestep": 0,
              "pickupStation": [0, 6], "deliveryStation": [7, 1] },
            { "id_code": 3, "requested_quantities": 3, "timestep": 2,
              "pickupStation": [0, 1], "deliveryStation": [7, 1] },
            { "id_code": 4, "requested_quantities": 1, "timestep": 5,
              "pickupStation": [0, 6], "deliveryStation": [7, 6] },
            { "id_code": 5, "requested_quantities": 2, "timestep": 8,
              "pickupStation": [0, 1], "deliveryStation": [7, 6] },
            { "id_code": 6, "requested_quantities": 1, "timestep": 12,
              "pickupStation": [0, 6], "deliveryStation": [7, 1] }
        ]
    }
}"#;

// ── Console observer ──────────────────────────────────────────────────────────

/// Prints lifecycle events while forwarding everything to the output
/// observer.
struct ConsoleObserver<W: OutputWriter> {
    inner: SimOutputObserver<W>,
}

impl<W: OutputWriter> SimObserver for ConsoleObserver<W> {
    fn on_order_assigned(&mut self, tick: Tick, order: OrderId, vehicle: VehicleId, bid: f64) {
        println!("{tick}: order {} won by vehicle {} (bid {bid:.2})", order.0, vehicle.0);
        self.inner.on_order_assigned(tick, order, vehicle, bid);
    }

    fn on_order_picked_up(&mut self, tick: Tick, order: OrderId, vehicle: VehicleId) {
        println!("{tick}: order {} picked up by vehicle {}", order.0, vehicle.0);
        self.inner.on_order_picked_up(tick, order, vehicle);
    }

    fn on_order_delivered(&mut self, tick: Tick, order: OrderId, vehicle: VehicleId) {
        println!("{tick}: order {} delivered by vehicle {}", order.0, vehicle.0);
        self.inner.on_order_delivered(tick, order, vehicle);
    }

    fn on_goal_blocked(&mut self, tick: Tick, vehicle: VehicleId, goal: Cell) {
        println!("{tick}: vehicle {} waiting, no path to {goal}", vehicle.0);
        self.inner.on_goal_blocked(tick, vehicle, goal);
    }

    fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
        self.inner.on_tick_end(tick, summary);
    }

    fn on_run_end(
        &mut self,
        report:   &agv_sim::RunReport,
        vehicles: &[agv_fleet::Vehicle],
        orders:   &[agv_fleet::Order],
    ) {
        self.inner.on_run_end(report, vehicles, orders);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== warehouse — agv_sim reference scenario ===");

    let out_dir = Path::new(OUTPUT_DIR);
    fs::create_dir_all(out_dir).context("create output directory")?;

    // ── Load & build ──────────────────────────────────────────────────────
    let scenario = load_scenario_reader(Cursor::new(SCENARIO_JSON))
        .context("load embedded scenario")?;
    println!(
        "{}x{} grid, {} vehicles, {} orders",
        scenario.grid.rows(),
        scenario.grid.cols(),
        scenario.vehicles.len(),
        scenario.orders.len()
    );

    let config = SimConfig { max_ticks: MAX_TICKS, ..SimConfig::default() };
    let mut sim = SimBuilder::new(config, scenario.grid, AStarPlanner)
        .vehicles(scenario.vehicles)
        .orders(scenario.orders)
        .build()
        .context("assemble simulation")?;

    // ── Run ───────────────────────────────────────────────────────────────
    let csv = CsvWriter::new(out_dir).context("open CSV output")?;
    let mut observer = ConsoleObserver { inner: SimOutputObserver::new(csv) };
    let report = sim.run(&mut observer);
    if let Some(e) = observer.inner.take_error() {
        eprintln!("output error: {e}");
    }

    println!();
    if report.is_complete() {
        println!("all {} orders delivered by {}", report.delivered, report.final_tick);
    } else {
        println!(
            "tick budget of {MAX_TICKS} exhausted: {} delivered, {} outstanding",
            report.delivered, report.undelivered
        );
    }

    // ── Per-order metrics ─────────────────────────────────────────────────
    let rows = order_metrics(&sim.orders, &sim.vehicles);
    println!();
    for row in &rows {
        match (row.assigned_vehicle.as_deref(), row.performed_distance, row.loss) {
            (Some(vehicle), Some(performed), Some(loss)) => println!(
                "order {}: {} | required {:.1} performed {} loss {:.2}",
                row.id_code, vehicle, row.required_distance, performed, loss
            ),
            _ => println!("order {}: undelivered", row.id_code),
        }
    }

    if let Some(summary) = MetricsSummary::from_rows(&rows) {
        println!();
        println!(
            "avg waiting {:.2} | avg delivery {:.2} | avg total {:.2}",
            summary.avg_waiting_ticks, summary.avg_delivery_ticks, summary.avg_total_ticks
        );
        println!(
            "avg loss {:.2} | max loss {:.2} | last delivery at T{}",
            summary.avg_loss, summary.max_loss, summary.max_delivery_tick
        );
    }

    // ── JSON documents ────────────────────────────────────────────────────
    let mut json = JsonWriter::new(out_dir);
    json.write_history(&ScheduleDoc::from_vehicles(&sim.vehicles))?;
    json.write_order_metrics(&rows)?;
    json.finish()?;

    println!();
    println!("wrote steps.csv, order_metrics.csv, tick_summaries.csv,");
    println!("      schedule.json, order_metrics.json -> {OUTPUT_DIR}/");
    Ok(())
}
