//! `hos-output` — trip plan writers.
//!
//! | Feature   | Backend | Files created                                          |
//! |-----------|---------|--------------------------------------------------------|
//! | *(none)*  | CSV     | `logs.csv`, `route_summary.csv`, `daily_totals.csv`    |
//! | *(none)*  | JSON    | any `io::Write` (the planner response document)        |
//! | `sqlite`  | SQLite  | `trip_plan.db`                                         |
//!
//! The tabular backends implement [`OutputWriter`] and can be driven by
//! [`PlanOutputObserver`], which implements `hos_sim::PlanObserver`, or fed
//! a finished plan with [`OutputWriter::write_plan`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use hos_output::{CsvWriter, PlanOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = PlanOutputObserver::new(writer);
//! let plan = planner.plan_with(&request, &mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod json;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use json::JsonWriter;
pub use observer::PlanOutputObserver;
pub use row::{DailyTotalsRow, LogRow, SummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
