//! `hos-log` — driver log records and the log book that collects them.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`entry`]    | `LogEntry`, `RouteSummaryEntry`                            |
//! | [`activity`] | `Activity` (what a log entry records), `Milestone` (summary line) |
//! | [`book`]     | `LogBook` — append-only entries + route summary            |
//! | [`totals`]   | `DailyTotals` — hours per duty status per day              |
//!
//! # Recording model
//!
//! ```text
//! entry.start = clock            (before the step)
//! entry.end   = clock + duration (the planner's new clock)
//! ```
//!
//! Summary rows are stamped by the planner, normally with the clock after
//! the activity ends.

pub mod activity;
pub mod book;
pub mod entry;
pub mod totals;


pub use activity::{Activity, Milestone};
pub use book::LogBook;
pub use entry::{LogEntry, RouteSummaryEntry};
pub use totals::DailyTotals;
