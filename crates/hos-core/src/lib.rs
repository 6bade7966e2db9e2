//! `hos-core` — foundational types for the Hours-of-Service trip planner.
//!
//! This crate is a dependency of every other `hos-*` crate.  It has no
//! `hos-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`time`]        | `Span` (fixed-point hours), `ClockTime` (`HH:MM`)     |
//! | [`distance`]    | `Miles` (fixed-point miles), distance ↔ time          |
//! | [`duty`]        | `DutyStatus`, `EntryKind`                             |
//! | [`rules`]       | `HosRules` — every limit the planner enforces         |
//! | [`error`]       | `HosError`, `HosResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on all public types; spans as    |
//! |         | fractional hours, clock times as `HH:MM` strings.          |

pub mod distance;
pub mod duty;
pub mod error;
pub mod rules;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use distance::Miles;
pub use duty::{DutyStatus, EntryKind};
pub use error::{HosError, HosResult};
pub use rules::HosRules;
pub use time::{ClockTime, Span};
