//! `hos-sim` — the Hours-of-Service trip planner.
//!
//! # Planning loop
//!
//! ```text
//! [restart first if the cycle cannot fit pre-trip + pickup]
//! pre-trip inspection (1 h ON) → pickup (1 h ON)
//! while trip time remains:
//!   ① Fuel due?  — refuel (0.5 h ON) if it fits, else one corrective action.
//!   ② Allocate   — min(trip left, 11 − driving, 14 − on-duty, 70 − cycle,
//!                      8 − since break, 14 − clock).
//!   ③ Resolve    — allocation ≤ 0 → exactly one corrective action, first
//!                  match wins:
//!                    11 h driving reached  → close day
//!                    14 h on duty reached  → close day
//!                    8 h since break       → 30-min break
//!                    70 h cycle reached    → 34 h restart + new day
//!                    otherwise             → close day
//!   ④ Fueling    — a 1 000-mile multiple strictly inside the segment
//!                  splits it: drive to the pump, mark fuel due, loop.
//!   ⑤ Drive      — log the segment and advance every counter.
//! [daily rest first if dropoff would break the window or cycle]
//! dropoff (1 h ON) → closing rest (8 h + rest of the day)
//! ```
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`state`]     | `SimulationState` — counters threaded through a run       |
//! | [`allocator`] | `allocate`, `Allocation`, `Limit`                         |
//! | [`resolver`]  | `resolve`, `Correction`, `DayCloseReason`                 |
//! | [`fueling`]   | `plan_fuel_stop`, `FuelStop`                              |
//! | [`planner`]   | `TripPlanner` and the loop above                          |
//! | [`builder`]   | `TripPlannerBuilder`                                      |
//! | [`observer`]  | `PlanObserver`, `NoopObserver`, `LoggingObserver`         |
//! | [`request`]   | `TripRequest` — validated input                           |
//! | [`plan`]      | `TripPlan` — output                                       |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `serde`    | `TripPlan` serializes to the response JSON.             |
//! | `parallel` | `TripPlanner::plan_batch` runs on Rayon's thread pool.  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use hos_sim::{TripPlanner, TripRequest};
//!
//! let planner = TripPlanner::new(HosRules::default())?;
//! let plan = planner.plan(&TripRequest::new(1_200.0, 30.0)?)?;
//! println!("{} days", plan.total_days);
//! ```

pub mod allocator;
pub mod builder;
pub mod error;
pub mod fueling;
pub mod observer;
pub mod plan;
pub mod planner;
pub mod request;
pub mod resolver;
pub mod state;


pub use allocator::{Allocation, Limit, allocate};
pub use builder::TripPlannerBuilder;
pub use error::{PlanError, PlanResult};
pub use fueling::{FuelStop, plan_fuel_stop};
pub use observer::{LoggingObserver, NoopObserver, PlanObserver};
pub use plan::TripPlan;
pub use planner::TripPlanner;
pub use request::TripRequest;
pub use resolver::{Correction, DayCloseReason, resolve};
pub use state::SimulationState;

/// Plan one trip under the default rules.
///
/// Shorthand for validating the two raw inputs and calling
/// [`TripPlanner::plan`] on a default planner.
pub fn plan_trip(trip_distance_miles: f64, cycle_used_hours: f64) -> PlanResult<TripPlan> {
    let request = TripRequest::new(trip_distance_miles, cycle_used_hours)?;
    TripPlanner::new(hos_core::HosRules::default())?.plan(&request)
}
