//! Fluent builder for constructing a [`TripPlanner`].

use hos_core::{HosError, HosRules};

use crate::{PlanResult, TripPlanner};

/// Fluent builder for [`TripPlanner`].
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                                  |
/// |------------------------|------------------------------------------|
/// | `.rules(r)`            | `HosRules::default()` (70 h / 8 day)     |
/// | `.max_iterations(n)`   | `TripPlanner::DEFAULT_MAX_ITERATIONS`    |
///
/// # Example
///
/// ```rust,ignore
/// let planner = TripPlannerBuilder::new()
///     .rules(rules)
///     .build()?;
/// let plan = planner.plan(&TripRequest::new(1_200.0, 0.0)?)?;
/// ```
#[derive(Default)]
pub struct TripPlannerBuilder {
    rules:          Option<HosRules>,
    max_iterations: Option<usize>,
}

impl TripPlannerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply the rule set.  Validated in [`build`][Self::build].
    pub fn rules(mut self, rules: HosRules) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Cap the planning loop.  Exceeding the cap fails the plan with
    /// `PlanError::IterationLimit` instead of spinning forever.
    pub fn max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = Some(n);
        self
    }

    /// Validate inputs and return a ready-to-use [`TripPlanner`].
    pub fn build(self) -> PlanResult<TripPlanner> {
        let mut planner = TripPlanner::new(self.rules.unwrap_or_default())?;
        if let Some(n) = self.max_iterations {
            if n == 0 {
                return Err(HosError::Config("max_iterations must be at least 1".into()).into());
            }
            planner.max_iterations = n;
        }
        Ok(planner)
    }
}
