use hos_core::HosError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error(transparent)]
    Hos(#[from] HosError),

    #[error("planner did not finish within {limit} iterations")]
    IterationLimit { limit: usize },
}

pub type PlanResult<T> = Result<T, PlanError>;
