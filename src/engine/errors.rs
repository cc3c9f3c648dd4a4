use crate::models::{CrossoverError, MutationError, PopulationError, SelectionError};

/// A rate passed to [`GenerationAdvancer::new`](crate::engine::GenerationAdvancer::new)
/// lies outside the closed range `[0.0, 1.0]`.
#[derive(Debug, thiserror::Error)]
#[error("{parameter} must be between 0.0 and 1.0, got {value}")]
pub struct OutOfRangeError {
    pub(crate) parameter: &'static str,
    pub(crate) value: f64,
}

impl OutOfRangeError {
    /// Name of the offending parameter.
    pub fn parameter(&self) -> &'static str {
        self.parameter
    }

    /// The rejected value.
    pub fn value(&self) -> f64 {
        self.value
    }
}

/// First observed cause of a failed reproduction task.
#[derive(Debug, thiserror::Error)]
pub enum ReproductionError {
    #[error("SelectionError: {0}")]
    Selection(#[from] SelectionError),
    #[error("CrossoverError: {0}")]
    Crossover(#[from] CrossoverError),
    #[error("MutationError: {0}")]
    Mutation(#[from] MutationError),
}

/// Failure of a whole generation-advance call.
///
/// Runtime failures are recoverable at the call site: the current population
/// is never mutated, so the caller may retry the advance with the same
/// container.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("PopulationError: {0}")]
    Population(#[from] PopulationError),
    #[error("ReproductionError: {0}")]
    Reproduction(#[from] ReproductionError),
    #[error("reproduction task was cancelled or panicked: {0}")]
    Interrupted(#[from] tokio::task::JoinError),
}
