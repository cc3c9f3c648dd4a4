mod advancer;
mod convergence;
mod errors;

pub use advancer::GenerationAdvancer;
pub use convergence::{
    BestFitnessLogger, ConvergenceObserver, FixedGenerationCount, StoppingCondition,
};
pub use errors::{Error, OutOfRangeError, ReproductionError};
