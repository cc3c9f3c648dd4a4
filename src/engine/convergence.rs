//! Convergence observation and stopping conditions for the evolve loop.
//!
//! Diagnostics are injectable observers rather than process-wide state: the
//! engine notifies every registered observer once per completed generation
//! and otherwise stays silent.

use crate::models::{Chromosome, ListPopulation, Population};

/// Notified after each completed generation of an evolve run.
pub trait ConvergenceObserver<P: Population>: Send + Sync {
    fn on_generation(&self, generation: u32, population: &P);
}

/// Decides when an evolve run is finished.
///
/// Takes `&mut self` so conditions can keep state across generations, such
/// as a generation counter or the best fitness seen so far.
pub trait StoppingCondition<P: Population>: Send {
    fn is_satisfied(&mut self, population: &P) -> bool;
}

/// Stops after a fixed number of generations has been evolved.
#[derive(Debug, Clone)]
pub struct FixedGenerationCount {
    limit: u32,
    evolved: u32,
}

impl FixedGenerationCount {
    pub fn new(limit: u32) -> Self {
        Self { limit, evolved: 0 }
    }

    /// Number of generations evolved so far.
    pub fn evolved(&self) -> u32 {
        self.evolved
    }
}

impl<P: Population> StoppingCondition<P> for FixedGenerationCount {
    fn is_satisfied(&mut self, _population: &P) -> bool {
        if self.evolved < self.limit {
            self.evolved += 1;
            return false;
        }

        true
    }
}

/// Observer that reports the best fitness of each generation through `tracing`.
#[derive(Debug, Clone, Default)]
pub struct BestFitnessLogger;

impl<C: Chromosome> ConvergenceObserver<ListPopulation<C>> for BestFitnessLogger {
    fn on_generation(&self, generation: u32, population: &ListPopulation<C>) {
        match population.best() {
            Some(best) => tracing::info!(
                generation,
                best_fitness = best.fitness(),
                size = population.size(),
                "generation completed"
            ),
            None => tracing::warn!(generation, "generation completed with empty population"),
        }
    }
}
