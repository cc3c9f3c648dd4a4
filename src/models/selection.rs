//! Parent selection for the generation-advance engine.
//!
//! A selection policy draws a pair of parents from the current generation.
//! Policies are invoked concurrently by the reproduction tasks, so they only
//! get shared access to the population and must be `Send + Sync`.

use crate::models::{Chromosome, ChromosomePair, ListPopulation, Population};
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Draws a pair of parents from the current generation.
pub trait SelectionPolicy<P: Population>: Send + Sync {
    fn select(&self, population: &P) -> Result<ChromosomePair<P::Individual>, SelectionError>;
}

/// Errors that can occur while selecting a parent pair.
#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    /// The population holds no chromosomes to select from.
    #[error("cannot select a parent pair from an empty population")]
    EmptyPopulation,

    /// The population is too small for the configured tournament.
    #[error("tournament needs at least {arity} chromosomes, population holds {size}")]
    UndersizedPopulation { arity: usize, size: usize },

    /// A tournament must compare at least one contestant.
    #[error("tournament arity must be at least 1, got {0}")]
    InvalidArity(usize),

    /// Escape hatch for user-implemented policies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Runs one tournament: draws `arity` distinct contestants and returns the fittest.
fn run_tournament<'a, C: Chromosome, R: rand::Rng>(
    rng: &mut R,
    chromosomes: &'a [C],
    arity: usize,
) -> Option<&'a C> {
    chromosomes
        .choose_multiple(rng, arity)
        .max_by(|a, b| a.fitness().total_cmp(&b.fitness()))
}

/// Tournament selection.
///
/// Each parent is the winner of an independent tournament between `arity`
/// distinct chromosomes drawn uniformly from the population. Larger arities
/// increase selection pressure; arity 2 keeps exploration high. Both parents
/// may turn out to be the same chromosome, which is acceptable for breeding.
///
/// ```rust
/// use evolver::models::TournamentSelection;
///
/// let balanced = TournamentSelection::new(2)?;
/// let exploitative = TournamentSelection::new(5)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub struct TournamentSelection {
    arity: usize,
}

impl TournamentSelection {
    pub fn new(arity: usize) -> Result<Self, SelectionError> {
        if arity == 0 {
            return Err(SelectionError::InvalidArity(arity));
        }

        Ok(Self { arity })
    }

    /// Returns the number of contestants per tournament.
    pub fn arity(&self) -> usize {
        self.arity
    }
}

impl<C: Chromosome> SelectionPolicy<ListPopulation<C>> for TournamentSelection {
    #[instrument(level = "debug", skip(self, population), fields(arity = self.arity, size = population.size()))]
    fn select(
        &self,
        population: &ListPopulation<C>,
    ) -> Result<ChromosomePair<C>, SelectionError> {
        let chromosomes = population.chromosomes();

        if chromosomes.is_empty() {
            return Err(SelectionError::EmptyPopulation);
        }
        if chromosomes.len() < self.arity {
            return Err(SelectionError::UndersizedPopulation {
                arity: self.arity,
                size: chromosomes.len(),
            });
        }

        let mut rng = rand::rng();
        let first = run_tournament(&mut rng, chromosomes, self.arity)
            .ok_or(SelectionError::EmptyPopulation)?;
        let second = run_tournament(&mut rng, chromosomes, self.arity)
            .ok_or(SelectionError::EmptyPopulation)?;

        Ok(ChromosomePair::new(first.clone(), second.clone()))
    }
}
