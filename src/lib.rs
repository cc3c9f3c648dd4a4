//! Concurrent generation-advance engine for genetic algorithms.
//!
//! One call to [`GenerationAdvancer::advance_generation`] turns the current
//! population into the next one: elites are carried over unchanged by the
//! population container, and the remaining capacity is filled with offspring
//! pairs produced by concurrent select → crossover → mutate tasks running on
//! the caller's tokio runtime. Selection, crossover, mutation and the
//! population container are pluggable policies; the crate ships
//! tournament selection, uniform and one-point crossover, point mutation and
//! a list-backed elitist population to get started with.
//!
//! ```rust
//! use evolver::engine::{FixedGenerationCount, GenerationAdvancer};
//! use evolver::models::{
//!     Chromosome, Encoded, Gene, ListPopulation, Population, RandomGeneMutation,
//!     TournamentSelection, UniformCrossover,
//! };
//! use rand::Rng;
//! use std::sync::Arc;
//!
//! // Maximize the number of ones in a bit string.
//! #[derive(Debug, Clone)]
//! struct OneMax(Vec<Gene>);
//!
//! impl Chromosome for OneMax {
//!     fn fitness(&self) -> f64 {
//!         self.0.iter().filter(|&&gene| gene == 1).count() as f64
//!     }
//! }
//!
//! impl Encoded for OneMax {
//!     fn genome(&self) -> &[Gene] {
//!         &self.0
//!     }
//!
//!     fn with_genome(&self, genome: Vec<Gene>) -> Self {
//!         Self(genome)
//!     }
//! }
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut rng = rand::rng();
//!     let chromosomes = (0..20)
//!         .map(|_| OneMax((0..16).map(|_| rng.random_range(0..=1)).collect()))
//!         .collect();
//!     let initial = ListPopulation::from_chromosomes(chromosomes, 20)?;
//!
//!     let advancer = GenerationAdvancer::new(
//!         UniformCrossover::new(0.5)?,
//!         0.9,
//!         RandomGeneMutation::new(0, 1)?,
//!         0.05,
//!         TournamentSelection::new(2)?,
//!         0.1,
//!     )?;
//!
//!     let runtime = tokio::runtime::Runtime::new()?;
//!     let mut stop = FixedGenerationCount::new(10);
//!     let evolved =
//!         runtime.block_on(advancer.evolve(Arc::new(initial), &mut stop, runtime.handle()))?;
//!
//!     assert_eq!(evolved.size(), evolved.capacity());
//!     Ok(())
//! }
//! ```

pub mod engine;
pub mod models;

pub use engine::GenerationAdvancer;
