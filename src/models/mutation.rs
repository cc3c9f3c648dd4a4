use crate::models::{Encoded, Gene};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Perturbs a single chromosome.
///
/// The `rate` forwarded by the engine is the probability that the operator
/// mutates at all; when the coin says no, the operator returns an untouched
/// clone. That decision belongs to the operator, not to the engine.
pub trait MutationPolicy<C>: Send + Sync {
    fn mutate(&self, original: &C, rate: f64) -> Result<C, MutationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum MutationError {
    #[error("cannot mutate a chromosome with an empty genome")]
    EmptyGenome,

    #[error("gene bounds must satisfy min <= max, got {min} and {max}")]
    InvalidGeneBounds { min: Gene, max: Gene },

    /// Escape hatch for user-implemented policies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Redraws the gene at a random position from `min..=max`.
fn mutate_random_gene<R: Rng>(rng: &mut R, genome: &[Gene], min: Gene, max: Gene) -> Vec<Gene> {
    let mut mutated = genome.to_vec();
    let index = rng.random_range(0..mutated.len());
    mutated[index] = rng.random_range(min..=max);
    mutated
}

/// Point mutation over a uniform gene range.
///
/// With probability `rate` one uniformly chosen gene is replaced by a fresh
/// draw from `min..=max`; otherwise the chromosome passes through unchanged.
/// For binary genomes use bounds `(0, 1)`.
///
/// ```rust
/// use evolver::models::RandomGeneMutation;
///
/// let bitflip = RandomGeneMutation::new(0, 1)?;
/// let wide = RandomGeneMutation::new(-1000, 1000)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomGeneMutation {
    min: Gene,
    max: Gene,
}

impl RandomGeneMutation {
    pub fn new(min: Gene, max: Gene) -> Result<Self, MutationError> {
        if min > max {
            return Err(MutationError::InvalidGeneBounds { min, max });
        }

        Ok(Self { min, max })
    }
}

impl<C: Encoded> MutationPolicy<C> for RandomGeneMutation {
    #[instrument(level = "debug", skip(self, original), fields(rate = rate, genome_length = original.genome().len()))]
    fn mutate(&self, original: &C, rate: f64) -> Result<C, MutationError> {
        if original.genome().is_empty() {
            return Err(MutationError::EmptyGenome);
        }

        let mut rng = rand::rng();
        if !rng.random_bool(rate) {
            return Ok(original.clone());
        }

        let genome = mutate_random_gene(&mut rng, original.genome(), self.min, self.max);
        Ok(original.with_genome(genome))
    }
}
