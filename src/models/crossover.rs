use crate::models::{ChromosomePair, Encoded, Gene};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Recombines two parents into a pair of offspring.
///
/// The `rate` forwarded by the engine is the probability that the operator
/// recombines at all; when the coin says no, the operator returns untouched
/// clones of the parents. That decision belongs to the operator, not to the
/// engine.
pub trait CrossoverPolicy<C>: Send + Sync {
    fn crossover(&self, first: &C, second: &C, rate: f64)
        -> Result<ChromosomePair<C>, CrossoverError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CrossoverError {
    #[error("parents must have genomes of equal length, got {first} and {second}")]
    GenomeLengthMismatch { first: usize, second: usize },

    #[error("crossover ratio must be between 0.0 and 1.0, got {0}")]
    RatioOutOfRange(f64),

    /// Escape hatch for user-implemented policies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Swaps genes between the parents with the given per-gene probability,
/// producing two complementary child genomes.
fn crossover_uniform<R: Rng>(
    rng: &mut R,
    first: &[Gene],
    second: &[Gene],
    ratio: f64,
) -> (Vec<Gene>, Vec<Gene>) {
    let mut lhs = Vec::with_capacity(first.len());
    let mut rhs = Vec::with_capacity(second.len());

    for (&a, &b) in first.iter().zip(second.iter()) {
        if rng.random_bool(ratio) {
            lhs.push(b);
            rhs.push(a);
        } else {
            lhs.push(a);
            rhs.push(b);
        }
    }

    (lhs, rhs)
}

/// Cuts both genomes at `point` and swaps the tails.
fn crossover_one_point(first: &[Gene], second: &[Gene], point: usize) -> (Vec<Gene>, Vec<Gene>) {
    let mut lhs = Vec::with_capacity(first.len());
    let mut rhs = Vec::with_capacity(second.len());

    lhs.extend_from_slice(&first[..point]);
    lhs.extend_from_slice(&second[point..]);
    rhs.extend_from_slice(&second[..point]);
    rhs.extend_from_slice(&first[point..]);

    (lhs, rhs)
}

fn check_lengths(first: usize, second: usize) -> Result<(), CrossoverError> {
    if first != second {
        return Err(CrossoverError::GenomeLengthMismatch { first, second });
    }

    Ok(())
}

/// Uniform crossover.
///
/// Each gene position is independently swapped between the parents with
/// probability `ratio`, which mixes genetic material finely and suits
/// problems where genes carry little positional dependency.
///
/// ```rust
/// use evolver::models::UniformCrossover;
///
/// let crossover = UniformCrossover::new(0.5)?;
/// assert!(UniformCrossover::new(1.5).is_err());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniformCrossover {
    ratio: f64,
}

impl UniformCrossover {
    pub fn new(ratio: f64) -> Result<Self, CrossoverError> {
        if !(0.0..=1.0).contains(&ratio) {
            return Err(CrossoverError::RatioOutOfRange(ratio));
        }

        Ok(Self { ratio })
    }
}

impl<C: Encoded> CrossoverPolicy<C> for UniformCrossover {
    #[instrument(level = "debug", skip(self, first, second), fields(ratio = self.ratio, rate = rate, genome_length = first.genome().len()))]
    fn crossover(
        &self,
        first: &C,
        second: &C,
        rate: f64,
    ) -> Result<ChromosomePair<C>, CrossoverError> {
        check_lengths(first.genome().len(), second.genome().len())?;

        let mut rng = rand::rng();
        if !rng.random_bool(rate) {
            return Ok(ChromosomePair::new(first.clone(), second.clone()));
        }

        let (lhs, rhs) = crossover_uniform(&mut rng, first.genome(), second.genome(), self.ratio);
        Ok(ChromosomePair::new(
            first.with_genome(lhs),
            second.with_genome(rhs),
        ))
    }
}

/// Single-point crossover.
///
/// Picks a random cut point in `1..genome_length` and swaps the tails,
/// preserving contiguous gene segments from each parent. Genomes shorter
/// than two genes have no interior cut point, so the parents pass through
/// unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnePointCrossover;

impl<C: Encoded> CrossoverPolicy<C> for OnePointCrossover {
    #[instrument(level = "debug", skip(self, first, second), fields(rate = rate, genome_length = first.genome().len()))]
    fn crossover(
        &self,
        first: &C,
        second: &C,
        rate: f64,
    ) -> Result<ChromosomePair<C>, CrossoverError> {
        check_lengths(first.genome().len(), second.genome().len())?;

        let mut rng = rand::rng();
        if first.genome().len() < 2 || !rng.random_bool(rate) {
            return Ok(ChromosomePair::new(first.clone(), second.clone()));
        }

        let point = rng.random_range(1..first.genome().len());
        let (lhs, rhs) = crossover_one_point(first.genome(), second.genome(), point);
        Ok(ChromosomePair::new(
            first.with_genome(lhs),
            second.with_genome(rhs),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Chromosome;
    use rand::{SeedableRng, rngs::StdRng};

    #[derive(Debug, Clone, PartialEq)]
    struct Bits(Vec<Gene>);

    impl Chromosome for Bits {
        fn fitness(&self) -> f64 {
            self.0.iter().sum::<Gene>() as f64
        }
    }

    impl Encoded for Bits {
        fn genome(&self) -> &[Gene] {
            &self.0
        }

        fn with_genome(&self, genome: Vec<Gene>) -> Self {
            Self(genome)
        }
    }

    #[test]
    fn it_validates_the_uniform_ratio() {
        assert!(matches!(
            UniformCrossover::new(-0.1),
            Err(CrossoverError::RatioOutOfRange(_))
        ));
        assert!(matches!(
            UniformCrossover::new(1.5),
            Err(CrossoverError::RatioOutOfRange(_))
        ));
        assert!(UniformCrossover::new(0.0).is_ok());
        assert!(UniformCrossover::new(1.0).is_ok());
    }

    #[test]
    fn it_produces_complementary_uniform_children() {
        let mut rng = StdRng::seed_from_u64(42);
        let first = vec![1, 2, 3, 4, 5];
        let second = vec![6, 7, 8, 9, 10];

        let (lhs, rhs) = crossover_uniform(&mut rng, &first, &second, 0.5);

        for i in 0..first.len() {
            // Whatever one child took from a parent, the other took the
            // opposite gene.
            assert!(
                (lhs[i] == first[i] && rhs[i] == second[i])
                    || (lhs[i] == second[i] && rhs[i] == first[i])
            );
        }
    }

    #[test]
    fn it_swaps_tails_at_the_cut_point() {
        let first = vec![1, 2, 3, 4, 5];
        let second = vec![6, 7, 8, 9, 10];

        let (lhs, rhs) = crossover_one_point(&first, &second, 2);

        assert_eq!(lhs, vec![1, 2, 8, 9, 10]);
        assert_eq!(rhs, vec![6, 7, 3, 4, 5]);
    }

    #[test]
    fn it_passes_parents_through_at_rate_zero() {
        let crossover = UniformCrossover::new(0.5).unwrap();
        let first = Bits(vec![1, 1, 1]);
        let second = Bits(vec![0, 0, 0]);

        let pair = crossover.crossover(&first, &second, 0.0).unwrap();

        assert_eq!(*pair.first(), first);
        assert_eq!(*pair.second(), second);
    }

    #[test]
    fn it_swaps_all_genes_at_full_ratio() {
        let crossover = UniformCrossover::new(1.0).unwrap();
        let first = Bits(vec![1, 1, 1]);
        let second = Bits(vec![0, 0, 0]);

        let pair = crossover.crossover(&first, &second, 1.0).unwrap();

        assert_eq!(*pair.first(), second);
        assert_eq!(*pair.second(), first);
    }

    #[test]
    fn it_cuts_exactly_once_at_full_rate() {
        let crossover = OnePointCrossover;
        let first = Bits(vec![1, 1, 1, 1, 1]);
        let second = Bits(vec![0, 0, 0, 0, 0]);

        let pair = crossover.crossover(&first, &second, 1.0).unwrap();
        let child = pair.first().genome();

        let transitions = child.windows(2).filter(|w| w[0] != w[1]).count();
        assert_eq!(transitions, 1);
        assert_eq!(child[0], 1);
        assert_eq!(child[child.len() - 1], 0);
    }

    #[test]
    fn it_leaves_short_genomes_untouched() {
        let crossover = OnePointCrossover;
        let first = Bits(vec![1]);
        let second = Bits(vec![0]);

        let pair = crossover.crossover(&first, &second, 1.0).unwrap();

        assert_eq!(*pair.first(), first);
        assert_eq!(*pair.second(), second);
    }

    #[test]
    fn it_rejects_mismatched_genome_lengths() {
        let crossover = UniformCrossover::new(0.5).unwrap();
        let first = Bits(vec![1, 1]);
        let second = Bits(vec![0, 0, 0]);

        assert!(matches!(
            crossover.crossover(&first, &second, 1.0),
            Err(CrossoverError::GenomeLengthMismatch { first: 2, second: 3 })
        ));
    }
}
