/// A single position in a genome.
pub type Gene = i64;

/// A candidate solution that can be ranked by fitness.
///
/// The generation-advance engine itself treats individuals as opaque values;
/// fitness ordering is only needed by the collaborators that rank candidates,
/// such as [`ListPopulation`](crate::models::ListPopulation) elitism and
/// [`TournamentSelection`](crate::models::TournamentSelection).
pub trait Chromosome: Clone + Send + Sync + 'static {
    /// Returns the fitness of this chromosome. Higher is better.
    fn fitness(&self) -> f64;
}

/// A chromosome backed by a linear genome of [`Gene`]s.
///
/// The genome-level operators shipped with this crate
/// ([`UniformCrossover`](crate::models::UniformCrossover),
/// [`OnePointCrossover`](crate::models::OnePointCrossover),
/// [`RandomGeneMutation`](crate::models::RandomGeneMutation)) work on any
/// type implementing this trait. `with_genome` builds an offspring of the
/// same species from a freshly recombined genome; implementations decide how
/// fitness is derived from it.
///
/// ```rust
/// use evolver::models::{Chromosome, Encoded, Gene};
///
/// #[derive(Debug, Clone)]
/// struct OneMax(Vec<Gene>);
///
/// impl Chromosome for OneMax {
///     fn fitness(&self) -> f64 {
///         self.0.iter().filter(|&&gene| gene == 1).count() as f64
///     }
/// }
///
/// impl Encoded for OneMax {
///     fn genome(&self) -> &[Gene] {
///         &self.0
///     }
///
///     fn with_genome(&self, genome: Vec<Gene>) -> Self {
///         Self(genome)
///     }
/// }
/// ```
pub trait Encoded: Chromosome {
    /// Returns the genome of this chromosome.
    fn genome(&self) -> &[Gene];

    /// Builds a new chromosome of the same species from the given genome.
    fn with_genome(&self, genome: Vec<Gene>) -> Self;
}

/// An ordered pair of chromosomes.
///
/// This is the unit of work flowing through one reproduction task: produced
/// by selection, recombined by crossover, perturbed by mutation and finally
/// inserted first-then-second into the next generation. Pairs are immutable
/// value objects; producing a new pair never mutates its inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct ChromosomePair<C> {
    first: C,
    second: C,
}

impl<C> ChromosomePair<C> {
    pub fn new(first: C, second: C) -> Self {
        Self { first, second }
    }

    pub fn first(&self) -> &C {
        &self.first
    }

    pub fn second(&self) -> &C {
        &self.second
    }

    /// Consumes the pair, returning its chromosomes in order.
    pub fn into_parts(self) -> (C, C) {
        (self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_preserves_pair_order() {
        let pair = ChromosomePair::new(1, 2);

        assert_eq!(*pair.first(), 1);
        assert_eq!(*pair.second(), 2);
        assert_eq!(pair.into_parts(), (1, 2));
    }
}
