use crate::models::Chromosome;

/// A generation container with a fixed capacity.
///
/// The current generation is shared read-only across concurrent reproduction
/// tasks, while the next generation is exclusively owned by the advancer
/// until it is returned, so implementations only need `&self` access to be
/// thread-safe.
pub trait Population: Send + Sync + Sized + 'static {
    /// The individual stored in this container.
    type Individual: Send + 'static;

    /// Number of individuals currently held.
    fn size(&self) -> usize;

    /// Maximum number of individuals this container can ever hold.
    fn capacity(&self) -> usize;

    /// Returns a fresh container for the next generation, pre-seeded with
    /// the elite fraction of this one. The returned container has the same
    /// capacity as `self`. Validating `elitism_rate` is the implementation's
    /// responsibility.
    fn next_generation(&self, elitism_rate: f64) -> Result<Self, PopulationError>;

    /// Inserts an individual, failing if the container is at capacity.
    fn insert(&mut self, individual: Self::Individual) -> Result<(), PopulationError>;
}

#[derive(Debug, thiserror::Error)]
#[cfg_attr(test, derive(PartialEq))]
pub enum PopulationError {
    #[error("population capacity must be positive, got {0}")]
    InvalidCapacity(usize),

    #[error("elitism rate must be between 0.0 and 1.0, got {0}")]
    ElitismRateOutOfRange(f64),

    #[error("population already holds {capacity} chromosomes, cannot insert another")]
    CapacityExceeded { capacity: usize },
}

/// A `Vec`-backed population with elitism-seeded succession.
///
/// `next_generation` sorts the current chromosomes by fitness and carries the
/// top `size - ceil((1 - elitism_rate) * size)` of them unchanged into a new
/// container of identical capacity. With `elitism_rate = 0.0` the next
/// generation starts empty; with `1.0` every chromosome survives.
#[derive(Debug, Clone)]
pub struct ListPopulation<C: Chromosome> {
    chromosomes: Vec<C>,
    capacity: usize,
}

impl<C: Chromosome> ListPopulation<C> {
    /// Creates an empty population with the given capacity.
    pub fn new(capacity: usize) -> Result<Self, PopulationError> {
        if capacity == 0 {
            return Err(PopulationError::InvalidCapacity(capacity));
        }

        Ok(Self {
            chromosomes: Vec::with_capacity(capacity),
            capacity,
        })
    }

    /// Creates a population seeded with the given chromosomes.
    pub fn from_chromosomes(
        chromosomes: Vec<C>,
        capacity: usize,
    ) -> Result<Self, PopulationError> {
        if capacity == 0 {
            return Err(PopulationError::InvalidCapacity(capacity));
        }
        if chromosomes.len() > capacity {
            return Err(PopulationError::CapacityExceeded { capacity });
        }

        Ok(Self {
            chromosomes,
            capacity,
        })
    }

    /// Returns the chromosomes in insertion order.
    pub fn chromosomes(&self) -> &[C] {
        &self.chromosomes
    }

    /// Returns the fittest chromosome, if any.
    pub fn best(&self) -> Option<&C> {
        self.chromosomes
            .iter()
            .max_by(|a, b| a.fitness().total_cmp(&b.fitness()))
    }
}

impl<C: Chromosome> Population for ListPopulation<C> {
    type Individual = C;

    fn size(&self) -> usize {
        self.chromosomes.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn next_generation(&self, elitism_rate: f64) -> Result<Self, PopulationError> {
        if !(0.0..=1.0).contains(&elitism_rate) {
            return Err(PopulationError::ElitismRateOutOfRange(elitism_rate));
        }

        let mut ranked = self.chromosomes.clone();
        ranked.sort_by(|a, b| a.fitness().total_cmp(&b.fitness()));

        // Ascending sort, so the elites are the tail above this bound.
        let bound = ((1.0 - elitism_rate) * ranked.len() as f64).ceil() as usize;

        Ok(Self {
            chromosomes: ranked.split_off(bound),
            capacity: self.capacity,
        })
    }

    fn insert(&mut self, individual: C) -> Result<(), PopulationError> {
        if self.chromosomes.len() >= self.capacity {
            return Err(PopulationError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        self.chromosomes.push(individual);
        Ok(())
    }
}
