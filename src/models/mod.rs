mod chromosome;
mod crossover;
mod mutation;
mod population;
mod selection;

pub use chromosome::{Chromosome, ChromosomePair, Encoded, Gene};
pub use crossover::{CrossoverError, CrossoverPolicy, OnePointCrossover, UniformCrossover};
pub use mutation::{MutationError, MutationPolicy, RandomGeneMutation};
pub use population::{ListPopulation, Population, PopulationError};
pub use selection::{SelectionError, SelectionPolicy, TournamentSelection};
