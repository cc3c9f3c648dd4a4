use super::convergence::{ConvergenceObserver, StoppingCondition};
use super::errors::{Error, OutOfRangeError, ReproductionError};
use crate::models::{ChromosomePair, CrossoverPolicy, MutationPolicy, Population, SelectionPolicy};
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::instrument;

const CROSSOVER_RATE: &str = "crossover rate";
const MUTATION_RATE: &str = "mutation rate";

/// Advances a population by one generation.
///
/// The advancer composes four externally supplied capabilities: a selection
/// policy, a crossover policy, a mutation policy and the population
/// container itself. Elites are carried over by the container; the remaining
/// slots are filled with offspring pairs produced by concurrent reproduction
/// tasks running select, crossover and mutate against the current
/// generation.
///
/// The advancer is stateless with respect to concurrency: it owns no worker
/// pool and holds no state across calls. Reproduction runs on the blocking
/// pool of the caller-supplied runtime handle, so the caller decides how
/// wide the fan-out may go.
pub struct GenerationAdvancer<P: Population> {
    crossover: Arc<dyn CrossoverPolicy<P::Individual>>,
    crossover_rate: f64,
    mutation: Arc<dyn MutationPolicy<P::Individual>>,
    mutation_rate: f64,
    selection: Arc<dyn SelectionPolicy<P>>,
    elitism_rate: f64,
    observers: Vec<Arc<dyn ConvergenceObserver<P>>>,
}

impl<P: Population> GenerationAdvancer<P> {
    /// Creates a new advancer.
    ///
    /// Fails with [`OutOfRangeError`] if `crossover_rate` or `mutation_rate`
    /// lies outside `[0.0, 1.0]`. The elitism rate is validated by the
    /// population when a generation is advanced, not here.
    pub fn new(
        crossover: impl CrossoverPolicy<P::Individual> + 'static,
        crossover_rate: f64,
        mutation: impl MutationPolicy<P::Individual> + 'static,
        mutation_rate: f64,
        selection: impl SelectionPolicy<P> + 'static,
        elitism_rate: f64,
    ) -> Result<Self, OutOfRangeError> {
        Self::check_validity(CROSSOVER_RATE, crossover_rate)?;
        Self::check_validity(MUTATION_RATE, mutation_rate)?;

        Ok(Self {
            crossover: Arc::new(crossover),
            crossover_rate,
            mutation: Arc::new(mutation),
            mutation_rate,
            selection: Arc::new(selection),
            elitism_rate,
            observers: Vec::new(),
        })
    }

    /// Registers a convergence observer, notified once per generation by
    /// [`evolve`](Self::evolve).
    pub fn with_observer(mut self, observer: impl ConvergenceObserver<P> + 'static) -> Self {
        self.observers.push(Arc::new(observer));
        self
    }

    fn check_validity(parameter: &'static str, value: f64) -> Result<(), OutOfRangeError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(OutOfRangeError { parameter, value });
        }

        Ok(())
    }

    pub fn crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn elitism_rate(&self) -> f64 {
        self.elitism_rate
    }

    /// Produces the next generation from `current`.
    ///
    /// Asks `current` for an elite-seeded successor container, then fills
    /// the remaining capacity with offspring: `(capacity - size) / 2`
    /// reproduction tasks are dispatched to the runtime's blocking pool, and
    /// their pairs are inserted in dispatch order, first chromosome before
    /// second. An odd number of remaining slots leaves the container one
    /// short of capacity.
    ///
    /// Tasks read `current` concurrently and never touch the successor, so
    /// the policies must tolerate concurrent shared access but no locking is
    /// involved. If any task fails, the remaining handles are aborted and
    /// drained, the partially built successor is discarded and the first
    /// observed cause is returned. `current` itself is never mutated, so the
    /// caller may retry the advance with the same container.
    #[instrument(level = "debug", skip(self, current, executor), fields(size = current.size(), capacity = current.capacity()))]
    pub async fn advance_generation(
        &self,
        current: Arc<P>,
        executor: &Handle,
    ) -> Result<P, Error> {
        let mut next = current.next_generation(self.elitism_rate)?;

        let slots_remaining = next.capacity() - next.size();
        let pairs_to_produce = slots_remaining / 2;
        tracing::debug!(slots_remaining, pairs_to_produce, "reproducing next generation");

        let mut handles = Vec::with_capacity(pairs_to_produce);
        for _ in 0..pairs_to_produce {
            let selection = Arc::clone(&self.selection);
            let crossover = Arc::clone(&self.crossover);
            let mutation = Arc::clone(&self.mutation);
            let current = Arc::clone(&current);
            let crossover_rate = self.crossover_rate;
            let mutation_rate = self.mutation_rate;

            handles.push(executor.spawn_blocking(move || {
                let pair = selection.select(&current)?;
                let pair = crossover.crossover(pair.first(), pair.second(), crossover_rate)?;
                let (first, second) = pair.into_parts();

                Ok::<_, ReproductionError>(ChromosomePair::new(
                    mutation.mutate(&first, mutation_rate)?,
                    mutation.mutate(&second, mutation_rate)?,
                ))
            }));
        }

        // Fan-in follows dispatch order, not completion order, so the
        // successor is built in a reproducible sequence. After the first
        // failure the remaining handles are still awaited so no task
        // outcome goes unobserved.
        let mut outcome: Result<(), Error> = Ok(());
        for handle in handles {
            if outcome.is_err() {
                handle.abort();
                let _ = handle.await;
                continue;
            }

            match handle.await {
                Ok(Ok(pair)) => {
                    let (first, second) = pair.into_parts();
                    if let Err(error) = next.insert(first).and_then(|_| next.insert(second)) {
                        outcome = Err(error.into());
                    }
                }
                Ok(Err(cause)) => outcome = Err(cause.into()),
                Err(join_error) => outcome = Err(join_error.into()),
            }
        }

        outcome.map(|_| next)
    }

    /// Evolves `initial` until the stopping condition is satisfied.
    ///
    /// Each completed generation is reported to every registered observer
    /// together with its one-based generation number. Returns the final
    /// population; the shared handle keeps the recovery contract of
    /// [`advance_generation`](Self::advance_generation) intact.
    #[instrument(level = "debug", skip_all, fields(size = initial.size(), capacity = initial.capacity()))]
    pub async fn evolve(
        &self,
        initial: Arc<P>,
        stopping_condition: &mut dyn StoppingCondition<P>,
        executor: &Handle,
    ) -> Result<Arc<P>, Error> {
        let mut current = initial;
        let mut generation: u32 = 0;

        while !stopping_condition.is_satisfied(&current) {
            generation += 1;
            let next = Arc::new(
                self.advance_generation(Arc::clone(&current), executor)
                    .await?,
            );

            for observer in &self.observers {
                observer.on_generation(generation, &next);
            }

            current = next;
        }

        Ok(current)
    }
}
