use std::{
    marker::PhantomData,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use tracing::{debug, info, info_span, trace};

use super::{
    evaluation::{evaluate_population, Evaluation},
    iteration::IterationData,
    options::{Configuration, LogLevel},
};
use crate::{
    error::Result,
    fitness::{sort_evaluated_population, Fitness, FitnessKind, Score},
    individual::{primordial_soup, Factory, Individual},
    operators::Operator,
    rng::RandomNumberGenerator,
    selection::{RandomSelection, SelectionStrategy},
    termination::TerminationCondition,
};

/// Per-generation callback.
pub type Observer<I> = Box<dyn FnMut(&IterationData<I>) + Send>;

/// The outcome of a finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult<I> {
    /// The best individual of the final generation.
    pub individual: I,
    /// Its fitness.
    pub fitness: Fitness,
    /// Number of generations stepped before termination.
    pub iterations: usize,
}

/// Cooperative cancellation for a running [`Engine`].
///
/// Clones share one flag. Once stopped, the engine returns at the next
/// generation boundary; batches that are already running finish first. The
/// flag stays set until [`StopHandle::reset`] is called.
#[derive(Debug, Clone, Default)]
pub struct StopHandle {
    flag: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    pub fn reset(&self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

/// A generational evolution engine.
///
/// Each generation the engine evaluates and sorts the population, reports a
/// snapshot, checks for termination and otherwise steps to the next
/// generation:
///
/// 1. The best `elite_count` individuals are carried over unmodified.
/// 2. Selection picks `size - elite_count` individuals from the whole population.
///    A short selection is topped up with [`RandomSelection`].
/// 3. The operator transforms the selected individuals. Missing offspring are
///    replaced by fresh individuals from the factory; surplus offspring are
///    dropped.
///
/// The population therefore always holds exactly `size` individuals.
pub struct Engine<I, F, E, S, O> {
    factory: F,
    evaluation: E,
    fitness_kind: FitnessKind,
    selection: S,
    operator: O,
    config: Configuration,
    termination: Option<Box<dyn TerminationCondition<I>>>,
    observer: Option<Observer<I>>,
    stop: StopHandle,
    rng: RandomNumberGenerator,
    _marker: PhantomData<fn() -> I>,
}

impl<I, F, E, S, O> Engine<I, F, E, S, O>
where
    I: Individual,
    F: Factory<I>,
    E: Evaluation<I>,
    S: SelectionStrategy<I>,
    O: Operator<I>,
{
    /// Creates an engine with the default [`Configuration`] and no termination
    /// condition.
    ///
    /// # Arguments
    ///
    /// * `factory` - Creates the initial population and backfills short operator output.
    /// * `evaluation` - Scores an individual against its population.
    /// * `fitness_kind` - Whether higher or lower fitness is better.
    /// * `selection` - Chooses the individuals handed to the operator.
    /// * `operator` - Turns the selected individuals into offspring.
    pub fn new(factory: F, evaluation: E, fitness_kind: FitnessKind, selection: S, operator: O) -> Self {
        Self {
            factory,
            evaluation,
            fitness_kind,
            selection,
            operator,
            config: Configuration::default(),
            termination: None,
            observer: None,
            stop: StopHandle::new(),
            rng: RandomNumberGenerator::new(),
            _marker: PhantomData,
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Configuration {
        &mut self.config
    }

    pub fn set_config(&mut self, config: Configuration) {
        self.config = config;
    }

    pub fn fitness_kind(&self) -> FitnessKind {
        self.fitness_kind
    }

    /// Installs the condition checked after every generation.
    ///
    /// Without a condition the engine only stops through its [`StopHandle`].
    pub fn set_termination<T>(&mut self, condition: T)
    where
        T: TerminationCondition<I> + 'static,
    {
        self.set_boxed_termination(Box::new(condition));
    }

    pub(crate) fn set_boxed_termination(&mut self, condition: Box<dyn TerminationCondition<I>>) {
        self.termination = Some(condition);
    }

    pub fn clear_termination(&mut self) {
        self.termination = None;
    }

    /// Installs a callback invoked synchronously with every generation's snapshot.
    pub fn set_observer<C>(&mut self, observer: C)
    where
        C: FnMut(&IterationData<I>) + Send + 'static,
    {
        self.set_boxed_observer(Box::new(observer));
    }

    pub(crate) fn set_boxed_observer(&mut self, observer: Observer<I>) {
        self.observer = Some(observer);
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Returns a handle that stops the engine from another thread.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Runs the evolution until the termination condition holds or the stop
    /// handle is triggered.
    ///
    /// The call blocks the current thread. Generation 0 is the evaluated
    /// initial population; `iterations` in the result counts the generations
    /// stepped after it.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The configuration is invalid
    /// - An evaluation returns NaN
    /// - Selection or the operator fails
    pub fn evolve(&mut self) -> Result<EvolutionResult<I>> {
        self.config.validate()?;

        if let Some(seed) = self.config.get_seed() {
            self.rng = RandomNumberGenerator::from_seed(seed);
        }

        let span = info_span!(
            "evolve",
            size = self.config.get_size(),
            elite_count = self.config.get_elite_count(),
            fitness_kind = ?self.fitness_kind
        );
        let _entered = span.enter();

        info!("seeding initial population");
        let population = primordial_soup(self.config.get_size(), &self.factory, &mut self.rng);
        let mut scores = self.evaluate(population)?;

        let mut iteration = 0;
        loop {
            let data = IterationData::new(iteration, &scores, self.fitness_kind)?;
            self.report(&data, &scores);

            if let Some(observer) = self.observer.as_mut() {
                observer(&data);
            }

            if let Some(reason) = self.stop_reason(&data) {
                info!(
                    iteration,
                    best_fitness = data.best_candidate_fitness(),
                    reason,
                    "evolution terminated"
                );
                let fitness = data.best_candidate_fitness();
                return Ok(EvolutionResult {
                    individual: data.into_best_candidate(),
                    fitness,
                    iterations: iteration,
                });
            }

            scores = self.step(&scores)?;
            iteration += 1;
        }
    }

    /// Produces the next evaluated generation from `population`.
    ///
    /// `population` must be sorted best-first, as returned by a previous step.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the population is
    /// empty, or selection, the operator or evaluation fails.
    pub fn step(&mut self, population: &[Score<I>]) -> Result<Vec<Score<I>>> {
        self.config.validate()?;

        let size = self.config.get_size();
        let elite_count = self.config.get_elite_count().min(population.len());
        let normal_count = size - elite_count;

        let mut next: Vec<I> = population[..elite_count]
            .iter()
            .map(|score| score.individual.clone())
            .collect();

        let mut selected = self
            .selection
            .select(population, self.fitness_kind, normal_count, &mut self.rng)?;

        if selected.len() < normal_count {
            let shortfall = normal_count - selected.len();
            debug!(shortfall, "selection under-delivered, backfilling with random selection");
            selected.extend(RandomSelection::new().select(
                population,
                self.fitness_kind,
                shortfall,
                &mut self.rng,
            )?);
        }
        selected.truncate(normal_count);

        let mut offspring = self.operator.apply(selected, &mut self.rng)?;

        if offspring.len() < normal_count {
            let shortfall = normal_count - offspring.len();
            debug!(shortfall, "operator under-delivered, backfilling with new individuals");
            offspring.extend(primordial_soup(shortfall, &self.factory, &mut self.rng));
        } else if offspring.len() > normal_count {
            debug!(
                surplus = offspring.len() - normal_count,
                "operator over-delivered, truncating"
            );
            offspring.truncate(normal_count);
        }

        next.extend(offspring);
        self.evaluate(next)
    }

    fn evaluate(&self, population: Vec<I>) -> Result<Vec<Score<I>>> {
        let mut scores =
            evaluate_population(population, self.config.get_evaluation_batch_size(), &self.evaluation)?;
        sort_evaluated_population(&mut scores, self.fitness_kind);
        Ok(scores)
    }

    fn stop_reason(&self, data: &IterationData<I>) -> Option<&'static str> {
        let stopped = self.stop.is_stopped();
        let terminated = self
            .termination
            .as_ref()
            .is_some_and(|condition| condition.should_terminate(data));

        match (stopped, terminated) {
            (true, _) => Some("stop requested"),
            (false, true) => Some("termination condition met"),
            (false, false) => None,
        }
    }

    fn report(&self, data: &IterationData<I>, scores: &[Score<I>]) {
        let log_level = self.config.get_log_level();
        if log_level == LogLevel::None {
            return;
        }

        debug!(
            iteration = data.iteration_num(),
            best_fitness = data.best_candidate_fitness(),
            mean = data.fitness_mean(),
            stdev = data.fitness_stdev(),
            "generation evaluated"
        );

        if log_level == LogLevel::Verbose {
            for (rank, score) in scores.iter().enumerate() {
                trace!(rank, fitness = score.fitness, individual = ?score.individual, "score");
            }
        }
    }
}
