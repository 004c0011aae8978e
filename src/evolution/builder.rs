use std::marker::PhantomData;

use crate::{
    error::{GeneticError, Result},
    fitness::FitnessKind,
    individual::{Factory, Individual},
    operators::Operator,
    selection::SelectionStrategy,
    termination::TerminationCondition,
};

use super::{
    engine::{Engine, Observer},
    evaluation::Evaluation,
    iteration::IterationData,
    options::Configuration,
};

/// Assembles an [`Engine`] step by step.
///
/// The factory, evaluation, selection strategy and operator are required. The
/// fitness kind defaults to [`FitnessKind::Natural`] and the configuration to
/// [`Configuration::default`].
///
/// # Examples
///
/// ```
/// use genvolve::evolution::{Configuration, EngineBuilder};
/// use genvolve::fitness::FitnessKind;
/// use genvolve::operators::Identity;
/// use genvolve::rng::RandomNumberGenerator;
/// use genvolve::selection::TruncationSelection;
/// use genvolve::termination::NumberOfIterations;
///
/// let mut engine = EngineBuilder::new()
///     .with_factory(|rng: &mut RandomNumberGenerator| rng.random_range(0..100u32))
///     .with_evaluation(|x: &u32, _population: &[u32]| *x as f64)
///     .with_fitness_kind(FitnessKind::Natural)
///     .with_selection(TruncationSelection::new(0.5).unwrap())
///     .with_operator(Identity)
///     .with_config(Configuration::new(20, 2))
///     .with_termination(NumberOfIterations(5))
///     .build()
///     .unwrap();
///
/// let result = engine.evolve().unwrap();
/// assert_eq!(result.iterations, 5);
/// ```
pub struct EngineBuilder<I, F, E, S, O> {
    factory: Option<F>,
    evaluation: Option<E>,
    fitness_kind: Option<FitnessKind>,
    selection: Option<S>,
    operator: Option<O>,
    config: Option<Configuration>,
    termination: Option<Box<dyn TerminationCondition<I>>>,
    observer: Option<Observer<I>>,
    _marker: PhantomData<fn() -> I>,
}

impl<I, F, E, S, O> EngineBuilder<I, F, E, S, O>
where
    I: Individual,
    F: Factory<I>,
    E: Evaluation<I>,
    S: SelectionStrategy<I>,
    O: Operator<I>,
{
    pub fn new() -> Self {
        Self {
            factory: None,
            evaluation: None,
            fitness_kind: None,
            selection: None,
            operator: None,
            config: None,
            termination: None,
            observer: None,
            _marker: PhantomData,
        }
    }

    pub fn with_factory(mut self, factory: F) -> Self {
        self.factory = Some(factory);
        self
    }

    pub fn with_evaluation(mut self, evaluation: E) -> Self {
        self.evaluation = Some(evaluation);
        self
    }

    pub fn with_fitness_kind(mut self, fitness_kind: FitnessKind) -> Self {
        self.fitness_kind = Some(fitness_kind);
        self
    }

    pub fn with_selection(mut self, selection: S) -> Self {
        self.selection = Some(selection);
        self
    }

    pub fn with_operator(mut self, operator: O) -> Self {
        self.operator = Some(operator);
        self
    }

    pub fn with_config(mut self, config: Configuration) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_termination<T>(mut self, termination: T) -> Self
    where
        T: TerminationCondition<I> + 'static,
    {
        self.termination = Some(Box::new(termination));
        self
    }

    pub fn with_observer<C>(mut self, observer: C) -> Self
    where
        C: FnMut(&IterationData<I>) + Send + 'static,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Builds the engine.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if a required part is missing or
    /// the configuration is invalid.
    pub fn build(self) -> Result<Engine<I, F, E, S, O>> {
        let factory = self
            .factory
            .ok_or_else(|| GeneticError::Configuration("Factory not specified".to_string()))?;

        let evaluation = self
            .evaluation
            .ok_or_else(|| GeneticError::Configuration("Evaluation not specified".to_string()))?;

        let selection = self.selection.ok_or_else(|| {
            GeneticError::Configuration("Selection strategy not specified".to_string())
        })?;

        let operator = self
            .operator
            .ok_or_else(|| GeneticError::Configuration("Operator not specified".to_string()))?;

        let config = self.config.unwrap_or_default();
        config.validate()?;

        let mut engine = Engine::new(
            factory,
            evaluation,
            self.fitness_kind.unwrap_or_default(),
            selection,
            operator,
        );
        engine.set_config(config);
        if let Some(termination) = self.termination {
            engine.set_boxed_termination(termination);
        }
        if let Some(observer) = self.observer {
            engine.set_boxed_observer(observer);
        }

        Ok(engine)
    }
}

impl<I, F, E, S, O> Default for EngineBuilder<I, F, E, S, O>
where
    I: Individual,
    F: Factory<I>,
    E: Evaluation<I>,
    S: SelectionStrategy<I>,
    O: Operator<I>,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operators::Identity;
    use crate::rng::RandomNumberGenerator;
    use crate::selection::RandomSelection;

    type FactoryFn = fn(&mut RandomNumberGenerator) -> u8;
    type EvalFn = fn(&u8, &[u8]) -> f64;

    fn zero(_rng: &mut RandomNumberGenerator) -> u8 {
        0
    }

    fn constant(_x: &u8, _population: &[u8]) -> f64 {
        1.0
    }

    #[test]
    fn test_missing_parts() {
        let missing_factory = EngineBuilder::<u8, FactoryFn, EvalFn, RandomSelection, Identity>::new()
            .with_evaluation(constant)
            .with_selection(RandomSelection)
            .with_operator(Identity)
            .build();
        match missing_factory {
            Err(GeneticError::Configuration(msg)) => assert!(msg.contains("Factory")),
            _ => panic!("Expected Configuration error"),
        }

        let missing_operator = EngineBuilder::<u8, FactoryFn, EvalFn, RandomSelection, Identity>::new()
            .with_factory(zero)
            .with_evaluation(constant)
            .with_selection(RandomSelection)
            .build();
        match missing_operator {
            Err(GeneticError::Configuration(msg)) => assert!(msg.contains("Operator")),
            _ => panic!("Expected Configuration error"),
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = EngineBuilder::<u8, FactoryFn, EvalFn, RandomSelection, Identity>::new()
            .with_factory(zero)
            .with_evaluation(constant)
            .with_selection(RandomSelection)
            .with_operator(Identity)
            .with_config(Configuration::new(0, 0))
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn test_defaults() {
        let engine = EngineBuilder::<u8, FactoryFn, EvalFn, RandomSelection, Identity>::new()
            .with_factory(zero)
            .with_evaluation(constant)
            .with_selection(RandomSelection)
            .with_operator(Identity)
            .build()
            .unwrap();

        assert_eq!(engine.fitness_kind(), FitnessKind::Natural);
        assert_eq!(engine.config(), &Configuration::default());
    }
}
