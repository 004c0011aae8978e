use std::sync::{Arc, Mutex};

use genvolve::{
    evolution::{Configuration, EngineBuilder, IterationData, LogLevel},
    fitness::FitnessKind,
    individual::{Crossoverable, Mutatable},
    operators::{Crossover, Mutation, OperatorExt},
    rng::RandomNumberGenerator,
    selection::{RouletteWheelSelection, TournamentSelection},
    termination::{NumberOfIterations, ReferenceIndividual, TerminationExt},
};

const FIRST_LETTER: u8 = b'A';
const LAST_LETTER: u8 = b'Z';

#[derive(Clone, Debug, PartialEq)]
struct Word(Vec<u8>);

impl Word {
    fn new(text: &str) -> Self {
        Word(text.bytes().collect())
    }

    fn random(len: usize, rng: &mut RandomNumberGenerator) -> Self {
        Word(
            (0..len)
                .map(|_| rng.random_range(FIRST_LETTER..=LAST_LETTER))
                .collect(),
        )
    }

    fn as_string(&self) -> String {
        String::from_utf8_lossy(&self.0).into_owned()
    }
}

impl Mutatable for Word {
    /// Drifts one random letter up or down the alphabet, wrapping around.
    fn mutate(&self, rng: &mut RandomNumberGenerator) -> Self {
        let mut letters = self.0.clone();
        if letters.is_empty() {
            return Word(letters);
        }

        let idx = rng.random_range(0..letters.len());
        letters[idx] = match (letters[idx], rng.coin_flip()) {
            (LAST_LETTER, true) => FIRST_LETTER,
            (letter, true) => letter + 1,
            (FIRST_LETTER, false) => LAST_LETTER,
            (letter, false) => letter - 1,
        };
        Word(letters)
    }
}

impl Crossoverable for Word {
    /// Two-point crossover: the letters between two random cut points are swapped.
    fn cross(a: &Self, b: &Self, rng: &mut RandomNumberGenerator) -> (Self, Self) {
        let len = a.0.len().min(b.0.len());
        let mut p1 = rng.random_range(0..=len);
        let mut p2 = rng.random_range(0..=len);
        if p1 > p2 {
            std::mem::swap(&mut p1, &mut p2);
        }

        let mut child_a = a.0.clone();
        let mut child_b = b.0.clone();
        child_a[p1..p2].copy_from_slice(&b.0[p1..p2]);
        child_b[p1..p2].copy_from_slice(&a.0[p1..p2]);
        (Word(child_a), Word(child_b))
    }

    fn genome_len(&self) -> Option<usize> {
        Some(self.0.len())
    }
}

/// Euclidean distance between the letter codes of two words.
fn distance(target: &Word, word: &Word) -> f64 {
    target
        .0
        .iter()
        .zip(&word.0)
        .map(|(t, w)| {
            let diff = *t as f64 - *w as f64;
            diff * diff
        })
        .sum::<f64>()
        .sqrt()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::INFO)
        .try_init();
}

#[test]
fn test_distance() {
    let target = Word::new("HELLO");
    assert_eq!(distance(&target, &target), 0.0);
    assert_eq!(distance(&target, &Word::new("HELLN")), 1.0);
    assert_eq!(distance(&target, &Word::new("IFLLO")), 2f64.sqrt());
}

#[test]
fn test_drift_wraps_around() {
    let mut rng = RandomNumberGenerator::from_seed(1);
    for _ in 0..200 {
        let drifted = Word::new("A").mutate(&mut rng);
        assert!(drifted == Word::new("B") || drifted == Word::new("Z"));

        let drifted = Word::new("Z").mutate(&mut rng);
        assert!(drifted == Word::new("A") || drifted == Word::new("Y"));
    }
}

#[test]
fn test_two_point_crossover_preserves_letters() {
    let mut rng = RandomNumberGenerator::from_seed(3);
    let a = Word::new("AAAAA");
    let b = Word::new("BBBBB");

    for _ in 0..100 {
        let (child_a, child_b) = Word::cross(&a, &b, &mut rng);
        for i in 0..5 {
            let mut pair = [child_a.0[i], child_b.0[i]];
            pair.sort();
            assert_eq!(pair, [b'A', b'B']);
        }
    }
}

/// Evolves a random five letter word into "HELLO" and returns the best
/// fitness of every generation.
fn evolve_hello(seed: u64) -> (Word, Vec<f64>) {
    let target = Word::new("HELLO");
    let len = target.0.len();
    let history = Arc::new(Mutex::new(Vec::new()));
    let recorder = Arc::clone(&history);
    let evaluation_target = target.clone();

    let mut engine = EngineBuilder::new()
        .with_factory(move |rng: &mut RandomNumberGenerator| Word::random(len, rng))
        .with_evaluation(move |word: &Word, _population: &[Word]| distance(&evaluation_target, word))
        .with_fitness_kind(FitnessKind::Inverted)
        .with_selection(TournamentSelection::new(2).unwrap())
        .with_operator(Crossover::new(0.5).unwrap().pipe(Mutation::new(1.0).unwrap()))
        .with_config(
            Configuration::builder()
                .size(50)
                .elite_count(1)
                .evaluation_batch_size(10)
                .log_level(LogLevel::Minimal)
                .seed(seed)
                .build(),
        )
        .with_termination(NumberOfIterations(2000).or(ReferenceIndividual::new(target)))
        .with_observer(move |data: &IterationData<Word>| {
            recorder.lock().unwrap().push(data.best_candidate_fitness());
        })
        .build()
        .unwrap();

    let result = engine.evolve().unwrap();
    let history = history.lock().unwrap().clone();
    (result.individual, history)
}

#[test]
fn test_hello_converges() {
    init_tracing();

    for seed in [1, 2, 3] {
        let (best, history) = evolve_hello(seed);

        assert_eq!(best.as_string(), "HELLO", "seed {}", seed);
        assert_eq!(*history.last().unwrap(), 0.0);
        assert!(history.len() < 2001, "seed {} used the whole budget", seed);
        assert!(
            history.windows(2).all(|pair| pair[1] <= pair[0]),
            "best fitness regressed for seed {}",
            seed
        );
    }
}

#[test]
fn test_hello_with_parallel_roulette() {
    init_tracing();

    let target = Word::new("HELLO");
    let evaluation_target = target.clone();

    let mut engine = EngineBuilder::new()
        .with_factory(|rng: &mut RandomNumberGenerator| Word::random(5, rng))
        .with_evaluation(move |word: &Word, _population: &[Word]| distance(&evaluation_target, word))
        .with_fitness_kind(FitnessKind::Inverted)
        .with_selection(RouletteWheelSelection::new())
        .with_operator(
            Crossover::new(0.4)
                .unwrap()
                .pipe(Mutation::new(1.0).unwrap())
                .parallel(10)
                .unwrap(),
        )
        .with_config(Configuration::builder().size(100).elite_count(1).seed(7).build())
        .with_termination(NumberOfIterations(4000).or(ReferenceIndividual::new(target.clone())))
        .build()
        .unwrap();

    let result = engine.evolve().unwrap();

    assert_eq!(result.individual, target);
    assert_eq!(result.fitness, 0.0);
}
