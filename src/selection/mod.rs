pub mod random;
pub mod rank;
pub mod roulette;
pub mod selection_strategy;
pub mod sigma;
pub mod stochastic_universal;
pub mod tournament;
pub mod truncation;

pub use random::RandomSelection;
pub use rank::RankSelection;
pub use roulette::RouletteWheelSelection;
pub use selection_strategy::SelectionStrategy;
pub use sigma::SigmaScalingSelection;
pub use stochastic_universal::StochasticUniversalSampling;
pub use tournament::TournamentSelection;
pub use truncation::TruncationSelection;
