//! # Selection Strategies
//!
//! Selection happens twice per generation: *parent selection* builds the
//! mating pool the recombination operator consumes, and *survivor selection*
//! merges the current population with the evaluated offspring back into a
//! population of the original fixed size.
//!
//! Parent selection strategies: [`LinearRanking`], [`ExponentialRanking`],
//! [`FitnessProportionate`], [`Tournament`], [`UniformSelector`]. Survivor
//! selection strategies: [`ReplaceWorst`], [`RoundRobinTournament`].

pub mod exponential_ranking;
pub mod fitness_proportionate;
pub mod linear_ranking;
pub mod parent;
pub mod replace_worst;
pub mod round_robin;
pub mod survivor;
pub mod tournament;
pub mod uniform;

pub use exponential_ranking::ExponentialRanking;
pub use fitness_proportionate::FitnessProportionate;
pub use linear_ranking::LinearRanking;
pub use parent::ParentSelectionStrategy;
pub use replace_worst::ReplaceWorst;
pub use round_robin::RoundRobinTournament;
pub use survivor::SurvivorSelectionStrategy;
pub use tournament::{Tournament, TournamentSampling};
pub use uniform::UniformSelector;
