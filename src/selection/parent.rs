//! # Parent Selection
//!
//! The trait implemented by every parent selection strategy.

use std::fmt::Debug;

use crate::error::Result;
use crate::individual::Individual;
use crate::rng::RandomSource;

/// Trait for parent selection strategies.
///
/// A parent selection strategy builds the mating pool for one generation by
/// choosing `count` individuals from the evaluated population, with
/// replacement. Strategies hold configuration only; all randomness flows
/// through the shared [`RandomSource`].
pub trait ParentSelectionStrategy<G>: Debug + Send + Sync {
    /// Selects `count` parents from the population.
    ///
    /// Every individual in `population` must already carry a fitness value.
    ///
    /// # Errors
    ///
    /// Returns [`EvolveError::EmptyPopulation`](crate::error::EvolveError::EmptyPopulation)
    /// if the population is empty.
    fn select(
        &self,
        rng: &mut RandomSource,
        population: &[Individual<G>],
        count: usize,
    ) -> Result<Vec<Individual<G>>>;
}
