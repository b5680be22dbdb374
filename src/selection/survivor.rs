//! # Survivor Selection
//!
//! The trait implemented by every survivor selection strategy.

use std::fmt::Debug;

use crate::error::Result;
use crate::individual::Individual;
use crate::rng::RandomSource;

/// Trait for survivor selection strategies.
///
/// A survivor selection strategy merges the current population with the
/// evaluated offspring pool and reduces the result back to the population's
/// original size, in place.
///
/// Implementations must uphold two population invariants:
///
/// - the population leaves the call with exactly as many individuals as it
///   entered with (the solver verifies this), and
/// - every retained pre-existing individual has its age incremented by one,
///   while admitted offspring keep age 0.
pub trait SurvivorSelectionStrategy<G>: Debug + Send + Sync {
    /// Selects the next generation from the population and its offspring.
    ///
    /// # Errors
    ///
    /// Returns [`EvolveError::EmptyPopulation`](crate::error::EvolveError::EmptyPopulation)
    /// if the population is empty.
    fn select(
        &self,
        rng: &mut RandomSource,
        population: &mut Vec<Individual<G>>,
        offspring: Vec<Individual<G>>,
    ) -> Result<()>;
}
