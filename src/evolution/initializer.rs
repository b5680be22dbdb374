//! # Population Initializer Contract
//!
//! The external contract that seeds the very first generation.

use crate::error::Result;
use crate::rng::RandomSource;

/// Trait for population initializers.
///
/// Called once per solve, with the shared [`RandomSource`] and the requested
/// population size. The initializer must return exactly `size` genomes; the
/// solver wraps them as individuals with fitness unset and age 0, and fails
/// with [`EvolveError::SizeMismatch`](crate::error::EvolveError::SizeMismatch)
/// if the count is wrong.
///
/// The trait is implemented for any matching closure:
///
/// ```rust
/// use evoalg::error::Result;
/// use evoalg::evolution::PopulationInitializer;
/// use evoalg::rng::RandomSource;
///
/// let initializer = |rng: &mut RandomSource, size: usize| -> Result<Vec<i64>> {
///     Ok((0..size).map(|_| rng.next_range(0..=100)).collect())
/// };
///
/// let mut rng = RandomSource::from_seed(5);
/// assert_eq!(initializer.initialize(&mut rng, 10).unwrap().len(), 10);
/// ```
pub trait PopulationInitializer<G> {
    /// Produces the initial genomes for a population of the given size.
    fn initialize(&self, rng: &mut RandomSource, size: usize) -> Result<Vec<G>>;
}

impl<G, F> PopulationInitializer<G> for F
where
    F: Fn(&mut RandomSource, usize) -> Result<Vec<G>>,
{
    fn initialize(&self, rng: &mut RandomSource, size: usize) -> Result<Vec<G>> {
        self(rng, size)
    }
}
