//! # Recombination Strategies
//!
//! Recombination combines the genetic material of several parent genomes
//! into the same number of child genomes. The [`RecombinationStrategy`]
//! trait is the second capability contract of the engine, alongside
//! [`MutationStrategy`](crate::mutation::MutationStrategy).
//!
//! Every strategy is bound by the arity law: `k` parents produce exactly `k`
//! children. The solver verifies this after every call.

pub mod arithmetic;
pub mod one_point;

pub use arithmetic::{SimpleArithmetic, SingleArithmetic};
pub use one_point::OnePoint;

use std::fmt::Debug;

use crate::error::{EvolveError, Result};
use crate::rng::RandomSource;

/// Trait for recombination strategies.
///
/// A recombination strategy receives the raw parent genomes, never their
/// fitness or age metadata, and returns freshly created child genomes. The
/// solver wraps each child as a new individual with fitness unset and age 0.
///
/// All randomness must come from the shared [`RandomSource`].
pub trait RecombinationStrategy<G>: Debug + Send + Sync {
    /// Recombines the parent genomes into the same number of children.
    ///
    /// # Errors
    ///
    /// Returns [`EvolveError::EmptyPopulation`] when called with no parents.
    fn recombine(&self, rng: &mut RandomSource, parents: &[G]) -> Result<Vec<G>>;
}

/// Adapts a plain function to the [`RecombinationStrategy`] contract.
///
/// The capability adapter for foreign genome types: the function receives
/// the shared [`RandomSource`] and the parent genomes and returns the
/// children. The adapter enforces the arity law on the function's output.
///
/// # Examples
///
/// ```rust
/// use evoalg::recombination::{FnRecombination, RecombinationStrategy};
/// use evoalg::rng::RandomSource;
///
/// // Midpoint crossover on scalar floats.
/// let midpoint = FnRecombination::new(|_rng: &mut RandomSource, parents: &[f64]| {
///     let mean = parents.iter().sum::<f64>() / parents.len() as f64;
///     parents.iter().map(|p| (p + mean) / 2.0).collect()
/// });
///
/// let mut rng = RandomSource::from_seed(0);
/// let children = midpoint.recombine(&mut rng, &[0.0, 4.0]).unwrap();
/// assert_eq!(children, vec![1.0, 3.0]);
/// ```
pub struct FnRecombination<F> {
    function: F,
}

impl<F> FnRecombination<F> {
    /// Wraps a recombination function.
    pub fn new(function: F) -> Self {
        Self { function }
    }
}

impl<F> Debug for FnRecombination<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnRecombination").finish_non_exhaustive()
    }
}

impl<G, F> RecombinationStrategy<G> for FnRecombination<F>
where
    G: Send + Sync,
    F: Fn(&mut RandomSource, &[G]) -> Vec<G> + Send + Sync,
{
    fn recombine(&self, rng: &mut RandomSource, parents: &[G]) -> Result<Vec<G>> {
        if parents.is_empty() {
            return Err(EvolveError::EmptyPopulation);
        }
        let children = (self.function)(rng, parents);
        if children.len() != parents.len() {
            return Err(EvolveError::SizeMismatch(format!(
                "recombination function produced {} children from {} parents",
                children.len(),
                parents.len()
            )));
        }
        Ok(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_recombination_enforces_arity() {
        let drop_one = FnRecombination::new(|_rng: &mut RandomSource, parents: &[i32]| {
            parents[1..].to_vec()
        });

        let mut rng = RandomSource::from_seed(0);
        let result = drop_one.recombine(&mut rng, &[1, 2, 3]);
        assert!(matches!(result, Err(EvolveError::SizeMismatch(_))));
    }

    #[test]
    fn test_fn_recombination_rejects_empty_parents() {
        let identity =
            FnRecombination::new(|_rng: &mut RandomSource, parents: &[i32]| parents.to_vec());

        let mut rng = RandomSource::from_seed(0);
        let result = identity.recombine(&mut rng, &[]);
        assert!(matches!(result, Err(EvolveError::EmptyPopulation)));
    }
}
