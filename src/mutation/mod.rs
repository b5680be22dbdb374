//! # Mutation Strategies
//!
//! Mutation introduces random variation into a single genome. The
//! [`MutationStrategy`] trait is one of the two capability contracts that let
//! the engine operate uniformly over any caller-defined genome type; the
//! other is [`RecombinationStrategy`](crate::recombination::RecombinationStrategy).
//!
//! Built-in strategies operate on integer genomes ([`BitFlip`],
//! [`RandomResetting`], [`SimpleCreep`]) and real vectors ([`Gaussian`]).
//! Foreign genome types are integrated either by implementing the trait
//! directly or by wrapping a plain closure in [`FnMutation`].

pub mod bit_flip;
pub mod gaussian;
pub mod random_resetting;
pub mod simple_creep;

pub use bit_flip::BitFlip;
pub use gaussian::Gaussian;
pub use random_resetting::RandomResetting;
pub use simple_creep::SimpleCreep;

use std::fmt::Debug;

use crate::error::Result;
use crate::rng::RandomSource;

/// Trait for mutation strategies.
///
/// A mutation strategy perturbs a genome in place. All randomness must come
/// from the shared [`RandomSource`] passed to each call; a strategy holds
/// configuration only, never RNG state, which keeps it reusable across
/// generations and keeps runs reproducible.
///
/// The strategy sees the raw genome, never the fitness or age metadata; the
/// solver clears the fitness of every mutated individual itself.
pub trait MutationStrategy<G>: Debug + Send + Sync {
    /// Mutates the genome in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the genome cannot be mutated. The built-in
    /// strategies validate their parameters at construction and do not fail
    /// here.
    fn mutate(&self, rng: &mut RandomSource, genome: &mut G) -> Result<()>;
}

/// Adapts a plain function to the [`MutationStrategy`] contract.
///
/// This is the capability adapter for genome types the built-in operators do
/// not cover: the function receives the shared [`RandomSource`] and the raw
/// genome value and returns the mutated genome.
///
/// # Examples
///
/// ```rust
/// use evoalg::mutation::{FnMutation, MutationStrategy};
/// use evoalg::rng::RandomSource;
///
/// // A permutation genome the built-in operators know nothing about.
/// let swap_adjacent = FnMutation::new(|rng: &mut RandomSource, mut perm: Vec<u8>| {
///     let i = rng.next_range(0..perm.len() - 1);
///     perm.swap(i, i + 1);
///     perm
/// });
///
/// let mut rng = RandomSource::from_seed(3);
/// let mut genome = vec![1, 2, 3, 4];
/// swap_adjacent.mutate(&mut rng, &mut genome).unwrap();
/// assert_eq!(genome.len(), 4);
/// ```
pub struct FnMutation<F> {
    function: F,
}

impl<F> FnMutation<F> {
    /// Wraps a mutation function.
    pub fn new(function: F) -> Self {
        Self { function }
    }
}

impl<F> Debug for FnMutation<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnMutation").finish_non_exhaustive()
    }
}

impl<G, F> MutationStrategy<G> for FnMutation<F>
where
    G: Clone + Send + Sync,
    F: Fn(&mut RandomSource, G) -> G + Send + Sync,
{
    fn mutate(&self, rng: &mut RandomSource, genome: &mut G) -> Result<()> {
        *genome = (self.function)(rng, genome.clone());
        Ok(())
    }
}
