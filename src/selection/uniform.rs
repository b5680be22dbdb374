//! # Uniform Parent Selection
//!
//! Fitness-blind selection: every individual is equally likely to become a
//! parent. Useful as a baseline and for problems where diversity matters
//! more than pressure.

use crate::error::{EvolveError, Result};
use crate::individual::Individual;
use crate::rng::RandomSource;

use super::ParentSelectionStrategy;

/// Uniform parent selection, with replacement.
///
/// Consumes one index draw per selected parent.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UniformSelector;

impl UniformSelector {
    /// Creates a new `UniformSelector`.
    pub fn new() -> Self {
        Self
    }
}

impl<G> ParentSelectionStrategy<G> for UniformSelector
where
    G: Clone,
{
    fn select(
        &self,
        rng: &mut RandomSource,
        population: &[Individual<G>],
        count: usize,
    ) -> Result<Vec<Individual<G>>> {
        if population.is_empty() {
            return Err(EvolveError::EmptyPopulation);
        }

        Ok((0..count)
            .map(|_| rng.next_range(0..population.len()))
            .map(|index| population[index].clone())
            .collect())
    }
}
