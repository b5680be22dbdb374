//! # ExponentialRanking Parent Selection
//!
//! Rank-based parent selection with an exponential probability ramp: a
//! steeper alternative to [`LinearRanking`](super::LinearRanking) that
//! needs no pressure parameter.

use crate::error::{EvolveError, Result};
use crate::individual::Individual;
use crate::rng::RandomSource;

use super::ParentSelectionStrategy;

/// Exponential-ranking parent selection.
///
/// Individuals are sorted by fitness ascending and assigned zero-based ranks
/// (rank 0 = worst); ties keep their original population order. Rank `i`
/// carries the weight
///
/// ```text
/// w(i) = 1 - e^(-i)
/// ```
///
/// normalized over the population. Rank 0 always has weight 0, so the worst
/// individual is never selected; the remaining mass concentrates quickly on
/// the top ranks.
///
/// Parents are sampled by `count` independent uniform draws against the
/// cumulative distribution, one [`RandomSource`] float draw per parent.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExponentialRanking;

impl ExponentialRanking {
    /// Creates a new `ExponentialRanking` selection.
    pub fn new() -> Self {
        Self
    }

    /// Cumulative selection probabilities by ascending rank.
    fn cumulative_probabilities(&self, population_size: usize) -> Vec<f64> {
        if population_size == 1 {
            return vec![1.0];
        }

        let weights: Vec<f64> = (0..population_size)
            .map(|rank| 1.0 - f64::exp(-(rank as f64)))
            .collect();
        let total: f64 = weights.iter().sum();

        let mut cumulative = 0.0;
        weights
            .into_iter()
            .map(|weight| {
                cumulative += weight / total;
                cumulative
            })
            .collect()
    }
}

impl<G> ParentSelectionStrategy<G> for ExponentialRanking
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

        // Stable sort: equal fitness keeps original population order.
        let mut order: Vec<usize> = (0..population.len()).collect();
        order.sort_by(|&a, &b| population[a].compare_fitness(&population[b]));

        let cumulative = self.cumulative_probabilities(population.len());

        let mut selected = Vec::with_capacity(count);
        for _ in 0..count {
            let draw = rng.next_f64_unit();
            let position = cumulative
                .partition_point(|&c| c < draw)
                .min(population.len() - 1);
            selected.push(population[order[position]].clone());
        }
        Ok(selected)
    }
}
