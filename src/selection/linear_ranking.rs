//! # LinearRanking Parent Selection
//!
//! Rank-based parent selection with a linear probability ramp. Selecting on
//! rank rather than raw fitness keeps the selection pressure stable even
//! when a few individuals dominate the fitness scale.

use crate::error::{EvolveError, Result};
use crate::individual::Individual;
use crate::rng::RandomSource;

use super::ParentSelectionStrategy;

/// Linear-ranking parent selection.
///
/// Individuals are sorted by fitness ascending and assigned zero-based ranks
/// (rank 0 = worst, rank `N - 1` = best); ties keep their original population
/// order, which makes the ranking deterministic given the RNG draws. The
/// selection probability for rank `i` is
///
/// ```text
/// P(i) = (2 - s) / N  +  2 * i * (s - 1) / (N * (N - 1))
/// ```
///
/// where `s` is the selection pressure. The probabilities sum to 1 for any
/// `N >= 2`, and favor higher ranks more strongly as `s` grows.
///
/// Parents are sampled by `count` independent uniform draws, each resolved
/// against the cumulative distribution, one [`RandomSource`] float draw per
/// selected parent.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearRanking {
    selection_pressure: f64,
}

impl LinearRanking {
    /// Creates a new `LinearRanking` selection.
    ///
    /// # Errors
    ///
    /// Returns [`EvolveError::InvalidParameter`] if the selection pressure
    /// is not in `(1, 2]`. At values approaching 1 selection degenerates to
    /// uniform; 2 is the steepest ramp the linear formula supports.
    pub fn new(selection_pressure: f64) -> Result<Self> {
        if !(selection_pressure > 1.0 && selection_pressure <= 2.0) {
            return Err(EvolveError::InvalidParameter(format!(
                "selection pressure must be in (1, 2], got {selection_pressure}"
            )));
        }
        Ok(Self { selection_pressure })
    }

    /// Cumulative selection probabilities by ascending rank.
    fn cumulative_probabilities(&self, population_size: usize) -> Vec<f64> {
        if population_size == 1 {
            return vec![1.0];
        }

        let n = population_size as f64;
        let s = self.selection_pressure;
        let mut cumulative = 0.0;
        (0..population_size)
            .map(|rank| {
                cumulative += (2.0 - s) / n + 2.0 * rank as f64 * (s - 1.0) / (n * (n - 1.0));
                cumulative
            })
            .collect()
    }
}

impl<G> ParentSelectionStrategy<G> for LinearRanking
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
