//! # RoundRobinTournament Survivor Selection
//!
//! Survivor selection by pairwise competition: everyone in the combined
//! pool plays everyone else, and the individuals with the most wins carry
//! over to the next generation.

use std::cmp::Ordering;

use crate::error::{EvolveError, Result};
use crate::individual::Individual;
use crate::rng::RandomSource;

use super::SurvivorSelectionStrategy;

/// Round-robin tournament survivor selection.
///
/// The current population (ages incremented) and the offspring pool are
/// combined, and every pair in the pool plays exactly one match: the higher
/// fitness wins, equal fitness is a draw for both. The `N` individuals with
/// the most wins survive; ties on wins break by raw fitness, and remaining
/// ties by pool position (current population before offspring).
///
/// The pairing schedule is a pure function of pool indices, so this strategy
/// consumes no RNG draws; switching a solver between survivor strategies
/// never perturbs the draw sequence of the other operators.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundRobinTournament;

impl RoundRobinTournament {
    /// Creates a new `RoundRobinTournament` selection.
    pub fn new() -> Self {
        Self
    }
}

impl<G> SurvivorSelectionStrategy<G> for RoundRobinTournament
where
    G: Clone,
{
    fn select(
        &self,
        rng: &mut RandomSource,
        population: &mut Vec<Individual<G>>,
        offspring: Vec<Individual<G>>,
    ) -> Result<()> {
        if population.is_empty() {
            return Err(EvolveError::EmptyPopulation);
        }
        let size = population.len();
        if size < 2 {
            return Err(EvolveError::InvalidParameter(
                "round-robin tournament requires a population of at least 2".to_string(),
            ));
        }
        let draws_before = rng.draw_count();

        for individual in population.iter_mut() {
            individual.increment_age();
        }
        let mut pool = std::mem::take(population);
        pool.extend(offspring);

        let mut wins = vec![0u32; pool.len()];
        for i in 0..pool.len() {
            for j in (i + 1)..pool.len() {
                match pool[i].compare_fitness(&pool[j]) {
                    Ordering::Greater => wins[i] += 1,
                    Ordering::Less => wins[j] += 1,
                    Ordering::Equal => {}
                }
            }
        }

        let mut order: Vec<usize> = (0..pool.len()).collect();
        order.sort_by(|&a, &b| {
            wins[b]
                .cmp(&wins[a])
                .then_with(|| pool[b].compare_fitness(&pool[a]))
        });

        population.extend(order.into_iter().take(size).map(|index| pool[index].clone()));

        debug_assert_eq!(
            rng.draw_count(),
            draws_before,
            "RoundRobinTournament must not consume RNG draws"
        );
        Ok(())
    }
}
