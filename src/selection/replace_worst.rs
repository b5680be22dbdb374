//! # ReplaceWorst Survivor Selection
//!
//! Generational replacement with elitism: the worst slice of the population
//! makes way for the best offspring; everyone else survives unchanged.

use crate::error::{EvolveError, Result};
use crate::individual::Individual;
use crate::rng::RandomSource;

use super::SurvivorSelectionStrategy;

/// Replace-worst survivor selection.
///
/// With population size `N` and replacement fraction `f`, the worst
/// `floor(f * N)` individuals are replaced by the best offspring, ranked by
/// fitness. When the offspring pool is smaller than the replacement count,
/// only as many are replaced as offspring are available.
///
/// Every retained individual's age increments by one; admitted offspring
/// enter at age 0. With `f < 1` the best individual always survives, so the
/// population's best fitness is monotone non-decreasing across generations.
///
/// Consumes no RNG draws.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReplaceWorst {
    replacement_fraction: f64,
}

impl ReplaceWorst {
    /// Creates a new `ReplaceWorst` selection.
    ///
    /// # Errors
    ///
    /// Returns [`EvolveError::InvalidParameter`] if the replacement fraction
    /// is outside `[0, 1]`.
    pub fn new(replacement_fraction: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&replacement_fraction) {
            return Err(EvolveError::InvalidParameter(format!(
                "replacement fraction must be in [0, 1], got {replacement_fraction}"
            )));
        }
        Ok(Self {
            replacement_fraction,
        })
    }
}

impl<G> SurvivorSelectionStrategy<G> for ReplaceWorst {
    fn select(
        &self,
        _rng: &mut RandomSource,
        population: &mut Vec<Individual<G>>,
        offspring: Vec<Individual<G>>,
    ) -> Result<()> {
        if population.is_empty() {
            return Err(EvolveError::EmptyPopulation);
        }

        let size = population.len();
        let replaced = ((self.replacement_fraction * size as f64).floor() as usize)
            .min(offspring.len())
            .min(size);

        // Best first; stable, so equal fitness keeps population order.
        population.sort_by(|a, b| b.compare_fitness(a));
        population.truncate(size - replaced);
        for individual in population.iter_mut() {
            individual.increment_age();
        }

        let mut offspring = offspring;
        offspring.sort_by(|a, b| b.compare_fitness(a));
        population.extend(offspring.into_iter().take(replaced));

        debug_assert_eq!(population.len(), size);
        Ok(())
    }
}
