//! # FitnessProportionate Parent Selection
//!
//! Roulette-wheel selection: every individual's chance of becoming a parent
//! is proportional to its fitness, shifted so the scale works for negative
//! scores too.

use crate::error::{EvolveError, Result};
use crate::individual::Individual;
use crate::rng::RandomSource;

use super::ParentSelectionStrategy;

/// Fitness-proportionate parent selection.
///
/// Raw fitness values are shifted by `1 - min_fitness`, so the smallest
/// effective weight is 1 and the wheel is well-defined for negative and
/// all-equal fitness alike. The shifted weights are normalized into a
/// cumulative distribution and each of the `count` parents is picked by one
/// independent uniform draw, one [`RandomSource`] float draw per parent.
///
/// Unlike the rank-based selectors, the pressure here follows the raw
/// fitness scale: a single dominant score can crowd out the rest of the
/// population.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitnessProportionate;

impl FitnessProportionate {
    /// Creates a new `FitnessProportionate` selection.
    pub fn new() -> Self {
        Self
    }
}

impl<G> ParentSelectionStrategy<G> for FitnessProportionate
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

        let mut weights = Vec::with_capacity(population.len());
        let mut minimum = f64::INFINITY;
        for individual in population {
            let fitness = individual.fitness().ok_or_else(|| {
                EvolveError::InvalidFitness(
                    "fitness-proportionate selection requires an evaluated population".to_string(),
                )
            })?;
            minimum = minimum.min(fitness);
            weights.push(fitness);
        }

        // Shift so the smallest weight is 1; keeps the total positive even
        // when every fitness is negative or all are equal.
        let total: f64 = weights
            .iter()
            .map(|fitness| fitness - minimum + 1.0)
            .sum();
        let mut cumulative = 0.0;
        let cumulative: Vec<f64> = weights
            .iter()
            .map(|fitness| {
                cumulative += (fitness - minimum + 1.0) / total;
                cumulative
            })
            .collect();

        let mut selected = Vec::with_capacity(count);
        for _ in 0..count {
            let draw = rng.next_f64_unit();
            let position = cumulative
                .partition_point(|&c| c < draw)
                .min(population.len() - 1);
            selected.push(population[position].clone());
        }
        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluated(values: &[(i64, f64)]) -> Vec<Individual<i64>> {
        values
            .iter()
            .map(|&(genome, fitness)| {
                let mut individual = Individual::new(genome);
                individual.set_fitness(fitness);
                individual
            })
            .collect()
    }

    #[test]
    fn test_selection_tracks_fitness_ratio() {
        // Shifted weights are 1 and 4, so the fitter individual should take
        // roughly four draws in five.
        let population = evaluated(&[(1, 0.0), (2, 3.0)]);
        let selection = FitnessProportionate::new();
        let mut rng = RandomSource::from_seed(11);

        let parents = selection.select(&mut rng, &population, 10_000).unwrap();
        let best_count = parents.iter().filter(|p| *p.genome() == 2).count();
        assert!(
            (7_500..8_500).contains(&best_count),
            "best selected {best_count} times"
        );
    }

    #[test]
    fn test_negative_fitness_is_handled() {
        let population = evaluated(&[(1, -100.0), (2, -1.0), (3, -50.0)]);
        let selection = FitnessProportionate::new();
        let mut rng = RandomSource::from_seed(3);

        let parents = selection.select(&mut rng, &population, 1_000).unwrap();
        assert_eq!(parents.len(), 1_000);
        let best_count = parents.iter().filter(|p| *p.genome() == 2).count();
        let worst_count = parents.iter().filter(|p| *p.genome() == 1).count();
        assert!(best_count > worst_count);
    }

    #[test]
    fn test_equal_fitness_degenerates_to_uniform() {
        let population = evaluated(&[(1, 5.0), (2, 5.0), (3, 5.0), (4, 5.0)]);
        let selection = FitnessProportionate::new();
        let mut rng = RandomSource::from_seed(8);

        let parents = selection.select(&mut rng, &population, 8_000).unwrap();
        for genome in 1..=4 {
            let count = parents.iter().filter(|p| *p.genome() == genome).count();
            assert!(
                (1_700..2_300).contains(&count),
                "genome {genome} selected {count} times"
            );
        }
    }

    #[test]
    fn test_consumes_one_draw_per_parent() {
        let population = evaluated(&[(1, 1.0), (2, 2.0)]);
        let selection = FitnessProportionate::new();
        let mut rng = RandomSource::from_seed(0);

        selection.select(&mut rng, &population, 9).unwrap();
        assert_eq!(rng.draw_count(), 9);
    }

    #[test]
    fn test_unevaluated_population_is_rejected() {
        let population: Vec<Individual<i64>> = vec![Individual::new(1)];
        let selection = FitnessProportionate::new();
        let mut rng = RandomSource::from_seed(0);

        let result = selection.select(&mut rng, &population, 1);
        assert!(matches!(result, Err(EvolveError::InvalidFitness(_))));
    }

    #[test]
    fn test_empty_population_is_rejected() {
        let selection = FitnessProportionate::new();
        let mut rng = RandomSource::from_seed(0);
        let population: Vec<Individual<i64>> = Vec::new();

        let result = selection.select(&mut rng, &population, 1);
        assert!(matches!(result, Err(EvolveError::EmptyPopulation)));
    }
}
