//! # Tournament Parent Selection
//!
//! Deterministic k-tournament: sample a handful of candidates, the fittest
//! wins a place in the mating pool.

use crate::error::{EvolveError, Result};
use crate::individual::Individual;
use crate::rng::RandomSource;

use super::ParentSelectionStrategy;

/// How tournament candidates are drawn from the population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TournamentSampling {
    /// Candidates are drawn independently; the same individual can enter a
    /// tournament more than once.
    WithReplacement,
    /// Candidates within one tournament are distinct.
    WithoutReplacement,
}

/// Tournament parent selection.
///
/// For each of the `count` requested parents, `tournament_size` candidates
/// are sampled from the population and the one with the highest fitness
/// wins. A tournament size of 1 degenerates to uniform selection; a size at
/// or above the population size degenerates to always picking the best
/// individual.
///
/// By default tournaments are deterministic. With an acceptance probability
/// below 1 (see [`with_acceptance_probability`](Tournament::with_acceptance_probability))
/// the tournament turns stochastic: candidates are ranked best-first and
/// offered the win in order, each accepted with the configured probability
/// (one bool draw per offer); if no candidate accepts, the worst one wins.
/// Lower probabilities soften the selection pressure.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tournament {
    tournament_size: usize,
    sampling: TournamentSampling,
    acceptance_probability: f64,
}

impl Tournament {
    /// Creates a new deterministic `Tournament` selection.
    ///
    /// # Errors
    ///
    /// Returns [`EvolveError::InvalidParameter`] if `tournament_size` is
    /// zero.
    pub fn new(tournament_size: usize, sampling: TournamentSampling) -> Result<Self> {
        if tournament_size == 0 {
            return Err(EvolveError::InvalidParameter(
                "tournament size must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            tournament_size,
            sampling,
            acceptance_probability: 1.0,
        })
    }

    /// Makes the tournament stochastic with the given acceptance
    /// probability. A probability of 1 restores the deterministic behavior.
    ///
    /// # Errors
    ///
    /// Returns [`EvolveError::InvalidParameter`] if the probability is
    /// outside `[0, 1]`.
    pub fn with_acceptance_probability(mut self, acceptance_probability: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&acceptance_probability) {
            return Err(EvolveError::InvalidParameter(format!(
                "acceptance probability must be in [0, 1], got {acceptance_probability}"
            )));
        }
        self.acceptance_probability = acceptance_probability;
        Ok(self)
    }

    /// Indices of one tournament's candidates.
    fn sample_candidates(&self, rng: &mut RandomSource, population_size: usize) -> Vec<usize> {
        let size = self.tournament_size.min(population_size);

        match self.sampling {
            TournamentSampling::WithReplacement => (0..self.tournament_size)
                .map(|_| rng.next_range(0..population_size))
                .collect(),
            TournamentSampling::WithoutReplacement => {
                // Partial Fisher-Yates over the index set.
                let mut indices: Vec<usize> = (0..population_size).collect();
                for i in 0..size {
                    let j = rng.next_range(i..indices.len());
                    indices.swap(i, j);
                }
                indices.truncate(size);
                indices
            }
        }
    }

    /// Index of the tournament winner among `population`.
    fn play_tournament<G>(&self, rng: &mut RandomSource, population: &[Individual<G>]) -> usize {
        let mut candidates = self.sample_candidates(rng, population.len());

        if self.acceptance_probability == 1.0 {
            return candidates
                .into_iter()
                .reduce(|best, challenger| {
                    if population[challenger]
                        .compare_fitness(&population[best])
                        .is_gt()
                    {
                        challenger
                    } else {
                        best
                    }
                })
                .unwrap_or(0);
        }

        // Stochastic: offer the win best-first, one bool draw per offer,
        // stopping at the first acceptance. The worst candidate wins when
        // every draw declines.
        candidates.sort_by(|&a, &b| population[b].compare_fitness(&population[a]));
        let mut winner = *candidates.last().unwrap_or(&0);
        for &candidate in &candidates {
            if rng.next_bool(self.acceptance_probability) {
                winner = candidate;
                break;
            }
        }
        winner
    }
}

impl<G> ParentSelectionStrategy<G> for Tournament
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
            .map(|_| self.play_tournament(rng, population))
            .map(|winner| population[winner].clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluated(fitness: &[f64]) -> Vec<Individual<usize>> {
        fitness
            .iter()
            .enumerate()
            .map(|(genome, &score)| {
                let mut individual = Individual::new(genome);
                individual.set_fitness(score);
                individual
            })
            .collect()
    }

    #[test]
    fn test_selects_requested_count() {
        let population = evaluated(&[0.5, 0.8, 0.3, 0.9, 0.1]);
        let selection = Tournament::new(2, TournamentSampling::WithReplacement).unwrap();
        let mut rng = RandomSource::from_seed(1);

        let parents = selection.select(&mut rng, &population, 7).unwrap();
        assert_eq!(parents.len(), 7);
    }

    #[test]
    fn test_full_size_tournament_always_picks_best() {
        let population = evaluated(&[0.5, 0.8, 0.3, 0.9, 0.1]);
        let selection = Tournament::new(5, TournamentSampling::WithoutReplacement).unwrap();
        let mut rng = RandomSource::from_seed(1);

        let parents = selection.select(&mut rng, &population, 10).unwrap();
        assert!(parents.iter().all(|p| *p.genome() == 3));
    }

    #[test]
    fn test_oversized_tournament_is_clamped() {
        let population = evaluated(&[0.5, 0.8]);
        let selection = Tournament::new(10, TournamentSampling::WithoutReplacement).unwrap();
        let mut rng = RandomSource::from_seed(1);

        let parents = selection.select(&mut rng, &population, 3).unwrap();
        assert!(parents.iter().all(|p| *p.genome() == 1));
    }

    #[test]
    fn test_larger_tournaments_increase_pressure() {
        let population = evaluated(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        let weak = Tournament::new(2, TournamentSampling::WithReplacement).unwrap();
        let strong = Tournament::new(6, TournamentSampling::WithReplacement).unwrap();

        let best_fraction = |selection: &Tournament| {
            let mut rng = RandomSource::from_seed(42);
            let parents = selection.select(&mut rng, &population, 5000).unwrap();
            parents.iter().filter(|p| *p.genome() == 7).count()
        };

        assert!(best_fraction(&strong) > best_fraction(&weak));
    }

    #[test]
    fn test_zero_acceptance_always_picks_the_tournament_worst() {
        let population = evaluated(&[0.5, 0.8, 0.3, 0.9, 0.1]);
        // Full-size tournament: the pool's worst individual always loses
        // every offer and wins by default.
        let selection = Tournament::new(5, TournamentSampling::WithoutReplacement)
            .unwrap()
            .with_acceptance_probability(0.0)
            .unwrap();
        let mut rng = RandomSource::from_seed(17);

        let parents = selection.select(&mut rng, &population, 20).unwrap();
        assert!(parents.iter().all(|p| *p.genome() == 4));
    }

    #[test]
    fn test_full_acceptance_matches_deterministic_tournament() {
        let population = evaluated(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let deterministic = Tournament::new(3, TournamentSampling::WithoutReplacement).unwrap();
        let stochastic = Tournament::new(3, TournamentSampling::WithoutReplacement)
            .unwrap()
            .with_acceptance_probability(1.0)
            .unwrap();

        let run = |selection: &Tournament| {
            let mut rng = RandomSource::from_seed(5);
            let parents = selection.select(&mut rng, &population, 50).unwrap();
            parents.iter().map(|p| *p.genome()).collect::<Vec<_>>()
        };

        assert_eq!(run(&deterministic), run(&stochastic));
    }

    #[test]
    fn test_lower_acceptance_softens_pressure() {
        let population = evaluated(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        let hard = Tournament::new(4, TournamentSampling::WithReplacement).unwrap();
        let soft = Tournament::new(4, TournamentSampling::WithReplacement)
            .unwrap()
            .with_acceptance_probability(0.5)
            .unwrap();

        let best_count = |selection: &Tournament| {
            let mut rng = RandomSource::from_seed(31);
            let parents = selection.select(&mut rng, &population, 5_000).unwrap();
            parents.iter().filter(|p| *p.genome() == 7).count()
        };

        assert!(best_count(&soft) < best_count(&hard));
    }

    #[test]
    fn test_invalid_acceptance_probability_is_rejected() {
        let tournament = Tournament::new(3, TournamentSampling::WithReplacement).unwrap();
        assert!(matches!(
            tournament.clone().with_acceptance_probability(1.5),
            Err(EvolveError::InvalidParameter(_))
        ));
        assert!(matches!(
            tournament.with_acceptance_probability(-0.1),
            Err(EvolveError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_zero_tournament_size_is_rejected() {
        assert!(matches!(
            Tournament::new(0, TournamentSampling::WithReplacement),
            Err(EvolveError::InvalidParameter(_))
        ));
    }
}
