//! # Solver
//!
//! The generational loop that drives a population toward higher fitness.

use std::fmt::Debug;
use std::marker::PhantomData;

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::error::{EvolveError, Result};
use crate::individual::Individual;
use crate::mutation::MutationStrategy;
use crate::recombination::RecombinationStrategy;
use crate::rng::RandomSource;
use crate::selection::{ParentSelectionStrategy, SurvivorSelectionStrategy};

use super::{FitnessFunction, PopulationInitializer};

/// Minimum number of pending evaluations before rayon is used.
const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

/// Orchestrates the generational loop.
///
/// A solver owns the [`RandomSource`], the population, and one instance of
/// each operator role: parent selection, recombination, mutation, and
/// survivor selection, plus the external fitness function and population
/// initializer. Operators hold no per-individual state and are reused
/// across generations.
///
/// Each generation executes, in order: parent selection (mating pool of
/// population size), recombination of parent pairs, mutation of every
/// offspring, offspring evaluation, survivor selection. RNG draws are
/// consumed strictly sequentially through the phases; only fitness
/// evaluation, which never touches the RNG, is parallelized, and its
/// results are merged back by stable index before the next RNG-consuming
/// phase begins.
pub struct Solver<G, PSel, Rec, Mut, Surv, Fit, Init>
where
    G: Clone + Debug + Send + Sync,
    PSel: ParentSelectionStrategy<G>,
    Rec: RecombinationStrategy<G>,
    Mut: MutationStrategy<G>,
    Surv: SurvivorSelectionStrategy<G>,
    Fit: FitnessFunction<G>,
    Init: PopulationInitializer<G>,
{
    rng: RandomSource,
    parent_selection: PSel,
    recombination: Rec,
    mutation: Mut,
    survivor_selection: Surv,
    fitness: Fit,
    initializer: Init,
    parallel_threshold: usize,
    _marker: PhantomData<G>,
}

impl<G, PSel, Rec, Mut, Surv, Fit, Init> Solver<G, PSel, Rec, Mut, Surv, Fit, Init>
where
    G: Clone + Debug + Send + Sync,
    PSel: ParentSelectionStrategy<G>,
    Rec: RecombinationStrategy<G>,
    Mut: MutationStrategy<G>,
    Surv: SurvivorSelectionStrategy<G>,
    Fit: FitnessFunction<G>,
    Init: PopulationInitializer<G>,
{
    /// Creates a new `Solver`.
    ///
    /// Operator parameters are validated by the operators' own constructors,
    /// so every strategy passed here is already known to be well-formed.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        rng: RandomSource,
        parent_selection: PSel,
        recombination: Rec,
        mutation: Mut,
        survivor_selection: Surv,
        fitness: Fit,
        initializer: Init,
    ) -> Self {
        Self {
            rng,
            parent_selection,
            recombination,
            mutation,
            survivor_selection,
            fitness,
            initializer,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            _marker: PhantomData,
        }
    }

    /// Sets the minimum number of pending evaluations before fitness is
    /// computed in parallel.
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    /// Runs the evolutionary search and returns the final population,
    /// sorted descending by fitness.
    ///
    /// With `generations == 0` the initial population is evaluated and
    /// returned as-is, untouched by any operator.
    ///
    /// # Errors
    ///
    /// - [`EvolveError::EmptyPopulation`] if `population_size` is 0.
    /// - [`EvolveError::SizeMismatch`] if the initializer, the recombination
    ///   operator, or the survivor selector violates its size contract.
    /// - Any error from the fitness function, propagated unchanged; the
    ///   whole solve aborts and no partial population is returned.
    pub fn solve(
        &mut self,
        population_size: usize,
        generations: usize,
    ) -> Result<Vec<Individual<G>>> {
        if population_size == 0 {
            return Err(EvolveError::EmptyPopulation);
        }

        let genomes = self.initializer.initialize(&mut self.rng, population_size)?;
        if genomes.len() != population_size {
            return Err(EvolveError::SizeMismatch(format!(
                "population initializer produced {} genomes, expected {population_size}",
                genomes.len()
            )));
        }
        let mut population: Vec<Individual<G>> = genomes.into_iter().map(Individual::new).collect();
        self.evaluate_pending(&mut population)?;

        for generation in 0..generations {
            let parents =
                self.parent_selection
                    .select(&mut self.rng, &population, population_size)?;

            let mut offspring: Vec<Individual<G>> = Vec::with_capacity(parents.len());
            for group in parents.chunks(2) {
                let parent_genomes: Vec<G> =
                    group.iter().map(|parent| parent.genome().clone()).collect();
                let children = self.recombination.recombine(&mut self.rng, &parent_genomes)?;
                if children.len() != parent_genomes.len() {
                    return Err(EvolveError::SizeMismatch(format!(
                        "recombination produced {} children from {} parents",
                        children.len(),
                        parent_genomes.len()
                    )));
                }
                offspring.extend(children.into_iter().map(Individual::new));
            }

            for child in offspring.iter_mut() {
                self.mutation.mutate(&mut self.rng, child.genome_mut())?;
                child.clear_fitness();
            }

            self.evaluate_pending(&mut offspring)?;

            self.survivor_selection
                .select(&mut self.rng, &mut population, offspring)?;
            if population.len() != population_size {
                return Err(EvolveError::SizeMismatch(format!(
                    "survivor selection returned {} individuals, expected {population_size}",
                    population.len()
                )));
            }

            if let Some(best) = population
                .iter()
                .max_by(|a, b| a.compare_fitness(b))
                .and_then(Individual::fitness)
            {
                debug!(generation, best_fitness = best, "generation complete");
            }
        }

        population.sort_by(|a, b| b.compare_fitness(a));
        Ok(population)
    }

    /// Evaluates every individual that does not carry a fitness value yet.
    ///
    /// Runs sequentially below the parallel threshold and via rayon above
    /// it; either way the scores are written back by stable index. The RNG
    /// is never touched here, which a debug assertion enforces.
    fn evaluate_pending(&mut self, individuals: &mut [Individual<G>]) -> Result<()> {
        let draws_before = self.rng.draw_count();

        let pending: Vec<usize> = individuals
            .iter()
            .enumerate()
            .filter(|(_, individual)| individual.fitness().is_none())
            .map(|(index, _)| index)
            .collect();
        if pending.is_empty() {
            return Ok(());
        }
        trace!(count = pending.len(), "evaluating individuals");

        let scores: Vec<f64> = {
            let view: &[Individual<G>] = individuals;
            if pending.len() >= self.parallel_threshold {
                pending
                    .par_iter()
                    .map(|&index| self.fitness.evaluate(view[index].genome()))
                    .collect::<Result<Vec<_>>>()?
            } else {
                let mut scores = Vec::with_capacity(pending.len());
                for &index in &pending {
                    scores.push(self.fitness.evaluate(view[index].genome())?);
                }
                scores
            }
        };

        for (&index, score) in pending.iter().zip(scores) {
            if !score.is_finite() {
                return Err(EvolveError::InvalidFitness(format!(
                    "fitness function returned {score} for individual at index {index}"
                )));
            }
            individuals[index].set_fitness(score);
        }

        debug_assert_eq!(
            self.rng.draw_count(),
            draws_before,
            "fitness evaluation must not consume RNG draws"
        );
        Ok(())
    }
}
