//! # SolverBuilder
//!
//! Step-by-step construction of a [`Solver`], with every operator role
//! checked for presence at build time.

use std::fmt::Debug;

use crate::error::{EvolveError, Result};
use crate::mutation::MutationStrategy;
use crate::recombination::RecombinationStrategy;
use crate::rng::RandomSource;
use crate::selection::{ParentSelectionStrategy, SurvivorSelectionStrategy};

use super::{FitnessFunction, PopulationInitializer, Solver};

/// Builder for [`Solver`].
///
/// Every operator role, the fitness function, and the initializer must be
/// supplied; [`build`](SolverBuilder::build) fails with
/// [`EvolveError::InvalidParameter`] otherwise. The random source is
/// optional and defaults to entropy-seeded construction.
///
/// # Examples
///
/// ```rust
/// use evoalg::error::Result;
/// use evoalg::evolution::SolverBuilder;
/// use evoalg::mutation::BitFlip;
/// use evoalg::recombination::OnePoint;
/// use evoalg::rng::RandomSource;
/// use evoalg::selection::{LinearRanking, ReplaceWorst};
///
/// # fn main() -> Result<()> {
/// let mut solver = SolverBuilder::new()
///     .with_seed(5)
///     .with_parent_selection(LinearRanking::new(1.5)?)
///     .with_recombination(OnePoint::with_bit_count(7)?)
///     .with_mutation(BitFlip::new(0.05, 7, 0, 100)?)
///     .with_survivor_selection(ReplaceWorst::new(0.2)?)
///     .with_fitness(|genome: &i64| Ok(-((genome - 50).pow(2)) as f64))
///     .with_initializer(|rng: &mut RandomSource, size: usize| {
///         Ok((0..size).map(|_| rng.next_range(0..=100)).collect())
///     })
///     .build()?;
///
/// let best = solver.solve(20, 10)?;
/// assert_eq!(best.len(), 20);
/// # Ok(())
/// # }
/// ```
pub struct SolverBuilder<PSel, Rec, Mut, Surv, Fit, Init> {
    rng: Option<RandomSource>,
    parent_selection: Option<PSel>,
    recombination: Option<Rec>,
    mutation: Option<Mut>,
    survivor_selection: Option<Surv>,
    fitness: Option<Fit>,
    initializer: Option<Init>,
    parallel_threshold: Option<usize>,
}

impl<PSel, Rec, Mut, Surv, Fit, Init> SolverBuilder<PSel, Rec, Mut, Surv, Fit, Init> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self {
            rng: None,
            parent_selection: None,
            recombination: None,
            mutation: None,
            survivor_selection: None,
            fitness: None,
            initializer: None,
            parallel_threshold: None,
        }
    }

    /// Sets the random source.
    pub fn with_rng(mut self, rng: RandomSource) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Sets a seeded random source; shorthand for
    /// `with_rng(RandomSource::from_seed(seed))`.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Some(RandomSource::from_seed(seed));
        self
    }

    /// Sets the parent selection strategy.
    pub fn with_parent_selection(mut self, parent_selection: PSel) -> Self {
        self.parent_selection = Some(parent_selection);
        self
    }

    /// Sets the recombination strategy.
    pub fn with_recombination(mut self, recombination: Rec) -> Self {
        self.recombination = Some(recombination);
        self
    }

    /// Sets the mutation strategy.
    pub fn with_mutation(mut self, mutation: Mut) -> Self {
        self.mutation = Some(mutation);
        self
    }

    /// Sets the survivor selection strategy.
    pub fn with_survivor_selection(mut self, survivor_selection: Surv) -> Self {
        self.survivor_selection = Some(survivor_selection);
        self
    }

    /// Sets the fitness function.
    pub fn with_fitness(mut self, fitness: Fit) -> Self {
        self.fitness = Some(fitness);
        self
    }

    /// Sets the population initializer.
    pub fn with_initializer(mut self, initializer: Init) -> Self {
        self.initializer = Some(initializer);
        self
    }

    /// Sets the parallel evaluation threshold.
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = Some(parallel_threshold);
        self
    }

    /// Builds the solver.
    ///
    /// # Errors
    ///
    /// Returns [`EvolveError::InvalidParameter`] if any operator role, the
    /// fitness function, or the initializer has not been supplied.
    pub fn build<G>(self) -> Result<Solver<G, PSel, Rec, Mut, Surv, Fit, Init>>
    where
        G: Clone + Debug + Send + Sync,
        PSel: ParentSelectionStrategy<G>,
        Rec: RecombinationStrategy<G>,
        Mut: MutationStrategy<G>,
        Surv: SurvivorSelectionStrategy<G>,
        Fit: FitnessFunction<G>,
        Init: PopulationInitializer<G>,
    {
        let parent_selection = self.parent_selection.ok_or_else(|| {
            EvolveError::InvalidParameter("parent selection strategy not specified".to_string())
        })?;
        let recombination = self.recombination.ok_or_else(|| {
            EvolveError::InvalidParameter("recombination strategy not specified".to_string())
        })?;
        let mutation = self.mutation.ok_or_else(|| {
            EvolveError::InvalidParameter("mutation strategy not specified".to_string())
        })?;
        let survivor_selection = self.survivor_selection.ok_or_else(|| {
            EvolveError::InvalidParameter("survivor selection strategy not specified".to_string())
        })?;
        let fitness = self.fitness.ok_or_else(|| {
            EvolveError::InvalidParameter("fitness function not specified".to_string())
        })?;
        let initializer = self.initializer.ok_or_else(|| {
            EvolveError::InvalidParameter("population initializer not specified".to_string())
        })?;

        let mut solver = Solver::new(
            self.rng.unwrap_or_default(),
            parent_selection,
            recombination,
            mutation,
            survivor_selection,
            fitness,
            initializer,
        );
        if let Some(parallel_threshold) = self.parallel_threshold {
            solver = solver.with_parallel_threshold(parallel_threshold);
        }
        Ok(solver)
    }
}

impl<PSel, Rec, Mut, Surv, Fit, Init> Default for SolverBuilder<PSel, Rec, Mut, Surv, Fit, Init> {
    fn default() -> Self {
        Self::new()
    }
}
