//! # Fitness Function Contract
//!
//! The external evaluation contract the solver calls into.

use crate::error::Result;

/// Trait for fitness functions.
///
/// A fitness function maps a genome to a score; higher scores are better
/// throughout the engine. It must be a total function over valid genomes
/// and return finite values; the solver rejects NaN and infinity with
/// [`EvolveError::InvalidFitness`](crate::error::EvolveError::InvalidFitness).
///
/// Evaluation may run in parallel across a population, so implementations
/// must be `Send + Sync` and reentrant. An error returned here aborts the
/// in-progress solve and is propagated to the caller unchanged; the engine
/// never retries, since the fitness function's side effects are unknown
/// to it.
///
/// The trait is implemented for any matching closure:
///
/// ```rust
/// use evoalg::error::Result;
/// use evoalg::evolution::FitnessFunction;
///
/// let fitness = |genome: &i64| -> Result<f64> { Ok(-((genome - 50).pow(2)) as f64) };
/// assert_eq!(fitness.evaluate(&50).unwrap(), 0.0);
/// ```
pub trait FitnessFunction<G>: Send + Sync {
    /// Evaluates the genome and returns its score.
    fn evaluate(&self, genome: &G) -> Result<f64>;
}

impl<G, F> FitnessFunction<G> for F
where
    F: Fn(&G) -> Result<f64> + Send + Sync,
{
    fn evaluate(&self, genome: &G) -> Result<f64> {
        self(genome)
    }
}
