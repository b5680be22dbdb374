//! # evoalg
//!
//! A generic, population-based evolutionary optimization engine.
//!
//! The engine evolves a population of candidate solutions toward higher
//! fitness through a fixed generational loop: parent selection,
//! recombination, mutation, offspring evaluation, and survivor selection.
//! Every operator role is a trait, so built-in strategies and user-supplied
//! ones plug into the same [`evolution::Solver`].
//!
//! Genome representation is entirely caller-defined: the engine is generic
//! over a genome type `G` and never inspects it. The caller supplies a
//! [`evolution::FitnessFunction`] mapping genomes to scores (higher is
//! better) and a [`evolution::PopulationInitializer`] seeding the first
//! generation; both are implemented for plain closures.
//!
//! Runs are bit-exact reproducible: all randomness flows through one
//! solver-owned [`rng::RandomSource`], and for a fixed seed, configuration,
//! and deterministic fitness function, two runs produce identical
//! populations.
//!
//! # Example
//!
//! Maximizing `-(x - 50)^2` over integer genomes in `[0, 100]`:
//!
//! ```rust
//! use evoalg::error::Result;
//! use evoalg::evolution::SolverBuilder;
//! use evoalg::mutation::BitFlip;
//! use evoalg::recombination::OnePoint;
//! use evoalg::rng::RandomSource;
//! use evoalg::selection::{LinearRanking, ReplaceWorst};
//!
//! fn main() -> Result<()> {
//!     let mut solver = SolverBuilder::new()
//!         .with_seed(12345)
//!         .with_parent_selection(LinearRanking::new(1.5)?)
//!         .with_recombination(OnePoint::with_bit_count(7)?)
//!         .with_mutation(BitFlip::new(0.05, 7, 0, 100)?)
//!         .with_survivor_selection(ReplaceWorst::new(0.1)?)
//!         .with_fitness(|genome: &i64| Ok(-((genome - 50).pow(2)) as f64))
//!         .with_initializer(|rng: &mut RandomSource, size: usize| {
//!             Ok((0..size).map(|_| rng.next_range(0..=100)).collect())
//!         })
//!         .build()?;
//!
//!     let population = solver.solve(100, 100)?;
//!     let best = &population[0];
//!     assert!((best.genome() - 50).abs() <= 5);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod evolution;
pub mod genome;
pub mod individual;
pub mod mutation;
pub mod recombination;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use error::{EvolveError, Result};
pub use evolution::{FitnessFunction, PopulationInitializer, Solver, SolverBuilder};
pub use genome::IntegerGenome;
pub use individual::Individual;
pub use rng::RandomSource;
