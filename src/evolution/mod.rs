//! # Evolution
//!
//! The generational solver and the external call contracts it consumes: the
//! fitness function and the population initializer.
//!
//! [`Solver::solve`] is the engine's sole public entry point. Each
//! generation runs the phases in a fixed order (parent selection,
//! recombination, mutation, offspring evaluation, survivor selection),
//! consuming RNG draws sequentially from the solver-owned
//! [`RandomSource`](crate::rng::RandomSource), which is what makes runs
//! bit-exact reproducible for a fixed seed.

pub mod builder;
pub mod fitness;
pub mod initializer;
pub mod solver;

pub use builder::SolverBuilder;
pub use fitness::FitnessFunction;
pub use initializer::PopulationInitializer;
pub use solver::Solver;
