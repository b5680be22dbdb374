//! # Error Types
//!
//! This module defines the error types used throughout the library. Every
//! fallible operation returns the crate-wide [`Result`] alias.
//!
//! Construction-time validation failures ([`EvolveError::InvalidParameter`])
//! are recoverable: the caller can fix the configuration and retry. Errors
//! raised during a solve run ([`EvolveError::FitnessEvaluation`],
//! [`EvolveError::SizeMismatch`]) abort the run; no partial population is
//! returned.
//!
//! ## Examples
//!
//! ```rust
//! use evoalg::error::{EvolveError, Result};
//! use evoalg::mutation::BitFlip;
//!
//! fn build_mutation() -> Result<BitFlip<i64>> {
//!     // Fails fast: flip probability must be in [0, 1].
//!     BitFlip::new(1.5, 10, 0, 100)
//! }
//!
//! assert!(matches!(build_mutation(), Err(EvolveError::InvalidParameter(_))));
//! ```

use thiserror::Error;

/// Represents errors that can occur in the evolutionary algorithm engine.
#[derive(Error, Debug)]
pub enum EvolveError {
    /// Error that occurs when an operator or solver parameter violates its
    /// documented constraint. Raised at construction time, before any
    /// generation runs.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error that occurs when an operation is attempted on an empty
    /// population, or a solve is requested with a population size of zero.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a component returns a collection of the wrong
    /// size: a recombination operator violating the arity law, a survivor
    /// selector changing the population size, or a population initializer
    /// producing the wrong number of genomes.
    #[error("Size mismatch: {0}")]
    SizeMismatch(String),

    /// Error that occurs when the external fitness function fails. This
    /// aborts the in-progress solve entirely and is propagated to the caller
    /// unchanged.
    #[error("Fitness evaluation error: {0}")]
    FitnessEvaluation(String),

    /// Error that occurs when the fitness function returns a value that
    /// cannot be totally ordered (NaN or infinity).
    #[error("Invalid fitness value: {0}")]
    InvalidFitness(String),
}

/// A type alias for `Result<T, EvolveError>`.
pub type Result<T> = std::result::Result<T, EvolveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EvolveError::InvalidParameter("selection pressure out of range".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid parameter: selection pressure out of range"
        );

        let err = EvolveError::EmptyPopulation;
        assert!(err.to_string().contains("empty population"));
    }

    #[test]
    fn test_result_alias() {
        fn fallible(ok: bool) -> Result<u32> {
            if ok {
                Ok(42)
            } else {
                Err(EvolveError::SizeMismatch("expected 2, got 3".to_string()))
            }
        }

        assert_eq!(fallible(true).unwrap(), 42);
        assert!(fallible(false).is_err());
    }
}
