//! # RandomResetting Mutation
//!
//! With a configured probability, discards the current genome value and
//! redraws it uniformly from the allowed range.

use crate::error::{EvolveError, Result};
use crate::genome::IntegerGenome;
use crate::rng::RandomSource;

use super::MutationStrategy;

/// Random-resetting mutation for integer genomes.
///
/// One bool draw gates the mutation; when it fires, one range draw replaces
/// the genome with a uniform value from `[min_value, max_value]`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomResetting<T> {
    probability: f64,
    min_value: T,
    max_value: T,
}

impl<T: IntegerGenome> RandomResetting<T> {
    /// Creates a new `RandomResetting` mutation.
    ///
    /// # Errors
    ///
    /// Returns [`EvolveError::InvalidParameter`] if the probability is
    /// outside `[0, 1]` or `max_value < min_value`.
    pub fn new(probability: f64, min_value: T, max_value: T) -> Result<Self> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(EvolveError::InvalidParameter(format!(
                "reset probability must be in [0, 1], got {probability}"
            )));
        }
        if max_value < min_value {
            return Err(EvolveError::InvalidParameter(format!(
                "max value ({max_value}) must not be less than min value ({min_value})"
            )));
        }
        Ok(Self {
            probability,
            min_value,
            max_value,
        })
    }
}

impl<T: IntegerGenome> MutationStrategy<T> for RandomResetting<T> {
    fn mutate(&self, rng: &mut RandomSource, genome: &mut T) -> Result<()> {
        if rng.next_bool(self.probability) {
            *genome = rng.next_range(self.min_value..=self.max_value);
        }
        Ok(())
    }
}
