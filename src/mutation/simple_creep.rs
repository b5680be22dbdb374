//! # SimpleCreep Mutation
//!
//! Steps an integer genome up or down by a fixed amount, saturating at the
//! range bounds.

use crate::error::{EvolveError, Result};
use crate::genome::IntegerGenome;
use crate::rng::RandomSource;

use super::MutationStrategy;

/// Creep mutation for integer genomes.
///
/// One bool draw gates the mutation; when it fires, a fair bool draw picks
/// the direction and the genome moves by `step_size`, saturating into
/// `[min_value, max_value]`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimpleCreep<T> {
    probability: f64,
    min_value: T,
    max_value: T,
    step_size: T,
}

impl<T: IntegerGenome> SimpleCreep<T> {
    /// Creates a new `SimpleCreep` mutation.
    ///
    /// # Errors
    ///
    /// Returns [`EvolveError::InvalidParameter`] if the probability is
    /// outside `[0, 1]`, `max_value < min_value`, or the step size is
    /// negative.
    pub fn new(probability: f64, min_value: T, max_value: T, step_size: T) -> Result<Self> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(EvolveError::InvalidParameter(format!(
                "creep probability must be in [0, 1], got {probability}"
            )));
        }
        if max_value < min_value {
            return Err(EvolveError::InvalidParameter(format!(
                "max value ({max_value}) must not be less than min value ({min_value})"
            )));
        }
        if step_size.is_negative() {
            return Err(EvolveError::InvalidParameter(format!(
                "step size must not be negative, got {step_size}"
            )));
        }
        Ok(Self {
            probability,
            min_value,
            max_value,
            step_size,
        })
    }
}

impl<T: IntegerGenome> MutationStrategy<T> for SimpleCreep<T> {
    fn mutate(&self, rng: &mut RandomSource, genome: &mut T) -> Result<()> {
        if rng.next_bool(self.probability) {
            let stepped = if rng.next_bool(0.5) {
                genome.step_up(self.step_size).unwrap_or(self.max_value)
            } else {
                genome.step_down(self.step_size).unwrap_or(self.min_value)
            };
            *genome = stepped.clamp(self.min_value, self.max_value);
        }
        Ok(())
    }
}
