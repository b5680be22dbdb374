//! # Gaussian Mutation
//!
//! Perturbs each element of a real-vector genome with zero-mean Gaussian
//! noise, clamping the result into the configured range.

use rand_distr::Normal;

use crate::error::{EvolveError, Result};
use crate::rng::RandomSource;

use super::MutationStrategy;

/// Gaussian perturbation mutation for `Vec<f64>` genomes.
///
/// Each element is gated by one bool draw with the configured probability;
/// when the gate fires, one sample from `Normal(0, std_dev)` is added and the
/// element is clamped into `[min_value, max_value]`.
#[derive(Debug, Clone)]
pub struct Gaussian {
    probability: f64,
    min_value: f64,
    max_value: f64,
    distribution: Normal<f64>,
}

impl Gaussian {
    /// Creates a new `Gaussian` mutation.
    ///
    /// # Errors
    ///
    /// Returns [`EvolveError::InvalidParameter`] if the probability is
    /// outside `[0, 1]`, the standard deviation is not a positive finite
    /// number, or the value range is empty or non-finite.
    pub fn new(probability: f64, std_dev: f64, min_value: f64, max_value: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(EvolveError::InvalidParameter(format!(
                "mutation probability must be in [0, 1], got {probability}"
            )));
        }
        if !std_dev.is_finite() || std_dev <= 0.0 {
            return Err(EvolveError::InvalidParameter(format!(
                "standard deviation must be a positive finite number, got {std_dev}"
            )));
        }
        if !min_value.is_finite() || !max_value.is_finite() || max_value < min_value {
            return Err(EvolveError::InvalidParameter(format!(
                "invalid value range [{min_value}, {max_value}]"
            )));
        }

        let distribution = Normal::new(0.0, std_dev).map_err(|e| {
            EvolveError::InvalidParameter(format!("invalid Gaussian parameters: {e}"))
        })?;

        Ok(Self {
            probability,
            min_value,
            max_value,
            distribution,
        })
    }
}

impl MutationStrategy<Vec<f64>> for Gaussian {
    fn mutate(&self, rng: &mut RandomSource, genome: &mut Vec<f64>) -> Result<()> {
        for value in genome.iter_mut() {
            if rng.next_bool(self.probability) {
                let perturbed = *value + rng.sample(&self.distribution);
                *value = perturbed.clamp(self.min_value, self.max_value);
            }
        }
        Ok(())
    }
}
