//! # BitFlip Mutation
//!
//! Flips individual bits of an integer genome, each with an independent
//! probability, then saturates the result back into the configured value
//! range.

use crate::error::{EvolveError, Result};
use crate::genome::IntegerGenome;
use crate::rng::RandomSource;

use super::MutationStrategy;

/// Bit-flip mutation for integer genomes representable in `bit_count` bits
/// within `[min_value, max_value]`.
///
/// The genome is viewed as an unsigned offset from `min_value`. For each of
/// the `bit_count` bit positions, from least- to most-significant, one bool
/// draw with the configured flip probability decides whether that bit is
/// flipped. The reconstituted value is saturated into the range: flipping
/// high-order bits can overshoot `max_value`, and such results are pulled
/// back to the bound rather than wrapped.
///
/// Each call consumes exactly `bit_count` RNG draws.
///
/// # Examples
///
/// ```rust
/// use evoalg::mutation::{BitFlip, MutationStrategy};
/// use evoalg::rng::RandomSource;
///
/// let mutation = BitFlip::new(0.5, 10, 0, 100).unwrap();
/// let mut rng = RandomSource::from_seed(5);
///
/// let mut genome: i64 = 10;
/// mutation.mutate(&mut rng, &mut genome).unwrap();
/// assert!((0..=100).contains(&genome));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BitFlip<T> {
    probability: f64,
    bit_count: u32,
    min_value: T,
    max_value: T,
}

impl<T: IntegerGenome> BitFlip<T> {
    /// Creates a new `BitFlip` mutation.
    ///
    /// # Errors
    ///
    /// Returns [`EvolveError::InvalidParameter`] if the flip probability is
    /// outside `[0, 1]`, `bit_count` is zero or exceeds the genome type's
    /// width, `max_value < min_value`, or `bit_count` bits cannot represent
    /// the full value range (`2^bit_count - 1 < max_value - min_value`).
    pub fn new(probability: f64, bit_count: u32, min_value: T, max_value: T) -> Result<Self> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(EvolveError::InvalidParameter(format!(
                "flip probability must be in [0, 1], got {probability}"
            )));
        }
        if bit_count == 0 || bit_count > T::BITS {
            return Err(EvolveError::InvalidParameter(format!(
                "bit count must be in [1, {}], got {bit_count}",
                T::BITS
            )));
        }
        if max_value < min_value {
            return Err(EvolveError::InvalidParameter(format!(
                "max value ({max_value}) must not be less than min value ({min_value})"
            )));
        }
        let span = match max_value.checked_span(min_value) {
            Some(span) => span,
            None => {
                return Err(EvolveError::InvalidParameter(format!(
                    "value range [{min_value}, {max_value}] is too large for the genome type"
                )))
            }
        };
        if bit_count < 64 && span > (1u64 << bit_count) - 1 {
            return Err(EvolveError::InvalidParameter(format!(
                "{bit_count} bits cannot represent the value range [{min_value}, {max_value}]"
            )));
        }

        Ok(Self {
            probability,
            bit_count,
            min_value,
            max_value,
        })
    }
}

impl<T: IntegerGenome> MutationStrategy<T> for BitFlip<T> {
    fn mutate(&self, rng: &mut RandomSource, genome: &mut T) -> Result<()> {
        let draws_before = rng.draw_count();

        let mut offset = genome.offset_from(self.min_value);
        for bit in 0..self.bit_count {
            if rng.next_bool(self.probability) {
                offset ^= 1u64 << bit;
            }
        }

        // Saturate: flipping high-order bits can land outside
        // [min_value, max_value].
        let span = self.max_value.offset_from(self.min_value);
        let offset = offset.min(span);
        *genome = T::with_offset(self.min_value, offset);

        debug_assert_eq!(
            rng.draw_count() - draws_before,
            u64::from(self.bit_count),
            "BitFlip must consume exactly bit_count draws"
        );
        Ok(())
    }
}
