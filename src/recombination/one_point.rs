//! # OnePoint Recombination
//!
//! Classic one-point crossover on the bit representation of integer genomes.

use crate::error::{EvolveError, Result};
use crate::genome::IntegerGenome;
use crate::rng::RandomSource;

use super::RecombinationStrategy;

/// One-point crossover for integer genomes.
///
/// One crossover point is drawn uniformly from `[1, w - 1]`, where `w` is
/// the genome type's bit width by default, or a narrower configured width.
/// For two parents, the bit-suffixes below the point are swapped: the first
/// child takes the first parent's prefix and the second parent's suffix, the
/// second child the reverse.
///
/// More than two parents are paired cyclically (disjoint pairs in order,
/// with an odd last parent pairing back around to the first), so the number
/// of children always equals the number of parents. A single parent is
/// returned unchanged without consuming a draw. Each pairing consumes
/// exactly one draw.
///
/// # Examples
///
/// ```rust
/// use evoalg::recombination::{OnePoint, RecombinationStrategy};
/// use evoalg::rng::RandomSource;
///
/// let recombination = OnePoint::with_bit_count(10).unwrap();
/// let mut rng = RandomSource::from_seed(5);
///
/// let children = recombination.recombine(&mut rng, &[10u32, 20]).unwrap();
/// assert_eq!(children.len(), 2);
/// assert!(children.iter().all(|c| *c < 1024));
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OnePoint {
    bit_count: Option<u32>,
}

impl OnePoint {
    /// Creates a one-point crossover over the genome type's full bit width.
    pub fn new() -> Self {
        Self { bit_count: None }
    }

    /// Creates a one-point crossover over the low `bit_count` bits only.
    ///
    /// Parents whose values fit in `bit_count` bits produce children that
    /// also fit in `bit_count` bits. A width wider than the genome type is
    /// truncated to the type's width at use.
    ///
    /// # Errors
    ///
    /// Returns [`EvolveError::InvalidParameter`] if `bit_count < 2`; at
    /// least two bits are needed for a crossover point to exist.
    pub fn with_bit_count(bit_count: u32) -> Result<Self> {
        if bit_count < 2 {
            return Err(EvolveError::InvalidParameter(format!(
                "bit count must be at least 2 for a crossover point to exist, got {bit_count}"
            )));
        }
        Ok(Self {
            bit_count: Some(bit_count),
        })
    }
}

impl<T: IntegerGenome> RecombinationStrategy<T> for OnePoint {
    fn recombine(&self, rng: &mut RandomSource, parents: &[T]) -> Result<Vec<T>> {
        if parents.is_empty() {
            return Err(EvolveError::EmptyPopulation);
        }
        if parents.len() == 1 {
            return Ok(vec![parents[0]]);
        }

        let width = self.bit_count.unwrap_or(T::BITS).min(T::BITS);
        let count = parents.len();
        let mut children = Vec::with_capacity(count);

        let mut i = 0;
        while i < count {
            let wraps = i + 1 == count;
            let first = parents[i];
            let second = if wraps { parents[0] } else { parents[i + 1] };

            let point: u32 = rng.next_range(1..width);
            let suffix_mask = T::from_bits((1u64 << point) - 1);

            children.push((first & !suffix_mask) | (second & suffix_mask));
            if wraps {
                i += 1;
            } else {
                children.push((second & !suffix_mask) | (first & suffix_mask));
                i += 2;
            }
        }

        debug_assert_eq!(children.len(), count);
        Ok(children)
    }
}
