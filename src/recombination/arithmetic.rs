//! # Arithmetic Recombination
//!
//! Blending crossover for real-vector genomes: children take weighted
//! averages of their parents' elements instead of swapping bits.

use crate::error::{EvolveError, Result};
use crate::rng::RandomSource;

use super::RecombinationStrategy;

fn blend(alpha: f64, own: f64, other: f64) -> f64 {
    alpha * other + (1.0 - alpha) * own
}

fn check_equal_lengths(parents: &[Vec<f64>]) -> Result<usize> {
    let length = parents[0].len();
    if parents.iter().any(|parent| parent.len() != length) {
        return Err(EvolveError::SizeMismatch(
            "arithmetic recombination requires parents of equal length".to_string(),
        ));
    }
    Ok(length)
}

/// Single arithmetic recombination for `Vec<f64>` genomes.
///
/// Each parent pair picks one allele position uniformly (one draw per pair)
/// and blends only that element: the first child keeps the first parent's
/// genome with `genome[allele] = alpha * second[allele] + (1 - alpha) *
/// first[allele]`, the second child mirrors it. All other elements are
/// copied unchanged.
///
/// Parents are paired the way [`OnePoint`](super::OnePoint) pairs them:
/// disjoint pairs in order, an odd last parent wrapping around to the first
/// and yielding a single child, a lone parent passing through without a
/// draw. Arity is always preserved.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SingleArithmetic {
    alpha: f64,
}

impl SingleArithmetic {
    /// Creates a new `SingleArithmetic` recombination.
    ///
    /// # Errors
    ///
    /// Returns [`EvolveError::InvalidParameter`] if `alpha` is outside
    /// `[0, 1]`.
    pub fn new(alpha: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(EvolveError::InvalidParameter(format!(
                "blend factor must be in [0, 1], got {alpha}"
            )));
        }
        Ok(Self { alpha })
    }
}

impl RecombinationStrategy<Vec<f64>> for SingleArithmetic {
    fn recombine(&self, rng: &mut RandomSource, parents: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
        if parents.is_empty() {
            return Err(EvolveError::EmptyPopulation);
        }
        if parents.len() == 1 {
            return Ok(vec![parents[0].clone()]);
        }
        let length = check_equal_lengths(parents)?;
        if length == 0 {
            return Ok(parents.to_vec());
        }

        let count = parents.len();
        let mut children = Vec::with_capacity(count);

        let mut i = 0;
        while i < count {
            let wraps = i + 1 == count;
            let first = &parents[i];
            let second = if wraps { &parents[0] } else { &parents[i + 1] };

            let allele = rng.next_range(0..length);

            let mut child = first.clone();
            child[allele] = blend(self.alpha, first[allele], second[allele]);
            children.push(child);

            if wraps {
                i += 1;
            } else {
                let mut child = second.clone();
                child[allele] = blend(self.alpha, second[allele], first[allele]);
                children.push(child);
                i += 2;
            }
        }

        debug_assert_eq!(children.len(), count);
        Ok(children)
    }
}

/// Simple arithmetic recombination for `Vec<f64>` genomes.
///
/// Each child keeps its own parent's elements up to a fixed crossover point
/// and blends every element from the point onward with the partner:
/// `child[m] = alpha * other[m] + (1 - alpha) * own[m]`. A crossover point
/// at or beyond the genome length copies the parents unchanged.
///
/// Pairing follows the same cyclic scheme as [`SingleArithmetic`]. The
/// crossover point is fixed at construction, so the operator consumes no
/// RNG draws.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimpleArithmetic {
    alpha: f64,
    cross_point: usize,
}

impl SimpleArithmetic {
    /// Creates a new `SimpleArithmetic` recombination.
    ///
    /// # Errors
    ///
    /// Returns [`EvolveError::InvalidParameter`] if `alpha` is outside
    /// `[0, 1]`.
    pub fn new(alpha: f64, cross_point: usize) -> Result<Self> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(EvolveError::InvalidParameter(format!(
                "blend factor must be in [0, 1], got {alpha}"
            )));
        }
        Ok(Self { alpha, cross_point })
    }
}

impl RecombinationStrategy<Vec<f64>> for SimpleArithmetic {
    fn recombine(&self, _rng: &mut RandomSource, parents: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
        if parents.is_empty() {
            return Err(EvolveError::EmptyPopulation);
        }
        if parents.len() == 1 {
            return Ok(vec![parents[0].clone()]);
        }
        let length = check_equal_lengths(parents)?;
        let split = self.cross_point.min(length);

        let count = parents.len();
        let mut children = Vec::with_capacity(count);

        let mut i = 0;
        while i < count {
            let wraps = i + 1 == count;
            let first = &parents[i];
            let second = if wraps { &parents[0] } else { &parents[i + 1] };

            let mut child = first.clone();
            for m in split..length {
                child[m] = blend(self.alpha, first[m], second[m]);
            }
            children.push(child);

            if wraps {
                i += 1;
            } else {
                let mut child = second.clone();
                for m in split..length {
                    child[m] = blend(self.alpha, second[m], first[m]);
                }
                children.push(child);
                i += 2;
            }
        }

        debug_assert_eq!(children.len(), count);
        Ok(children)
    }
}
