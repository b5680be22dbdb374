//! # Individual
//!
//! The [`Individual`] struct pairs an opaque genome with the metadata the
//! engine manages on its behalf: a fitness score and an age counter.
//!
//! The genome type is entirely caller-defined: bit strings, real vectors,
//! trees, permutations. The engine never inspects it; all genome-specific
//! behavior flows through the mutation and recombination capability
//! contracts.
//!
//! Fitness direction is maximization throughout: a higher score is better.

use std::cmp::Ordering;
use std::fmt::Debug;

/// A genome together with its fitness score and age.
///
/// The fitness starts out unset and is assigned exactly once per genome value
/// by the solver's evaluation phase. Age counts the generations an individual
/// has survived into; newly created offspring start at age 0.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual<G> {
    genome: G,
    fitness: Option<f64>,
    age: u32,
}

impl<G> Individual<G> {
    /// Wraps a genome as a fresh individual with fitness unset and age 0.
    pub fn new(genome: G) -> Self {
        Self {
            genome,
            fitness: None,
            age: 0,
        }
    }

    /// Returns a reference to the genome.
    pub fn genome(&self) -> &G {
        &self.genome
    }

    /// Returns a mutable reference to the genome.
    ///
    /// Mutating the genome invalidates any previously assigned fitness;
    /// callers that change the genome must also call
    /// [`clear_fitness`](Individual::clear_fitness).
    pub fn genome_mut(&mut self) -> &mut G {
        &mut self.genome
    }

    /// Consumes the individual and returns its genome.
    pub fn into_genome(self) -> G {
        self.genome
    }

    /// Returns the fitness score, or `None` if the individual has not been
    /// evaluated yet.
    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    /// Assigns the fitness score.
    pub fn set_fitness(&mut self, fitness: f64) -> &mut Self {
        self.fitness = Some(fitness);
        self
    }

    /// Clears the fitness score, marking the individual as unevaluated.
    pub fn clear_fitness(&mut self) -> &mut Self {
        self.fitness = None;
        self
    }

    /// Returns the number of generations this individual has survived into.
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Increments the age by one generation.
    pub fn increment_age(&mut self) -> &mut Self {
        self.age += 1;
        self
    }

    /// Compares two individuals by fitness.
    ///
    /// The ordering is total: an unset fitness sorts below any set fitness,
    /// and NaN sorts below any number. The solver rejects non-finite scores
    /// at evaluation time, so in practice comparisons only ever see finite
    /// values.
    pub fn compare_fitness(&self, other: &Self) -> Ordering {
        match (self.fitness, other.fitness) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => match (a.is_nan(), b.is_nan()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_individual_is_unevaluated_and_young() {
        let individual = Individual::new(42_i64);
        assert_eq!(*individual.genome(), 42);
        assert_eq!(individual.fitness(), None);
        assert_eq!(individual.age(), 0);
    }

    #[test]
    fn test_set_and_clear_fitness() {
        let mut individual = Individual::new(vec![0.5, 0.1]);
        individual.set_fitness(0.5).set_fitness(1.0);
        assert_eq!(individual.fitness(), Some(1.0));

        individual.clear_fitness();
        assert_eq!(individual.fitness(), None);
    }

    #[test]
    fn test_age_increments() {
        let mut individual = Individual::new(0_u8);
        individual.increment_age().increment_age();
        assert_eq!(individual.age(), 2);
    }

    #[test]
    fn test_compare_fitness_ordering() {
        let mut best = Individual::new(1);
        let mut worst = Individual::new(2);
        let unset = Individual::new(3);

        best.set_fitness(10.0);
        worst.set_fitness(-3.0);

        assert_eq!(best.compare_fitness(&worst), Ordering::Greater);
        assert_eq!(worst.compare_fitness(&best), Ordering::Less);
        assert_eq!(best.compare_fitness(&best), Ordering::Equal);

        // Unset fitness sorts below any evaluated individual.
        assert_eq!(unset.compare_fitness(&worst), Ordering::Less);
        assert_eq!(worst.compare_fitness(&unset), Ordering::Greater);
    }

    #[test]
    fn test_compare_fitness_nan_sorts_last() {
        let mut nan = Individual::new(1);
        let mut low = Individual::new(2);
        nan.set_fitness(f64::NAN);
        low.set_fitness(f64::MIN);

        assert_eq!(nan.compare_fitness(&low), Ordering::Less);
        assert_eq!(low.compare_fitness(&nan), Ordering::Greater);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_individual_serde_round_trip() {
        let mut individual = Individual::new(7_i32);
        individual.set_fitness(1.25);

        let json = serde_json::to_string(&individual).unwrap();
        let back: Individual<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(individual, back);
    }
}
