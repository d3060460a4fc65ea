//! Individuals: a genotype paired with fitness and auxiliary state.

use crate::genotype::Genotype;
use crate::segment::Segment;
use rand::RngCore;

/// A candidate solution in the population.
///
/// Pairs a genotype with a scalar fitness plus the auxiliary attributes
/// operators commonly attach: a decoded phenotype and an age counter.
/// Fitness is only meaningful after an evaluation operator has run on
/// this individual in the current generation — crossover inherits the
/// first parent's stale fitness, and the next evaluation pass overwrites
/// it.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual<S: Segment> {
    /// The encoded representation of the solution.
    pub genotype: Genotype<S>,
    /// Scalar quality score; direction of optimization is set by the
    /// population's `maximize` flag.
    pub fitness: f64,
    /// Decoded form of the genotype, written by decoder-style evaluators.
    pub phenotype: Option<Vec<f64>>,
    /// Generations survived, maintained by aging operators.
    pub age: usize,
}

impl<S: Segment> Individual<S> {
    /// Creates an individual with zero fitness and no auxiliary state.
    pub fn new(genotype: Genotype<S>) -> Self {
        Self {
            genotype,
            fitness: 0.0,
            phenotype: None,
            age: 0,
        }
    }

    /// Randomizes the genotype.
    pub fn randomize(&mut self, rng: &mut dyn RngCore) {
        self.genotype.randomize(rng);
    }

    /// Produces an offspring by recombining the genotypes.
    ///
    /// The offspring is a copy of `self` with the genotype replaced by
    /// the recombined one: auxiliary attributes come from the first
    /// parent, and the inherited fitness is stale until re-evaluation.
    /// Neither parent is mutated.
    pub fn crossover(&self, other: &Self, rng: &mut dyn RngCore) -> Self {
        let mut offspring = self.clone();
        offspring.genotype = self.genotype.crossover(&other.genotype, rng);
        offspring
    }

    /// Applies a single point mutation to the genotype.
    pub fn mutate(&mut self, rng: &mut dyn RngCore) {
        self.genotype.mutate(rng);
    }
}
