//! The mutation operator.

use crate::error::GaError;
use crate::operator::GeneticOperator;
use crate::population::Population;
use crate::segment::Segment;
use rand::{Rng, RngCore};

/// Applies single-point mutation to recently replaced individuals.
///
/// For each lethal index (default: every individual), an independent
/// coin flip at `mutation_probability` decides whether that individual's
/// genotype is mutated in place — one segment, one bit. Scheduled after
/// [`Crossover`](crate::Crossover) so it acts on offspring, not parents.
pub struct Mutation;

impl Mutation {
    fn mutate<S: Segment>(&self, population: &mut Population<S>, rng: &mut dyn RngCore) {
        let pm = population.mutation_probability;
        for i in population.lethal_indices() {
            if rng.random::<f64>() < pm {
                population.individuals[i].mutate(rng);
            }
        }
    }
}

impl<S: Segment> GeneticOperator<S> for Mutation {
    fn iterate(
        &mut self,
        population: &mut Population<S>,
        rng: &mut dyn RngCore,
    ) -> Result<(), GaError> {
        self.mutate(population, rng);
        Ok(())
    }
}
