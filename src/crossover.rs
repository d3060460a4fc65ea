//! The crossover operator.

use crate::error::GaError;
use crate::individual::Individual;
use crate::operator::GeneticOperator;
use crate::population::Population;
use crate::segment::Segment;
use rand::{Rng, RngCore};

/// Replaces each lethal slot with an offspring from the mating pool.
///
/// Requires a selection operator to have populated
/// `population.mating_pool` earlier in the same iteration; running
/// without one is a configuration error. Pool entries are consumed in
/// pairs, in order: with probability `crossover_probability` the pair is
/// recombined, otherwise the first parent is cloned unchanged.
///
/// All offspring are computed before any are written back, so crossover
/// always reads pre-iteration parent genotypes even when a lethal index
/// coincides with a parent index.
pub struct Crossover;

impl Crossover {
    fn cross<S: Segment>(
        &self,
        population: &mut Population<S>,
        rng: &mut dyn RngCore,
    ) -> Result<(), GaError> {
        let pc = population.crossover_probability;
        let lethals = population.lethal_indices();

        let offspring: Vec<Individual<S>> = {
            let pool = population
                .mating_pool
                .as_deref()
                .ok_or(GaError::MatingPoolMissing)?;
            if pool.len() < 2 * lethals.len() {
                return Err(GaError::MatingPoolExhausted {
                    needed: 2 * lethals.len(),
                    available: pool.len(),
                });
            }
            pool.chunks_exact(2)
                .take(lethals.len())
                .map(|pair| {
                    let first = &population.individuals[pair[0]];
                    if rng.random::<f64>() < pc {
                        first.crossover(&population.individuals[pair[1]], rng)
                    } else {
                        first.clone()
                    }
                })
                .collect()
        };

        for (&slot, child) in lethals.iter().zip(offspring) {
            population.individuals[slot] = child;
        }
        Ok(())
    }
}

impl<S: Segment> GeneticOperator<S> for Crossover {
    fn iterate(
        &mut self,
        population: &mut Population<S>,
        rng: &mut dyn RngCore,
    ) -> Result<(), GaError> {
        self.cross(population, rng)
    }
}
