//! The base evaluation operator.
//!
//! [`Evaluation`] wraps a problem-specific [`FitnessFunction`] and applies
//! it to every recently replaced individual. It runs identically in all
//! three lifecycle phases, so an initial scoring pass always happens
//! before any selection operator sees the population.

use crate::error::GaError;
use crate::individual::Individual;
use crate::operator::GeneticOperator;
use crate::population::Population;
use crate::segment::Segment;
use rand::RngCore;

/// A problem definition: maps a genotype (or phenotype) to fitness.
///
/// Implementations write `individual.fitness` and may write derived
/// attributes such as `individual.phenotype` for decoder-style
/// evaluators that translate genotype to phenotype before scoring.
///
/// Closures of type `Fn(&mut Individual<S>)` implement this trait
/// directly:
///
/// ```
/// use gaflow::{BinarySegment, Evaluation, Individual};
///
/// let sum_segments = Evaluation::new(|ind: &mut Individual<BinarySegment>| {
///     ind.fitness = ind.genotype.segments().iter().map(|s| s.data() as f64).sum();
/// });
/// # let _ = sum_segments;
/// ```
pub trait FitnessFunction<S: Segment> {
    /// Scores one individual, writing its fitness.
    fn evaluate_individual(&self, individual: &mut Individual<S>);
}

impl<S, F> FitnessFunction<S> for F
where
    S: Segment,
    F: Fn(&mut Individual<S>),
{
    fn evaluate_individual(&self, individual: &mut Individual<S>) {
        self(individual)
    }
}

/// Applies a [`FitnessFunction`] to the lethal set in every phase.
///
/// Only recently replaced individuals (`population.lethals`) are
/// re-scored; when the lethal set is absent the whole population is
/// evaluated. This partial update is the engine's main performance
/// optimization for expensive objective functions.
pub struct Evaluation<F> {
    function: F,
}

impl<F> Evaluation<F> {
    /// Wraps a fitness function in an evaluation operator.
    pub fn new(function: F) -> Self {
        Self { function }
    }

    fn evaluate<S>(&self, population: &mut Population<S>)
    where
        S: Segment,
        F: FitnessFunction<S>,
    {
        for i in population.lethal_indices() {
            self.function
                .evaluate_individual(&mut population.individuals[i]);
        }
    }
}

impl<S, F> GeneticOperator<S> for Evaluation<F>
where
    S: Segment,
    F: FitnessFunction<S>,
{
    fn initialize(
        &mut self,
        population: &mut Population<S>,
        _rng: &mut dyn RngCore,
    ) -> Result<(), GaError> {
        self.evaluate(population);
        Ok(())
    }

    fn iterate(
        &mut self,
        population: &mut Population<S>,
        _rng: &mut dyn RngCore,
    ) -> Result<(), GaError> {
        self.evaluate(population);
        Ok(())
    }

    fn finalize(
        &mut self,
        population: &mut Population<S>,
        _rng: &mut dyn RngCore,
    ) -> Result<(), GaError> {
        self.evaluate(population);
        Ok(())
    }
}
