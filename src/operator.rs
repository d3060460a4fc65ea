//! The genetic operator protocol.
//!
//! Every algorithm step — evaluation, selection, crossover, mutation,
//! logging — implements [`GeneticOperator`] and is driven by the
//! [`Scheduler`](crate::Scheduler) through a three-phase lifecycle.
//! A single operator could implement a full GA, but modularization is
//! encouraged so operators can be recombined freely.

use crate::error::GaError;
use crate::population::Population;
use crate::segment::Segment;
use rand::RngCore;

/// A pipeline step acting on the shared population.
///
/// All three phases default to no-ops, so an operator only overrides the
/// phases it cares about. Each phase receives the population by mutable
/// reference and the scheduler's random source; operators hold no
/// ownership of individuals and must not retain per-individual state
/// across iterations — only aggregate statistics (hence `&mut self`).
///
/// Phase order within a run: `initialize` once, `iterate` once per
/// generation, `finalize` once. Within each phase, operators execute in
/// the scheduler's list order; that serialization is the engine's only
/// concurrency-safety mechanism, and the order is load-bearing
/// (evaluation before selection before crossover before mutation,
/// typically).
pub trait GeneticOperator<S: Segment> {
    /// Called once during the startup phase of the run.
    fn initialize(
        &mut self,
        population: &mut Population<S>,
        rng: &mut dyn RngCore,
    ) -> Result<(), GaError> {
        let _ = (population, rng);
        Ok(())
    }

    /// Called once every iteration.
    fn iterate(
        &mut self,
        population: &mut Population<S>,
        rng: &mut dyn RngCore,
    ) -> Result<(), GaError> {
        let _ = (population, rng);
        Ok(())
    }

    /// Called once at the end of the run.
    fn finalize(
        &mut self,
        population: &mut Population<S>,
        rng: &mut dyn RngCore,
    ) -> Result<(), GaError> {
        let _ = (population, rng);
        Ok(())
    }
}
