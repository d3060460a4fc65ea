//! Error types for the GA engine.
//!
//! A GA run is all-or-nothing: the first error raised by any operator
//! phase propagates out of the [`Scheduler`](crate::Scheduler) and aborts
//! the run. There is no retry or partial-failure recovery.

use thiserror::Error;

/// Errors produced by the engine and its built-in operators.
#[derive(Debug, Error, PartialEq)]
pub enum GaError {
    /// A configuration parameter failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// [`Crossover`](crate::Crossover) ran without a mating pool.
    ///
    /// Signals a missing or mis-ordered selection operator: a selection
    /// operator must populate `population.mating_pool` earlier in the
    /// same iteration.
    #[error("no mating pool on population; a selection operator must run before Crossover")]
    MatingPoolMissing,

    /// The mating pool is too short for the scheduled replacements.
    ///
    /// Crossover consumes two parent indices per lethal slot, so the pool
    /// must hold at least `2 * lethal count` entries.
    #[error("mating pool exhausted: {needed} parent indices needed, {available} available")]
    MatingPoolExhausted { needed: usize, available: usize },

    /// A scheduler method was called in the wrong lifecycle state.
    #[error("scheduler is {actual} but {operation} requires {expected}")]
    InvalidState {
        operation: &'static str,
        expected: &'static str,
        actual: &'static str,
    },
}
