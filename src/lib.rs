//! Composable genetic-algorithm engine.
//!
//! Expresses evolutionary optimization as a pipeline of operators acting
//! on a shared population. Heterogeneous algorithm steps — evaluation,
//! selection, crossover, mutation, logging — implement one protocol and
//! cooperate safely through operator ordering alone: the engine is
//! single-threaded and synchronous, and each operator runs to completion
//! on the shared population before the next starts.
//!
//! # Core Traits
//!
//! - [`Segment`]: the smallest unit of heritable data — knows how to
//!   randomize, recombine, and mutate itself
//! - [`GeneticOperator`]: the three-phase contract (`initialize`,
//!   `iterate`, `finalize`) every pipeline step implements
//! - [`FitnessFunction`]: problem definition — maps an individual to a
//!   scalar fitness
//!
//! # Key Types
//!
//! - [`BinarySegment`]: an integer variable encoded by a fixed bit width
//! - [`Genotype`] / [`Individual`] / [`Population`]: the data model
//! - [`PopulationConfig`]: run-wide parameters with defaults and a
//!   builder
//! - [`Scheduler`]: owns the population and the ordered operator list,
//!   and drives the lifecycle for a fixed iteration count
//!
//! # Built-in Operators
//!
//! - [`Evaluation`]: applies a fitness function to recently replaced
//!   individuals, in every phase
//! - [`SusSelection`]: stochastic uniform sampling of parents
//! - [`TournamentSelection`]: k-tournament parent selection
//! - [`SelectLethals`]: elitist truncation — schedules the worst
//!   individuals for replacement
//! - [`Crossover`]: pairwise one-point recombination from the mating pool
//! - [`Mutation`]: probabilistic single-point mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Baker (1987), "Reducing Bias and Inefficiency in the Selection
//!   Algorithm"
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

mod config;
mod crossover;
mod error;
mod evaluation;
mod genotype;
mod individual;
mod mutation;
mod operator;
mod population;
mod scheduler;
mod segment;
mod selection;

pub use config::PopulationConfig;
pub use crossover::Crossover;
pub use error::GaError;
pub use evaluation::{Evaluation, FitnessFunction};
pub use genotype::Genotype;
pub use individual::Individual;
pub use mutation::Mutation;
pub use operator::GeneticOperator;
pub use population::Population;
pub use scheduler::{Scheduler, SchedulerState};
pub use segment::{BinarySegment, Segment};
pub use selection::{SelectLethals, SusSelection, TournamentSelection};
