//! Populations: the shared state every operator transforms.
//!
//! A [`Population`] is the unit of cooperation between operators. It owns
//! all individuals plus the run-wide parameters, and carries the
//! transient per-iteration fields (`lethals`, `mating_pool`) that one
//! operator writes and a later operator in the same iteration reads.
//! Those fields do not persist meaningfully across generations; only
//! `individuals` does.

use crate::config::PopulationConfig;
use crate::error::GaError;
use crate::genotype::Genotype;
use crate::individual::Individual;
use crate::segment::Segment;
use rand::RngCore;

/// A named collection of individuals plus run-wide shared parameters.
#[derive(Debug, Clone)]
pub struct Population<S: Segment> {
    /// Display name for logs and reports.
    pub name: String,
    /// The individuals; an index is the individual's identity within a
    /// generation.
    pub individuals: Vec<Individual<S>>,
    /// Template genotype used to seed new individuals.
    pub schema: Genotype<S>,
    /// Objective direction: `true` maximizes fitness.
    pub maximize: bool,
    /// Number of offspring to produce per iteration.
    pub gen_size: usize,
    /// Per-individual mutation probability in `[0, 1]`.
    pub mutation_probability: f64,
    /// Per-offspring crossover probability in `[0, 1]`.
    pub crossover_probability: f64,
    /// Indices scheduled for evaluation/replacement this iteration.
    ///
    /// `None` means every individual is treated as lethal.
    pub lethals: Option<Vec<usize>>,
    /// Flat sequence of parent indices of length `2 * gen_size`,
    /// produced by a selection operator and consumed pairwise by
    /// [`Crossover`](crate::Crossover).
    pub mating_pool: Option<Vec<usize>>,
}

impl<S: Segment> Population<S> {
    /// Builds a randomized population of `config.pop_size` individuals
    /// seeded from `schema`.
    pub fn new(
        name: impl Into<String>,
        schema: Genotype<S>,
        config: &PopulationConfig,
        rng: &mut dyn RngCore,
    ) -> Result<Self, GaError> {
        config.validate()?;
        let mut population = Self {
            name: name.into(),
            individuals: Vec::new(),
            schema,
            maximize: config.maximize,
            gen_size: config.effective_gen_size(),
            mutation_probability: config.mutation_probability,
            crossover_probability: config.crossover_probability,
            lethals: None,
            mating_pool: None,
        };
        population.populate(config.pop_size);
        population.randomize(rng);
        Ok(population)
    }

    /// Replaces the individuals with `n` copies of the schema.
    pub fn populate(&mut self, n: usize) {
        self.individuals = (0..n)
            .map(|_| Individual::new(self.schema.clone()))
            .collect();
    }

    /// Randomizes every individual's genotype.
    pub fn randomize(&mut self, rng: &mut dyn RngCore) {
        for individual in &mut self.individuals {
            individual.randomize(rng);
        }
    }

    /// The number of individuals.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Whether the population holds no individuals.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// The indices the current iteration should treat as lethal.
    ///
    /// Returns the `lethals` set when present and non-empty, otherwise
    /// the full index range — the default-fallback contract shared by
    /// evaluation, crossover, and mutation.
    pub fn lethal_indices(&self) -> Vec<usize> {
        match &self.lethals {
            Some(lethals) if !lethals.is_empty() => lethals.clone(),
            _ => (0..self.individuals.len()).collect(),
        }
    }

    /// The index of the best individual per the `maximize` direction.
    ///
    /// # Panics
    /// Panics if the population is empty.
    pub fn best_index(&self) -> usize {
        assert!(!self.is_empty(), "population must not be empty");
        let better = |a: f64, b: f64| if self.maximize { a > b } else { a < b };
        let mut best = 0;
        for (i, individual) in self.individuals.iter().enumerate().skip(1) {
            if better(individual.fitness, self.individuals[best].fitness) {
                best = i;
            }
        }
        best
    }
}
