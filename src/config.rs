//! Population configuration.
//!
//! [`PopulationConfig`] holds the run-wide parameters shared by every
//! operator through the population. Every recognized option is an
//! explicit field with a default; there is no attribute bag, so an
//! unknown option is a compile error.

use crate::error::GaError;

/// Run-wide parameters for a [`Population`](crate::Population).
///
/// # Defaults
///
/// ```
/// use gaflow::PopulationConfig;
///
/// let config = PopulationConfig::default();
/// assert_eq!(config.pop_size, 100);
/// assert!(config.maximize);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use gaflow::PopulationConfig;
///
/// let config = PopulationConfig::default()
///     .with_pop_size(50)
///     .with_gen_size(25)
///     .with_maximize(false)
///     .with_mutation_probability(0.05);
/// ```
#[derive(Debug, Clone)]
pub struct PopulationConfig {
    /// Number of individuals in the population.
    pub pop_size: usize,

    /// Number of offspring to produce per iteration.
    ///
    /// `None` defaults to the population size, giving full generational
    /// replacement. The mating pool produced by selection holds
    /// `2 * gen_size` parent indices.
    pub gen_size: Option<usize>,

    /// Objective direction: `true` maximizes fitness, `false` minimizes.
    pub maximize: bool,

    /// Per-individual probability of mutation each iteration (0.0–1.0).
    pub mutation_probability: f64,

    /// Per-offspring probability of crossover (0.0–1.0).
    ///
    /// When the coin flip fails, the first parent of the pair is cloned
    /// unchanged instead.
    pub crossover_probability: f64,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            pop_size: 100,
            gen_size: None,
            maximize: true,
            mutation_probability: 0.01,
            crossover_probability: 1.0,
        }
    }
}

impl PopulationConfig {
    /// Sets the population size.
    pub fn with_pop_size(mut self, n: usize) -> Self {
        self.pop_size = n;
        self
    }

    /// Sets the number of offspring per iteration.
    pub fn with_gen_size(mut self, n: usize) -> Self {
        self.gen_size = Some(n);
        self
    }

    /// Sets the objective direction.
    pub fn with_maximize(mut self, maximize: bool) -> Self {
        self.maximize = maximize;
        self
    }

    /// Sets the mutation probability, clamped to `[0, 1]`.
    pub fn with_mutation_probability(mut self, p: f64) -> Self {
        self.mutation_probability = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the crossover probability, clamped to `[0, 1]`.
    pub fn with_crossover_probability(mut self, p: f64) -> Self {
        self.crossover_probability = p.clamp(0.0, 1.0);
        self
    }

    /// The effective offspring count: `gen_size` or the population size.
    pub fn effective_gen_size(&self) -> usize {
        self.gen_size.unwrap_or(self.pop_size)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), GaError> {
        if self.pop_size < 2 {
            return Err(GaError::InvalidConfig(
                "pop_size must be at least 2".into(),
            ));
        }
        let gen_size = self.effective_gen_size();
        if gen_size == 0 {
            return Err(GaError::InvalidConfig(
                "gen_size must be at least 1".into(),
            ));
        }
        if gen_size > self.pop_size {
            return Err(GaError::InvalidConfig(format!(
                "gen_size ({gen_size}) cannot exceed pop_size ({})",
                self.pop_size
            )));
        }
        Ok(())
    }
}
