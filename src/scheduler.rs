//! The scheduler: drives the operator pipeline over one population.
//!
//! A [`Scheduler`] owns a population, an ordered list of boxed operators,
//! and the run's random source. Each lifecycle phase calls the matching
//! phase on every operator in list order; that serialization is the whole
//! concurrency model — each operator runs to completion on the shared
//! population before the next starts. A failure in any operator call
//! propagates and aborts the run.

use crate::error::GaError;
use crate::operator::GeneticOperator;
use crate::population::Population;
use crate::segment::Segment;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Lifecycle state of a [`Scheduler`].
///
/// `Created → Initialized → Running → Finalized`; `Finalized` is
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// Constructed; operators may still be added.
    Created,
    /// Every operator's `initialize` phase has run once.
    Initialized,
    /// At least one iteration has run.
    Running,
    /// Every operator's `finalize` phase has run; terminal.
    Finalized,
}

impl SchedulerState {
    fn as_str(self) -> &'static str {
        match self {
            SchedulerState::Created => "Created",
            SchedulerState::Initialized => "Initialized",
            SchedulerState::Running => "Running",
            SchedulerState::Finalized => "Finalized",
        }
    }
}

/// Owns a population and an ordered operator list, and drives the
/// three-phase lifecycle for a fixed iteration count.
///
/// # Usage
///
/// ```
/// use gaflow::{
///     BinarySegment, Crossover, Evaluation, Genotype, Individual, Mutation,
///     Population, PopulationConfig, Scheduler, SusSelection,
/// };
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(0);
/// let schema = Genotype::new(vec![BinarySegment::with_data(4, 0); 3]);
/// let population = Population::new(
///     "demo",
///     schema,
///     &PopulationConfig::default().with_pop_size(10),
///     &mut rng,
/// )
/// .unwrap();
///
/// let mut ga = Scheduler::new("demo", population)
///     .with_seed(42)
///     .with_operator(Evaluation::new(|ind: &mut Individual<BinarySegment>| {
///         ind.fitness = ind.genotype.segments().iter().map(|s| s.data() as f64).sum();
///     }))
///     .with_operator(SusSelection)
///     .with_operator(Crossover)
///     .with_operator(Mutation);
/// ga.run(20).unwrap();
/// ```
pub struct Scheduler<S: Segment> {
    name: String,
    operators: Vec<Box<dyn GeneticOperator<S>>>,
    population: Population<S>,
    rng: StdRng,
    state: SchedulerState,
}

impl<S: Segment> Scheduler<S> {
    /// Creates a scheduler with no operators and an OS-seeded RNG.
    pub fn new(name: impl Into<String>, population: Population<S>) -> Self {
        Self {
            name: name.into(),
            operators: Vec::new(),
            population,
            rng: StdRng::from_os_rng(),
            state: SchedulerState::Created,
        }
    }

    /// Reseeds the run's random source for reproducibility.
    ///
    /// Determinism additionally requires operators to consume randomness
    /// in a fixed sequence, which the in-order pipeline guarantees.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Appends an operator to the pipeline.
    ///
    /// # Panics
    /// Panics if called after [`initialize`](Self::initialize) — the
    /// operator list is frozen once the run starts.
    pub fn with_operator(mut self, operator: impl GeneticOperator<S> + 'static) -> Self {
        self.add_operator(Box::new(operator))
            .expect("operators can only be added before initialization");
        self
    }

    /// Appends a boxed operator to the pipeline.
    ///
    /// Errors with [`GaError::InvalidState`] once the run has started:
    /// no operator may be added or removed mid-run.
    pub fn add_operator(
        &mut self,
        operator: Box<dyn GeneticOperator<S>>,
    ) -> Result<(), GaError> {
        if self.state != SchedulerState::Created {
            return Err(self.state_error("add_operator", "Created"));
        }
        self.operators.push(operator);
        Ok(())
    }

    /// The scheduler's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current lifecycle state.
    pub fn state(&self) -> SchedulerState {
        self.state
    }

    /// The shared population.
    pub fn population(&self) -> &Population<S> {
        &self.population
    }

    /// Mutable access to the shared population.
    pub fn population_mut(&mut self) -> &mut Population<S> {
        &mut self.population
    }

    /// Calls every operator's `initialize` phase once, in list order.
    ///
    /// Evaluation operators typically score the initial random
    /// population here, before any selection runs.
    pub fn initialize(&mut self) -> Result<(), GaError> {
        if self.state != SchedulerState::Created {
            return Err(self.state_error("initialize", "Created"));
        }
        for op in &mut self.operators {
            op.initialize(&mut self.population, &mut self.rng)?;
        }
        self.state = SchedulerState::Initialized;
        Ok(())
    }

    /// Calls every operator's `iterate` phase once, in list order.
    pub fn iterate(&mut self) -> Result<(), GaError> {
        if !matches!(
            self.state,
            SchedulerState::Initialized | SchedulerState::Running
        ) {
            return Err(self.state_error("iterate", "Initialized or Running"));
        }
        for op in &mut self.operators {
            op.iterate(&mut self.population, &mut self.rng)?;
        }
        self.state = SchedulerState::Running;
        Ok(())
    }

    /// Calls every operator's `finalize` phase once, in list order.
    ///
    /// Used by logging and reporting operators to flush accumulated
    /// state. The scheduler is terminal afterwards.
    pub fn finalize(&mut self) -> Result<(), GaError> {
        if !matches!(
            self.state,
            SchedulerState::Initialized | SchedulerState::Running
        ) {
            return Err(self.state_error("finalize", "Initialized or Running"));
        }
        for op in &mut self.operators {
            op.finalize(&mut self.population, &mut self.rng)?;
        }
        self.state = SchedulerState::Finalized;
        Ok(())
    }

    /// Initializes, runs `n` iterations, and finalizes.
    pub fn run(&mut self, n: usize) -> Result<(), GaError> {
        self.initialize()?;
        for _ in 0..n {
            self.iterate()?;
        }
        self.finalize()
    }

    fn state_error(&self, operation: &'static str, expected: &'static str) -> GaError {
        GaError::InvalidState {
            operation,
            expected,
            actual: self.state.as_str(),
        }
    }
}
