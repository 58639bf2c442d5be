//! Evolution driver
//!
//! Runs a fixed number of generations with one [`Variant`], keeps the
//! best-ever solution, and hands a read-only snapshot to a
//! [`GenerationSink`] after every generation. The sink is called
//! synchronously: the next generation is not bred until `report` returns.
//!
//! ```rust,ignore
//! use banana_evo::prelude::*;
//!
//! let mut rng = rand::thread_rng();
//! let sink = FnSink::new(|snapshot: &GenerationSnapshot<'_>| {
//!     println!("{}: {:.6}", snapshot.completed_generations(), snapshot.best.fitness());
//! });
//! let result = EvolutionDriver::new(GaConfig::default(), Variant::Modified, sink).run(&mut rng)?;
//! ```

use std::time::Instant;

use rand::Rng;
use tracing::{debug, info};

use crate::algorithms::generation::Variant;
use crate::config::GaConfig;
use crate::diagnostics::{EvolutionResult, EvolutionStats, GenerationStats};
use crate::error::{EvoResult, EvolutionError};
use crate::fitness::banana::BananaFunction;
use crate::genome::chromosome::Chromosome;
use crate::population::best::BestSolution;
use crate::population::population::{Population, PopulationRow};

/// Read-only view of the run after one generation
#[derive(Clone, Copy, Debug)]
pub struct GenerationSnapshot<'a> {
    /// Variant being run
    pub variant: Variant,
    /// 0-based index of the generation just produced
    pub generation: usize,
    /// Best solution of the run so far
    pub best: &'a BestSolution,
    /// The generation just produced
    pub population: &'a Population,
}

impl<'a> GenerationSnapshot<'a> {
    /// Number of generations finished, counting this one
    pub fn completed_generations(&self) -> usize {
        self.generation + 1
    }

    /// Best-ever chromosome
    pub fn best_chromosome(&self) -> Option<&'a Chromosome> {
        self.best.chromosome()
    }

    /// Best-ever fitness
    pub fn best_fitness(&self) -> f64 {
        self.best.fitness()
    }

    /// Population table rows, numbered from 1
    pub fn rows(&self) -> impl Iterator<Item = PopulationRow> + 'a {
        self.population.rows()
    }
}

/// Receives one snapshot per generation
pub trait GenerationSink {
    /// Called after every generation, before the next one starts
    fn report(&mut self, snapshot: &GenerationSnapshot<'_>);
}

impl<T: GenerationSink + ?Sized> GenerationSink for &mut T {
    fn report(&mut self, snapshot: &GenerationSnapshot<'_>) {
        (**self).report(snapshot);
    }
}

/// Sink that ignores every snapshot
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl GenerationSink for NullSink {
    fn report(&mut self, _snapshot: &GenerationSnapshot<'_>) {}
}

/// Sink wrapping a closure
pub struct FnSink<F>(F);

impl<F> FnSink<F>
where
    F: FnMut(&GenerationSnapshot<'_>),
{
    /// Wrap a closure
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> GenerationSink for FnSink<F>
where
    F: FnMut(&GenerationSnapshot<'_>),
{
    fn report(&mut self, snapshot: &GenerationSnapshot<'_>) {
        (self.0)(snapshot)
    }
}

/// Owned copy of a snapshot
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedGeneration {
    /// Variant being run
    pub variant: Variant,
    /// 0-based generation index
    pub generation: usize,
    /// Best-ever solution at this point
    pub best: BestSolution,
    /// Population of this generation
    pub population: Population,
}

/// Sink that keeps a copy of every snapshot
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    /// Recorded generations in arrival order
    pub generations: Vec<RecordedGeneration>,
}

impl RecordingSink {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded generations of one variant
    pub fn for_variant(&self, variant: Variant) -> impl Iterator<Item = &RecordedGeneration> {
        self.generations.iter().filter(move |g| g.variant == variant)
    }
}

impl GenerationSink for RecordingSink {
    fn report(&mut self, snapshot: &GenerationSnapshot<'_>) {
        self.generations.push(RecordedGeneration {
            variant: snapshot.variant,
            generation: snapshot.generation,
            best: *snapshot.best,
            population: snapshot.population.clone(),
        });
    }
}

/// Where the driver is in its run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    /// Building and evaluating the initial population
    Initializing,
    /// Producing the given generation
    Running {
        /// 0-based generation index
        generation: usize,
    },
    /// All generations performed
    Done,
}

/// Runs one variant for a fixed number of generations
pub struct EvolutionDriver<S: GenerationSink> {
    config: GaConfig,
    variant: Variant,
    objective: BananaFunction,
    sink: S,
    state: DriverState,
}

impl<S: GenerationSink> EvolutionDriver<S> {
    /// Create a driver that reports to `sink`
    pub fn new(config: GaConfig, variant: Variant, sink: S) -> Self {
        Self {
            config,
            variant,
            objective: BananaFunction::new(),
            sink,
            state: DriverState::Initializing,
        }
    }

    /// Current state
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Configuration of this run
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Variant of this run
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Give back the sink
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Perform the whole run and return the best-ever solution with statistics
    ///
    /// Always runs exactly `config.generations()` generations.
    pub fn run<R: Rng>(&mut self, rng: &mut R) -> EvoResult<EvolutionResult> {
        let start_time = Instant::now();
        self.state = DriverState::Initializing;

        info!(
            variant = %self.variant,
            chromosome_count = self.config.chromosome_count(),
            generations = self.config.generations(),
            mutation_rate = self.config.mutation_rate(),
            "starting run"
        );

        let mut population = Population::initialize(&self.config, &self.objective, rng);
        if population.is_empty() {
            return Err(EvolutionError::EmptyPopulation);
        }

        let mut evaluations = population.len();
        let mut best = BestSolution::new();
        let mut stats = EvolutionStats::new();

        for generation in 0..self.config.generations() {
            self.state = DriverState::Running { generation };

            population =
                self.variant
                    .next_generation(&population, &self.config, &self.objective, rng)?;
            evaluations += population.len();

            let improved = best.update_from(&population);
            debug!(
                variant = %self.variant,
                generation,
                generation_best = population.best_fitness().unwrap_or(f64::INFINITY),
                best_ever = best.fitness(),
                improved,
                "generation complete"
            );

            stats.record(GenerationStats::from_population(&population, generation, &best));

            self.sink.report(&GenerationSnapshot {
                variant: self.variant,
                generation,
                best: &best,
                population: &population,
            });
        }

        self.state = DriverState::Done;
        stats.set_runtime(start_time.elapsed());

        info!(
            variant = %self.variant,
            best_fitness = best.fitness(),
            best = ?best.chromosome(),
            evaluations,
            "run finished"
        );

        Ok(EvolutionResult {
            variant: self.variant,
            best,
            generations: self.config.generations(),
            evaluations,
            final_population: population,
            stats,
        })
    }
}

/// Run one variant without observing individual generations
pub fn run_variant<R: Rng>(
    config: &GaConfig,
    variant: Variant,
    rng: &mut R,
) -> EvoResult<EvolutionResult> {
    EvolutionDriver::new(*config, variant, NullSink).run(rng)
}
