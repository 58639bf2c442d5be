//! Diagnostics and statistics
//!
//! This module provides statistics collection for evolutionary runs.

use std::time::Duration;

use serde::Serialize;

use crate::algorithms::generation::Variant;
use crate::population::best::BestSolution;
use crate::population::population::Population;

/// Statistics for a single generation
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GenerationStats {
    /// Generation number (0-based)
    pub generation: usize,
    /// Lowest fitness in this generation
    pub best_fitness: f64,
    /// Highest fitness in this generation
    pub worst_fitness: f64,
    /// Mean fitness
    pub mean_fitness: f64,
    /// Median fitness
    pub median_fitness: f64,
    /// Fitness standard deviation
    pub fitness_std: f64,
    /// Best fitness of the whole run up to and including this generation
    pub best_ever_fitness: f64,
}

impl GenerationStats {
    /// Compute statistics from a population
    pub fn from_population(
        population: &Population,
        generation: usize,
        best: &BestSolution,
    ) -> Self {
        let mut fitnesses: Vec<f64> = population.fitness().to_vec();

        if fitnesses.is_empty() {
            return Self {
                generation,
                best_fitness: f64::INFINITY,
                worst_fitness: f64::NEG_INFINITY,
                mean_fitness: 0.0,
                median_fitness: 0.0,
                fitness_std: 0.0,
                best_ever_fitness: best.fitness(),
            };
        }

        fitnesses.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let n = fitnesses.len();
        let median = if n % 2 == 0 {
            (fitnesses[n / 2 - 1] + fitnesses[n / 2]) / 2.0
        } else {
            fitnesses[n / 2]
        };

        Self {
            generation,
            best_fitness: fitnesses[0],
            worst_fitness: fitnesses[n - 1],
            mean_fitness: population.mean_fitness().unwrap_or(0.0),
            median_fitness: median,
            fitness_std: population.fitness_std().unwrap_or(0.0),
            best_ever_fitness: best.fitness(),
        }
    }
}

/// Statistics for a whole run
#[derive(Clone, Debug, Default, Serialize)]
pub struct EvolutionStats {
    /// One entry per generation, in order
    pub generations: Vec<GenerationStats>,
    /// Wall-clock runtime (ms)
    pub total_runtime_ms: f64,
}

impl EvolutionStats {
    /// Create empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record statistics for one generation
    pub fn record(&mut self, stats: GenerationStats) {
        self.generations.push(stats);
    }

    /// Set the run's wall-clock time
    pub fn set_runtime(&mut self, duration: Duration) {
        self.total_runtime_ms = duration.as_secs_f64() * 1000.0;
    }

    /// Number of recorded generations
    pub fn num_generations(&self) -> usize {
        self.generations.len()
    }

    /// Best fitness of each generation
    pub fn best_fitness_history(&self) -> Vec<f64> {
        self.generations.iter().map(|s| s.best_fitness).collect()
    }

    /// Best-ever fitness after each generation
    pub fn best_ever_history(&self) -> Vec<f64> {
        self.generations.iter().map(|s| s.best_ever_fitness).collect()
    }

    /// Mean fitness of each generation
    pub fn mean_fitness_history(&self) -> Vec<f64> {
        self.generations.iter().map(|s| s.mean_fitness).collect()
    }

    /// Generation in which the final best-ever fitness was first reached
    pub fn generation_of_best(&self) -> Option<usize> {
        let last = self.generations.last()?.best_ever_fitness;
        self.generations
            .iter()
            .find(|s| s.best_ever_fitness == last)
            .map(|s| s.generation)
    }

    /// Multi-line human readable summary
    pub fn summary(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Generations: {}\n", self.num_generations()));
        out.push_str(&format!("Runtime:     {:.2} ms\n", self.total_runtime_ms));
        if let (Some(first), Some(last)) = (self.generations.first(), self.generations.last()) {
            out.push_str(&format!(
                "Best fitness: {:.6} -> {:.6}\n",
                first.best_ever_fitness, last.best_ever_fitness
            ));
            out.push_str(&format!(
                "Mean fitness: {:.6} -> {:.6}\n",
                first.mean_fitness, last.mean_fitness
            ));
        }
        if let Some(g) = self.generation_of_best() {
            out.push_str(&format!("Best found in generation: {}\n", g + 1));
        }
        out
    }
}

/// Terminal output of one run
#[derive(Clone, Debug, Serialize)]
pub struct EvolutionResult {
    /// Variant that produced this result
    pub variant: Variant,
    /// Best solution of the whole run
    pub best: BestSolution,
    /// Generations performed
    pub generations: usize,
    /// Total objective evaluations, elites included
    pub evaluations: usize,
    /// Population after the last generation
    pub final_population: Population,
    /// Per-generation statistics
    pub stats: EvolutionStats,
}

impl EvolutionResult {
    /// Best fitness of the run
    pub fn best_fitness(&self) -> f64 {
        self.best.fitness()
    }
}

pub mod prelude {
    pub use super::{EvolutionResult, EvolutionStats, GenerationStats};
}
