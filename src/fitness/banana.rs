//! The banana objective
//!
//! `f(x1, x2) = (x2 - x1²)² + (1 - x1)²`
//!
//! A two-variable Rosenbrock-style valley without the usual factor of 100 on
//! the first term. Unimodal, global minimum `0` at `(1, 1)`. Lower is better.

use crate::genome::chromosome::Chromosome;

/// The fixed objective every chromosome is scored against
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BananaFunction;

impl BananaFunction {
    /// Create the objective
    pub fn new() -> Self {
        Self
    }

    /// Human readable formula, as shown next to the parameter inputs
    pub fn formula(&self) -> &'static str {
        "(x2 - x1^2)^2 + (1 - x1)^2"
    }

    /// Best attainable fitness
    pub fn optimal_fitness(&self) -> f64 {
        0.0
    }

    /// Location of the global minimum
    pub fn optimal_solution(&self) -> Chromosome {
        Chromosome::new(1.0, 1.0)
    }

    /// Raw objective on plain coordinates
    pub fn evaluate_raw(&self, x1: f64, x2: f64) -> f64 {
        (x2 - x1 * x1).powi(2) + (1.0 - x1).powi(2)
    }

    /// Fitness of one chromosome
    pub fn evaluate(&self, chromosome: &Chromosome) -> f64 {
        self.evaluate_raw(chromosome.x1(), chromosome.x2())
    }

    /// Fitness of every chromosome, in order
    pub fn evaluate_all(&self, chromosomes: &[Chromosome]) -> Vec<f64> {
        chromosomes.iter().map(|c| self.evaluate(c)).collect()
    }
}
