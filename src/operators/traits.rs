//! Operator traits
//!
//! This module defines the core operator traits for the genetic algorithm.

use rand::Rng;

use crate::error::OperatorError;
use crate::genome::bounds::Bounds;
use crate::genome::chromosome::Chromosome;
use crate::population::population::Population;

/// Selection operator trait
///
/// Picks parents from the current generation for reproduction.
pub trait SelectionOperator: Send + Sync {
    /// Select a single individual from the population
    ///
    /// Returns the index of the selected individual.
    fn select<R: Rng>(&self, population: &Population, rng: &mut R) -> Result<usize, OperatorError>;

    /// Select an individual and return a copy of its chromosome
    fn select_chromosome<R: Rng>(
        &self,
        population: &Population,
        rng: &mut R,
    ) -> Result<Chromosome, OperatorError> {
        let index = self.select(population, rng)?;
        population
            .get(index)
            .map(|(chromosome, _)| chromosome)
            .ok_or_else(|| {
                OperatorError::SelectionFailed(format!(
                    "selected index {} is outside a population of {}",
                    index,
                    population.len()
                ))
            })
    }
}

/// Crossover operator trait
///
/// Combines genetic material from two parents to create two offspring.
pub trait CrossoverOperator: Send + Sync {
    /// Apply crossover to two parents and produce two offspring
    fn crossover(&self, parent1: &Chromosome, parent2: &Chromosome) -> (Chromosome, Chromosome);
}

/// Mutation operator trait
///
/// Produces a possibly changed copy of a chromosome, drawing replacement
/// genes from `bounds`.
pub trait MutationOperator: Send + Sync {
    /// Return a mutated copy of `chromosome`
    fn mutate<R: Rng>(&self, chromosome: &Chromosome, bounds: &Bounds, rng: &mut R) -> Chromosome;

    /// Get the mutation probability per gene
    fn mutation_probability(&self) -> f64;
}
