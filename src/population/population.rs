//! Population type
//!
//! A population is an ordered list of chromosomes paired positionally with
//! their fitness values. Both lists always have the same length; fitness is
//! computed once when the population is built and never carried over from a
//! previous generation.

use std::cmp::Ordering;

use rand::Rng;
use serde::Serialize;

use crate::config::GaConfig;
use crate::fitness::banana::BananaFunction;
use crate::genome::chromosome::Chromosome;

/// One line of the population table handed to display sinks
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PopulationRow {
    /// 1-based position in the population
    pub number: usize,
    /// Fitness of the chromosome
    pub fitness: f64,
    /// First gene
    pub gene1: f64,
    /// Second gene
    pub gene2: f64,
}

/// Chromosomes of one generation with their fitness
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Population {
    chromosomes: Vec<Chromosome>,
    fitness: Vec<f64>,
}

impl Population {
    /// Build a population and evaluate every member
    pub fn from_chromosomes(chromosomes: Vec<Chromosome>, objective: &BananaFunction) -> Self {
        let fitness = objective.evaluate_all(&chromosomes);
        Self {
            chromosomes,
            fitness,
        }
    }

    /// Draw `chromosome_count` random chromosomes inside the configured bounds
    pub fn initialize<R: Rng>(config: &GaConfig, objective: &BananaFunction, rng: &mut R) -> Self {
        let chromosomes = (0..config.chromosome_count())
            .map(|_| Chromosome::random(config.bounds(), rng))
            .collect();
        Self::from_chromosomes(chromosomes, objective)
    }

    /// Get the population size
    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    /// Check if the population is empty
    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    /// Chromosomes in order
    pub fn chromosomes(&self) -> &[Chromosome] {
        &self.chromosomes
    }

    /// Fitness values, parallel to [`Population::chromosomes`]
    pub fn fitness(&self) -> &[f64] {
        &self.fitness
    }

    /// Get a copy of the chromosome at `index` with its fitness
    pub fn get(&self, index: usize) -> Option<(Chromosome, f64)> {
        Some((*self.chromosomes.get(index)?, *self.fitness.get(index)?))
    }

    /// Iterate over `(chromosome, fitness)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&Chromosome, f64)> {
        self.chromosomes.iter().zip(self.fitness.iter().copied())
    }

    /// Index of the lowest fitness, first occurrence on ties
    pub fn best_index(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, &f) in self.fitness.iter().enumerate() {
            match best {
                Some(b) if self.fitness[b] <= f => {}
                _ => best = Some(i),
            }
        }
        best
    }

    /// Best chromosome of this generation with its fitness
    pub fn best(&self) -> Option<(Chromosome, f64)> {
        self.best_index().and_then(|i| self.get(i))
    }

    /// Lowest fitness in the population
    pub fn best_fitness(&self) -> Option<f64> {
        self.best().map(|(_, f)| f)
    }

    /// Highest fitness in the population
    pub fn worst_fitness(&self) -> Option<f64> {
        self.fitness
            .iter()
            .copied()
            .max_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
    }

    /// Indices ordered from best to worst fitness
    ///
    /// The sort is stable, so equal fitness keeps population order.
    pub fn ranked_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.len()).collect();
        indices.sort_by(|&a, &b| {
            self.fitness[a]
                .partial_cmp(&self.fitness[b])
                .unwrap_or(Ordering::Equal)
        });
        indices
    }

    /// Copies of the `count` best chromosomes, best first
    pub fn elites(&self, count: usize) -> Vec<Chromosome> {
        self.ranked_indices()
            .into_iter()
            .take(count)
            .map(|i| self.chromosomes[i])
            .collect()
    }

    /// Compute mean fitness
    pub fn mean_fitness(&self) -> Option<f64> {
        if self.fitness.is_empty() {
            None
        } else {
            Some(self.fitness.iter().sum::<f64>() / self.fitness.len() as f64)
        }
    }

    /// Compute fitness standard deviation
    pub fn fitness_std(&self) -> Option<f64> {
        let mean = self.mean_fitness()?;
        if self.fitness.len() < 2 {
            return None;
        }

        let variance = self.fitness.iter().map(|f| (f - mean).powi(2)).sum::<f64>()
            / (self.fitness.len() - 1) as f64;
        Some(variance.sqrt())
    }

    /// Compute population diversity (average pairwise distance)
    pub fn diversity(&self) -> f64 {
        if self.len() < 2 {
            return 0.0;
        }

        let mut total_distance = 0.0;
        let mut count = 0;

        for i in 0..self.len() {
            for j in (i + 1)..self.len() {
                total_distance += self.chromosomes[i].distance(&self.chromosomes[j]);
                count += 1;
            }
        }

        total_distance / count as f64
    }

    /// Table rows for display, numbered from 1
    pub fn rows(&self) -> impl Iterator<Item = PopulationRow> + '_ {
        self.iter()
            .enumerate()
            .map(|(i, (chromosome, fitness))| PopulationRow {
                number: i + 1,
                fitness,
                gene1: chromosome.x1(),
                gene2: chromosome.x2(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::bounds::Bounds;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn population(chromosomes: &[(f64, f64)]) -> Population {
        Population::from_chromosomes(
            chromosomes.iter().copied().map(Chromosome::from).collect(),
            &BananaFunction::new(),
        )
    }

    #[test]
    fn test_initialize_size_and_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let bounds = Bounds::new(-3.0, 7.0);
        let config = GaConfig::new(0.5, 1, 37, bounds).unwrap();
        let pop = Population::initialize(&config, &BananaFunction::new(), &mut rng);

        assert_eq!(pop.len(), 37);
        assert_eq!(pop.fitness().len(), 37);
        assert!(pop.chromosomes().iter().all(|c| c.is_within(&bounds)));
    }

    #[test]
    fn test_initialize_is_spread_out() {
        let mut rng = StdRng::seed_from_u64(9);
        let config = GaConfig::new(0.5, 1, 200, Bounds::new(0.0, 1.0)).unwrap();
        let pop = Population::initialize(&config, &BananaFunction::new(), &mut rng);

        let mean_x1 = pop.chromosomes().iter().map(|c| c.x1()).sum::<f64>() / 200.0;
        assert!(mean_x1 > 0.3 && mean_x1 < 0.7, "mean x1 was {}", mean_x1);
        assert!(pop.diversity() > 0.1);
    }

    #[test]
    fn test_fitness_matches_objective() {
        let pop = population(&[(0.0, 0.0), (1.0, 1.0), (-1.0, 0.0)]);
        let objective = BananaFunction::new();
        for (chromosome, fitness) in pop.iter() {
            assert_eq!(fitness, objective.evaluate(chromosome));
        }
    }

    #[test]
    fn test_best_prefers_first_on_ties() {
        let pop = population(&[(-1.0, 0.0), (0.0, 0.0), (2.0, 4.0), (1.0, 1.0), (1.0, 1.0)]);
        assert_eq!(pop.best_index(), Some(3));
        assert_eq!(pop.best(), Some((Chromosome::new(1.0, 1.0), 0.0)));

        // (0,0) and (2,4) both score 1.0
        let tie = population(&[(-1.0, 0.0), (0.0, 0.0), (2.0, 4.0)]);
        assert_eq!(tie.best_index(), Some(1));
    }

    #[test]
    fn test_worst_and_mean() {
        let pop = population(&[(0.0, 0.0), (1.0, 1.0), (-1.0, 0.0)]);
        assert_eq!(pop.worst_fitness(), Some(5.0));
        assert_eq!(pop.best_fitness(), Some(0.0));
        assert_eq!(pop.mean_fitness(), Some(2.0));
        assert!(pop.fitness_std().unwrap() > 0.0);
    }

    #[test]
    fn test_empty_population() {
        let pop = population(&[]);
        assert!(pop.is_empty());
        assert_eq!(pop.best(), None);
        assert_eq!(pop.mean_fitness(), None);
        assert_eq!(pop.fitness_std(), None);
        assert_eq!(pop.diversity(), 0.0);
    }

    #[test]
    fn test_elites_are_best_first_and_stable() {
        let pop = population(&[(-1.0, 0.0), (0.0, 0.0), (1.0, 1.0), (2.0, 4.0)]);
        assert_eq!(pop.ranked_indices(), vec![2, 1, 3, 0]);
        assert_eq!(
            pop.elites(2),
            vec![Chromosome::new(1.0, 1.0), Chromosome::new(0.0, 0.0)]
        );
        assert_eq!(pop.elites(10).len(), 4);
    }

    #[test]
    fn test_rows_are_numbered_from_one() {
        let pop = population(&[(0.0, 0.0), (1.0, 1.0)]);
        let rows: Vec<PopulationRow> = pop.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            PopulationRow {
                number: 1,
                fitness: 1.0,
                gene1: 0.0,
                gene2: 0.0
            }
        );
        assert_eq!(rows[1].number, 2);
        assert_eq!(rows[1].fitness, 0.0);
    }
}
