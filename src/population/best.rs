//! Best-ever solution tracking

use serde::Serialize;

use crate::genome::chromosome::Chromosome;
use crate::population::population::Population;

/// Lowest-fitness chromosome seen so far in a run
///
/// Starts empty with infinite fitness and only moves on a strict
/// improvement, so on a plateau the earliest find is kept.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BestSolution {
    chromosome: Option<Chromosome>,
    fitness: f64,
}

impl BestSolution {
    /// Nothing found yet
    pub fn new() -> Self {
        Self {
            chromosome: None,
            fitness: f64::INFINITY,
        }
    }

    /// Best chromosome, `None` before the first update
    pub fn chromosome(&self) -> Option<&Chromosome> {
        self.chromosome.as_ref()
    }

    /// Best fitness, `+inf` before the first update
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Check whether anything has been recorded
    pub fn is_found(&self) -> bool {
        self.chromosome.is_some()
    }

    /// Offer a candidate; returns `true` if it replaced the current best
    pub fn offer(&mut self, chromosome: Chromosome, fitness: f64) -> bool {
        if fitness < self.fitness {
            self.chromosome = Some(chromosome);
            self.fitness = fitness;
            true
        } else {
            false
        }
    }

    /// Offer the best member of a generation
    pub fn update_from(&mut self, population: &Population) -> bool {
        match population.best() {
            Some((chromosome, fitness)) => self.offer(chromosome, fitness),
            None => false,
        }
    }
}

impl Default for BestSolution {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::banana::BananaFunction;

    #[test]
    fn test_best_solution_starts_empty() {
        let best = BestSolution::new();
        assert!(!best.is_found());
        assert_eq!(best.chromosome(), None);
        assert_eq!(best.fitness(), f64::INFINITY);
    }

    #[test]
    fn test_offer_strict_improvement_only() {
        let mut best = BestSolution::new();
        assert!(best.offer(Chromosome::new(0.0, 0.0), 1.0));
        assert!(!best.offer(Chromosome::new(2.0, 4.0), 1.0));
        assert_eq!(best.chromosome(), Some(&Chromosome::new(0.0, 0.0)));
        assert!(!best.offer(Chromosome::new(-1.0, 0.0), 5.0));
        assert!(best.offer(Chromosome::new(1.0, 1.0), 0.0));
        assert_eq!(best.fitness(), 0.0);
    }

    #[test]
    fn test_update_from_population() {
        let objective = BananaFunction::new();
        let mut best = BestSolution::new();

        let first = Population::from_chromosomes(
            vec![Chromosome::new(-1.0, 0.0), Chromosome::new(0.0, 0.0)],
            &objective,
        );
        assert!(best.update_from(&first));
        assert_eq!(best.fitness(), 1.0);

        let worse = Population::from_chromosomes(vec![Chromosome::new(-1.0, 0.0)], &objective);
        assert!(!best.update_from(&worse));
        assert_eq!(best.fitness(), 1.0);

        let empty = Population::from_chromosomes(vec![], &objective);
        assert!(!best.update_from(&empty));
    }
}
