//! Selection operators
//!
//! Uniform random selection drives the standard variant; tournament
//! selection drives the modified one. Both return the index of the chosen
//! individual in the current generation.

use rand::seq::index;
use rand::Rng;

use crate::config::TOURNAMENT_SIZE;
use crate::error::OperatorError;
use crate::operators::traits::SelectionOperator;
use crate::population::population::Population;

fn ensure_not_empty(population: &Population) -> Result<(), OperatorError> {
    if population.is_empty() {
        Err(OperatorError::SelectionFailed(
            "Population cannot be empty".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Tournament selection operator
///
/// Samples `tournament_size` distinct individuals and keeps the one with the
/// lowest fitness; on equal fitness the earliest sampled wins. When the
/// population is smaller than the tournament, the whole population competes.
#[derive(Clone, Debug)]
pub struct TournamentSelection {
    /// Tournament size (number of individuals competing)
    pub tournament_size: usize,
}

impl TournamentSelection {
    /// Create a new tournament selection with the given size
    pub fn new(tournament_size: usize) -> Result<Self, OperatorError> {
        if tournament_size < 1 {
            return Err(OperatorError::InvalidConfiguration(
                "Tournament size must be at least 1".to_string(),
            ));
        }
        Ok(Self { tournament_size })
    }

    /// Tournament size actually used for a population of `population_size`
    pub fn effective_size(&self, population_size: usize) -> usize {
        self.tournament_size.min(population_size)
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self {
            tournament_size: TOURNAMENT_SIZE,
        }
    }
}

impl SelectionOperator for TournamentSelection {
    fn select<R: Rng>(&self, population: &Population, rng: &mut R) -> Result<usize, OperatorError> {
        ensure_not_empty(population)?;

        let fitness = population.fitness();
        let size = self.effective_size(population.len());

        let mut winner: Option<usize> = None;
        for candidate in index::sample(rng, population.len(), size).iter() {
            match winner {
                Some(w) if fitness[w] <= fitness[candidate] => {}
                _ => winner = Some(candidate),
            }
        }

        winner.ok_or_else(|| OperatorError::SelectionFailed("Empty tournament".to_string()))
    }
}

/// Random selection (uniform, ignores fitness)
#[derive(Clone, Debug, Default)]
pub struct RandomSelection;

impl RandomSelection {
    /// Create a new random selection
    pub fn new() -> Self {
        Self
    }
}

impl SelectionOperator for RandomSelection {
    fn select<R: Rng>(&self, population: &Population, rng: &mut R) -> Result<usize, OperatorError> {
        ensure_not_empty(population)?;
        Ok(rng.gen_range(0..population.len()))
    }
}
