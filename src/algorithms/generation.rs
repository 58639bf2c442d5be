//! Generation step
//!
//! One call turns the current generation into the next one. Both variants
//! breed children two at a time from parents chosen in the *current*
//! generation, cross them over, mutate each child, then trim the surplus
//! child and evaluate the whole new population from scratch.
//!
//! - [`Variant::Standard`] picks parents uniformly at random.
//! - [`Variant::Modified`] first copies the best `elite_count` chromosomes
//!   unchanged, then picks parents by 3-way tournament.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::GaConfig;
use crate::error::EvoResult;
use crate::fitness::banana::BananaFunction;
use crate::genome::chromosome::Chromosome;
use crate::operators::crossover::GeneSwapCrossover;
use crate::operators::mutation::ResetMutation;
use crate::operators::selection::{RandomSelection, TournamentSelection};
use crate::operators::traits::{CrossoverOperator, MutationOperator, SelectionOperator};
use crate::population::population::Population;

/// Which generation step a run uses
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Uniform random parents, no elitism
    Standard,
    /// Elitism plus tournament selection
    Modified,
}

impl Variant {
    /// Both variants, standard first
    pub const ALL: [Variant; 2] = [Variant::Standard, Variant::Modified];

    /// Short lowercase name
    pub fn label(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Modified => "modified",
        }
    }

    /// Produce the next generation from `population`
    pub fn next_generation<R: Rng>(
        &self,
        population: &Population,
        config: &GaConfig,
        objective: &BananaFunction,
        rng: &mut R,
    ) -> EvoResult<Population> {
        match self {
            Self::Standard => standard_generation(population, config, objective, rng),
            Self::Modified => modified_generation(population, config, objective, rng),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Standard step: uniform random parents, every slot filled by offspring
pub fn standard_generation<R: Rng>(
    population: &Population,
    config: &GaConfig,
    objective: &BananaFunction,
    rng: &mut R,
) -> EvoResult<Population> {
    let next = Vec::with_capacity(config.chromosome_count() + 1);
    breed(population, next, &RandomSelection::new(), config, objective, rng)
}

/// Modified step: elites first, then tournament-selected offspring
pub fn modified_generation<R: Rng>(
    population: &Population,
    config: &GaConfig,
    objective: &BananaFunction,
    rng: &mut R,
) -> EvoResult<Population> {
    let mut next = Vec::with_capacity(config.chromosome_count() + 1);
    next.extend(population.elites(config.elite_count()));
    trace!(elites = next.len(), "carried elites into next generation");

    breed(
        population,
        next,
        &TournamentSelection::default(),
        config,
        objective,
        rng,
    )
}

fn breed<S, R>(
    parents: &Population,
    mut next: Vec<Chromosome>,
    selection: &S,
    config: &GaConfig,
    objective: &BananaFunction,
    rng: &mut R,
) -> EvoResult<Population>
where
    S: SelectionOperator,
    R: Rng,
{
    let crossover = GeneSwapCrossover::new();
    let mutation = ResetMutation::new(config.mutation_rate())?;
    let bounds = config.bounds();

    while next.len() < config.chromosome_count() {
        let parent1 = selection.select_chromosome(parents, rng)?;
        let parent2 = selection.select_chromosome(parents, rng)?;

        let (child1, child2) = crossover.crossover(&parent1, &parent2);

        next.push(mutation.mutate(&child1, bounds, rng));
        next.push(mutation.mutate(&child2, bounds, rng));
    }

    // Children come in pairs, so an odd remainder overshoots by one
    next.truncate(config.chromosome_count());

    Ok(Population::from_chromosomes(next, objective))
}
