//! Run configuration
//!
//! [`GaConfig`] is the validated, immutable parameter set the engine runs
//! with. [`RunConfig`] is the loose JSON form the command line reads; it
//! carries the mutation rate as a percentage, the way it is entered by hand.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::algorithms::generation::Variant;
use crate::error::{EvoResult, EvolutionError};
use crate::genome::bounds::Bounds;

/// One elite per this many chromosomes in the modified variant
pub const ELITE_DIVISOR: usize = 25;

/// Tournament size used by the modified variant
pub const TOURNAMENT_SIZE: usize = 3;

/// Validated genetic algorithm parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaConfig {
    mutation_rate: f64,
    generations: usize,
    chromosome_count: usize,
    bounds: Bounds,
}

impl GaConfig {
    /// Create a configuration, rejecting out-of-domain values
    pub fn new(
        mutation_rate: f64,
        generations: usize,
        chromosome_count: usize,
        bounds: Bounds,
    ) -> EvoResult<Self> {
        let bounds = Bounds::try_new(bounds.min, bounds.max)?;
        if !(0.0..=1.0).contains(&mutation_rate) {
            return Err(EvolutionError::Configuration(format!(
                "mutation_rate must be in [0, 1], got {}",
                mutation_rate
            )));
        }
        if generations < 1 {
            return Err(EvolutionError::Configuration(
                "generations must be at least 1".to_string(),
            ));
        }
        if chromosome_count < 2 {
            return Err(EvolutionError::Configuration(format!(
                "chromosome_count must be at least 2, got {}",
                chromosome_count
            )));
        }
        Ok(Self {
            mutation_rate,
            generations,
            chromosome_count,
            bounds,
        })
    }

    /// Per-gene mutation probability
    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// Number of generations a run performs
    pub fn generations(&self) -> usize {
        self.generations
    }

    /// Population size
    pub fn chromosome_count(&self) -> usize {
        self.chromosome_count
    }

    /// Interval every gene is drawn from
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Number of survivors carried over unchanged by the modified variant
    pub fn elite_count(&self) -> usize {
        (self.chromosome_count / ELITE_DIVISOR).max(1)
    }
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            mutation_rate: 0.5,
            generations: 100,
            chromosome_count: 50,
            bounds: Bounds::new(-46.0, 46.0),
        }
    }
}

/// Which variants the command line runs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantChoice {
    /// Uniform random parents, no elitism
    Standard,
    /// Elitism plus tournament selection
    Modified,
    /// Standard first, then modified
    #[default]
    Both,
}

impl VariantChoice {
    /// Variants to run, in order
    pub fn variants(&self) -> Vec<Variant> {
        match self {
            Self::Standard => vec![Variant::Standard],
            Self::Modified => vec![Variant::Modified],
            Self::Both => vec![Variant::Standard, Variant::Modified],
        }
    }
}

/// Unvalidated run parameters as read from JSON
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Mutation probability in percent (0-100)
    pub mutation_percent: f64,
    /// Population size
    pub chromosome_count: usize,
    /// Lower gene bound
    pub gene_min: f64,
    /// Upper gene bound
    pub gene_max: f64,
    /// Number of generations
    pub generations: usize,
    /// Random seed (None for an unseeded run)
    pub seed: Option<u64>,
    /// Which variants to run
    pub variant: VariantChoice,
    /// Print the final population table
    pub show_population: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            mutation_percent: 50.0,
            chromosome_count: 50,
            gene_min: -46.0,
            gene_max: 46.0,
            generations: 100,
            seed: None,
            variant: VariantChoice::Both,
            show_population: false,
        }
    }
}

impl RunConfig {
    /// Parse from a JSON string
    pub fn from_json_str(json: &str) -> EvoResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> EvoResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Pretty JSON, used to print an example configuration
    pub fn to_json_pretty(&self) -> EvoResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate and convert into engine parameters
    pub fn to_ga_config(&self) -> EvoResult<GaConfig> {
        if !(0.0..=100.0).contains(&self.mutation_percent) {
            return Err(EvolutionError::Configuration(format!(
                "mutation_percent must be in [0, 100], got {}",
                self.mutation_percent
            )));
        }
        let bounds = Bounds::try_new(self.gene_min, self.gene_max)?;
        GaConfig::new(
            self.mutation_percent / 100.0,
            self.generations,
            self.chromosome_count,
            bounds,
        )
    }
}
