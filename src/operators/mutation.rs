//! Mutation operators

use rand::Rng;

use crate::error::OperatorError;
use crate::genome::bounds::Bounds;
use crate::genome::chromosome::Chromosome;
use crate::operators::traits::MutationOperator;

/// Random-reset mutation
///
/// Each gene independently, with probability `mutation_rate`, is replaced by
/// a fresh uniform draw from the gene bounds. Other genes are copied as-is.
#[derive(Clone, Copy, Debug)]
pub struct ResetMutation {
    /// Per-gene mutation probability
    pub mutation_rate: f64,
}

impl ResetMutation {
    /// Create a new reset mutation
    pub fn new(mutation_rate: f64) -> Result<Self, OperatorError> {
        if !(0.0..=1.0).contains(&mutation_rate) {
            return Err(OperatorError::InvalidConfiguration(format!(
                "Mutation rate must be in [0, 1], got {}",
                mutation_rate
            )));
        }
        Ok(Self { mutation_rate })
    }
}

impl MutationOperator for ResetMutation {
    fn mutate<R: Rng>(&self, chromosome: &Chromosome, bounds: &Bounds, rng: &mut R) -> Chromosome {
        let mut genes = *chromosome.genes();
        for gene in genes.iter_mut() {
            if rng.gen_bool(self.mutation_rate) {
                *gene = bounds.sample(rng);
            }
        }
        Chromosome::from(genes)
    }

    fn mutation_probability(&self) -> f64 {
        self.mutation_rate
    }
}
