//! Two-gene real-valued chromosome
//!
//! A chromosome is an immutable pair `(x1, x2)`. Operators never change one
//! in place; they build fresh chromosomes from copied gene values.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::genome::bounds::Bounds;

/// Candidate solution `(x1, x2)`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Chromosome {
    genes: [f64; 2],
}

impl Chromosome {
    /// Number of genes in every chromosome
    pub const GENE_COUNT: usize = 2;

    /// Create a chromosome from its two genes
    pub fn new(x1: f64, x2: f64) -> Self {
        Self { genes: [x1, x2] }
    }

    /// Draw both genes independently and uniformly from `bounds`
    pub fn random<R: Rng>(bounds: &Bounds, rng: &mut R) -> Self {
        let x1 = bounds.sample(rng);
        let x2 = bounds.sample(rng);
        Self::new(x1, x2)
    }

    /// First gene
    pub fn x1(&self) -> f64 {
        self.genes[0]
    }

    /// Second gene
    pub fn x2(&self) -> f64 {
        self.genes[1]
    }

    /// Both genes in order
    pub fn genes(&self) -> &[f64; 2] {
        &self.genes
    }

    /// Check that both genes lie inside `bounds`
    pub fn is_within(&self, bounds: &Bounds) -> bool {
        self.genes.iter().all(|&g| bounds.contains(g))
    }

    /// Euclidean distance to another chromosome
    pub fn distance(&self, other: &Self) -> f64 {
        self.genes
            .iter()
            .zip(other.genes.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt()
    }
}

impl From<(f64, f64)> for Chromosome {
    fn from((x1, x2): (f64, f64)) -> Self {
        Self::new(x1, x2)
    }
}

impl From<[f64; 2]> for Chromosome {
    fn from(genes: [f64; 2]) -> Self {
        Self { genes }
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X[1] = {:.6}, X[2] = {:.6}", self.x1(), self.x2())
    }
}
