//! Crossover operators
//!
//! With only two genes, single-point crossover has exactly one cut: between
//! the first and second gene. The children swap their second genes.

use crate::genome::chromosome::Chromosome;
use crate::operators::traits::CrossoverOperator;

/// Single-point crossover for two-gene chromosomes
///
/// `(a1, a2) x (b1, b2) -> (a1, b2), (b1, a2)`. Deterministic.
#[derive(Clone, Copy, Debug, Default)]
pub struct GeneSwapCrossover;

impl GeneSwapCrossover {
    /// Create a new gene-swap crossover
    pub fn new() -> Self {
        Self
    }
}

impl CrossoverOperator for GeneSwapCrossover {
    fn crossover(&self, parent1: &Chromosome, parent2: &Chromosome) -> (Chromosome, Chromosome) {
        let child1 = Chromosome::new(parent1.x1(), parent2.x2());
        let child2 = Chromosome::new(parent2.x1(), parent1.x2());
        (child1, child2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gene_swap_crossover() {
        let p1 = Chromosome::new(1.0, 2.0);
        let p2 = Chromosome::new(3.0, 4.0);

        let (c1, c2) = GeneSwapCrossover::new().crossover(&p1, &p2);

        assert_eq!(c1, Chromosome::new(1.0, 4.0));
        assert_eq!(c2, Chromosome::new(3.0, 2.0));
    }

    #[test]
    fn test_crossover_leaves_parents_untouched() {
        let p1 = Chromosome::new(-7.5, 0.25);
        let p2 = Chromosome::new(12.0, -3.0);

        let _ = GeneSwapCrossover::new().crossover(&p1, &p2);

        assert_eq!(p1, Chromosome::new(-7.5, 0.25));
        assert_eq!(p2, Chromosome::new(12.0, -3.0));
    }

    #[test]
    fn test_crossover_with_itself_is_identity() {
        let p = Chromosome::new(0.5, -0.5);
        let (c1, c2) = GeneSwapCrossover::new().crossover(&p, &p);
        assert_eq!(c1, p);
        assert_eq!(c2, p);
    }

    #[test]
    fn test_crossover_twice_restores_parents() {
        let p1 = Chromosome::new(1.0, 2.0);
        let p2 = Chromosome::new(3.0, 4.0);
        let op = GeneSwapCrossover::new();

        let (c1, c2) = op.crossover(&p1, &p2);
        let (r1, r2) = op.crossover(&c1, &c2);

        assert_eq!((r1, r2), (p1, p2));
    }

    #[test]
    fn test_crossover_preserves_gene_multiset() {
        let p1 = Chromosome::new(1.0, 2.0);
        let p2 = Chromosome::new(3.0, 4.0);
        let (c1, c2) = GeneSwapCrossover::new().crossover(&p1, &p2);

        let mut parents = vec![p1.x1(), p1.x2(), p2.x1(), p2.x2()];
        let mut children = vec![c1.x1(), c1.x2(), c2.x1(), c2.x2()];
        parents.sort_by(|a, b| a.partial_cmp(b).unwrap());
        children.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(parents, children);
    }
}
