//! Side-by-side comparison of the two variants
//!
//! Runs the standard variant and then the modified one with the same
//! configuration, reporting both to the same sink.

use rand::Rng;
use serde::Serialize;
use tracing::info;

use crate::algorithms::driver::{EvolutionDriver, GenerationSink};
use crate::algorithms::generation::Variant;
use crate::config::GaConfig;
use crate::diagnostics::EvolutionResult;
use crate::error::EvoResult;

/// Results of running both variants
#[derive(Clone, Debug, Serialize)]
pub struct Comparison {
    /// Result of the standard variant
    pub standard: EvolutionResult,
    /// Result of the modified variant
    pub modified: EvolutionResult,
}

impl Comparison {
    /// Result for one variant
    pub fn result(&self, variant: Variant) -> &EvolutionResult {
        match variant {
            Variant::Standard => &self.standard,
            Variant::Modified => &self.modified,
        }
    }

    /// Variant with the strictly lower final best fitness, `None` on a tie
    pub fn winner(&self) -> Option<Variant> {
        let standard = self.standard.best_fitness();
        let modified = self.modified.best_fitness();
        if modified < standard {
            Some(Variant::Modified)
        } else if standard < modified {
            Some(Variant::Standard)
        } else {
            None
        }
    }
}

/// Run both variants, standard first, sharing one random source
pub fn compare_variants<S, R>(config: &GaConfig, sink: &mut S, rng: &mut R) -> EvoResult<Comparison>
where
    S: GenerationSink,
    R: Rng,
{
    let standard = EvolutionDriver::new(*config, Variant::Standard, &mut *sink).run(rng)?;
    let modified = EvolutionDriver::new(*config, Variant::Modified, &mut *sink).run(rng)?;

    let comparison = Comparison { standard, modified };
    info!(
        standard = comparison.standard.best_fitness(),
        modified = comparison.modified.best_fitness(),
        winner = ?comparison.winner(),
        "comparison finished"
    );
    Ok(comparison)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::driver::{NullSink, RecordingSink};
    use crate::genome::bounds::Bounds;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_compare_runs_both_variants() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = GaConfig::new(0.5, 8, 10, Bounds::new(-5.0, 5.0)).unwrap();
        let mut sink = RecordingSink::new();

        let comparison = compare_variants(&config, &mut sink, &mut rng).unwrap();

        assert_eq!(comparison.standard.variant, Variant::Standard);
        assert_eq!(comparison.modified.variant, Variant::Modified);
        assert_eq!(comparison.result(Variant::Standard).generations, 8);
        assert_eq!(comparison.result(Variant::Modified).generations, 8);
        assert_eq!(sink.generations.len(), 16);
        // Standard snapshots arrive first
        assert!(sink.generations[..8]
            .iter()
            .all(|g| g.variant == Variant::Standard));
        assert!(sink.generations[8..]
            .iter()
            .all(|g| g.variant == Variant::Modified));
    }

    #[test]
    fn test_winner_is_lower_fitness() {
        let mut rng = StdRng::seed_from_u64(2);
        let config = GaConfig::new(0.5, 5, 10, Bounds::new(-5.0, 5.0)).unwrap();
        let comparison = compare_variants(&config, &mut NullSink, &mut rng).unwrap();

        match comparison.winner() {
            Some(Variant::Modified) => assert!(
                comparison.modified.best_fitness() < comparison.standard.best_fitness()
            ),
            Some(Variant::Standard) => assert!(
                comparison.standard.best_fitness() < comparison.modified.best_fitness()
            ),
            None => assert_eq!(
                comparison.standard.best_fitness(),
                comparison.modified.best_fitness()
            ),
        }
    }

    #[test]
    fn test_winner_tie() {
        let mut rng = StdRng::seed_from_u64(3);
        let config = GaConfig::new(0.5, 2, 4, Bounds::new(-5.0, 5.0)).unwrap();
        let mut comparison = compare_variants(&config, &mut NullSink, &mut rng).unwrap();
        comparison.modified.best = comparison.standard.best;
        assert_eq!(comparison.winner(), None);
    }
}
