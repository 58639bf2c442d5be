//! Bounds for gene values
//!
//! Every gene of every chromosome lives inside one closed interval
//! `[min, max]` shared by both genes.

use rand::Rng;
use rand_distr::{Distribution, Uniform};
use serde::{Deserialize, Serialize};

use crate::error::{EvoResult, EvolutionError};

/// Closed interval a gene is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Lower bound (inclusive)
    pub min: f64,
    /// Upper bound (inclusive)
    pub max: f64,
}

impl Bounds {
    /// Create new bounds
    ///
    /// # Panics
    /// Panics if `min >= max` or either bound is not finite. Use
    /// [`Bounds::try_new`] for values coming from user input.
    pub fn new(min: f64, max: f64) -> Self {
        match Self::try_new(min, max) {
            Ok(bounds) => bounds,
            Err(e) => panic!("{}", e),
        }
    }

    /// Create new bounds, rejecting empty or non-finite intervals
    ///
    /// The width `max - min` must also be finite.
    pub fn try_new(min: f64, max: f64) -> EvoResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(EvolutionError::Configuration(format!(
                "Invalid bounds: gene_min ({}) and gene_max ({}) must be finite",
                min, max
            )));
        }
        if min >= max {
            return Err(EvolutionError::Configuration(format!(
                "Invalid bounds: gene_min ({}) must be < gene_max ({})",
                min, max
            )));
        }
        if !(max - min).is_finite() {
            return Err(EvolutionError::Configuration(format!(
                "Invalid bounds: width of [{}, {}] overflows f64",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    /// Create symmetric bounds centered at 0
    pub fn symmetric(half_width: f64) -> Self {
        Self::new(-half_width, half_width)
    }

    /// Check if a value is within bounds
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Draw a gene uniformly from `[min, max]`
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        Uniform::new_inclusive(self.min, self.max).sample(rng)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::symmetric(46.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_bounds_new() {
        let b = Bounds::new(-5.0, 5.0);
        assert_eq!(b.min, -5.0);
        assert_eq!(b.max, 5.0);
    }

    #[test]
    #[should_panic(expected = "Invalid bounds")]
    fn test_bounds_invalid() {
        Bounds::new(5.0, -5.0);
    }

    #[test]
    fn test_bounds_try_new_rejects_empty_interval() {
        assert!(Bounds::try_new(1.0, 1.0).is_err());
        assert!(Bounds::try_new(2.0, 1.0).is_err());
        assert!(Bounds::try_new(f64::NEG_INFINITY, 1.0).is_err());
        assert!(Bounds::try_new(0.0, f64::NAN).is_err());
        assert!(Bounds::try_new(-1e308, 1e308).is_err());
        assert!(Bounds::try_new(f64::MIN, f64::MAX).is_err());
        assert!(Bounds::try_new(-1e307, 1e307).is_ok());
    }

    #[test]
    fn test_bounds_revalidate_struct_literal() {
        let bad = Bounds { min: 5.0, max: -5.0 };
        assert!(Bounds::try_new(bad.min, bad.max).is_err());
    }

    #[test]
    fn test_bounds_symmetric() {
        let b = Bounds::symmetric(3.0);
        assert_eq!(b.min, -3.0);
        assert_eq!(b.max, 3.0);
    }

    #[test]
    fn test_bounds_default_matches_reference_interval() {
        assert_eq!(Bounds::default(), Bounds::new(-46.0, 46.0));
    }

    #[test]
    fn test_bounds_contains() {
        let b = Bounds::new(-5.0, 5.0);
        assert!(b.contains(0.0));
        assert!(b.contains(-5.0));
        assert!(b.contains(5.0));
        assert!(!b.contains(-5.1));
        assert!(!b.contains(5.1));
    }

    #[test]
    fn test_bounds_sample_stays_inside() {
        let mut rng = StdRng::seed_from_u64(7);
        let b = Bounds::new(-2.0, 3.0);
        for _ in 0..10_000 {
            assert!(b.contains(b.sample(&mut rng)));
        }
    }

    #[test]
    fn test_bounds_sample_covers_interval() {
        let mut rng = StdRng::seed_from_u64(11);
        let b = Bounds::new(0.0, 1.0);
        let samples: Vec<f64> = (0..10_000).map(|_| b.sample(&mut rng)).collect();
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        assert!((mean - 0.5).abs() < 0.02, "mean was {}", mean);
        assert!(samples.iter().any(|&s| s < 0.1));
        assert!(samples.iter().any(|&s| s > 0.9));
    }
}
