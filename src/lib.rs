//! # banana-evo
//!
//! A small genetic algorithm that minimizes the banana function
//! `(x2 - x1²)² + (1 - x1)²` over two bounded real genes, in two variants
//! whose convergence can be compared side by side:
//!
//! - **Standard**: parents picked uniformly at random, every slot refilled
//!   by offspring.
//! - **Modified**: the best `max(1, n / 25)` chromosomes survive unchanged
//!   and parents are picked by 3-way tournament.
//!
//! Both variants share the chromosome model, gene-swap crossover and
//! random-reset mutation. Randomness is passed in as any [`rand::Rng`], so a
//! run can be seeded for reproducibility.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use banana_evo::prelude::*;
//!
//! let mut rng = rand::thread_rng();
//! let config = GaConfig::new(0.5, 100, 50, Bounds::new(-46.0, 46.0))?;
//!
//! let result = EvolutionDriver::new(config, Variant::Modified, NullSink).run(&mut rng)?;
//! println!("{} -> {:.6}", result.best.chromosome().unwrap(), result.best_fitness());
//! ```

pub mod algorithms;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod fitness;
pub mod genome;
pub mod operators;
pub mod population;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithms::prelude::*;
    pub use crate::config::*;
    pub use crate::diagnostics::prelude::*;
    pub use crate::error::*;
    pub use crate::fitness::prelude::*;
    pub use crate::genome::prelude::*;
    pub use crate::operators::prelude::*;
    pub use crate::population::prelude::*;
}
