//! Population management
//!
//! This module provides the Population and BestSolution types.

pub mod best;
#[allow(clippy::module_inception)]
pub mod population;

pub mod prelude {
    pub use super::best::*;
    pub use super::population::*;
}
