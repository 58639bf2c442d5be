//! Evolutionary algorithms
//!
//! This module provides the generation step of both variants, the driver
//! that runs them, and a side-by-side comparison.

pub mod comparison;
pub mod driver;
pub mod generation;

pub mod prelude {
    pub use super::comparison::*;
    pub use super::driver::*;
    pub use super::generation::*;
}
