//! Genome representation
//!
//! This module provides the chromosome type and the gene bounds it is drawn from.

pub mod bounds;
pub mod chromosome;

pub mod prelude {
    pub use super::bounds::*;
    pub use super::chromosome::*;
}
