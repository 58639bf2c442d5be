//! Fitness evaluation
//!
//! This module provides the objective every run minimizes.

pub mod banana;

pub mod prelude {
    pub use super::banana::*;
}
