//! Utility functions shared by the evaluation modules.

pub mod stats;

pub use stats::{fractional_ranks, mean, population_std_dev};
