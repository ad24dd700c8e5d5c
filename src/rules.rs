//! Directed rules derived from frequent pairs.

pub mod generate;
pub mod rule;
