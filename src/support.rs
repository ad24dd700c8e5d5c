#![allow(non_snake_case)]

//! Support threshold helpers shared by the counting stages.

use std::hash::Hash;

use crate::{
    error::{Error, Result},
    types::{SingletonCounts, SupportCount},
};

pub const DEFAULT_MIN_SUPPORT: f64 = 0.01;

/// `min_sup` must be a finite fraction in `[0, 1)`.
pub fn validate_min_support(min_sup: f64) -> Result<()> {
    if min_sup.is_finite() && (0.0..1.0).contains(&min_sup) {
        Ok(())
    } else {
        Err(Error::InvalidInput(format!(
            "min_sup must be in [0, 1), got {}",
            min_sup
        )))
    }
}

/// Absolute support threshold `min_sup * N`. Counts must strictly exceed it.
pub fn min_support_count(min_sup: f64, N: usize) -> f64 {
    min_sup * N as f64
}

pub fn is_frequent(count: SupportCount, threshold: f64) -> bool {
    count as f64 > threshold
}

/// Whether `item` survived singleton pruning. A missing item is simply
/// unsupported.
pub fn has_support<T: Eq + Hash>(item: &T, singletons: &SingletonCounts<T>) -> bool {
    singletons.contains_key(item)
}
