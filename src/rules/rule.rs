use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A directed rule `source => target` mined from one frequent pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule<T> {
    pub created: DateTime<Utc>,
    pub source: T,
    pub target: T,
    pub confidence: f64,
    pub support: f64,
}

impl<T: Ord> Rule<T> {
    /// Total order over `(created, source, target, confidence, support)`.
    pub fn cmp_fields(&self, other: &Self) -> Ordering {
        self.created
            .cmp(&other.created)
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.target.cmp(&other.target))
            .then_with(|| self.confidence.total_cmp(&other.confidence))
            .then_with(|| self.support.total_cmp(&other.support))
    }
}

impl<T> Rule<T> {
    pub fn into_tuple(self) -> (DateTime<Utc>, T, T, f64, f64) {
        (
            self.created,
            self.source,
            self.target,
            self.confidence,
            self.support,
        )
    }
}

pub fn sort_rules<T: Ord>(rules: &mut [Rule<T>]) {
    rules.sort_by(|a, b| a.cmp_fields(b));
}
