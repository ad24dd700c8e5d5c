use std::{collections::HashMap, hash::Hash};

use serde::{Deserialize, Serialize};

/// Anything usable as an item identifier.
pub trait Item: Clone + Eq + Hash + Ord + Send + Sync {}

impl<T> Item for T where T: Clone + Eq + Hash + Ord + Send + Sync {}

/// Basket identifier to the (possibly repeating) items of that basket.
pub type Transactions<K, T> = HashMap<K, Vec<T>>;

pub type SupportCount = usize;

/// Frequent 1-itemsets, keyed by their only item.
pub type SingletonCounts<T> = HashMap<T, SupportCount>;
/// Frequent 2-itemsets.
pub type PairCounts<T> = HashMap<Pair<T>, SupportCount>;

/// An unordered 2-itemset. The smaller item is always stored first so that
/// `{A, B}` and `{B, A}` hash and compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(T, T)", bound(deserialize = "T: Ord + Deserialize<'de>"))]
pub struct Pair<T>(T, T);

impl<T: Ord> From<(T, T)> for Pair<T> {
    fn from((a, b): (T, T)) -> Self {
        Pair::new(a, b)
    }
}

impl<T: Ord> Pair<T> {
    pub fn new(a: T, b: T) -> Self {
        if a <= b {
            Pair(a, b)
        } else {
            Pair(b, a)
        }
    }

    pub fn first(&self) -> &T {
        &self.0
    }

    pub fn second(&self) -> &T {
        &self.1
    }

    pub fn contains(&self, item: &T) -> bool {
        self.0 == *item || self.1 == *item
    }

    /// The member that is not `item`, or `None` if `item` is not in the pair.
    pub fn other(&self, item: &T) -> Option<&T> {
        if self.0 == *item {
            Some(&self.1)
        } else if self.1 == *item {
            Some(&self.0)
        } else {
            None
        }
    }
}

impl<T: Clone> Pair<&T> {
    pub fn cloned(&self) -> Pair<T> {
        Pair(self.0.clone(), self.1.clone())
    }
}
