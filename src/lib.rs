//! Two-item association rules over baskets of items.
//!
//! A run counts the items that are frequent across all baskets, counts the
//! pairs of frequent items that share a basket, and turns every such pair
//! `{A, B}` into the rules `A => B` and `B => A`:
//!
//! - `support = count({A, B}) / N`
//! - `confidence = count({A, B}) / count({A})`
//!
//! where `N` is the number of baskets. An item is frequent when it appears
//! in strictly more than `min_sup * N` baskets.
//!
//! ```
//! use maplit::hashmap;
//!
//! let playlists = hashmap! {
//!     "p1" => vec!["A", "B"],
//!     "p2" => vec!["A", "B"],
//!     "p3" => vec!["A", "C"],
//! };
//! let rules = seeded_recs::calculate_support_confidence(&playlists, 0.34)?;
//!
//! assert_eq!(rules.len(), 2);
//! assert_eq!((rules[1].source, rules[1].target, rules[1].confidence), ("B", "A", 1.0));
//! # Ok::<(), seeded_recs::Error>(())
//! ```

mod combi;
pub mod config;
pub mod error;
pub mod itemsets;
pub mod miner;
pub mod persist;
pub mod rules;
pub mod support;
mod types;
#[cfg(feature = "python")]
mod wrapper;

use std::hash::Hash;

use chrono::{DateTime, Utc};

pub use config::Config;
pub use error::{Error, Result};
pub use itemsets::count::{extract_pairs, extract_singletons};
pub use miner::Miner;
pub use persist::{build_association_rules, BasketSource, RuleSink, SeededRec};
pub use rules::{
    generate::{generate_rules, generate_rules_at},
    rule::Rule,
};
pub use types::{Item, Pair, PairCounts, SingletonCounts, SupportCount, Transactions};

/// Mine rules from `transactions`, stamped with the current time and sorted.
/// An empty transaction set yields no rules.
pub fn calculate_support_confidence<K, T>(
    transactions: &Transactions<K, T>,
    min_sup: f64,
) -> Result<Vec<Rule<T>>>
where
    K: Eq + Hash + Sync,
    T: Item,
{
    Miner::new(Config::default().with_min_sup(min_sup))?.mine(transactions)
}

pub fn calculate_support_confidence_at<K, T>(
    transactions: &Transactions<K, T>,
    min_sup: f64,
    created: DateTime<Utc>,
) -> Result<Vec<Rule<T>>>
where
    K: Eq + Hash + Sync,
    T: Item,
{
    Miner::new(Config::default().with_min_sup(min_sup))?.mine_at(transactions, created)
}
