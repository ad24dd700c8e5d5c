#![allow(non_snake_case)]

use std::hash::Hash;

use chrono::{DateTime, Utc};
use log::{info, warn};

use crate::{
    config::Config,
    error::Result,
    itemsets::count::{count_pairs, count_singletons},
    rules::{generate::generate_rules_at, rule::Rule},
    types::{Item, Transactions},
};

/// Runs the three counting stages with a validated [`Config`].
#[derive(Debug, Clone)]
pub struct Miner {
    config: Config,
}

impl Miner {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn mine<K, T>(&self, transactions: &Transactions<K, T>) -> Result<Vec<Rule<T>>>
    where
        K: Eq + Hash + Sync,
        T: Item,
    {
        self.mine_at(transactions, Utc::now())
    }

    /// Like [`Miner::mine`] with a fixed timestamp, so repeated runs over the
    /// same baskets give identical output.
    pub fn mine_at<K, T>(
        &self,
        transactions: &Transactions<K, T>,
        created: DateTime<Utc>,
    ) -> Result<Vec<Rule<T>>>
    where
        K: Eq + Hash + Sync,
        T: Item,
    {
        let N = transactions.len();
        let Config {
            min_sup, parallel, ..
        } = self.config;

        info!("Mining rules from {} baskets, min_sup = {}", N, min_sup);
        if N == 0 {
            warn!("Transaction set is empty, no rules to generate");
            return Ok(vec![]);
        }

        let singletons = count_singletons(transactions, min_sup, parallel)?;
        let pairs = count_pairs(transactions, &singletons, parallel);
        let rules = generate_rules_at(&singletons, &pairs, N, created)?;

        info!("Mined {} rules", rules.len());
        Ok(rules)
    }
}
