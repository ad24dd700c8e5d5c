#![allow(non_snake_case)]

use crate::{
    combi::{dedup_basket, pair_step},
    error::Result,
    support::{has_support, is_frequent, min_support_count, validate_min_support},
    types::{Item, PairCounts, SingletonCounts, SupportCount, Transactions},
};
use log::debug;
use rayon::prelude::*;
use std::{collections::HashMap, hash::Hash};

/// Count frequent 1-itemsets, sharding the baskets across the rayon pool.
pub fn extract_singletons<K, T>(
    transactions: &Transactions<K, T>,
    min_sup: f64,
) -> Result<SingletonCounts<T>>
where
    K: Eq + Hash + Sync,
    T: Item,
{
    count_singletons(transactions, min_sup, true)
}

/// Count frequent 2-itemsets whose members are both in `singletons`.
pub fn extract_pairs<K, T>(
    transactions: &Transactions<K, T>,
    singletons: &SingletonCounts<T>,
) -> PairCounts<T>
where
    K: Eq + Hash + Sync,
    T: Item,
{
    count_pairs(transactions, singletons, true)
}

/// 1-itemsets. An item counts once per basket however often it repeats
/// there, and survives only if its count strictly exceeds `min_sup * N`.
pub fn count_singletons<K, T>(
    transactions: &Transactions<K, T>,
    min_sup: f64,
    parallel: bool,
) -> Result<SingletonCounts<T>>
where
    K: Eq + Hash + Sync,
    T: Item,
{
    validate_min_support(min_sup)?;

    let N = transactions.len();
    let threshold = min_support_count(min_sup, N);

    let item_counts = tally(transactions, parallel, |counts, basket| {
        for item in dedup_basket(basket) {
            *counts.entry(item).or_insert(0) += 1;
        }
    });
    let num_items = item_counts.len();

    // Prune
    let singletons: SingletonCounts<T> = item_counts
        .into_iter()
        .filter(|&(_, count)| is_frequent(count, threshold))
        .map(|(item, count)| (item.clone(), count))
        .collect();

    debug!(
        "{} baskets, {} distinct items, {} above support count {}",
        N,
        num_items,
        singletons.len(),
        threshold
    );

    Ok(singletons)
}

/// 2-itemsets. Items without support are dropped before pairs are formed,
/// so a pair is only ever counted when both members are frequent.
pub fn count_pairs<K, T>(
    transactions: &Transactions<K, T>,
    singletons: &SingletonCounts<T>,
    parallel: bool,
) -> PairCounts<T>
where
    K: Eq + Hash + Sync,
    T: Item,
{
    let pair_counts = tally(transactions, parallel, |counts, basket| {
        let items: Vec<&T> = dedup_basket(basket)
            .into_iter()
            .filter(|&item| has_support(item, singletons))
            .collect();
        if items.len() < 2 {
            return;
        }
        for pair in pair_step(&items) {
            *counts.entry(pair).or_insert(0) += 1;
        }
    });

    let pairs: PairCounts<T> = pair_counts
        .into_iter()
        .map(|(pair, count)| (pair.cloned(), count))
        .collect();

    debug!("{} frequent pairs", pairs.len());

    pairs
}

/// Run `count_basket` over every basket and sum the per-shard tallies.
fn tally<'t, K, T, X, F>(
    transactions: &'t Transactions<K, T>,
    parallel: bool,
    count_basket: F,
) -> HashMap<X, SupportCount>
where
    K: Eq + Hash + Sync,
    T: Item,
    X: Eq + Hash + Send,
    F: Fn(&mut HashMap<X, SupportCount>, &'t [T]) + Sync,
{
    if parallel {
        transactions
            .par_iter()
            .fold(HashMap::new, |mut counts, (_, basket)| {
                count_basket(&mut counts, basket.as_slice());
                counts
            })
            .reduce(HashMap::new, merge_counts)
    } else {
        let mut counts = HashMap::new();
        for basket in transactions.values() {
            count_basket(&mut counts, basket.as_slice());
        }
        counts
    }
}

fn merge_counts<X: Eq + Hash>(
    mut into: HashMap<X, SupportCount>,
    from: HashMap<X, SupportCount>,
) -> HashMap<X, SupportCount> {
    if into.len() < from.len() {
        return merge_counts(from, into);
    }
    for (key, count) in from {
        *into.entry(key).or_insert(0) += count;
    }
    into
}
