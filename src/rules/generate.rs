#![allow(non_snake_case)]

use chrono::{DateTime, Utc};
use log::debug;

use crate::{
    error::{Error, Result},
    rules::rule::{sort_rules, Rule},
    types::{Item, PairCounts, SingletonCounts},
};

/// Generate both directions of every frequent pair, stamped with the
/// current time.
pub fn generate_rules<T: Item>(
    singletons: &SingletonCounts<T>,
    pairs: &PairCounts<T>,
    N: usize,
) -> Result<Vec<Rule<T>>> {
    generate_rules_at(singletons, pairs, N, Utc::now())
}

/// Every rule of the run carries `created`. For a pair `{A, B}` this emits
/// `A => B` and `B => A`, skipping a direction whose source is not among
/// `singletons`. The result is sorted with [`sort_rules`].
pub fn generate_rules_at<T: Item>(
    singletons: &SingletonCounts<T>,
    pairs: &PairCounts<T>,
    N: usize,
    created: DateTime<Utc>,
) -> Result<Vec<Rule<T>>> {
    if N == 0 {
        return Err(Error::InvalidInput(
            "cannot generate rules from an empty transaction set".to_string(),
        ));
    }
    let N = N as f64;

    let mut rules = Vec::with_capacity(pairs.len() * 2);
    for (pair, &pair_count) in pairs {
        let directions = [(pair.first(), pair.second()), (pair.second(), pair.first())];
        for &(source, target) in directions.iter() {
            if let Some(&source_count) = singletons.get(source) {
                rules.push(Rule {
                    created,
                    source: source.clone(),
                    target: target.clone(),
                    confidence: pair_count as f64 / source_count as f64,
                    support: pair_count as f64 / N,
                });
            }
        }
    }

    sort_rules(&mut rules);
    debug!("{} rules from {} pairs", rules.len(), pairs.len());

    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Pair;
    use chrono::TimeZone;
    use maplit::hashmap;
    use std::collections::HashMap;

    #[test]
    fn test_two_directions_per_pair() {
        let singletons = hashmap! { "A" => 3, "B" => 2 };
        let pairs = hashmap! { Pair::new("A", "B") => 2 };
        let created = Utc.timestamp_opt(1_700_000_000, 0).unwrap();

        let rules = generate_rules_at(&singletons, &pairs, 3, created).unwrap();

        assert_eq!(
            rules,
            vec![
                Rule {
                    created,
                    source: "A",
                    target: "B",
                    confidence: 2.0 / 3.0,
                    support: 2.0 / 3.0,
                },
                Rule {
                    created,
                    source: "B",
                    target: "A",
                    confidence: 1.0,
                    support: 2.0 / 3.0,
                },
            ]
        );
    }

    #[test]
    fn test_shared_timestamp() {
        let singletons = hashmap! { 1 => 4, 2 => 3, 3 => 2 };
        let pairs = hashmap! {
            Pair::new(1, 2) => 2,
            Pair::new(2, 3) => 1,
        };
        let rules = generate_rules(&singletons, &pairs, 5).unwrap();
        assert_eq!(rules.len(), 4);
        assert!(rules.iter().all(|rule| rule.created == rules[0].created));
    }

    #[test]
    fn test_unsupported_source_is_skipped() {
        let singletons = hashmap! { "A" => 3 };
        let pairs = hashmap! { Pair::new("A", "B") => 1 };
        let rules = generate_rules(&singletons, &pairs, 3).unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!((rules[0].source, rules[0].target), ("A", "B"));
    }

    #[test]
    fn test_no_pairs_no_rules() {
        let singletons = hashmap! { "A" => 3 };
        let pairs: PairCounts<&str> = HashMap::new();
        assert!(generate_rules(&singletons, &pairs, 3).unwrap().is_empty());
    }

    #[test]
    fn test_zero_transactions_is_invalid() {
        let singletons: SingletonCounts<&str> = HashMap::new();
        let pairs: PairCounts<&str> = HashMap::new();
        assert!(matches!(
            generate_rules(&singletons, &pairs, 0),
            Err(Error::InvalidInput(_))
        ));
    }
}
