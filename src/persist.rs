//! Hand-off points to the collaborators around the miner: a
//! [`BasketSource`] that supplies baskets and a [`RuleSink`] that stores
//! rules as [`SeededRec`] rows.

use std::{fmt::Display, hash::Hash};

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    miner::Miner,
    rules::rule::Rule,
    types::{Item, Transactions},
};

/// `DECIMAL(10, 8)` columns for support and confidence.
pub const MAX_DIGITS: i32 = 10;
pub const DECIMAL_PLACES: i32 = 8;
/// Width of the `source` and `target` columns.
pub const MAX_ITEM_LEN: usize = 16;
/// Width of the `type` column.
pub const MAX_KIND_LEN: usize = 8;

/// One stored recommendation row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeededRec {
    pub created: DateTime<Utc>,
    pub source: String,
    pub target: String,
    pub support: f64,
    pub confidence: f64,
    #[serde(rename = "type")]
    pub kind: String,
}

impl SeededRec {
    pub fn from_rule<T: Display>(rule: &Rule<T>, kind: &str) -> Result<Self> {
        check_width("type", kind, MAX_KIND_LEN)?;
        Ok(Self {
            created: rule.created,
            source: encode_item("source", &rule.source)?,
            target: encode_item("target", &rule.target)?,
            support: to_decimal("support", rule.support)?,
            confidence: to_decimal("confidence", rule.confidence)?,
            kind: kind.to_string(),
        })
    }
}

fn encode_item<T: Display>(field: &'static str, item: &T) -> Result<String> {
    let encoded = item.to_string();
    check_width(field, &encoded, MAX_ITEM_LEN)?;
    Ok(encoded)
}

fn check_width(field: &'static str, value: &str, max: usize) -> Result<()> {
    let len = value.chars().count();
    if len > max {
        return Err(Error::FieldTooLong { field, len, max });
    }
    Ok(())
}

/// Round to the column's scale and check the integer digits still fit.
pub fn to_decimal(field: &'static str, value: f64) -> Result<f64> {
    let scale = 10f64.powi(DECIMAL_PLACES);
    let rounded = (value * scale).round() / scale;
    let limit = 10f64.powi(MAX_DIGITS - DECIMAL_PLACES);
    if !rounded.is_finite() || rounded.abs() >= limit {
        return Err(Error::PrecisionOverflow { field, value });
    }
    Ok(rounded)
}

/// Stores rules, e.g. as rows of a recommendations table.
pub trait RuleSink {
    fn save(&mut self, rec: SeededRec) -> Result<()>;
}

impl RuleSink for Vec<SeededRec> {
    fn save(&mut self, rec: SeededRec) -> Result<()> {
        self.push(rec);
        Ok(())
    }
}

/// Supplies the baskets of one run, e.g. every playlist with its songs.
pub trait BasketSource {
    type Key: Eq + Hash + Sync;
    type ItemId: Item + Display;

    fn transactions(&self) -> Result<Transactions<Self::Key, Self::ItemId>>;
}

impl<K, T> BasketSource for Transactions<K, T>
where
    K: Clone + Eq + Hash + Sync,
    T: Item + Display,
{
    type Key = K;
    type ItemId = T;

    fn transactions(&self) -> Result<Transactions<K, T>> {
        Ok(self.clone())
    }
}

/// Load baskets, mine them and store every rule. All rules are converted
/// before the first one is saved, so a rule that does not fit the table
/// leaves the sink untouched. Returns the number of rows saved.
pub fn build_association_rules<S, R>(source: &S, sink: &mut R, miner: &Miner) -> Result<usize>
where
    S: BasketSource,
    R: RuleSink,
{
    let transactions = source.transactions()?;
    let rules = miner.mine(&transactions)?;

    let kind = &miner.config().kind;
    let recs = rules
        .iter()
        .map(|rule| SeededRec::from_rule(rule, kind))
        .collect::<Result<Vec<_>>>()?;
    debug!("Converted {} rules for storage", recs.len());

    let saved = recs.len();
    for rec in recs {
        sink.save(rec)?;
    }

    info!("Saved {} rules", saved);
    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use chrono::TimeZone;
    use maplit::hashmap;

    struct FailingSink;

    impl RuleSink for FailingSink {
        fn save(&mut self, _rec: SeededRec) -> Result<()> {
            Err(Error::Sink("connection closed".to_string()))
        }
    }

    fn rule(source: u64, target: u64, confidence: f64, support: f64) -> Rule<u64> {
        Rule {
            created: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
            source,
            target,
            confidence,
            support,
        }
    }

    #[test]
    fn support_and_confidence_keep_their_columns() {
        let rec = SeededRec::from_rule(&rule(7, 9, 1.0, 0.25), "mpd").unwrap();
        assert_eq!(rec.source, "7");
        assert_eq!(rec.target, "9");
        assert_eq!(rec.confidence, 1.0);
        assert_eq!(rec.support, 0.25);
        assert_eq!(rec.kind, "mpd");
    }

    #[test]
    fn decimals_are_rounded_to_eight_places() {
        assert_eq!(to_decimal("confidence", 2.0 / 3.0).unwrap(), 0.66666667);
        assert_eq!(to_decimal("support", 99.999999994).unwrap(), 99.99999999);
    }

    #[test]
    fn decimals_that_overflow() {
        assert!(matches!(
            to_decimal("support", 100.0),
            Err(Error::PrecisionOverflow { field: "support", .. })
        ));
        assert!(matches!(
            to_decimal("support", 99.999999996),
            Err(Error::PrecisionOverflow { .. })
        ));
        assert!(matches!(
            to_decimal("confidence", f64::INFINITY),
            Err(Error::PrecisionOverflow { .. })
        ));
    }

    #[test]
    fn long_identifiers_are_rejected() {
        let rule = Rule {
            created: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
            source: "spotify:track:0UaMYEvWZi0ZqiDOoHU3YI",
            target: "B",
            confidence: 1.0,
            support: 1.0,
        };
        assert!(matches!(
            SeededRec::from_rule(&rule, ""),
            Err(Error::FieldTooLong { field: "source", max: 16, .. })
        ));
    }

    #[test]
    fn long_kind_is_rejected() {
        assert!(matches!(
            SeededRec::from_rule(&rule(1, 2, 0.5, 0.5), "recommendation"),
            Err(Error::FieldTooLong { field: "type", len: 14, max: 8 })
        ));
        assert!(SeededRec::from_rule(&rule(1, 2, 0.5, 0.5), "seeded").is_ok());
    }

    #[test]
    fn build_saves_every_rule() {
        let transactions = hashmap! {
            1 => vec![10u64, 20],
            2 => vec![10, 20],
            3 => vec![10, 30],
        };
        let miner = Miner::new(Config::default().with_min_sup(0.34)).unwrap();
        let mut sink: Vec<SeededRec> = vec![];

        let saved = build_association_rules(&transactions, &mut sink, &miner).unwrap();

        assert_eq!(saved, 2);
        let pairs: Vec<_> = sink
            .iter()
            .map(|rec| (rec.source.as_str(), rec.target.as_str(), rec.confidence))
            .collect();
        assert_eq!(pairs, vec![("10", "20", 0.66666667), ("20", "10", 1.0)]);
        assert!(sink.iter().all(|rec| rec.support == 0.66666667));
    }

    #[test]
    fn nothing_saved_when_a_rule_does_not_fit() {
        let transactions = hashmap! {
            "t1" => vec!["short", "an-identifier-that-is-too-long"],
        };
        let miner = Miner::new(Config::default()).unwrap();
        let mut sink: Vec<SeededRec> = vec![];

        let result = build_association_rules(&transactions, &mut sink, &miner);

        assert!(matches!(result, Err(Error::FieldTooLong { .. })));
        assert!(sink.is_empty());
    }

    #[test]
    fn sink_errors_propagate() {
        let transactions = hashmap! { "t1" => vec!["A", "B"] };
        let miner = Miner::new(Config::default()).unwrap();
        let result = build_association_rules(&transactions, &mut FailingSink, &miner);
        assert!(matches!(result, Err(Error::Sink(_))));
    }
}
