use std::collections::HashMap;

use pyo3::{exceptions::PyValueError, prelude::*, wrap_pyfunction};

use crate::{error::Error, rules::rule::Rule, support::DEFAULT_MIN_SUPPORT};

/// `(created, source, target, confidence, support)`, `created` in RFC 3339.
type PyRule = (String, String, String, f64, f64);

pub fn convert_rules(rules: Vec<Rule<String>>) -> Vec<PyRule> {
    rules
        .into_iter()
        .map(|rule| {
            let (created, source, target, confidence, support) = rule.into_tuple();
            (created.to_rfc3339(), source, target, confidence, support)
        })
        .collect()
}

fn to_py_err(err: Error) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Association rules between pairs of items that occur together in baskets.
#[pyfunction]
#[pyo3(text_signature = "(transactions, min_sup=None)")]
fn calculate_support_confidence(
    py: Python,
    transactions: HashMap<String, Vec<String>>,
    min_sup: Option<f64>,
) -> PyResult<Vec<PyRule>> {
    let min_sup = min_sup.unwrap_or(DEFAULT_MIN_SUPPORT);
    let rules = py
        .allow_threads(|| crate::calculate_support_confidence(&transactions, min_sup))
        .map_err(to_py_err)?;
    Ok(convert_rules(rules))
}

#[pymodule]
fn seeded_recs(_: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(calculate_support_confidence, m)?)?;
    Ok(())
}
