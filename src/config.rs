//! Mining parameters.
//!
//! Everything a run needs is passed in explicitly; nothing is read from the
//! environment. A host application that keeps its settings in a file can
//! deserialize a [`Config`] straight from it, missing fields take defaults.

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    persist::MAX_KIND_LEN,
    support::{validate_min_support, DEFAULT_MIN_SUPPORT},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fraction of baskets an item must strictly exceed to be frequent.
    pub min_sup: f64,
    /// Count baskets on the rayon pool instead of the calling thread.
    pub parallel: bool,
    /// Label written to the `type` column of stored rules.
    pub kind: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_sup: DEFAULT_MIN_SUPPORT,
            parallel: true,
            kind: String::new(),
        }
    }
}

impl Config {
    pub fn with_min_sup(mut self, min_sup: f64) -> Self {
        self.min_sup = min_sup;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_min_support(self.min_sup)?;
        let len = self.kind.chars().count();
        if len > MAX_KIND_LEN {
            return Err(Error::InvalidInput(format!(
                "kind {:?} is {} characters, at most {} allowed",
                self.kind, len, MAX_KIND_LEN
            )));
        }
        Ok(())
    }
}
