// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! JSON configuration for the tariff and the matcher.
//!
//! Every field is optional; a missing file section means built-in defaults.
//! The config is loaded once and handed to the calculator and matcher as a
//! value. Nothing reads it from a global.
//!
//! ```json
//! {
//!   "tariff": { "addOnRates": { "gps": 2500 }, "taxRate": "0.08" },
//!   "matcher": {
//!     "threshold": 0.7,
//!     "maxSuggestions": 8,
//!     "typoCorrections": [{ "typo": "beemer", "correction": "bmw" }]
//!   }
//! }
//! ```

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::fuzzy::{Matcher, TypoCorrection, DEFAULT_MAX_SUGGESTIONS, DEFAULT_THRESHOLD};
use crate::pricing::{PriceCalculator, Tariff};

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_max_suggestions() -> usize {
    DEFAULT_MAX_SUGGESTIONS
}

/// Matcher knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatcherSettings {
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
    /// Extra typo table entries, looked up before the built-in ones.
    #[serde(default)]
    pub typo_corrections: Vec<TypoCorrection>,
}

impl Default for MatcherSettings {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            typo_corrections: Vec::new(),
        }
    }
}

impl MatcherSettings {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(Error::invalid_config(format!(
                "matcher threshold must be between 0 and 1 (got {})",
                self.threshold
            )));
        }
        if self.max_suggestions == 0 {
            return Err(Error::invalid_config("maxSuggestions must be at least 1"));
        }
        for entry in &self.typo_corrections {
            if entry.typo.trim().is_empty() {
                warn!(correction = %entry.correction, "ignoring typo correction with empty typo");
            }
        }
        Ok(())
    }
}

/// Top-level config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub tariff: Tariff,
    #[serde(default)]
    pub matcher: MatcherSettings,
}

impl Config {
    /// Read and validate a config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: Config = content.parse()?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.tariff.validate()?;
        self.matcher.validate()
    }

    pub fn price_calculator(&self) -> Result<PriceCalculator> {
        PriceCalculator::new(self.tariff.clone())
    }

    pub fn matcher(&self) -> Result<Matcher> {
        Matcher::new(&self.matcher)
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}
