// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Table-driven correction of common misspellings.
//!
//! Lookup order:
//! 1. the whole lowercased query is a known typo → its correction
//! 2. the first table entry (in table order) whose typo occurs inside the
//!    query → that one occurrence is replaced, nothing else
//! 3. otherwise the query comes back untouched
//!
//! Step 2 stops at the first hit, so a query containing two different typos
//! is only partly corrected. Table order decides which one wins.
//!
//! Step 2 is plain substring search with no notion of words. A typo that is a
//! prefix of its own correction ("toyot" in "toyota") also fires on the
//! correctly spelled word, so `toyota camry` comes back as `toyotaa camry`.

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Built-in misspellings of makes, body types and features, in lookup order.
pub const TYPO_CORRECTIONS: &[(&str, &str)] = &[
    // Makes
    ("toyot", "toyota"),
    ("toyata", "toyota"),
    ("toyoto", "toyota"),
    ("hond", "honda"),
    ("hondo", "honda"),
    ("nisan", "nissan"),
    ("nissn", "nissan"),
    ("mercedez", "mercedes"),
    ("mercades", "mercedes"),
    ("bmv", "bmw"),
    ("volkswagon", "volkswagen"),
    ("volkwagen", "volkswagen"),
    ("chevorlet", "chevrolet"),
    ("chevrolette", "chevrolet"),
    ("hyundia", "hyundai"),
    ("hundai", "hyundai"),
    ("mazada", "mazda"),
    ("subaro", "subaru"),
    ("lexsus", "lexus"),
    ("porshe", "porsche"),
    ("ferari", "ferrari"),
    ("lamborgini", "lamborghini"),
    ("mitsubushi", "mitsubishi"),
    ("peugot", "peugeot"),
    ("renualt", "renault"),
    ("cadilac", "cadillac"),
    ("jagaur", "jaguar"),
    // Body types
    ("sedn", "sedan"),
    ("hatchbak", "hatchback"),
    ("convertable", "convertible"),
    ("pickup truck", "pickup"),
    // Features
    ("automatc", "automatic"),
    ("automtic", "automatic"),
    ("manuel", "manual"),
    ("hybird", "hybrid"),
    ("electic", "electric"),
    ("desiel", "diesel"),
    ("deisel", "diesel"),
];

/// One typo → correction pair, as written in config files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypoCorrection {
    pub typo: String,
    pub correction: String,
}

/// Ordered typo table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoCorrector {
    entries: Vec<(String, String)>,
}

impl Default for AutoCorrector {
    fn default() -> Self {
        Self::from_pairs(TYPO_CORRECTIONS.iter().copied())
    }
}

impl AutoCorrector {
    /// Table from pairs, keeping their order. Typos are stored lowercased.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let entries = pairs
            .into_iter()
            .map(|(typo, fix)| (typo.as_ref().to_lowercase(), fix.as_ref().to_string()))
            .filter(|(typo, _)| !typo.is_empty())
            .collect();
        Self { entries }
    }

    /// Built-in table with `custom` entries looked up first.
    pub fn with_custom(custom: &[TypoCorrection]) -> Self {
        let pairs = custom
            .iter()
            .map(|c| (c.typo.as_str(), c.correction.as_str()))
            .chain(TYPO_CORRECTIONS.iter().copied());
        Self::from_pairs(pairs)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Correct `query`, or return it unchanged.
    pub fn correct(&self, query: &str) -> String {
        let lowered = query.to_lowercase();

        if let Some((_, fix)) = self.entries.iter().find(|(typo, _)| *typo == lowered) {
            return fix.clone();
        }

        for (typo, fix) in &self.entries {
            if lowered.contains(typo.as_str()) {
                trace!(%typo, %fix, "partial autocorrect");
                return lowered.replacen(typo.as_str(), fix, 1);
            }
        }

        query.to_string()
    }
}

/// Correct `query` against the built-in table.
pub fn auto_correct(query: &str) -> String {
    AutoCorrector::default().correct(query)
}
