// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! Everything works on small in-memory lists (makes, body types, feature
//! tags) with no index. `levenshtein` holds the distance math; `search`,
//! `suggest` and `autocorrect` are the three things a search box needs;
//! `Matcher` bundles their settings.

pub mod autocorrect;
mod levenshtein;
mod matcher;
mod search;
pub mod suggest;

pub use autocorrect::{auto_correct, AutoCorrector, TypoCorrection, TYPO_CORRECTIONS};
pub use levenshtein::*;
pub use matcher::Matcher;
#[cfg(feature = "parallel")]
pub use search::fuzzy_search_par;
pub use search::{fuzzy_match, fuzzy_search, search_items, Searchable, DEFAULT_THRESHOLD};
pub use suggest::{
    score_suggestion, suggest, suggest_scored, Suggestion, DEFAULT_MAX_SUGGESTIONS,
};
