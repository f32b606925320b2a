// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Autocomplete suggestions: score every option, keep the best few.
//!
//! Scores are tiered so that a stronger kind of match always lands in a
//! higher band than a weaker one, with one deliberate exception: word hits
//! accumulate, so a multi-word option that prefix-matches several query
//! words can climb past a plain substring match.
//!
//! | Match                              | Score                |
//! |------------------------------------|----------------------|
//! | exact (case-insensitive)           | 100                  |
//! | option starts with query           | 90                   |
//! | option contains query              | 80                   |
//! | word hits (+10 prefix, +5 inside)  | 70 + hits            |
//! | similarity >= 0.7                  | similarity × 60 (42..60) |
//! | anything else                      | 0, dropped           |

use std::cmp::Ordering;

use serde::Serialize;

use super::levenshtein::similarity;
use crate::utils::{is_blank, normalize, words};

// =============================================================================
// SUGGESTION SCORING CONSTANTS
// =============================================================================

pub const EXACT_SCORE: f64 = 100.0;
pub const PREFIX_SCORE: f64 = 90.0;
pub const SUBSTRING_SCORE: f64 = 80.0;

/// Base score once at least one word hit is found.
pub const WORD_MATCH_BASE: f64 = 70.0;
pub const WORD_PREFIX_HIT: f64 = 10.0;
pub const WORD_SUBSTRING_HIT: f64 = 5.0;

/// Minimum whole-string similarity for a typo-only suggestion.
pub const SIMILARITY_FLOOR: f64 = 0.7;
pub const SIMILARITY_WEIGHT: f64 = 60.0;

/// Default number of suggestions returned.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// One ranked suggestion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub text: String,
    pub score: f64,
}

/// Score `option` against an already normalized query.
fn score_normalized(query: &str, option: &str) -> f64 {
    let option = option.to_lowercase();

    if option == query {
        return EXACT_SCORE;
    }
    if option.starts_with(query) {
        return PREFIX_SCORE;
    }
    if option.contains(query) {
        return SUBSTRING_SCORE;
    }

    let option_words = words(&option);
    let mut hits = 0.0;
    for qw in words(query) {
        for ow in &option_words {
            if ow.starts_with(qw) {
                hits += WORD_PREFIX_HIT;
            } else if ow.contains(qw) {
                hits += WORD_SUBSTRING_HIT;
            }
        }
    }
    if hits > 0.0 {
        return WORD_MATCH_BASE + hits;
    }

    let sim = similarity(query, &option);
    if sim >= SIMILARITY_FLOOR {
        sim * SIMILARITY_WEIGHT
    } else {
        0.0
    }
}

/// How well `option` answers `query`. Zero means "do not suggest".
pub fn score_suggestion(query: &str, option: &str) -> f64 {
    if is_blank(query) {
        return 0.0;
    }
    score_normalized(&normalize(query), option)
}

/// Ranked suggestions with their scores.
///
/// Highest score first; equal scores keep their order from `options`.
/// A blank query suggests nothing.
pub fn suggest_scored<S: AsRef<str>>(
    query: &str,
    options: &[S],
    max_suggestions: usize,
) -> Vec<Suggestion> {
    if is_blank(query) {
        return Vec::new();
    }
    let query = normalize(query);

    let mut scored: Vec<Suggestion> = options
        .iter()
        .map(|option| Suggestion {
            text: option.as_ref().to_string(),
            score: score_normalized(&query, option.as_ref()),
        })
        .filter(|s| s.score > 0.0)
        .collect();

    // sort_by is stable: ties stay in input order
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored.truncate(max_suggestions);
    scored
}

/// Up to `max_suggestions` options, best first.
pub fn suggest<S: AsRef<str>>(query: &str, options: &[S], max_suggestions: usize) -> Vec<String> {
    suggest_scored(query, options, max_suggestions)
        .into_iter()
        .map(|s| s.text)
        .collect()
}
