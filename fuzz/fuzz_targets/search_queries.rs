// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for corpus search, suggestions and autocorrect.
//!
//! Arbitrary queries and labels must never panic, search must return an
//! ordered subsequence of its input, and suggestions must respect the limit.

#![no_main]

use arbitrary::Arbitrary;
use carlot::{auto_correct, fuzzy_search, suggest_scored};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct SearchInput {
    query: String,
    labels: Vec<String>,
    threshold: u8,
    max: u8,
}

fuzz_target!(|input: SearchInput| {
    let query: String = input.query.chars().take(32).collect();
    let labels: Vec<String> = input
        .labels
        .iter()
        .take(32)
        .map(|l| l.chars().take(48).collect())
        .collect();
    let threshold = f64::from(input.threshold) / 255.0;

    let hits = fuzzy_search(&labels, &query, |s| [s.as_str()], threshold);
    let mut remaining = labels.iter();
    for hit in &hits {
        assert!(
            remaining.any(|label| std::ptr::eq(label, *hit)),
            "hit {:?} out of order",
            hit
        );
    }

    let max = usize::from(input.max % 8);
    let ranked = suggest_scored(&query, &labels, max);
    assert!(ranked.len() <= max);
    assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));

    // Exercised for panics only
    let _ = auto_correct(&query);
});
