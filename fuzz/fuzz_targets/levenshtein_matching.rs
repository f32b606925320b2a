// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for edit distance and similarity.
//!
//! Checks the metric axioms that the matcher quietly relies on: identity,
//! symmetry, the length bounds, and agreement between the full DP table and
//! the bounded early-exit variant.

#![no_main]

use arbitrary::Arbitrary;
use carlot::{edit_distance, levenshtein_within, similarity};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct MatchInput {
    a: String,
    b: String,
    max: u8,
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths to avoid timeouts (quadratic DP)
    let a: String = input.a.chars().take(64).collect();
    let b: String = input.b.chars().take(64).collect();
    let (a_len, b_len) = (a.chars().count(), b.chars().count());

    let d = edit_distance(&a, &b);

    // INVARIANT 1: symmetric, zero on identity
    assert_eq!(d, edit_distance(&b, &a));
    assert_eq!(edit_distance(&a, &a), 0);

    // INVARIANT 2: bounded by length difference and longer length
    assert!(d >= a_len.abs_diff(b_len), "{:?} vs {:?}: {}", a, b, d);
    assert!(d <= a_len.max(b_len), "{:?} vs {:?}: {}", a, b, d);

    // INVARIANT 3: bounded variant agrees with the full table
    let max = usize::from(input.max % 16);
    assert_eq!(levenshtein_within(&a, &b, max), d <= max);

    // INVARIANT 4: similarity stays in [0, 1] and is symmetric
    let s = similarity(&a, &b);
    assert!((0.0..=1.0).contains(&s), "similarity {} out of range", s);
    assert_eq!(s, similarity(&b, &a));
});
