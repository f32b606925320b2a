// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance and the similarity score built on it.
//!
//! `edit_distance` fills the full `(len(a)+1) × (len(b)+1)` table. Corpora
//! here are a few hundred short labels, so the quadratic cost per pair is
//! fine. Search only needs a yes/no answer against a threshold, so it goes
//! through `is_similar`, which turns the threshold into an edit budget and
//! stops early via `levenshtein_within`.
//!
//! Lengths are Unicode scalar values, not bytes: "é" is one character.

/// Classic Levenshtein distance (unit-cost insert, delete, substitute).
///
/// Case-sensitive. Callers that want case folding lowercase first, as
/// `similarity` does.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (n, m) = (a.len(), b.len());
    let width = m + 1;

    // Row-major (n+1) × (m+1) table; cell (i, j) is the distance between
    // the first i chars of a and the first j chars of b.
    let mut table = vec![0usize; (n + 1) * width];
    for i in 0..=n {
        table[i * width] = i;
    }
    for j in 0..=m {
        table[j] = j;
    }

    for i in 1..=n {
        for j in 1..=m {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            let deletion = table[(i - 1) * width + j] + 1;
            let insertion = table[i * width + j - 1] + 1;
            let substitution = table[(i - 1) * width + j - 1] + cost;
            table[i * width + j] = deletion.min(insertion).min(substitution);
        }
    }

    table[n * width + m]
}

/// Normalized similarity in `[0, 1]`: `(max_len - distance) / max_len`.
///
/// Both strings are lowercased first. Two empty strings are identical (1.0).
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let longer = a.chars().count().max(b.chars().count());
    if longer == 0 {
        return 1.0;
    }
    let distance = edit_distance(&a, &b);
    (longer - distance) as f64 / longer as f64
}

/// Are `a` and `b` at most `max` edits apart?
///
/// Same answer as `edit_distance(a, b) <= max`, but gives up as soon as the
/// answer is known: a length gap over `max` needs no table at all, and a
/// row whose smallest cell is over `max` can only grow from there.
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    let b: Vec<char> = b.chars().collect();
    if a.chars().count().abs_diff(b.len()) > max {
        return false;
    }

    // Single rolling row; `diag` holds the cell up and to the left.
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;
        let mut row_min = row[0];

        for (j, &bc) in b.iter().enumerate() {
            let above = row[j + 1];
            let substitution = diag + usize::from(ac != bc);
            row[j + 1] = substitution.min(above + 1).min(row[j] + 1);
            diag = above;
            row_min = row_min.min(row[j + 1]);
        }

        if row_min > max {
            return false;
        }
    }

    row[b.len()] <= max
}

/// `similarity(a, b) >= threshold`, decided with a bounded distance check.
///
/// The threshold and the longer length fix the largest distance that can
/// still pass, so pairs that are clearly too far apart are rejected without
/// filling a full table.
pub fn is_similar(a: &str, b: &str, threshold: f64) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let longer = a.chars().count().max(b.chars().count());
    if longer == 0 {
        return 1.0 >= threshold;
    }
    match edit_budget(longer, threshold) {
        Some(max) => levenshtein_within(&a, &b, max),
        None => false,
    }
}

/// Largest distance `d` with `(longer - d) / longer >= threshold`, computed
/// with the same float expression as `similarity`. `None` when even an
/// exact match falls short.
fn edit_budget(longer: usize, threshold: f64) -> Option<usize> {
    let passes = |d: usize| (longer - d) as f64 / longer as f64 >= threshold;
    if !passes(0) {
        return None;
    }
    let estimate = ((1.0 - threshold) * longer as f64).floor();
    let mut max = if estimate > 0.0 {
        (estimate as usize).min(longer)
    } else {
        0
    };
    while max > 0 && !passes(max) {
        max -= 1;
    }
    while max < longer && passes(max + 1) {
        max += 1;
    }
    Some(max)
}
