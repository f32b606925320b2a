// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Typo-tolerant filtering of small in-memory corpora.
//!
//! An item survives if any one of its text fields matches the query by one
//! of three tests, cheapest first:
//!
//! 1. **Substring** - the whole (lowercased, trimmed) query appears in the text
//! 2. **Per-word** - every query word is a substring of, or similar enough to,
//!    some word of the text
//! 3. **Whole string** - the query as a whole is similar enough to the text
//!
//! Filtering never reorders: the output is a subsequence of the input.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::trace;

use super::levenshtein::is_similar;
use crate::utils::{is_blank, normalize, words};

/// Default similarity threshold for `fuzzy_match` and `fuzzy_search`.
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// Types that know which of their strings are worth searching.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for String {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.as_str()]
    }
}

impl Searchable for &str {
    fn search_fields(&self) -> Vec<&str> {
        vec![*self]
    }
}

/// Does `text` contain `query` (ignoring case), or is it similar enough?
///
/// An empty query is contained in every string, so it always matches.
pub fn fuzzy_match(query: &str, text: &str, threshold: f64) -> bool {
    let query = query.to_lowercase();
    let text = text.to_lowercase();
    text.contains(&query) || is_similar(&query, &text, threshold)
}

/// A prepared query: normalized once, reused across the corpus.
struct Query<'q> {
    text: &'q str,
    words: Vec<&'q str>,
    threshold: f64,
}

impl<'q> Query<'q> {
    fn new(normalized: &'q str, threshold: f64) -> Self {
        Self {
            text: normalized,
            words: words(normalized),
            threshold,
        }
    }

    fn matches(&self, field: &str) -> bool {
        let field = field.to_lowercase();

        if field.contains(self.text) {
            return true;
        }

        let field_words = words(&field);
        let every_word_matches = self.words.iter().all(|qw| {
            field_words
                .iter()
                .any(|tw| tw.contains(qw) || is_similar(qw, tw, self.threshold))
        });
        if every_word_matches {
            return true;
        }

        is_similar(self.text, &field, self.threshold)
    }

    fn matches_any<I>(&self, fields: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        fields.into_iter().any(|field| self.matches(field.as_ref()))
    }
}

/// Keep the items that have at least one field matching `query`.
///
/// `extract` yields the searchable strings of an item (one or many). A blank
/// query returns every item in its original order.
///
/// # Example
///
/// ```
/// use carlot::fuzzy::fuzzy_search;
///
/// let cars = ["Toyota Camry", "Honda Civic"];
/// let hits = fuzzy_search(&cars, "civc", |car| [*car], 0.6);
/// assert_eq!(hits, vec![&"Honda Civic"]);
/// ```
pub fn fuzzy_search<'a, T, F, I>(
    items: &'a [T],
    query: &str,
    extract: F,
    threshold: f64,
) -> Vec<&'a T>
where
    F: Fn(&'a T) -> I,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    if is_blank(query) {
        return items.iter().collect();
    }

    let normalized = normalize(query);
    let prepared = Query::new(&normalized, threshold);

    let hits: Vec<&'a T> = items
        .iter()
        .filter(|&item| prepared.matches_any(extract(item)))
        .collect();

    trace!(query = %normalized, total = items.len(), kept = hits.len(), "fuzzy search");
    hits
}

/// `fuzzy_search` over a corpus of `Searchable` items.
pub fn search_items<'a, T: Searchable>(items: &'a [T], query: &str, threshold: f64) -> Vec<&'a T> {
    fuzzy_search(items, query, |item: &'a T| item.search_fields(), threshold)
}

/// `fuzzy_search` split across the rayon pool. Same results, same order.
#[cfg(feature = "parallel")]
pub fn fuzzy_search_par<'a, T, F, I>(
    items: &'a [T],
    query: &str,
    extract: F,
    threshold: f64,
) -> Vec<&'a T>
where
    T: Sync,
    F: Fn(&'a T) -> I + Sync + Send,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    if is_blank(query) {
        return items.iter().collect();
    }

    let normalized = normalize(query);
    let prepared = Query::new(&normalized, threshold);

    items
        .par_iter()
        .filter(|&item| prepared.matches_any(extract(item)))
        .collect()
}
