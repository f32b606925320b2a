// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A configured matcher: threshold, suggestion limit and typo table bundled
//! so a search box can set them once and reuse them for every keystroke.

use tracing::debug;

use super::autocorrect::AutoCorrector;
use super::search::{fuzzy_match, fuzzy_search, Searchable, DEFAULT_THRESHOLD};
use super::suggest::{suggest, suggest_scored, Suggestion, DEFAULT_MAX_SUGGESTIONS};
use crate::config::MatcherSettings;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub struct Matcher {
    threshold: f64,
    max_suggestions: usize,
    corrector: AutoCorrector,
}

impl Default for Matcher {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            corrector: AutoCorrector::default(),
        }
    }
}

impl Matcher {
    /// Matcher from validated settings.
    pub fn new(settings: &MatcherSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            threshold: settings.threshold,
            max_suggestions: settings.max_suggestions,
            corrector: AutoCorrector::with_custom(&settings.typo_corrections),
        })
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_max_suggestions(mut self, max_suggestions: usize) -> Self {
        self.max_suggestions = max_suggestions;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn max_suggestions(&self) -> usize {
        self.max_suggestions
    }

    pub fn is_match(&self, query: &str, text: &str) -> bool {
        fuzzy_match(query, text, self.threshold)
    }

    pub fn search<'a, T, F, I>(&self, items: &'a [T], query: &str, extract: F) -> Vec<&'a T>
    where
        F: Fn(&'a T) -> I,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        fuzzy_search(items, query, extract, self.threshold)
    }

    pub fn search_items<'a, T: Searchable>(&self, items: &'a [T], query: &str) -> Vec<&'a T> {
        self.search(items, query, |item: &'a T| item.search_fields())
    }

    pub fn suggest<S: AsRef<str>>(&self, query: &str, options: &[S]) -> Vec<String> {
        suggest(query, options, self.max_suggestions)
    }

    pub fn suggest_scored<S: AsRef<str>>(&self, query: &str, options: &[S]) -> Vec<Suggestion> {
        suggest_scored(query, options, self.max_suggestions)
    }

    pub fn correct(&self, query: &str) -> String {
        self.corrector.correct(query)
    }

    /// Search with the query as typed; if nothing matches, retry once with
    /// the autocorrected query.
    ///
    /// The second value is the corrected query when the retry happened.
    pub fn search_corrected<'a, T, F, I>(
        &self,
        items: &'a [T],
        query: &str,
        extract: F,
    ) -> (Vec<&'a T>, Option<String>)
    where
        F: Fn(&'a T) -> I + Copy,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let hits = self.search(items, query, extract);
        if !hits.is_empty() {
            return (hits, None);
        }
        let corrected = self.correct(query);
        if corrected.eq_ignore_ascii_case(query) {
            return (hits, None);
        }
        debug!(%query, %corrected, "no hits, retrying with corrected query");
        (self.search(items, &corrected, extract), Some(corrected))
    }
}
