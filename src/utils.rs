//! Utility functions for string processing.

/// Lowercase and trim a query for matching.
///
/// Only case and surrounding whitespace are folded. Diacritics are kept, so
/// "Citroën" and "citroen" differ by one edit rather than matching exactly.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Split lowercased text into words on any run of whitespace.
pub fn words(value: &str) -> Vec<&str> {
    value.split_whitespace().collect()
}

/// True when the query has nothing to search for.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
