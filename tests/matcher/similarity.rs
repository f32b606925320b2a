//! Similarity scores and single-pair matching.

use carlot::{edit_distance, fuzzy_match, levenshtein_within, similarity, DEFAULT_THRESHOLD};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_identical_and_empty() {
    assert_eq!(similarity("toyota", "toyota"), 1.0);
    assert_eq!(similarity("", ""), 1.0);
    assert_eq!(similarity("abc", ""), 0.0);
}

#[test]
fn test_case_insensitive() {
    assert_eq!(similarity("TOYOTA", "toyota"), 1.0);
    assert!(approx(similarity("Toyot", "toyota"), 5.0 / 6.0));
}

#[test]
fn test_relative_to_longer_string() {
    // kitten/sitting: 3 edits over 7 chars
    assert_eq!(edit_distance("kitten", "sitting"), 3);
    assert!(approx(similarity("kitten", "sitting"), 4.0 / 7.0));
}

#[test]
fn test_counts_characters_not_bytes() {
    assert_eq!(edit_distance("citroën", "citroen"), 1);
    assert!(approx(similarity("citroën", "citroen"), 6.0 / 7.0));
}

#[test]
fn test_bounded_distance_agrees() {
    let pairs = [("toyot", "toyota"), ("civc", "civic"), ("bmw", "audi")];
    for (a, b) in pairs {
        let d = edit_distance(a, b);
        assert!(levenshtein_within(a, b, d), "{} vs {} within {}", a, b, d);
        if d > 0 {
            assert!(!levenshtein_within(a, b, d - 1));
        }
    }
}

#[test]
fn test_fuzzy_match_substring() {
    assert!(fuzzy_match("toyota", "I drive a Toyota Camry", DEFAULT_THRESHOLD));
    assert!(fuzzy_match("CAMRY", "toyota camry", DEFAULT_THRESHOLD));
}

#[test]
fn test_fuzzy_match_typo() {
    assert!(fuzzy_match("toyot", "toyota", 0.6));
    assert!(fuzzy_match("toyta", "toyota", 0.6));
    assert!(!fuzzy_match("toyota", "honda", 0.6));
}

#[test]
fn test_fuzzy_match_threshold_is_inclusive() {
    // one edit over six chars, and not a substring
    assert!(fuzzy_match("toyta", "toyota", 5.0 / 6.0));
    assert!(!fuzzy_match("toyta", "toyota", 0.9));
}

#[test]
fn test_fuzzy_match_empty_query() {
    assert!(fuzzy_match("", "anything", DEFAULT_THRESHOLD));
    assert!(fuzzy_match("", "", DEFAULT_THRESHOLD));
}
