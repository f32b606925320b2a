//! Corpus filtering over plain labels and multi-field items.

use carlot::{fuzzy_search, search_items, DEFAULT_THRESHOLD};

use crate::common::{corpus, fleet, titles, Vehicle};

#[test]
fn test_word_level_typo() {
    let items = ["Toyota Camry", "Honda Civic"];
    let hits = fuzzy_search(&items, "civc", |s| [*s], DEFAULT_THRESHOLD);
    assert_eq!(hits, vec![&"Honda Civic"]);
}

#[test]
fn test_whole_string_similarity_fallback() {
    // "hondacivic" is half of either word, so only the full label is close
    let words = ["Honda", "Civic"];
    assert!(fuzzy_search(&words, "hondacivic", |s| [*s], DEFAULT_THRESHOLD).is_empty());

    let items = ["Honda Civic", "Toyota Camry"];
    let hits = fuzzy_search(&items, "hondacivic", |s| [*s], DEFAULT_THRESHOLD);
    assert_eq!(hits, vec![&"Honda Civic"]);
}

#[test]
fn test_blank_query_returns_everything() {
    let items = corpus(&["Toyota", "Honda", "Ford"]);
    for query in ["", "   ", "\t"] {
        let hits = fuzzy_search(&items, query, |s| [s.as_str()], DEFAULT_THRESHOLD);
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0], "Toyota");
        assert_eq!(hits[2], "Ford");
    }
}

#[test]
fn test_empty_corpus() {
    let items: Vec<String> = Vec::new();
    assert!(fuzzy_search(&items, "toyota", |s| [s.as_str()], DEFAULT_THRESHOLD).is_empty());
}

#[test]
fn test_query_is_trimmed_and_case_folded() {
    let items = ["Land Rover", "Range Rover"];
    let hits = fuzzy_search(&items, "  LAND ", |s| [*s], DEFAULT_THRESHOLD);
    assert_eq!(hits, vec![&"Land Rover"]);
}

#[test]
fn test_order_is_preserved() {
    let items = ["Manual", "Automatic", "Manual transmission"];
    let hits = fuzzy_search(&items, "manual", |s| [*s], DEFAULT_THRESHOLD);
    assert_eq!(hits, vec![&"Manual", &"Manual transmission"]);
}

#[test]
fn test_any_field_can_match() {
    let cars = fleet();
    assert_eq!(titles(&search_items(&cars, "civc", DEFAULT_THRESHOLD)), ["Honda Civic"]);
    assert_eq!(
        titles(&search_items(&cars, "automtic", DEFAULT_THRESHOLD)),
        ["Toyota Camry", "Nissan Leaf"]
    );
    assert_eq!(
        titles(&search_items(&cars, "manual", DEFAULT_THRESHOLD)),
        ["Honda Civic", "Ford Transit", "Mazda MX-5 Miata"]
    );
}

#[test]
fn test_fields_are_matched_one_at_a_time() {
    let cars = fleet();

    // "toyota" and "camry" live in different fields
    assert!(search_items(&cars, "toyota camry", DEFAULT_THRESHOLD).is_empty());

    // A combined field sees both words
    let hits = fuzzy_search(&cars, "toyota camry", |v: &Vehicle| [v.title()], DEFAULT_THRESHOLD);
    assert_eq!(titles(&hits), ["Toyota Camry"]);
}

#[test]
fn test_every_query_word_must_match() {
    let items = ["Toyota Camry Hybrid", "Toyota Corolla"];
    let hits = fuzzy_search(&items, "toyota hybrd", |s| [*s], DEFAULT_THRESHOLD);
    assert_eq!(hits, vec![&"Toyota Camry Hybrid"]);
}

#[test]
fn test_stricter_threshold_drops_typos() {
    let items = ["Nissan Leaf"];
    assert_eq!(fuzzy_search(&items, "leef", |s| [*s], 0.6).len(), 1);
    assert!(fuzzy_search(&items, "leef", |s| [*s], 0.9).is_empty());
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_search_matches_sequential() {
    use carlot::fuzzy_search_par;

    let items = carlot::corpus::default_corpus();
    for query in ["auto", "hond", "sedn", "seats", "x"] {
        let sequential = fuzzy_search(&items, query, |s| [s.as_str()], DEFAULT_THRESHOLD);
        let parallel = fuzzy_search_par(&items, query, |s| [s.as_str()], DEFAULT_THRESHOLD);
        assert_eq!(sequential, parallel, "query {:?}", query);
    }
}
