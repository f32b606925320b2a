//! Differential tests against `strsim`.

use carlot::{edit_distance, is_similar, levenshtein_within, similarity};
use proptest::prelude::*;

/// Short strings over a small alphabet, with some multi-byte characters, so
/// that collisions and edits are frequent.
fn word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abcëé ]{0,12}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_edit_distance_matches_strsim(a in word(), b in word()) {
        prop_assert_eq!(edit_distance(&a, &b), strsim::levenshtein(&a, &b));
    }

    #[test]
    fn prop_similarity_matches_normalized_levenshtein(a in word(), b in word()) {
        let expected = strsim::normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase());
        prop_assert!((similarity(&a, &b) - expected).abs() < 1e-9);
    }

    #[test]
    fn prop_bounded_distance_agrees(a in word(), b in word(), max in 0usize..6) {
        let d = strsim::levenshtein(&a, &b);
        prop_assert_eq!(levenshtein_within(&a, &b, max), d <= max);
    }

    #[test]
    fn prop_threshold_check_agrees_with_similarity(
        a in word(),
        b in word(),
        threshold in 0.0f64..=1.0,
    ) {
        let expected = strsim::normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase());
        prop_assert_eq!(is_similar(&a, &b, threshold), similarity(&a, &b) >= threshold);
        // strsim only as a sanity check away from the boundary
        if (expected - threshold).abs() > 1e-9 {
            prop_assert_eq!(is_similar(&a, &b, threshold), expected >= threshold);
        }
    }
}
