//! Config files feeding the calculator and the matcher.

use std::io::Write;

use carlot::{AddOn, Config, Error, RateCard};
use rust_decimal_macros::dec;
use tempfile::NamedTempFile;

use crate::common::add_ons;

fn write_config(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"{
            "tariff": {"addOnRates": {"gps": 2500}, "taxRate": "0.08"},
            "matcher": {
                "threshold": 0.75,
                "maxSuggestions": 2,
                "typoCorrections": [{"typo": "beemer", "correction": "bmw"}]
            }
        }"#,
    );
    let config = Config::from_path(file.path()).unwrap();

    let quote = config
        .price_calculator()
        .unwrap()
        .compute(&RateCard::daily(dec!(10000)), 2, &add_ons(&[AddOn::Gps, AddOn::Insurance]))
        .unwrap();
    assert_eq!(quote.add_on_amounts[&AddOn::Gps], dec!(5000));
    assert_eq!(quote.add_on_amounts[&AddOn::Insurance], dec!(10000));
    assert_eq!(quote.tax_amount, dec!(2800));

    let matcher = config.matcher().unwrap();
    assert_eq!(matcher.threshold(), 0.75);
    assert_eq!(matcher.correct("beemer"), "bmw");
    assert_eq!(matcher.suggest("ford", &["Ford", "Ford Ka", "Ford Focus"]).len(), 2);
}

#[test]
fn test_empty_config_is_defaults() {
    let file = write_config("{}");
    let config = Config::from_path(file.path()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::from_path(dir.path().join("absent.json"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_malformed_json() {
    let file = write_config("{ tariff: ");
    assert!(matches!(Config::from_path(file.path()), Err(Error::Json(_))));
}

#[test]
fn test_out_of_range_values_rejected() {
    let bad_tax = write_config(r#"{"tariff": {"taxRate": 2}}"#);
    assert!(matches!(
        Config::from_path(bad_tax.path()),
        Err(Error::InvalidConfig(_))
    ));

    let bad_threshold = write_config(r#"{"matcher": {"threshold": 1.5}}"#);
    assert!(matches!(
        Config::from_path(bad_threshold.path()),
        Err(Error::InvalidConfig(_))
    ));
}
