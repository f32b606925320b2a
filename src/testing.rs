//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

use std::collections::BTreeSet;

use rust_decimal::Decimal;

use crate::types::{AddOn, RateCard};

/// Rate card from whole-number prices. `None` leaves a tier off.
pub fn rate_card(daily: i64, weekly: Option<i64>, monthly: Option<i64>) -> RateCard {
    RateCard {
        daily_rate: Decimal::from(daily),
        weekly_rate: weekly.map(Decimal::from),
        monthly_rate: monthly.map(Decimal::from),
    }
}

/// The rate card used throughout the pricing examples: 20000/day,
/// 126000/week (18000/day), 480000/month (16000/day).
pub fn compact_car() -> RateCard {
    rate_card(20000, Some(126_000), Some(480_000))
}

/// Add-on selection from a slice.
pub fn add_ons(selected: &[AddOn]) -> BTreeSet<AddOn> {
    selected.iter().copied().collect()
}

/// No extras.
pub fn no_add_ons() -> BTreeSet<AddOn> {
    BTreeSet::new()
}

/// Owned corpus from string literals.
pub fn corpus(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| s.to_string()).collect()
}
