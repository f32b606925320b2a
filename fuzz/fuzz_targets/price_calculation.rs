// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for quote computation.
//!
//! Any rate card and duration either errors (negative input, or amounts too
//! large for a `Decimal`) or produces a breakdown whose parts add up and
//! whose tier never raises the price. Nothing panics.

#![no_main]

use std::collections::BTreeSet;

use arbitrary::Arbitrary;
use carlot::{compute_price, AddOn, Error, RateCard};
use libfuzzer_sys::fuzz_target;
use rust_decimal::Decimal;

#[derive(Debug, Arbitrary)]
struct PriceInput {
    daily: i64,
    weekly: Option<i64>,
    monthly: Option<i64>,
    /// Two decimal places of the rates
    cents: u8,
    days: i32,
    /// Push rates towards `Decimal::MAX`
    scale_up: bool,
    add_on_mask: u8,
}

fuzz_target!(|input: PriceInput| {
    let money = |v: i64| {
        let cents = i128::from(v) * 100 + i128::from(input.cents % 100);
        let rate = Decimal::from_i128_with_scale(cents, 2);
        if input.scale_up {
            rate * Decimal::from(1_000_000i64)
        } else {
            rate
        }
    };
    let card = RateCard {
        daily_rate: money(input.daily),
        weekly_rate: input.weekly.map(money),
        monthly_rate: input.monthly.map(money),
    };
    let add_ons: BTreeSet<AddOn> = AddOn::ALL
        .iter()
        .enumerate()
        .filter(|(i, _)| input.add_on_mask & (1 << i) != 0)
        .map(|(_, a)| *a)
        .collect();
    let days = i64::from(input.days);

    let negative = days < 0
        || card.daily_rate < Decimal::ZERO
        || card.weekly_rate.is_some_and(|r| r < Decimal::ZERO)
        || card.monthly_rate.is_some_and(|r| r < Decimal::ZERO);

    match compute_price(&card, days, &add_ons) {
        Err(Error::InvalidArgument(msg)) if msg == "amount overflows" => {
            assert!(!negative, "negative input reported as overflow: {:?}", card)
        }
        Err(_) => assert!(negative, "valid input rejected: {:?} {} days", card, days),
        Ok(quote) => {
            assert!(!negative, "negative input accepted: {:?} {} days", card, days);
            assert_eq!(quote.subtotal, quote.base_amount + quote.add_on_total);
            assert_eq!(quote.total_amount, quote.subtotal + quote.tax_amount);
            assert!(quote.effective_daily_rate <= card.daily_rate);
            assert!(quote.total_amount >= Decimal::ZERO);
        }
    }
});
