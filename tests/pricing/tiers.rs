//! Discount tier selection.
//!
//! A tier applies only when its per-day equivalent is strictly cheaper than
//! the rate in effect; a qualifying monthly tier replaces weekly outright.

use carlot::{compute_price, RateCard, RateTier};
use rust_decimal_macros::dec;

use crate::common::{compact_car, no_add_ons, rate_card};

#[test]
fn test_daily_only_five_days() {
    let quote = compute_price(&RateCard::daily(dec!(20000)), 5, &no_add_ons()).unwrap();

    assert_eq!(quote.applied_tier, RateTier::Daily);
    assert_eq!(quote.effective_daily_rate, dec!(20000));
    assert_eq!(quote.base_amount, dec!(100000));
    assert_eq!(quote.discount_amount, dec!(0));
    assert_eq!(quote.tax_amount, dec!(7750));
    assert_eq!(quote.total_amount, dec!(107750));
}

#[test]
fn test_weekly_tier_at_seven_days() {
    let card = rate_card(20000, Some(126_000), None);
    let quote = compute_price(&card, 7, &no_add_ons()).unwrap();

    assert_eq!(quote.applied_tier, RateTier::Weekly);
    assert_eq!(quote.effective_daily_rate, dec!(18000));
    assert_eq!(quote.base_amount, dec!(126000));
    assert_eq!(quote.discount_amount, dec!(14000));
}

#[test]
fn test_weekly_tier_needs_seven_days() {
    let card = rate_card(20000, Some(126_000), None);
    let quote = compute_price(&card, 6, &no_add_ons()).unwrap();

    assert_eq!(quote.applied_tier, RateTier::Daily);
    assert_eq!(quote.base_amount, dec!(120000));
    assert!(!quote.has_discount());
}

#[test]
fn test_weekly_rate_equal_to_daily_is_not_a_discount() {
    // 140000 / 7 == 20000: not strictly cheaper
    let card = rate_card(20000, Some(140_000), None);
    let quote = compute_price(&card, 10, &no_add_ons()).unwrap();

    assert_eq!(quote.applied_tier, RateTier::Daily);
    assert_eq!(quote.effective_daily_rate, dec!(20000));
    assert_eq!(quote.discount_amount, dec!(0));
}

#[test]
fn test_monthly_supersedes_weekly() {
    let quote = compute_price(&compact_car(), 30, &no_add_ons()).unwrap();

    assert_eq!(quote.applied_tier, RateTier::Monthly);
    assert_eq!(quote.effective_daily_rate, dec!(16000));
    assert_eq!(quote.base_amount, dec!(480000));
    // Measured against the raw 20000 daily rate, not the weekly 18000
    assert_eq!(quote.discount_amount, dec!(120000));
}

#[test]
fn test_twenty_nine_days_stays_weekly() {
    let quote = compute_price(&compact_car(), 29, &no_add_ons()).unwrap();

    assert_eq!(quote.applied_tier, RateTier::Weekly);
    assert_eq!(quote.base_amount, dec!(522000));
    assert_eq!(quote.discount_amount, dec!(58000));
}

#[test]
fn test_monthly_not_cheaper_than_weekly_keeps_weekly() {
    // weekly 15000/day beats monthly 16000/day
    let card = rate_card(20000, Some(105_000), Some(480_000));
    let quote = compute_price(&card, 30, &no_add_ons()).unwrap();

    assert_eq!(quote.applied_tier, RateTier::Weekly);
    assert_eq!(quote.effective_daily_rate, dec!(15000));
    assert_eq!(quote.discount_amount, dec!(150000));
}

#[test]
fn test_monthly_without_weekly() {
    let card = rate_card(20000, None, Some(480_000));

    let short = compute_price(&card, 14, &no_add_ons()).unwrap();
    assert_eq!(short.applied_tier, RateTier::Daily);

    let long = compute_price(&card, 45, &no_add_ons()).unwrap();
    assert_eq!(long.applied_tier, RateTier::Monthly);
    assert_eq!(long.base_amount, dec!(720000));
    assert_eq!(long.discount_amount, dec!(180000));
}

#[test]
fn test_uneven_weekly_rate_stays_exact_enough() {
    // 100000 / 7 does not terminate; the breakdown keeps full precision
    let card = rate_card(20000, Some(100_000), None);
    let quote = compute_price(&card, 7, &no_add_ons()).unwrap();

    assert_eq!(quote.base_amount.round_dp(2), dec!(100000.00));
    assert_eq!(quote.discount_amount.round_dp(2), dec!(40000.00));
}

#[test]
fn test_savings_percent() {
    let quote = compute_price(&compact_car(), 30, &no_add_ons()).unwrap();
    assert_eq!(quote.savings_percent(), dec!(20));

    let daily = compute_price(&compact_car(), 3, &no_add_ons()).unwrap();
    assert_eq!(daily.savings_percent(), dec!(0));
}
