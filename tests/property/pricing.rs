//! Invariants of the pricing engine.

use carlot::{compute_price, AddOn, RateCard, RateTier};
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::common::{add_ons, rate_card};

fn card() -> impl Strategy<Value = RateCard> {
    (
        1i64..100_000,
        prop::option::of(1i64..700_000),
        prop::option::of(1i64..3_000_000),
    )
        .prop_map(|(daily, weekly, monthly)| rate_card(daily, weekly, monthly))
}

fn selection() -> impl Strategy<Value = Vec<AddOn>> {
    prop::sample::subsequence(AddOn::ALL.to_vec(), 0..=4)
}

proptest! {
    #[test]
    fn prop_breakdown_adds_up(card in card(), days in 1i64..400, extras in selection()) {
        let quote = compute_price(&card, days, &add_ons(&extras)).unwrap();
        let days = Decimal::from(days);

        prop_assert_eq!(quote.base_amount, quote.effective_daily_rate * days);
        prop_assert_eq!(quote.add_on_total, quote.add_on_amounts.values().copied().sum::<Decimal>());
        prop_assert_eq!(quote.subtotal, quote.base_amount + quote.add_on_total);
        prop_assert_eq!(quote.total_amount, quote.subtotal + quote.tax_amount);
        prop_assert_eq!(quote.add_on_amounts.len(), extras.len());
    }

    #[test]
    fn prop_never_above_daily_rate(card in card(), days in 1i64..400) {
        let quote = compute_price(&card, days, &add_ons(&[])).unwrap();
        prop_assert!(quote.effective_daily_rate <= card.daily_rate);
        prop_assert!(quote.discount_amount >= Decimal::ZERO);
        // Undiscounted price is recoverable, up to division rounding
        prop_assert_eq!(
            (quote.base_amount + quote.discount_amount).round_dp(10),
            card.daily_rate * Decimal::from(days)
        );
    }

    #[test]
    fn prop_tier_matches_duration(card in card(), days in 1i64..400) {
        let quote = compute_price(&card, days, &add_ons(&[])).unwrap();
        match quote.applied_tier {
            RateTier::Daily => prop_assert!(!quote.has_discount()),
            RateTier::Weekly => prop_assert!(days >= 7),
            RateTier::Monthly => prop_assert!(days >= 30),
        }
    }

    #[test]
    fn prop_zero_days_is_free(card in card(), extras in selection()) {
        let quote = compute_price(&card, 0, &add_ons(&extras)).unwrap();
        prop_assert_eq!(quote.total_amount, Decimal::ZERO);
        prop_assert_eq!(quote.effective_daily_rate, card.daily_rate);
    }
}
