// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The arithmetic behind a rental quote.
//!
//! Tier precedence is the only subtle part. Weekly applies from 7 days,
//! monthly from 30, and each only if its per-day equivalent is strictly
//! cheaper than what is already being charged. When monthly wins, its
//! discount is measured against the raw daily rate, so it replaces the
//! weekly discount instead of stacking on top of it.
//!
//! ```text
//! effective = daily
//! days >= 7  && weekly/7   < effective  → discount = (effective - weekly/7)  × days
//! days >= 30 && monthly/30 < effective  → discount = (daily     - monthly/30) × days
//! base     = effective × days
//! subtotal = base + Σ add_on_rate × days
//! total    = subtotal × (1 + tax_rate)
//! ```

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;
use tracing::debug;

use super::tariff::Tariff;
use crate::error::{Error, Result};
use crate::types::{AddOn, PriceBreakdown, RateCard, RateTier, RentalRequest};

/// Minimum rental length for the weekly tier.
pub const WEEKLY_TIER_MIN_DAYS: i64 = 7;

/// Minimum rental length for the monthly tier.
pub const MONTHLY_TIER_MIN_DAYS: i64 = 30;

/// Quotes rentals against a fixed tariff.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceCalculator {
    tariff: Tariff,
}

impl PriceCalculator {
    /// Calculator for an explicit tariff. The tariff is validated here so a
    /// bad config file fails at startup rather than on the first quote.
    pub fn new(tariff: Tariff) -> Result<Self> {
        tariff.validate()?;
        Ok(Self { tariff })
    }

    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    /// Quote a rental request.
    pub fn quote(&self, rate_card: &RateCard, request: &RentalRequest) -> Result<PriceBreakdown> {
        self.compute(rate_card, request.duration_days, &request.add_ons)
    }

    /// Itemized price for `duration_days` with the selected add-ons.
    ///
    /// Zero days yields the zero breakdown (effective rate = daily rate).
    /// Negative days or negative rates are rejected with `InvalidArgument`.
    pub fn compute(
        &self,
        rate_card: &RateCard,
        duration_days: i64,
        add_ons: &BTreeSet<AddOn>,
    ) -> Result<PriceBreakdown> {
        if duration_days < 0 {
            return Err(Error::invalid_argument(format!(
                "rental duration must not be negative (got {} days)",
                duration_days
            )));
        }
        rate_card.validate()?;

        if duration_days == 0 {
            return Ok(PriceBreakdown::zero(rate_card.daily_rate));
        }

        let days = Decimal::from(duration_days);
        let (effective_rate, discount, tier) = select_tier(rate_card, duration_days)?;

        let base_amount = checked(effective_rate.checked_mul(days))?;

        let add_on_amounts = add_ons
            .iter()
            .map(|&add_on| {
                let amount = checked(self.tariff.add_on_rate(add_on).checked_mul(days))?;
                Ok((add_on, amount))
            })
            .collect::<Result<BTreeMap<AddOn, Decimal>>>()?;
        let add_on_total = add_on_amounts
            .values()
            .try_fold(Decimal::ZERO, |sum, &amount| checked(sum.checked_add(amount)))?;

        let subtotal = checked(base_amount.checked_add(add_on_total))?;
        let tax_amount = checked(subtotal.checked_mul(self.tariff.tax_rate))?;
        let total_amount = checked(subtotal.checked_add(tax_amount))?;

        Ok(PriceBreakdown {
            duration_days,
            applied_tier: tier,
            effective_daily_rate: effective_rate,
            base_amount,
            discount_amount: discount,
            add_on_amounts,
            add_on_total,
            subtotal,
            tax_amount,
            total_amount,
        })
    }
}

/// Pick the cheapest qualifying per-day rate.
///
/// Returns `(effective_rate, discount, tier)`. A tier only applies if its
/// per-day equivalent is strictly below the rate currently in effect.
fn select_tier(rate_card: &RateCard, duration_days: i64) -> Result<(Decimal, Decimal, RateTier)> {
    let days = Decimal::from(duration_days);
    let mut effective = rate_card.daily_rate;
    let mut discount = Decimal::ZERO;
    let mut tier = RateTier::Daily;

    if duration_days >= WEEKLY_TIER_MIN_DAYS {
        if let Some(weekly) = rate_card.weekly_rate {
            let per_day = weekly / Decimal::from(WEEKLY_TIER_MIN_DAYS);
            if per_day < effective {
                discount = checked((effective - per_day).checked_mul(days))?;
                effective = per_day;
                tier = RateTier::Weekly;
                debug!(%per_day, %discount, "weekly tier applied");
            }
        }
    }

    if duration_days >= MONTHLY_TIER_MIN_DAYS {
        if let Some(monthly) = rate_card.monthly_rate {
            let per_day = monthly / Decimal::from(MONTHLY_TIER_MIN_DAYS);
            if per_day < effective {
                // Against the raw daily rate: monthly supersedes weekly.
                discount = checked((rate_card.daily_rate - per_day).checked_mul(days))?;
                effective = per_day;
                tier = RateTier::Monthly;
                debug!(%per_day, %discount, "monthly tier applied");
            }
        }
    }

    Ok((effective, discount, tier))
}

/// Money that no longer fits in a `Decimal` is an input error, not a panic.
fn checked(amount: Option<Decimal>) -> Result<Decimal> {
    amount.ok_or_else(|| Error::invalid_argument("amount overflows"))
}

/// Quote with the default tariff.
pub fn compute_price(
    rate_card: &RateCard,
    duration_days: i64,
    add_ons: &BTreeSet<AddOn>,
) -> Result<PriceBreakdown> {
    PriceCalculator::default().compute(rate_card, duration_days, add_ons)
}
