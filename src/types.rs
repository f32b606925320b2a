// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a rental quote.
//!
//! A quote is a pure function of three things: the car's rate card, how many
//! days it is out, and which extras the customer ticked. `PriceBreakdown` is
//! the itemized result. Nothing here is persisted; breakdowns are recomputed
//! on every input change and thrown away after display.
//!
//! # Invariants
//!
//! - **RateCard**: every rate present is `>= 0`. Checked by `RateCard::validate`
//!   (the pricing engine calls it before doing any math).
//! - **RentalRequest**: `duration_days >= 0`.
//! - **PriceBreakdown**: `subtotal = base + add_on_total` and
//!   `total = subtotal + tax`. Amounts are exact decimals, never rounded here.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// =============================================================================
// RATE CARD
// =============================================================================

/// Daily, weekly and monthly prices for one rentable car.
///
/// Weekly and monthly rates are optional. When present they are compared
/// per-day (`weekly / 7`, `monthly / 30`) against the daily rate to decide
/// whether a discount tier applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateCard {
    pub daily_rate: Decimal,
    #[serde(default)]
    pub weekly_rate: Option<Decimal>,
    #[serde(default)]
    pub monthly_rate: Option<Decimal>,
}

impl RateCard {
    /// Rate card with only a daily price.
    pub fn daily(daily_rate: Decimal) -> Self {
        Self {
            daily_rate,
            weekly_rate: None,
            monthly_rate: None,
        }
    }

    pub fn with_weekly(mut self, weekly_rate: Decimal) -> Self {
        self.weekly_rate = Some(weekly_rate);
        self
    }

    pub fn with_monthly(mut self, monthly_rate: Decimal) -> Self {
        self.monthly_rate = Some(monthly_rate);
        self
    }

    /// Reject negative money before it reaches the arithmetic.
    pub fn validate(&self) -> Result<()> {
        let rates = [
            ("daily", Some(self.daily_rate)),
            ("weekly", self.weekly_rate),
            ("monthly", self.monthly_rate),
        ];
        for (name, rate) in rates {
            if let Some(rate) = rate {
                if rate < Decimal::ZERO {
                    return Err(Error::invalid_argument(format!(
                        "{} rate must not be negative (got {})",
                        name, rate
                    )));
                }
            }
        }
        Ok(())
    }
}

// =============================================================================
// ADD-ONS
// =============================================================================

/// Optional extras charged per rental day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AddOn {
    Insurance,
    Gps,
    ChildSeat,
    AdditionalDriver,
}

impl AddOn {
    pub const ALL: [AddOn; 4] = [
        AddOn::Insurance,
        AddOn::Gps,
        AddOn::ChildSeat,
        AddOn::AdditionalDriver,
    ];

    /// Wire name, matching the serde representation.
    pub fn key(self) -> &'static str {
        match self {
            AddOn::Insurance => "insurance",
            AddOn::Gps => "gps",
            AddOn::ChildSeat => "childSeat",
            AddOn::AdditionalDriver => "additionalDriver",
        }
    }

    /// Human-readable label for receipts.
    pub fn label(self) -> &'static str {
        match self {
            AddOn::Insurance => "Insurance",
            AddOn::Gps => "GPS navigation",
            AddOn::ChildSeat => "Child seat",
            AddOn::AdditionalDriver => "Additional driver",
        }
    }
}

impl fmt::Display for AddOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AddOn {
    type Err = Error;

    /// Accepts the wire name in any case, plus kebab and snake spellings
    /// (`child-seat`, `additional_driver`).
    fn from_str(s: &str) -> Result<Self> {
        let folded: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        match folded.as_str() {
            "insurance" => Ok(AddOn::Insurance),
            "gps" => Ok(AddOn::Gps),
            "childseat" => Ok(AddOn::ChildSeat),
            "additionaldriver" => Ok(AddOn::AdditionalDriver),
            _ => Err(Error::invalid_argument(format!("unknown add-on '{}'", s))),
        }
    }
}

// =============================================================================
// RENTAL REQUEST
// =============================================================================

/// What the customer asked for: how long, and which extras.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalRequest {
    pub duration_days: i64,
    #[serde(default)]
    pub add_ons: BTreeSet<AddOn>,
}

impl RentalRequest {
    pub fn new(duration_days: i64) -> Self {
        Self {
            duration_days,
            add_ons: BTreeSet::new(),
        }
    }

    /// Duration from a pick-up/return date pair.
    ///
    /// Counts whole calendar days between the two dates, so a same-day
    /// return is 0 days and Monday to Friday is 4. A return date before the
    /// pick-up date is an `InvalidArgument`.
    pub fn from_dates(pick_up: NaiveDate, return_date: NaiveDate) -> Result<Self> {
        if return_date < pick_up {
            return Err(Error::invalid_argument(format!(
                "return date {} is before pick-up date {}",
                return_date, pick_up
            )));
        }
        Ok(Self::new((return_date - pick_up).num_days()))
    }

    pub fn with_add_on(mut self, add_on: AddOn) -> Self {
        self.add_ons.insert(add_on);
        self
    }

    pub fn with_add_ons(mut self, add_ons: impl IntoIterator<Item = AddOn>) -> Self {
        self.add_ons.extend(add_ons);
        self
    }
}

// =============================================================================
// PRICE BREAKDOWN
// =============================================================================

/// Which per-day price ended up being charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RateTier {
    Daily,
    Weekly,
    Monthly,
}

impl fmt::Display for RateTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RateTier::Daily => "daily",
            RateTier::Weekly => "weekly",
            RateTier::Monthly => "monthly",
        };
        f.write_str(s)
    }
}

/// Itemized quote. Derived, immutable, cheap to recompute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub duration_days: i64,
    pub applied_tier: RateTier,
    pub effective_daily_rate: Decimal,
    pub base_amount: Decimal,
    /// Saved relative to the undiscounted daily rate over the full duration.
    pub discount_amount: Decimal,
    pub add_on_amounts: BTreeMap<AddOn, Decimal>,
    pub add_on_total: Decimal,
    pub subtotal: Decimal,
    pub tax_amount: Decimal,
    pub total_amount: Decimal,
}

impl PriceBreakdown {
    /// The quote shown when no dates are selected yet.
    pub fn zero(daily_rate: Decimal) -> Self {
        Self {
            duration_days: 0,
            applied_tier: RateTier::Daily,
            effective_daily_rate: daily_rate,
            base_amount: Decimal::ZERO,
            discount_amount: Decimal::ZERO,
            add_on_amounts: BTreeMap::new(),
            add_on_total: Decimal::ZERO,
            subtotal: Decimal::ZERO,
            tax_amount: Decimal::ZERO,
            total_amount: Decimal::ZERO,
        }
    }

    /// Discount as a percentage of the undiscounted rental price.
    pub fn savings_percent(&self) -> Decimal {
        let undiscounted = self.base_amount + self.discount_amount;
        if undiscounted.is_zero() {
            return Decimal::ZERO;
        }
        self.discount_amount / undiscounted * Decimal::ONE_HUNDRED
    }

    pub fn has_discount(&self) -> bool {
        self.discount_amount > Decimal::ZERO
    }
}
