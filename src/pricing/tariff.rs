// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-day add-on prices and the sales tax rate.
//!
//! A tariff is plain data. It is built explicitly (defaults or a config file)
//! and handed to `PriceCalculator`; there is no process-wide tariff.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::AddOn;

// =============================================================================
// DEFAULT TARIFF
// =============================================================================

/// Sales tax applied to the subtotal (7.75%).
pub const DEFAULT_TAX_RATE: Decimal = dec!(0.0775);

pub const INSURANCE_DAILY_RATE: Decimal = dec!(5000);
pub const GPS_DAILY_RATE: Decimal = dec!(2000);
pub const CHILD_SEAT_DAILY_RATE: Decimal = dec!(1500);
pub const ADDITIONAL_DRIVER_DAILY_RATE: Decimal = dec!(3000);

/// Built-in per-day price for an add-on.
pub fn default_add_on_rate(add_on: AddOn) -> Decimal {
    match add_on {
        AddOn::Insurance => INSURANCE_DAILY_RATE,
        AddOn::Gps => GPS_DAILY_RATE,
        AddOn::ChildSeat => CHILD_SEAT_DAILY_RATE,
        AddOn::AdditionalDriver => ADDITIONAL_DRIVER_DAILY_RATE,
    }
}

fn default_add_on_rates() -> BTreeMap<AddOn, Decimal> {
    AddOn::ALL
        .iter()
        .map(|&add_on| (add_on, default_add_on_rate(add_on)))
        .collect()
}

fn default_tax_rate() -> Decimal {
    DEFAULT_TAX_RATE
}

/// Add-on prices and tax rate used for a quote.
///
/// Add-ons missing from `add_on_rates` fall back to their built-in price, so
/// a config file only has to list the ones it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tariff {
    #[serde(default = "default_add_on_rates")]
    pub add_on_rates: BTreeMap<AddOn, Decimal>,
    #[serde(default = "default_tax_rate")]
    pub tax_rate: Decimal,
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            add_on_rates: default_add_on_rates(),
            tax_rate: DEFAULT_TAX_RATE,
        }
    }
}

impl Tariff {
    /// Per-day price for `add_on` under this tariff.
    pub fn add_on_rate(&self, add_on: AddOn) -> Decimal {
        self.add_on_rates
            .get(&add_on)
            .copied()
            .unwrap_or_else(|| default_add_on_rate(add_on))
    }

    pub fn with_add_on_rate(mut self, add_on: AddOn, rate: Decimal) -> Self {
        self.add_on_rates.insert(add_on, rate);
        self
    }

    pub fn with_tax_rate(mut self, tax_rate: Decimal) -> Self {
        self.tax_rate = tax_rate;
        self
    }

    /// Tax must be a fraction in `[0, 1]`; add-on prices must be non-negative.
    pub fn validate(&self) -> Result<()> {
        if self.tax_rate < Decimal::ZERO || self.tax_rate > Decimal::ONE {
            return Err(Error::invalid_config(format!(
                "tax rate must be between 0 and 1 (got {})",
                self.tax_rate
            )));
        }
        if let Some((add_on, rate)) = self.add_on_rates.iter().find(|(_, r)| **r < Decimal::ZERO) {
            return Err(Error::invalid_config(format!(
                "{} rate must not be negative (got {})",
                add_on, rate
            )));
        }
        Ok(())
    }
}
