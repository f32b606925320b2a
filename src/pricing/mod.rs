// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rental pricing: how a quote gets its numbers.
//!
//! The engine is a pure function of a rate card, a duration and an add-on
//! set. The tariff (add-on prices, tax rate) is the only configuration and
//! is passed in explicitly.

mod engine;
pub mod tariff;

pub use engine::*;
pub use tariff::Tariff;
