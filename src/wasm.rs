// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the storefront UI.
//!
//! The price display and the search boxes call straight into these. Money
//! crosses the boundary as decimal strings (`"107750"`) so nothing is lost to
//! JavaScript doubles; rates may be passed in as numbers or strings.

use std::collections::BTreeSet;

use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value, Serializer};
use wasm_bindgen::prelude::*;

use crate::fuzzy::{self, DEFAULT_MAX_SUGGESTIONS, DEFAULT_THRESHOLD};
use crate::pricing;
use crate::types::{AddOn, RateCard};

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// `computePrice({dailyRate, weeklyRate?, monthlyRate?}, days, ["gps", ...])`
#[wasm_bindgen(js_name = computePrice)]
pub fn compute_price(
    rate_card: JsValue,
    duration_days: i32,
    add_ons: JsValue,
) -> Result<JsValue, JsValue> {
    let rate_card: RateCard = from_value(rate_card).map_err(js_error)?;
    let add_ons: BTreeSet<AddOn> = if add_ons.is_undefined() || add_ons.is_null() {
        BTreeSet::new()
    } else {
        from_value(add_ons).map_err(js_error)?
    };

    let breakdown = pricing::compute_price(&rate_card, i64::from(duration_days), &add_ons)
        .map_err(js_error)?;
    // Plain object for addOnAmounts rather than a JS Map
    breakdown
        .serialize(&Serializer::json_compatible())
        .map_err(js_error)
}

/// `fuzzySearch(["Toyota Camry", ...], "camy", 0.6?)` → matching labels.
#[wasm_bindgen(js_name = fuzzySearch)]
pub fn fuzzy_search(
    items: JsValue,
    query: &str,
    threshold: Option<f64>,
) -> Result<JsValue, JsValue> {
    let items: Vec<String> = from_value(items).map_err(js_error)?;
    let threshold = threshold.unwrap_or(DEFAULT_THRESHOLD);
    let hits: Vec<&String> = fuzzy::fuzzy_search(&items, query, |s| [s.as_str()], threshold);
    to_value(&hits).map_err(js_error)
}

/// `fuzzyMatch(query, text, 0.6?)`
#[wasm_bindgen(js_name = fuzzyMatch)]
pub fn fuzzy_match(query: &str, text: &str, threshold: Option<f64>) -> bool {
    fuzzy::fuzzy_match(query, text, threshold.unwrap_or(DEFAULT_THRESHOLD))
}

/// `suggest(query, options, 5?)` → ranked labels.
#[wasm_bindgen]
pub fn suggest(
    query: &str,
    options: JsValue,
    max_suggestions: Option<u32>,
) -> Result<JsValue, JsValue> {
    let options: Vec<String> = from_value(options).map_err(js_error)?;
    let max = max_suggestions.map_or(DEFAULT_MAX_SUGGESTIONS, |n| n as usize);
    to_value(&fuzzy::suggest(query, &options, max)).map_err(js_error)
}

#[wasm_bindgen(js_name = autoCorrect)]
pub fn auto_correct(query: &str) -> String {
    fuzzy::auto_correct(query)
}

#[wasm_bindgen]
pub fn similarity(a: &str, b: &str) -> f64 {
    fuzzy::similarity(a, b)
}
