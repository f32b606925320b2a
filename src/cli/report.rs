// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Boxed terminal reports for quotes, search hits and suggestions.

use rust_decimal::Decimal;

use carlot::{PriceBreakdown, Suggestion, Tariff};

use super::display::*;

pub fn print_quote(quote: &PriceBreakdown, tariff: &Tariff) {
    let days = match quote.duration_days {
        1 => "1 day".to_string(),
        n => format!("{} days", n),
    };
    section_top(&format!("QUOTE · {}", days));

    row_kv(
        "Rate",
        &format!(
            "{} {}/day",
            tier_label(quote.applied_tier),
            format_money(quote.effective_daily_rate)
        ),
    );
    row_kv("Rental", &format_money(quote.base_amount));
    if quote.has_discount() {
        row_kv(
            &format!("  saved {}", savings_colored(quote.savings_percent())),
            &themed(GREEN, &[], &format!("-{}", format_money(quote.discount_amount))),
        );
    }

    if !quote.add_on_amounts.is_empty() {
        divider();
        for (add_on, amount) in &quote.add_on_amounts {
            row_kv(
                &format!(
                    "{} {}",
                    add_on.label(),
                    themed(GRAY, &[DIM], &format!("@ {}/day", format_money(tariff.add_on_rate(*add_on))))
                ),
                &format_money(*amount),
            );
        }
        row_kv("Extras", &format_money(quote.add_on_total));
    }

    divider();
    row_kv("Subtotal", &format_money(quote.subtotal));
    row_kv(
        &format!("Tax ({}%)", (tariff.tax_rate * Decimal::ONE_HUNDRED).normalize()),
        &format_money(quote.tax_amount),
    );
    row_kv(
        &themed(CYAN, &[BOLD], "Total"),
        &themed(CYAN, &[BOLD], &format_money(quote.total_amount)),
    );
    section_bot();
}

pub fn print_matches(query: &str, corrected: Option<&str>, hits: &[&String]) {
    section_top(&format!("SEARCH · \"{}\"", query));
    if let Some(corrected) = corrected {
        row(&format!(
            " {} {}",
            themed(GRAY, &[DIM], "did you mean"),
            themed(YELLOW, &[], corrected)
        ));
        divider();
    }
    if hits.is_empty() {
        row(&format!(" {}", themed(GRAY, &[DIM], "no matches")));
    }
    for hit in hits {
        row(&format!(" {}", hit));
    }
    section_bot();
}

pub fn print_suggestions(query: &str, suggestions: &[Suggestion]) {
    section_top(&format!("SUGGEST · \"{}\"", query));
    if suggestions.is_empty() {
        row(&format!(" {}", themed(GRAY, &[DIM], "no suggestions")));
    }
    for (rank, suggestion) in suggestions.iter().enumerate() {
        row(&format!(
            " {} {}  {}",
            themed(GRAY, &[], &pad_left(&format!("{}.", rank + 1), 3)),
            score_value(suggestion.score),
            suggestion.text
        ));
    }
    section_bot();
}
