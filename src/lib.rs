//! Rental pricing and typo-tolerant matching for a car rental storefront.
//!
//! Two independent, pure engines sit behind the booking pages:
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌───────────────┐
//! │   RateCard   │     │ RentalRequest│     │    Tariff     │
//! │ (daily/week/ │     │ (days,       │     │ (add-on rates,│
//! │   month)     │     │  add-ons)    │     │  tax rate)    │
//! └──────┬───────┘     └──────┬───────┘     └───────┬───────┘
//!        └────────────────────┼─────────────────────┘
//!                             ▼
//!                   ┌───────────────────┐
//!                   │  PriceCalculator  │──▶ PriceBreakdown
//!                   └───────────────────┘
//!
//! query ──▶ fuzzy_match / fuzzy_search / suggest / auto_correct ──▶ hits
//! ```
//!
//! Neither engine does I/O or keeps state; both are safe to call from any
//! thread. `config` loads the only knobs (tariff, matcher settings) from a
//! JSON file and hands them over as plain values.
//!
//! # Usage
//!
//! ```
//! use carlot::{compute_price, fuzzy_search, suggest, RateCard};
//! use rust_decimal_macros::dec;
//! use std::collections::BTreeSet;
//!
//! let card = RateCard::daily(dec!(20000)).with_weekly(dec!(126000));
//! let quote = compute_price(&card, 7, &BTreeSet::new()).unwrap();
//! assert_eq!(quote.discount_amount, dec!(14000));
//!
//! let makes = ["Toyota", "Honda", "Toyo"];
//! assert_eq!(suggest("toy", &makes, 5), vec!["Toyota", "Toyo"]);
//! assert_eq!(fuzzy_search(&makes, "hnda", |m| [*m], 0.6), vec![&"Honda"]);
//! ```

// Module declarations
pub mod config;
pub mod corpus;
mod error;
pub mod fuzzy;
pub mod pricing;
pub mod testing;
mod types;
mod utils;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use config::{Config, MatcherSettings};
pub use error::{Error, Result};
#[cfg(feature = "parallel")]
pub use fuzzy::fuzzy_search_par;
pub use fuzzy::{
    auto_correct, edit_distance, fuzzy_match, fuzzy_search, is_similar, levenshtein_within,
    score_suggestion, search_items, similarity, suggest, suggest_scored, AutoCorrector, Matcher,
    Searchable,
    Suggestion, TypoCorrection, DEFAULT_MAX_SUGGESTIONS, DEFAULT_THRESHOLD,
};
pub use pricing::{compute_price, PriceCalculator, Tariff};
pub use types::{AddOn, PriceBreakdown, RateCard, RateTier, RentalRequest};
pub use utils::normalize;
