// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the carlot command-line interface.
//!
//! Four subcommands: `quote` prices a rental, `search` filters a corpus,
//! `suggest` ranks completions, and `correct` runs the typo table. The
//! corpus commands read a JSON array of labels, falling back to the built-in
//! car vocabulary.

pub mod display;
pub mod report;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::builder::RangedU64ValueParser;
use clap::{ArgAction, Parser, Subcommand};
use rust_decimal::Decimal;

use carlot::AddOn;

#[derive(Parser)]
#[command(
    name = "carlot",
    about = "Rental pricing and typo-tolerant search for the car lot",
    version
)]
pub struct Cli {
    /// JSON config file (tariff and matcher settings)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Price a rental and print the breakdown
    Quote {
        /// Per-day rate
        #[arg(long, allow_negative_numbers = true)]
        daily: Decimal,

        /// Flat price for a 7-day week
        #[arg(long, allow_negative_numbers = true)]
        weekly: Option<Decimal>,

        /// Flat price for a 30-day month
        #[arg(long, allow_negative_numbers = true)]
        monthly: Option<Decimal>,

        /// Rental length in days
        #[arg(
            long,
            allow_negative_numbers = true,
            conflicts_with_all = ["from", "to"],
            required_unless_present_all = ["from", "to"]
        )]
        days: Option<i64>,

        /// Pick-up date (YYYY-MM-DD)
        #[arg(long, requires = "to")]
        from: Option<NaiveDate>,

        /// Return date (YYYY-MM-DD)
        #[arg(long, requires = "from")]
        to: Option<NaiveDate>,

        /// Optional extra: insurance, gps, child-seat, additional-driver
        #[arg(long = "add-on", value_name = "ADD_ON")]
        add_ons: Vec<AddOn>,

        /// Emit the breakdown as JSON
        #[arg(long)]
        json: bool,
    },

    /// Filter a corpus by a fuzzy query
    Search {
        /// Search query
        query: String,

        /// JSON array of labels to search
        #[arg(long)]
        corpus: Option<PathBuf>,

        /// Similarity threshold in [0, 1]
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Emit matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rank completions for a partial query
    Suggest {
        /// Partial query
        query: String,

        /// JSON array of labels to rank
        #[arg(long)]
        corpus: Option<PathBuf>,

        /// Maximum number of suggestions (at least 1)
        #[arg(short, long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        limit: Option<usize>,

        /// Emit suggestions with scores as JSON
        #[arg(long)]
        json: bool,
    },

    /// Apply the typo table to a query
    Correct {
        /// Query to correct
        query: String,
    },
}
