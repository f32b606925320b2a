use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, Level};

use carlot::corpus::default_corpus;
use carlot::{Config, Matcher, RateCard, RentalRequest};

mod cli;
use cli::display::error_prefix;
use cli::{report, Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", error_prefix(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::default(),
    };

    match cli.command {
        Commands::Quote {
            daily,
            weekly,
            monthly,
            days,
            from,
            to,
            add_ons,
            json,
        } => {
            let card = RateCard {
                daily_rate: daily,
                weekly_rate: weekly,
                monthly_rate: monthly,
            };
            let request = match (days, from, to) {
                (Some(days), _, _) => RentalRequest::new(days),
                (None, Some(from), Some(to)) => RentalRequest::from_dates(from, to)?,
                _ => bail!("either --days or both --from and --to are required"),
            };
            let request = request.with_add_ons(add_ons);
            run_quote(&config, &card, &request, json)
        }
        Commands::Search {
            query,
            corpus,
            threshold,
            json,
        } => {
            let mut matcher = config.matcher()?;
            if let Some(threshold) = threshold {
                if !(0.0..=1.0).contains(&threshold) {
                    bail!("--threshold must be between 0 and 1 (got {})", threshold);
                }
                matcher = matcher.with_threshold(threshold);
            }
            let corpus = load_corpus(corpus.as_deref())?;
            run_search(&matcher, &corpus, &query, json)
        }
        Commands::Suggest {
            query,
            corpus,
            limit,
            json,
        } => {
            let mut matcher = config.matcher()?;
            if let Some(limit) = limit {
                matcher = matcher.with_max_suggestions(limit);
            }
            let corpus = load_corpus(corpus.as_deref())?;
            let suggestions = matcher.suggest_scored(&query, &corpus);
            if json {
                println!("{}", serde_json::to_string_pretty(&suggestions)?);
            } else {
                report::print_suggestions(&query, &suggestions);
            }
            Ok(())
        }
        Commands::Correct { query } => {
            let matcher = config.matcher()?;
            println!("{}", matcher.correct(&query));
            Ok(())
        }
    }
}

fn run_quote(config: &Config, card: &RateCard, request: &RentalRequest, json: bool) -> Result<()> {
    let calculator = config.price_calculator()?;
    let quote = calculator
        .quote(card, request)
        .context("could not price rental")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
    } else {
        report::print_quote(&quote, calculator.tariff());
    }
    Ok(())
}

fn run_search(matcher: &Matcher, corpus: &[String], query: &str, json: bool) -> Result<()> {
    let (hits, corrected) = matcher.search_corrected(corpus, query, |s| [s.as_str()]);

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
    } else {
        report::print_matches(query, corrected.as_deref(), &hits);
    }
    Ok(())
}

/// JSON array of labels, or the built-in vocabulary.
fn load_corpus(path: Option<&Path>) -> Result<Vec<String>> {
    let Some(path) = path else {
        return Ok(default_corpus());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read corpus {}", path.display()))?;
    let corpus: Vec<String> = serde_json::from_str(&raw)
        .with_context(|| format!("corpus {} must be a JSON array of strings", path.display()))?;
    debug!(path = %path.display(), labels = corpus.len(), "loaded corpus");
    Ok(corpus)
}
