//! The `scrape` subcommand: run state scrapers one after another and report
//! what each wrote.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use warn_lib::validation::validate_state;
use warn_lib::{all_scrapers, scrape, ScrapeContext, ScrapeOutput, WarnConfig, WarnError};

use crate::output::{print_summary, summary_row, OutputFormat};

#[derive(Args, Debug)]
pub struct ScrapeArgs {
    /// Two-letter state codes to scrape (e.g. wi ct)
    pub states: Vec<String>,

    /// Scrape every state with a scraper
    #[arg(long, conflicts_with = "states")]
    pub all: bool,

    /// Directory for the exported CSV files
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Directory for cached source pages
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,

    /// Clear each state's cached pages before scraping it
    #[arg(long)]
    pub delete: bool,

    /// Keep running the remaining states after one fails
    #[arg(long)]
    pub keep_going: bool,
}

/// The states to run, validated, lowercased and without duplicates.
pub fn selected_states(args: &ScrapeArgs) -> Result<Vec<&'static str>> {
    if args.all {
        return Ok(all_scrapers());
    }
    if args.states.is_empty() {
        bail!("no states given; pass one or more state codes or --all");
    }
    let mut states = Vec::new();
    for input in &args.states {
        let state = validate_state(input)?;
        if !states.contains(&state) {
            states.push(state);
        }
    }
    Ok(states)
}

pub async fn run(args: &ScrapeArgs, config: WarnConfig, format: &OutputFormat) -> Result<()> {
    let states = selected_states(args)?;

    let mut config = config;
    if let Some(dir) = &args.data_dir {
        config = config.with_data_dir(dir);
    }
    if let Some(dir) = &args.cache_dir {
        config = config.with_cache_dir(dir);
    }
    config.ensure_dirs()?;
    let ctx = ScrapeContext::new(&config)?;

    let pb = ProgressBar::new(states.len() as u64);
    pb.set_style(ProgressStyle::with_template(
        "[{elapsed_precise}] {bar:40.cyan/blue} {pos:>3}/{len:3} {msg}",
    )?);

    let results = run_states(&ctx, &states, args.delete, args.keep_going, &pb).await;
    pb.finish_and_clear();

    let failed = results.iter().filter(|(_, result)| result.is_err()).count();
    let summary = results
        .iter()
        .map(|(state, result)| summary_row(state, result))
        .collect();
    print_summary(summary, format);

    if failed > 0 {
        bail!("{} scraper(s) failed", failed);
    }
    Ok(())
}

/// Runs `states` in order. Stops after the first failure unless `keep_going`.
async fn run_states(
    ctx: &ScrapeContext,
    states: &[&'static str],
    delete: bool,
    keep_going: bool,
    pb: &ProgressBar,
) -> Vec<(&'static str, Result<ScrapeOutput, WarnError>)> {
    let mut results = Vec::with_capacity(states.len());
    for &state in states {
        pb.set_message(state.to_uppercase());

        let result = scrape_state(ctx, state, delete).await;
        if let Err(e) = &result {
            tracing::error!("{}: scrape failed: {}", state, e);
        }
        let stop = result.is_err() && !keep_going;
        results.push((state, result));
        pb.inc(1);

        if stop {
            break;
        }
    }
    results
}

/// One state's run, including clearing its cached pages when `delete` is set.
async fn scrape_state(
    ctx: &ScrapeContext,
    state: &str,
    delete: bool,
) -> Result<ScrapeOutput, WarnError> {
    if delete && ctx.cache.delete_namespace(state)? {
        tracing::info!("{}: cleared cached pages", state);
    }
    scrape(state, ctx).await
}
