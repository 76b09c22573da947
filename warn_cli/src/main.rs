mod commands;
mod output;

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use warn_lib::WarnConfig;

use crate::output::OutputFormat;

const DEFAULT_LOG_FILTER: &str = "warn_cli=info,warn_lib=info";

#[derive(Parser, Debug)]
#[command(name = "warn-scraper")]
#[command(about = "Scrape WARN Act layoff notices from state labor department websites")]
struct Cli {
    /// Output format: table, markdown or json
    #[arg(
        long,
        default_value = "table",
        global = true,
        value_parser = ["table", "markdown", "json"]
    )]
    output: String,

    /// Root directory for cache, exports and logs (defaults to $WARN_OUTPUT_DIR or ~/.warn-scraper)
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run one or more state scrapers
    Scrape(commands::scrape::ScrapeArgs),
    /// List the states that have scrapers
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = WarnConfig::from_env()?;
    if let Some(dir) = &cli.output_dir {
        config = WarnConfig::with_output_dir(dir).with_base_url(config.base_url);
    }
    config.ensure_log_dir()?;
    init_logging(&config.log_file())?;

    let format = OutputFormat::from_arg(&cli.output);

    match &cli.command {
        Commands::Scrape(args) => commands::scrape::run(args, config, &format).await?,
        Commands::List => commands::list::run(&format),
    }

    Ok(())
}

/// Logs to stderr and appends a plain-text copy to `log_file`.
fn init_logging(log_file: &Path) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let file = OpenOptions::new().create(true).append(true).open(log_file)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()?;
    Ok(())
}
