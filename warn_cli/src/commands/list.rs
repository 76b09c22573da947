//! The `list` subcommand: show every state with a scraper.

use warn_lib::all_scrapers;

use crate::output::{print_scrapers, OutputFormat};

pub fn run(format: &OutputFormat) {
    print_scrapers(&all_scrapers(), format);
}
