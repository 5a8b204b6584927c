use std::time::Duration;

use clap::{ArgAction, Parser, ValueEnum};
use spiral_fetch::FetchOptions;

use crate::DEFAULT_URL;

#[derive(Clone, Debug, Parser)]
#[command(
    name = "spiral",
    version = env!("CARGO_PKG_VERSION"),
    about = "Fetch an integer grid and print it in spiral order",
    long_about = None
)]
pub struct App {
    /// Location of the grid document.
    #[arg(default_value = DEFAULT_URL)]
    pub url: String,

    /// Give up on the request after this many seconds.
    #[arg(long, value_name = "SECS", default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    #[arg(long, value_enum, default_value_t = Format::Plain)]
    pub format: Format,

    /// Also print the parsed grid as a table on stderr.
    #[arg(long)]
    pub grid: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Space-separated on one line.
    #[default]
    Plain,
    /// A JSON array.
    Json,
}

impl App {
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions::default().timeout(Duration::from_secs(self.timeout))
    }
}
