//!
//! The SPEC CPU result report fetcher arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The SPEC CPU result report fetcher arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Suppresses the terminal output.
    #[arg(short, long)]
    pub quiet: bool,

    /// The corpus configuration file.
    #[arg(short, long, default_value = spec_analyzer::corpus::Config::DEFAULT_PATH)]
    pub config: PathBuf,

    /// Sets the number of concurrent fetches.
    #[arg(short, long, default_value_t = spec_fetcher::DEFAULT_JOBS)]
    pub jobs: usize,

    /// The delay before the first retry of a failed fetch, in milliseconds.
    #[arg(long, default_value_t = spec_fetcher::DEFAULT_INITIAL_DELAY_MS)]
    pub initial_delay_ms: u64,
}
