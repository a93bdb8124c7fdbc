//!
//! The SPEC CPU report analyzer arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The SPEC CPU report analyzer arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Prints every disqualified and rate report.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppresses the terminal output.
    #[arg(short, long)]
    pub quiet: bool,

    /// The corpus configuration file.
    #[arg(short, long, default_value = spec_analyzer::corpus::Config::DEFAULT_PATH)]
    pub config: PathBuf,

    /// The directory the tables are written to and read from.
    #[arg(short, long, default_value = "./tables/")]
    pub output_directory: PathBuf,

    /// Skips the corpus scan and reads the existing tables.
    #[arg(long)]
    pub from_tables: bool,

    /// The generation whose scale the calibrated scores are expressed on.
    #[arg(long, default_value_t = spec_analyzer::Dialect::newest())]
    pub anchor: spec_analyzer::Dialect,

    /// Writes the per-brand calibrated listing of each metric.
    #[arg(long)]
    pub calibrated: bool,

    /// Writes the identity every distinct CPU name resolves to.
    #[arg(long)]
    pub identified: bool,

    /// Prints the top sub-benchmark contributions of auto-parallel submissions.
    #[arg(long)]
    pub auto_parallel: bool,
}
