use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Chart configurations as JSON document
    Json,
    /// Standalone HTML page rendering all charts
    Html,
}

#[derive(Debug, Parser, Clone)]
#[clap(
    version = "0.1.0",
    author = "Alexander Heilmeier <alexander.heilmeier@tum.de>",
    name = "BATHURST-STATS",
    about = "Bathurst entrant and result statistics prepared for charting"
)]
pub struct StatsOpts {
    // FLAGS ---------------------------------------------------------------------------------------
    /// Activate debug logging
    #[clap(short, long)]
    pub debug: bool,

    /// Print a summary table of the prepared statistics
    #[clap(short, long)]
    pub summary: bool,

    // OPTIONS -------------------------------------------------------------------------------------
    /// Set path to the race records file (.json or .csv)
    #[clap(parse(from_os_str), short, long)]
    pub input_path: PathBuf,

    /// Set path of the output file (output is written to stdout if not set)
    #[clap(parse(from_os_str), short, long)]
    pub output_path: Option<PathBuf>,

    /// Set output format
    #[clap(value_enum, short, long, default_value = "json")]
    pub format: OutputFormat,
}
