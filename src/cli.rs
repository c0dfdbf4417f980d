use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shelfsim")]
#[command(about = "Shelf-life aging simulator for inventory catalogs")]
#[command(version)]
pub struct Cli {
    /// Number of days to simulate
    #[arg(long, short = 'd', default_value_t = 4)]
    pub days: u32,

    /// Catalog file (JSON array of {name, sell_in, quality}); built-in demo
    /// catalog when omitted
    #[arg(long, short = 'c')]
    pub catalog: Option<PathBuf>,

    /// Write the full simulation report to this JSON file
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Suppress the per-day tables
    #[arg(long, short = 'q')]
    pub quiet: bool,
}
