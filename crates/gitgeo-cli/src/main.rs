// crates/gitgeo-cli/src/main.rs
//! gitgeo: guess the country behind free-text locations from the terminal.
//!
//! Usage examples
//! --------------
//!
//! - Classify a few locations
//!   $ gitgeo classify "Menlo Park CA" "Prague, Czech Republic"
//!
//! - Classify a file, one location per line, and keep a CSV copy
//!   $ gitgeo classify --input locations.txt --csv classified.csv
//!
//! - Per-country contributor counts from stdin
//!   $ cut -d, -f3 contributors.csv | gitgeo summary
//!
//! - Use a custom dataset directory
//!   $ gitgeo --data-dir ./data stats
use anyhow::Result;
use clap::Parser;
use gitgeo_cli::args::CliArgs;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    let stdout = std::io::stdout();
    gitgeo_cli::run(args, &mut stdout.lock())
}
