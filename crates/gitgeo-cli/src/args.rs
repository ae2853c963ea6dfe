// crates/gitgeo-cli/src/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for gitgeo
#[derive(Debug, Parser)]
#[command(
    name = "gitgeo",
    version,
    about = "Guess the country behind free-text profile locations"
)]
pub struct CliArgs {
    /// Directory holding world_cities.csv and country_codes.csv (default: bundled data)
    #[arg(short = 'd', long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Only accept US state suffixes that start a word ("BERLIN" is no longer Indiana)
    #[arg(long = "word-boundary", global = true)]
    pub word_boundary: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify locations given as arguments, or one per line from a file or stdin
    Classify {
        /// Locations to classify (e.g. "Berlin, DE")
        locations: Vec<String>,

        /// Read locations from this file instead of stdin
        #[arg(short = 'i', long = "input", conflicts_with = "locations")]
        input: Option<PathBuf>,

        /// Also write `location,country` rows to this CSV file
        #[arg(long = "csv")]
        csv: Option<PathBuf>,

        /// Append the name of the deciding stage to each line
        #[arg(long = "explain")]
        explain: bool,
    },

    /// Count contributors per country, most common first
    Summary {
        /// Read locations from this file instead of stdin
        #[arg(short = 'i', long = "input")]
        input: Option<PathBuf>,

        /// Print the summary as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Show a summary of the loaded reference tables
    Stats,

    /// Print the edit distance between two strings
    Distance { a: String, b: String },
}
