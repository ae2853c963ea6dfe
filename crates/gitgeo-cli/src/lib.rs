// crates/gitgeo-cli/src/lib.rs
//! gitgeo-cli
//! ==========
//!
//! Command-line front end for the `gitgeo-core` location classifier.
//!
//! ```text
//! gitgeo classify "Menlo Park CA" "Berlin, DE"
//! gitgeo classify --input locations.txt --csv out.csv
//! gitgeo summary --input locations.txt --json
//! gitgeo --word-boundary classify BERLIN
//! gitgeo stats
//! gitgeo distance Palestine Pakistan
//! ```
//!
//! Logging goes to stderr and honours `RUST_LOG` (default `warn`).
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod args;

use anyhow::{Context, Result};
use gitgeo_core::distance::levenshtein;
use gitgeo_core::{
    Classifier, ClassifierOptions, CountrySummary, DataSources, ReferenceTables, SuffixMode,
    TableStats,
};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use tracing::info;

use crate::args::{CliArgs, Commands};

/// Executes one parsed command line, writing results to `out`.
pub fn run(args: CliArgs, out: &mut dyn Write) -> Result<()> {
    let options = ClassifierOptions {
        suffix_mode: if args.word_boundary {
            SuffixMode::WordBoundary
        } else {
            SuffixMode::Legacy
        },
    };

    match args.command {
        Commands::Classify { locations, input, csv, explain } => {
            let tables = load_tables(args.data_dir.as_deref())?;
            let classifier = Classifier::with_options(&tables, options);
            let lines = if locations.is_empty() {
                read_input(input.as_deref())?
            } else {
                locations.into_iter().map(String::into_bytes).collect()
            };

            let mut csv_out = match csv {
                Some(path) => {
                    let mut w = csv::Writer::from_path(&path)
                        .with_context(|| format!("creating {}", path.display()))?;
                    w.write_record(["location", "country"])?;
                    Some(w)
                }
                None => None,
            };

            for raw in &lines {
                let verdict = classifier.explain_bytes(raw);
                let location = String::from_utf8_lossy(raw);
                let location = location.trim();
                if explain {
                    writeln!(out, "{location} | {} ({})", verdict.classification, verdict.stage)?;
                } else {
                    writeln!(out, "{location} | {}", verdict.classification)?;
                }
                if let Some(w) = csv_out.as_mut() {
                    w.write_record([location, verdict.classification.as_str()])?;
                }
            }
            if let Some(mut w) = csv_out {
                w.flush()?;
            }
            info!(count = lines.len(), "classified locations");
        }

        Commands::Summary { input, json } => {
            let tables = load_tables(args.data_dir.as_deref())?;
            let classifier = Classifier::with_options(&tables, options);
            let lines = read_input(input.as_deref())?;
            let summary =
                CountrySummary::from_results(lines.iter().map(|l| classifier.classify_bytes(l)));
            write_summary(out, &summary, json)?;
        }

        Commands::Stats => {
            let tables = load_tables(args.data_dir.as_deref())?;
            write_stats(out, &tables.stats())?;
        }

        Commands::Distance { a, b } => {
            writeln!(out, "{}", levenshtein(&a, &b))?;
        }
    }

    Ok(())
}

fn load_tables(data_dir: Option<&Path>) -> Result<ReferenceTables> {
    let sources = match data_dir {
        Some(dir) => DataSources::in_dir(dir),
        None => DataSources::default(),
    };
    ReferenceTables::load(&sources).with_context(|| {
        format!("loading reference data from {}", sources.world_cities.display())
    })
}

fn read_input(path: Option<&Path>) -> Result<Vec<Vec<u8>>> {
    match path {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            read_lines(BufReader::new(file))
        }
        None => read_lines(io::stdin().lock()),
    }
}

/// One location per line, kept as raw bytes so invalid UTF-8 reaches the
/// classifier untouched. Blank lines are dropped.
pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<Vec<u8>>> {
    let mut lines = Vec::new();
    for line in reader.split(b'\n') {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        if !line.iter().all(u8::is_ascii_whitespace) {
            lines.push(line);
        }
    }
    Ok(lines)
}

pub fn write_summary(out: &mut dyn Write, summary: &CountrySummary, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(summary)?)?;
        return Ok(());
    }
    writeln!(out, "COUNTRY | # OF CONTRIBUTORS")?;
    writeln!(out, "---------------------------")?;
    for entry in summary.entries() {
        writeln!(out, "{} {}", entry.country, entry.count)?;
    }
    Ok(())
}

fn write_stats(out: &mut dyn Write, stats: &TableStats) -> Result<()> {
    writeln!(out, "Reference tables:")?;
    writeln!(out, "  Countries: {}", stats.countries)?;
    writeln!(out, "  Country codes: {}", stats.country_codes)?;
    writeln!(out, "  Cities: {}", stats.cities)?;
    writeln!(out, "  Metro areas: {}", stats.metro_areas)?;
    writeln!(out, "  City/country keys: {}", stats.combined_keys)?;
    writeln!(out, "  Skipped rows: {}", stats.skipped_rows)?;
    Ok(())
}
