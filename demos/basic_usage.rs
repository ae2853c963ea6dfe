//! Basic usage example for gitgeo-rs
//!
//! This example demonstrates how to:
//! - Load the bundled reference tables
//! - Classify free-text locations
//! - See which stage of the cascade decided
//! - Summarise a batch per country

use gitgeo_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== gitgeo-rs Basic Usage Example ===\n");

    println!("Loading reference tables...");
    let tables = ReferenceTables::bundled()?;
    let stats = tables.stats();
    println!(
        "✓ Loaded {} cities, {} metro areas, {} country codes\n",
        stats.cities, stats.metro_areas, stats.country_codes
    );

    let classifier = Classifier::new(tables);

    // Example 1: Plain classification
    println!("--- Example 1: Classify locations ---");
    let locations = [
        "Wellington, New Zealand",
        "Menlo Park CA",
        "Toronto, Ontario, Canada",
        "Montr√©al, QC",
        "San Francisco Bay Area",
        "Earth",
    ];
    for loc in locations {
        println!("{loc} | {}", classifier.classify(Some(loc)));
    }
    println!();

    // Example 2: Which stage decided?
    println!("--- Example 2: Explain ---");
    for loc in ["Tokyo", "Jordan, MN", "Russia, Moscow", "Palestine"] {
        let verdict = classifier.explain(Some(loc));
        println!("{loc} -> {} via {}", verdict.classification, verdict.stage);
    }
    println!();

    // Example 3: Per-country summary
    println!("--- Example 3: Summary ---");
    let summary =
        CountrySummary::from_results(locations.iter().map(|l| classifier.classify(Some(l))));
    println!("COUNTRY | # OF CONTRIBUTORS");
    println!("---------------------------");
    for entry in summary.entries() {
        println!("{} {}", entry.country, entry.count);
    }

    Ok(())
}
