//! Error handling example for gitgeo-rs
//!
//! This example demonstrates load failures and the inputs the classifier
//! deliberately answers with "None"

use gitgeo_core::{Classifier, DataSources, GeoError, ReferenceTables, Result};

fn main() -> Result<()> {
    println!("=== gitgeo-rs Error Handling Example ===\n");

    // Example 1: Missing dataset directory
    println!("--- Example 1: Loading from a missing directory ---");
    match ReferenceTables::load(&DataSources::in_dir("/no/such/dir")) {
        Ok(_) => println!("  Unexpectedly loaded"),
        Err(GeoError::NotFound(msg)) => println!("  Not found: {msg}"),
        Err(e) => println!("  Other error: {e}"),
    }
    println!();

    // Example 2: A city file with no usable rows
    println!("--- Example 2: Empty city table ---");
    let cities = "name,country,subcountry\n";
    let codes = "country,code\nJapan,JP\n";
    match ReferenceTables::from_readers(cities.as_bytes(), codes.as_bytes()) {
        Ok(_) => println!("  Unexpectedly loaded"),
        Err(e) => println!("  Rejected: {e}"),
    }
    println!();

    let tables = ReferenceTables::bundled()?;
    let classifier = Classifier::new(tables);

    // Example 3: Inputs with no country
    println!("--- Example 3: Unknown answers ---");
    for input in [None, Some(""), Some("   "), Some("Europe"), Some("localhost")] {
        let result = classifier.classify(input);
        println!("  {input:?} -> {result} (unknown: {})", result.is_unknown());
    }
    println!();

    // Example 4: Bytes that are not valid UTF-8
    println!("--- Example 4: Invalid UTF-8 ---");
    let raw: &[u8] = b"Z\xffurich";
    println!("  {:?} -> {}", String::from_utf8_lossy(raw), classifier.classify_bytes(raw));

    Ok(())
}
