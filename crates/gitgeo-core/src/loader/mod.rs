// crates/gitgeo-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (file I/O, decompression, lenient decoding)
//! and delegates table construction to [`model::convert`](crate::model::convert).
//!
//! Loading is the one blocking step of the crate and must complete before
//! the first classification: a [`Classifier`](crate::Classifier) can only be
//! built from finished [`ReferenceTables`].

use crate::error::Result;
use crate::model::{convert, ReferenceTables};
use crate::raw::{CityRaw, CountryCodeRaw};
use once_cell::sync::OnceCell;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

mod common_io;

pub use common_io::open_stream;

static BUNDLED_TABLES: OnceCell<ReferenceTables> = OnceCell::new();

pub const WORLD_CITIES_FILE: &str = "world_cities.csv";
pub const COUNTRY_CODES_FILE: &str = "country_codes.csv";

/// Where the two reference datasets live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSources {
    /// `name,country,subcountry` rows.
    pub world_cities: PathBuf,
    /// `country,code` rows.
    pub country_codes: PathBuf,
}

impl DataSources {
    /// The `data/` directory shipped with this crate.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    /// Both datasets under their standard file names in `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            world_cities: dir.join(WORLD_CITIES_FILE),
            country_codes: dir.join(COUNTRY_CODES_FILE),
        }
    }
}

impl Default for DataSources {
    fn default() -> Self {
        Self::in_dir(Self::default_data_dir())
    }
}

impl ReferenceTables {
    /// Reads both datasets and builds the tables. Fails fast on a missing or
    /// unreadable file.
    pub fn load(sources: &DataSources) -> Result<Self> {
        debug!(
            world_cities = %sources.world_cities.display(),
            country_codes = %sources.country_codes.display(),
            "loading reference data"
        );
        let cities = open_stream(&sources.world_cities)?;
        let codes = open_stream(&sources.country_codes)?;
        Self::from_readers(cities, codes)
    }

    /// [`load`](Self::load) from the bundled `data/` directory.
    pub fn load_default() -> Result<Self> {
        Self::load(&DataSources::default())
    }

    /// The bundled tables, loaded on first call and shared for the rest of
    /// the process.
    ///
    /// ```no_run
    /// use gitgeo_core::{Classifier, ReferenceTables};
    ///
    /// let tables = ReferenceTables::bundled().unwrap();
    /// let classifier = Classifier::new(tables);
    /// assert_eq!(classifier.classify(Some("Tokyo")), "Japan");
    /// ```
    pub fn bundled() -> Result<&'static Self> {
        BUNDLED_TABLES.get_or_try_init(Self::load_default)
    }

    /// Builds tables from in-memory CSV streams. Both streams must start
    /// with a header row.
    pub fn from_readers(cities: impl Read, codes: impl Read) -> Result<Self> {
        let (city_rows, skipped_cities) = read_rows(cities, CityRaw::from_record)?;
        let (code_rows, skipped_codes) = read_rows(codes, CountryCodeRaw::from_record)?;
        convert::from_raw(city_rows, code_rows, skipped_cities + skipped_codes)
    }
}

/// Reads every record after the header, dropping records `parse` rejects.
fn read_rows<R, T, F>(reader: R, parse: F) -> Result<(Vec<T>, usize)>
where
    R: Read,
    F: Fn(&csv::ByteRecord) -> Option<T>,
{
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    let mut skipped = 0;
    for record in rdr.byte_records() {
        let record = record?;
        match parse(&record) {
            Some(row) => rows.push(row),
            None => {
                warn!(
                    line = ?record.position().map(|p| p.line()),
                    "skipping short dataset row"
                );
                skipped += 1;
            }
        }
    }
    Ok((rows, skipped))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeoError;
    use crate::traits::GeoLookup;

    const CITIES: &str = "name,country,subcountry\nTokyo,Japan,Tokyo\nShort,Row\nOsaka,Japan,Osaka Prefecture\n";
    const CODES: &str = "country,code\nJapan,JP\n";

    #[test]
    fn from_readers_skips_short_rows() {
        let tables = ReferenceTables::from_readers(CITIES.as_bytes(), CODES.as_bytes()).unwrap();
        assert_eq!(tables.city_to_country("Osaka").unwrap(), "Japan");
        assert_eq!(tables.stats().skipped_rows, 1);
        assert_eq!(tables.combined_city_country_key("TokyoJP").unwrap(), "Japan");
    }

    #[test]
    fn header_row_is_not_data() {
        let tables = ReferenceTables::from_readers(CITIES.as_bytes(), CODES.as_bytes()).unwrap();
        assert!(tables.city_to_country("name").is_none());
        assert!(tables.code_to_country("code").is_none());
    }

    #[test]
    fn missing_file_is_not_found() {
        let sources = DataSources::in_dir("/definitely/not/here");
        let err = ReferenceTables::load(&sources).unwrap_err();
        assert!(matches!(err, GeoError::NotFound(_)));
    }

    #[test]
    fn default_sources_point_at_bundled_data() {
        let sources = DataSources::default();
        assert!(sources.world_cities.ends_with("data/world_cities.csv"));
        assert!(sources.country_codes.ends_with("data/country_codes.csv"));
    }
}
