// crates/gitgeo-core/src/raw.rs
//! Raw rows as they come out of the bundled CSV files.
//!
//! NOTE: These types mirror the external datasets. They are decoded
//! leniently (invalid UTF-8 is dropped) and validated later, when the
//! tables are built.

use crate::text::decode_ignoring_errors;
use csv::ByteRecord;

/// One row of `world_cities.csv`: `name,country,subcountry[,...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityRaw {
    pub city: String,
    pub country: String,
    /// The `subcountry` column, used as the metro area.
    pub metro: String,
}

impl CityRaw {
    /// `None` when the record has fewer than three columns.
    pub fn from_record(record: &ByteRecord) -> Option<Self> {
        Some(Self {
            city: decode_ignoring_errors(record.get(0)?),
            country: decode_ignoring_errors(record.get(1)?),
            metro: decode_ignoring_errors(record.get(2)?),
        })
    }
}

/// One row of `country_codes.csv`: `country,code`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryCodeRaw {
    pub country: String,
    pub code: String,
}

impl CountryCodeRaw {
    pub fn from_record(record: &ByteRecord) -> Option<Self> {
        Some(Self {
            country: decode_ignoring_errors(record.get(0)?),
            code: decode_ignoring_errors(record.get(1)?),
        })
    }
}
