// crates/gitgeo-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the reference tables.
///
/// Returned by [`ReferenceTables::stats`](crate::ReferenceTables::stats),
/// these counts reflect the materialized in-memory tables after rows that
/// failed validation were dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStats {
    /// Size of the country registry (canonical list plus code file names).
    pub countries: usize,
    pub country_codes: usize,
    pub cities: usize,
    pub metro_areas: usize,
    /// Entries in the combined `city+country` / `city+code` table.
    pub combined_keys: usize,
    /// Dataset rows dropped during load (short rows, unknown countries).
    pub skipped_rows: usize,
}
