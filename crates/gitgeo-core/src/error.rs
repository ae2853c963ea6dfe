// crates/gitgeo-core/src/error.rs
use thiserror::Error;

/// Errors raised while building the reference tables.
///
/// Classification itself never fails; every variant here surfaces during the
/// one-time load and means the classifier cannot be constructed.
#[derive(Debug, Error)]
pub enum GeoError {
    /// A bundled or user-supplied dataset file does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The dataset is structurally unreadable as CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The data was readable but inconsistent (unknown country in a
    /// hard-coded table, empty dataset, ...).
    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, GeoError>;
