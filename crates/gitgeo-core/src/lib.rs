// crates/gitgeo-core/src/lib.rs
//! # gitgeo-core
//!
//! Guesses the country behind free-text profile locations such as
//! `"Menlo Park CA"`, `"Berlin, DE"` or `"Montr√©al, QC"`.
//!
//! Load the [`ReferenceTables`] once, then run any number of locations
//! through a [`Classifier`].
//!
//! ```rust,no_run
//! use gitgeo_core::{Classifier, CountrySummary, ReferenceTables};
//!
//! let tables = ReferenceTables::bundled()?;
//! let classifier = Classifier::new(tables);
//!
//! let results = ["Tokyo", "Atlanta, Georgia", "Earth"]
//!     .into_iter()
//!     .map(|loc| classifier.classify(Some(loc)));
//! let summary = CountrySummary::from_results(results);
//! assert_eq!(summary.total(), 3);
//! # Ok::<(), gitgeo_core::GeoError>(())
//! ```

pub mod classify;
pub mod common;
pub mod country;
pub mod distance;
pub mod error;
pub mod geographies;
pub mod loader;
pub mod model;
pub mod summary;
pub mod text;
pub mod traits;
// Row shapes shared by the loader and the table builder
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::classify::{classify, Classifier, ClassifierOptions, SuffixMode, Verdict};
pub use crate::common::TableStats;
pub use crate::country::{Classification, CountryName, CountryRegistry};
pub use crate::error::{GeoError, Result};
pub use crate::loader::DataSources;
pub use crate::model::ReferenceTables;
pub use crate::summary::{CountryCount, CountrySummary};
pub use crate::traits::GeoLookup;
