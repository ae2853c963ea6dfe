// src/lib.rs
//! Umbrella crate: re-exports `gitgeo-core` and a prelude for the demos.
pub use gitgeo_core::*;

pub mod prelude {
    pub use gitgeo_core::{
        Classification, Classifier, ClassifierOptions, CountrySummary, DataSources, GeoError,
        GeoLookup, ReferenceTables, Result, SuffixMode,
    };
}
