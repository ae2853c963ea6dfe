// crates/gitgeo-core/src/model/mod.rs
//! # Reference Tables
//!
//! The immutable lookup structures the classifier runs against. Built once
//! by [`convert::from_raw`] (usually through the loader) and never mutated
//! afterwards, so a `&ReferenceTables` can be shared freely across threads.

pub mod convert;
pub mod search;

use crate::common::TableStats;
use crate::country::{CountryName, CountryRegistry};
use std::collections::{BTreeSet, HashMap};

/// All lookup tables, keyed exactly as the source data spells them.
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    pub(crate) registry: CountryRegistry,
    /// City (and supplemental region) name to country.
    pub(crate) cities: HashMap<String, CountryName>,
    /// Metro area to its index in `metro_order`.
    pub(crate) metros: HashMap<String, usize>,
    /// Metro areas in dataset order; the substring scan walks this.
    pub(crate) metro_order: Vec<(String, CountryName)>,
    pub(crate) codes: HashMap<String, CountryName>,
    /// Every code listed for a country, in file order.
    pub(crate) country_codes: HashMap<CountryName, Vec<String>>,
    pub(crate) special_cities: HashMap<&'static str, CountryName>,
    pub(crate) international: Vec<(&'static str, CountryName)>,
    /// Stripped `city+country` and `city+code` keys.
    pub(crate) combined: HashMap<String, CountryName>,
    pub(crate) dataset_countries: BTreeSet<CountryName>,
    pub(crate) united_states: CountryName,
    pub(crate) skipped_rows: usize,
}

impl ReferenceTables {
    pub fn stats(&self) -> TableStats {
        TableStats {
            countries: self.registry.len(),
            country_codes: self.codes.len(),
            cities: self.cities.len(),
            metro_areas: self.metro_order.len(),
            combined_keys: self.combined.len(),
            skipped_rows: self.skipped_rows,
        }
    }

    pub fn registry(&self) -> &CountryRegistry {
        &self.registry
    }

    /// Every code listed for `country`, in file order.
    pub fn codes_for(&self, country: &str) -> &[String] {
        self.country_codes
            .get(country)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
