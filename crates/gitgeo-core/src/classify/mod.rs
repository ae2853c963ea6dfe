// crates/gitgeo-core/src/classify/mod.rs
//! # Location classifier
//!
//! Maps one free-text location to a country (or [`Classification::Unknown`])
//! by running an ordered cascade of heuristics over the reference tables.
//! The first stage that recognises the text decides; the edit-distance
//! stage at the end always answers.
//!
//! ```rust,no_run
//! use gitgeo_core::{Classifier, ReferenceTables};
//!
//! let tables = ReferenceTables::bundled()?;
//! let classifier = Classifier::new(tables);
//!
//! assert_eq!(classifier.classify(Some("Wellington, New Zealand")), "New Zealand");
//! assert_eq!(classifier.classify(Some("Jordan, MN")), "United States");
//! assert_eq!(classifier.classify(None), "None");
//! # Ok::<(), gitgeo_core::GeoError>(())
//! ```

pub mod stages;

use serde::Serialize;
use tracing::trace;

use crate::country::Classification;
use crate::text::{capitalize_first, clean_location};
use crate::traits::GeoLookup;
use stages::{StageInput, PIPELINE};

/// How the US state stage compares suffixes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum SuffixMode {
    /// Raw `ends_with`. `"BERLIN"` matches the abbreviation `"IN"`.
    #[default]
    Legacy,
    /// The suffix must start the text or follow a non-alphanumeric char.
    WordBoundary,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassifierOptions {
    pub suffix_mode: SuffixMode,
}

/// A classification plus the name of the stage that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub classification: Classification,
    pub stage: &'static str,
}

impl Verdict {
    fn unknown(stage: &'static str) -> Self {
        Self { classification: Classification::Unknown, stage }
    }
}

/// Borrows the tables; cheap to copy.
#[derive(Clone, Copy)]
pub struct Classifier<'a> {
    tables: &'a dyn GeoLookup,
    options: ClassifierOptions,
}

impl std::fmt::Debug for Classifier<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Classifier")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<'a> Classifier<'a> {
    pub fn new(tables: &'a dyn GeoLookup) -> Self {
        Self::with_options(tables, ClassifierOptions::default())
    }

    pub fn with_options(tables: &'a dyn GeoLookup, options: ClassifierOptions) -> Self {
        Self { tables, options }
    }

    /// Classifies one location. `None`, empty and whitespace-only input is
    /// [`Classification::Unknown`].
    pub fn classify(&self, location: Option<&str>) -> Classification {
        self.explain(location).classification
    }

    /// Like [`classify`](Self::classify) for raw bytes. Input that is not
    /// valid UTF-8 is [`Classification::Unknown`].
    pub fn classify_bytes(&self, location: &[u8]) -> Classification {
        self.explain_bytes(location).classification
    }

    pub fn explain_bytes(&self, location: &[u8]) -> Verdict {
        match std::str::from_utf8(location) {
            Ok(text) => self.explain(Some(text)),
            Err(e) => {
                trace!(valid_up_to = e.valid_up_to(), "location is not valid UTF-8");
                Verdict::unknown("encoding")
            }
        }
    }

    /// Runs the cascade and reports which stage decided.
    pub fn explain(&self, location: Option<&str>) -> Verdict {
        let trimmed = location.map(str::trim).unwrap_or_default();
        if trimmed.is_empty() {
            return Verdict::unknown("empty-input");
        }

        let normalized = capitalize_first(trimmed);
        let cleaned = clean_location(&normalized);

        for stage in PIPELINE {
            let text = match stage.input {
                StageInput::Normalized => normalized.as_str(),
                StageInput::Cleaned => cleaned.as_str(),
            };
            if let Some(classification) = (stage.matcher)(text, self.tables, &self.options) {
                trace!(stage = stage.name, location = trimmed, result = %classification, "classified");
                return Verdict { classification, stage: stage.name };
            }
        }
        Verdict::unknown("exhausted")
    }
}

/// One-shot classification with default options.
pub fn classify(tables: &dyn GeoLookup, location: Option<&str>) -> Classification {
    Classifier::new(tables).classify(location)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReferenceTables;

    const CITIES: &str = "name,country,subcountry\n\
        Atlanta,United States,Georgia\n\
        Wellington,New Zealand,Wellington\n\
        Berlin,Germany,Berlin\n\
        Montreal,Canada,Quebec\n\
        Krakow,Poland,Lesser Poland\n\
        Gaza,Palestine,Gaza Strip\n";
    const CODES: &str = "country,code\nGermany,DE\nCanada,CA\nPoland,PL\nPalestine,PS\n";

    fn tables() -> ReferenceTables {
        ReferenceTables::from_readers(CITIES.as_bytes(), CODES.as_bytes()).unwrap()
    }

    #[test]
    fn empty_and_missing_input_is_unknown() {
        let t = tables();
        let c = Classifier::new(&t);
        for input in [None, Some(""), Some("   \t")] {
            let verdict = c.explain(input);
            assert!(verdict.classification.is_unknown());
            assert_eq!(verdict.stage, "empty-input");
        }
    }

    #[test]
    fn explain_names_the_deciding_stage() {
        let t = tables();
        let c = Classifier::new(&t);
        assert_eq!(c.explain(Some("USA")).stage, "domestic-alias");
        assert_eq!(c.explain(Some("Earth")).stage, "non-geographic");
        assert_eq!(c.explain(Some("Glasgow, Scotland")).stage, "international-override");
        assert_eq!(c.explain(Some("Montreal, CA")).stage, "special-city");
        assert_eq!(c.explain(Some("Berlin")).stage, "metro-area");
        assert_eq!(c.explain(Some("Wellington, New Zealand")).stage, "city-country-key");
        assert_eq!(c.explain(Some("Atlanta, GA")).stage, "us-state-suffix");
        assert_eq!(c.explain(Some("Montreal, QC")).stage, "token-scan");
        assert_eq!(c.explain(Some("Palestin")).stage, "edit-distance");
    }

    #[test]
    fn first_letter_is_raised_before_lookup() {
        let t = tables();
        let c = Classifier::new(&t);
        assert_eq!(c.classify(Some("  berlin ")), "Germany");
        assert_eq!(c.classify(Some("montreal, QC")), "Canada");
    }

    #[test]
    fn cleanup_runs_before_dataset_stages() {
        let t = tables();
        let c = Classifier::new(&t);
        assert_eq!(c.classify(Some("Montr√©al, QC")), "Canada");
        assert_eq!(c.classify(Some("Krak√≥w")), "Poland");
    }

    #[test]
    fn word_boundary_mode_spares_berlin() {
        let t = tables();
        let legacy = Classifier::new(&t);
        let strict = Classifier::with_options(
            &t,
            ClassifierOptions { suffix_mode: SuffixMode::WordBoundary },
        );
        assert_eq!(legacy.classify(Some("BERLIN")), "United States");
        assert_eq!(strict.classify(Some("BERLIN")), "Germany");
        assert_eq!(strict.classify(Some("Atlanta, GA")), "United States");
    }

    #[test]
    fn invalid_utf8_is_unknown() {
        let t = tables();
        let c = Classifier::new(&t);
        assert_eq!(c.classify_bytes("Berlin".as_bytes()), "Germany");
        let verdict = c.explain_bytes(b"Berl\xffin");
        assert!(verdict.classification.is_unknown());
        assert_eq!(verdict.stage, "encoding");
    }

    #[test]
    fn debug_output_shows_options() {
        let t = tables();
        let strict = Classifier::with_options(
            &t,
            ClassifierOptions { suffix_mode: SuffixMode::WordBoundary },
        );
        assert!(format!("{strict:?}").contains("WordBoundary"));
    }

    #[test]
    fn free_function_uses_default_options() {
        let t = tables();
        assert_eq!(classify(&t, Some("BERLIN")), "United States");
    }
}
