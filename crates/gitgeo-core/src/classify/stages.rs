// crates/gitgeo-core/src/classify/stages.rs
//! # Pipeline stages
//!
//! Each stage is a plain function over one form of the input text. The
//! ordering lives in [`PIPELINE`]; the driver in the parent module runs it
//! top to bottom and stops at the first stage that returns a verdict.

use super::{ClassifierOptions, SuffixMode};
use crate::country::Classification;
use crate::distance::nearest_country;
use crate::geographies::{
    AMBIGUOUS_CITY_TOKENS, DOMESTIC_ALIASES, NON_GEOGRAPHIC, US_STATE_ABBREVIATIONS,
    US_STATE_NAMES,
};
use crate::text::{ends_with_word, strip_key, title_case};
use crate::traits::GeoLookup;

/// Which rendition of the location a stage sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageInput {
    /// Trimmed, first character upper-cased.
    Normalized,
    /// Normalized, then passed through the repair table.
    Cleaned,
}

pub type Matcher = fn(&str, &dyn GeoLookup, &ClassifierOptions) -> Option<Classification>;

#[derive(Debug, Clone, Copy)]
pub struct Stage {
    pub name: &'static str,
    pub input: StageInput,
    pub matcher: Matcher,
}

/// Stage order. Earlier entries win.
pub const PIPELINE: &[Stage] = &[
    Stage { name: "domestic-alias", input: StageInput::Normalized, matcher: domestic_alias },
    Stage { name: "non-geographic", input: StageInput::Normalized, matcher: non_geographic },
    Stage {
        name: "international-override",
        input: StageInput::Normalized,
        matcher: international_override,
    },
    Stage { name: "special-city", input: StageInput::Normalized, matcher: special_city },
    Stage { name: "metro-area", input: StageInput::Cleaned, matcher: metro_area },
    Stage { name: "city-country-key", input: StageInput::Cleaned, matcher: city_country_key },
    Stage { name: "special-city-cleaned", input: StageInput::Cleaned, matcher: special_city },
    Stage { name: "us-state-suffix", input: StageInput::Cleaned, matcher: us_state_suffix },
    Stage { name: "token-scan", input: StageInput::Cleaned, matcher: token_scan },
    Stage { name: "edit-distance", input: StageInput::Cleaned, matcher: edit_distance },
];

fn united_states(tables: &dyn GeoLookup) -> Classification {
    tables.united_states().into()
}

// ---------------------------------------------------------------------------
// Phrase lists
// ---------------------------------------------------------------------------

/// Any domestic alias occurring anywhere in the text. An exact match is a
/// substring match too.
pub fn domestic_alias(
    text: &str,
    tables: &dyn GeoLookup,
    _: &ClassifierOptions,
) -> Option<Classification> {
    DOMESTIC_ALIASES
        .iter()
        .any(|alias| text.contains(alias))
        .then(|| united_states(tables))
}

pub fn non_geographic(
    text: &str,
    _: &dyn GeoLookup,
    _: &ClassifierOptions,
) -> Option<Classification> {
    NON_GEOGRAPHIC
        .iter()
        .any(|phrase| text.contains(phrase))
        .then_some(Classification::Unknown)
}

pub fn international_override(
    text: &str,
    tables: &dyn GeoLookup,
    _: &ClassifierOptions,
) -> Option<Classification> {
    tables.international_override(text).map(Classification::from)
}

pub fn special_city(
    text: &str,
    tables: &dyn GeoLookup,
    _: &ClassifierOptions,
) -> Option<Classification> {
    tables.special_city(text).map(Classification::from)
}

// ---------------------------------------------------------------------------
// Dataset lookups
// ---------------------------------------------------------------------------

/// Exact metro name first, then the first metro (dataset order) containing
/// the text. Empty text would be contained in every metro, so it is skipped.
pub fn metro_area(
    text: &str,
    tables: &dyn GeoLookup,
    _: &ClassifierOptions,
) -> Option<Classification> {
    if text.is_empty() {
        return None;
    }
    tables
        .metro_to_country(text)
        .or_else(|| tables.metro_containing(text))
        .map(Classification::from)
}

pub fn city_country_key(
    text: &str,
    tables: &dyn GeoLookup,
    _: &ClassifierOptions,
) -> Option<Classification> {
    let key = strip_key(text);
    if key.is_empty() {
        return None;
    }
    tables.combined_city_country_key(&key).map(Classification::from)
}

/// Full state names are tried before abbreviations.
///
/// **Note:** in [`SuffixMode::Legacy`] this is a raw suffix test, so
/// `"BERLIN"` ends with `"IN"` and lands in the United States.
pub fn us_state_suffix(
    text: &str,
    tables: &dyn GeoLookup,
    options: &ClassifierOptions,
) -> Option<Classification> {
    let hit = |suffix: &&str| match options.suffix_mode {
        SuffixMode::Legacy => text.ends_with(suffix),
        SuffixMode::WordBoundary => ends_with_word(text, suffix),
    };
    (US_STATE_NAMES.iter().any(hit) || US_STATE_ABBREVIATIONS.iter().any(hit))
        .then(|| united_states(tables))
}

/// Splits on `,` and then on space; for each split the last token is tried
/// before the first.
pub fn token_scan(
    text: &str,
    tables: &dyn GeoLookup,
    _: &ClassifierOptions,
) -> Option<Classification> {
    for separator in [',', ' '] {
        let tokens: Vec<&str> = text.split(separator).collect();
        for token in [tokens.last(), tokens.first()].into_iter().flatten() {
            let token = token.trim();
            let token = if token.chars().count() > 2 {
                title_case(token)
            } else {
                token.to_owned()
            };
            if let Some(hit) = match_token(&token, tables) {
                return Some(hit);
            }
        }
    }
    None
}

fn match_token(token: &str, tables: &dyn GeoLookup) -> Option<Classification> {
    if !AMBIGUOUS_CITY_TOKENS.contains(&token) {
        if let Some(country) = tables.city_to_country(token) {
            return Some(country.into());
        }
    }
    tables
        .listed_country(token)
        .or_else(|| tables.code_to_country(token))
        .or_else(|| tables.metro_to_country(token))
        .map(Classification::from)
}

/// Never declines.
pub fn edit_distance(
    text: &str,
    tables: &dyn GeoLookup,
    _: &ClassifierOptions,
) -> Option<Classification> {
    Some(nearest_country(text, tables))
}
